pub mod info_panel;

#[cfg(target_arch = "wasm32")]
pub mod map_view;
#[cfg(target_arch = "wasm32")]
pub mod app;

pub use info_panel::InfoPanel;
#[cfg(target_arch = "wasm32")]
pub use map_view::MapView;
#[cfg(target_arch = "wasm32")]
pub use app::App;
