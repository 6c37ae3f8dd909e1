use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::maps::web::MountedMap;
use crate::maps::{MapError, OVERLAY_LAYERS};

/// Full-viewport Mapbox map with the bike path overlays
#[function_component(MapView)]
pub fn map_view() -> Html {
    let container = use_node_ref();

    // Empty deps: the map is built once per mount and released on unmount
    {
        let container = container.clone();

        use_effect_with((), move |_| {
            let mounted = match container.cast::<HtmlElement>() {
                Some(element) => match MountedMap::mount(&element, &CONFIG, OVERLAY_LAYERS.clone()) {
                    Ok(mounted) => Some(mounted),
                    Err(e) => {
                        log::error!("❌ {}", e);
                        None
                    }
                },
                None => {
                    log::error!("❌ {}", MapError::ContainerMissing);
                    None
                }
            };

            move || {
                if let Some(mounted) = mounted {
                    mounted.teardown();
                }
            }
        });
    }

    html! {
        <div ref={container} class="map-container" style="width: 100%; height: 100vh;" />
    }
}
