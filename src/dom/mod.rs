// ============================================================================
// DOM MODULE - Helpers for building popup content outside of Yew
// ============================================================================

pub mod element;
pub mod builder;

pub use element::*;
pub use builder::*;
