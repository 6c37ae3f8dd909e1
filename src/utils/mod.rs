// Shared utils

pub mod mapbox_ffi;
