// Presentational pieces rendered outside the Yew tree

pub mod popup;
