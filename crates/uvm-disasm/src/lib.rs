pub mod listing;
pub mod model;

pub use listing::{build_listing, render_text, Entry};
pub use model::load_raw_bin;
