pub mod colors;
pub mod loader;
pub mod pager;
pub mod saves;

pub use loader::{load, RecommendationView, MAX_DISPLAYED_STYLES};
pub use pager::Pager;
