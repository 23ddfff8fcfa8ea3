//! Site pages

mod landing;

pub use landing::{page_title, LandingPage, LandingSections};
