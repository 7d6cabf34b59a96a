//! Outbound backends.
//!
//! [`serpapi`] implements [`crate::engine::SearchProvider`] on top of the
//! SerpApi Google engine; [`youtube`] scrapes YouTube's results page for
//! the first video.

pub mod serpapi;
pub mod youtube;

pub use serpapi::SerpApiProvider;
pub use youtube::find_first_video;
