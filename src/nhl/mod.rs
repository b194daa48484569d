//! Client and response models for the NHL statistics feed.

pub mod http;
pub mod types;

pub use http::{FeedClient, NHL_BASE_URL};
