// contentful-client - Authenticated Contentful GraphQL client with pluggable caching
// Author: kelexine (https://github.com/kelexine)

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use cache::{CachePayload, ContentfulCacher};
pub use client::ContentfulClient;
pub use error::{ContentfulError, Result};
pub use models::{
    ContentfulCollection, ContentfulCollectionItem, ContentfulItem, ContentfulRequest,
};
