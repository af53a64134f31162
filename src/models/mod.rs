//! Data models for the Contentful GraphQL API.
//!
//! - Request bodies (`request`)
//! - Response envelopes and collection helpers (`response`)

// Author: kelexine (https://github.com/kelexine)

pub mod request;
pub mod response;

pub use request::{ContentfulRequest, Variables};
pub use response::{
    item_ids, ContentfulCollection, ContentfulCollectionItem, ContentfulItem, ContentfulItemId,
    ContentfulSys,
};
