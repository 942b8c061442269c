//! Data model for extraction output.
//!
//! Everything here is built in memory during a single extraction pass and
//! lives only until it is serialized to JSON.

mod page;
mod resource;

pub use page::{ExtractionResult, ImageRef, PageContent, PageRecord};
pub use resource::EmbeddedImage;
