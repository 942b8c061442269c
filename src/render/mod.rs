//! Rendering extraction output to JSON.

mod json;

pub use json::{to_json, write_json, JsonFormat};
