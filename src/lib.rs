//! JSON Feed (https://jsonfeed.org/) document model.
//!
//! Decode a feed from any reader with [`parse`], encode it back with [`to_vec`],
//! [`to_string`] or [`to_writer`].

pub mod codec;
pub mod config;
pub mod domain;
pub mod errors;
pub mod validation;

pub use codec::{
    from_slice, from_str, parse, parse_with, to_string, to_string_pretty, to_vec, to_vec_pretty,
    to_writer, to_writer_pretty,
};
pub use config::{DecodeMode, ParseOptions};
pub use domain::{Attachment, Author, Feed, Hub, Item, Version, VERSION_1, VERSION_1_1};
pub use errors::{ErrorKind, JsonFeedError, JsonFeedResult};
pub use validation::ValidationIssue;
