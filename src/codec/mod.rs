//! Decoding from and encoding to the JSON Feed wire format.

pub(crate) mod fields;

use std::io::{self, BufReader, Read, Write};

use serde_json::Value;

use crate::config::{DecodeMode, ParseOptions};
use crate::domain::Feed;
use crate::errors::{JsonFeedError, JsonFeedResult};
use crate::validation;

/// Decode one complete feed document from `reader` with default options.
pub fn parse<R: Read>(reader: R) -> JsonFeedResult<Feed> {
    parse_with(reader, &ParseOptions::default())
}

/// Decode one complete feed document from `reader`.
///
/// Any failure, at any nesting level, aborts the whole decode; no partial feed
/// is ever returned.
pub fn parse_with<R: Read>(reader: R, options: &ParseOptions) -> JsonFeedResult<Feed> {
    let document: Value = match options.max_bytes {
        Some(limit) => {
            // One byte past the limit is enough to know it was exceeded
            let mut buf = Vec::new();
            reader.take(limit.saturating_add(1)).read_to_end(&mut buf)?;
            if buf.len() as u64 > limit {
                return Err(JsonFeedError::DocumentTooLarge { limit });
            }
            serde_json::from_slice(&buf)?
        }
        None => serde_json::from_reader(BufReader::new(reader))?,
    };
    // Building the Value map keeps the last of any repeated key; the derived
    // structs would reject the repeat outright
    let feed: Feed = serde_json::from_value(document)?;

    if options.mode == DecodeMode::Strict {
        validation::validate(&feed).map_err(JsonFeedError::Validation)?;
    }

    tracing::debug!(
        version = %feed.version,
        items = feed.items.len(),
        hubs = feed.hubs.len(),
        "decoded feed"
    );

    Ok(feed)
}

pub fn from_slice(bytes: &[u8]) -> JsonFeedResult<Feed> {
    parse(bytes)
}

pub fn from_str(s: &str) -> JsonFeedResult<Feed> {
    parse(s.as_bytes())
}

impl std::str::FromStr for Feed {
    type Err = JsonFeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}

/// Write the compact wire form of `feed`. Only the sink can fail.
pub fn to_writer<W: Write>(writer: W, feed: &Feed) -> io::Result<()> {
    serde_json::to_writer(writer, feed).map_err(io::Error::from)?;
    tracing::debug!(items = feed.items.len(), "encoded feed");
    Ok(())
}

pub fn to_writer_pretty<W: Write>(writer: W, feed: &Feed) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, feed).map_err(io::Error::from)?;
    tracing::debug!(items = feed.items.len(), "encoded feed");
    Ok(())
}

pub fn to_vec(feed: &Feed) -> Vec<u8> {
    encode(feed, |buf, feed| to_writer(buf, feed))
}

pub fn to_vec_pretty(feed: &Feed) -> Vec<u8> {
    encode(feed, |buf, feed| to_writer_pretty(buf, feed))
}

pub fn to_string(feed: &Feed) -> String {
    into_string(to_vec(feed))
}

pub fn to_string_pretty(feed: &Feed) -> String {
    into_string(to_vec_pretty(feed))
}

fn encode(feed: &Feed, write: fn(&mut Vec<u8>, &Feed) -> io::Result<()>) -> Vec<u8> {
    let mut buf = Vec::new();
    // Writing into a Vec never fails and every field has a string key
    write(&mut buf, feed).expect("in-memory feed encoding is infallible");
    buf
}

fn into_string(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("serde_json always emits UTF-8")
}
