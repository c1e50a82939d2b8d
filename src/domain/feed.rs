use serde::{Deserialize, Serialize};

use super::{Author, Hub, Item, Version, VERSION_1};
use crate::codec::fields::{is_false, nullable};

/// Root of a JSON Feed document.
///
/// `version`, `title` and `items` are always written; every other field is
/// written only when it carries a value. Missing required fields decode to
/// empty values rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub home_page_url: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub feed_url: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub user_comment: String,
    /// Pagination pointer to the next page of items.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub next_url: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub favicon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "is_false")]
    pub expired: bool,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub hubs: Vec<Hub>,
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<Item>,
}

impl Feed {
    /// An empty version 1 feed.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            version: VERSION_1.to_string(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// The format version, if it is one this crate knows.
    pub fn known_version(&self) -> Option<Version> {
        self.version.parse().ok()
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version.as_str().to_string();
        self
    }

    pub fn with_home_page_url(mut self, url: impl Into<String>) -> Self {
        self.home_page_url = url.into();
        self
    }

    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_hubs(mut self, hubs: Vec<Hub>) -> Self {
        self.hubs = hubs;
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}
