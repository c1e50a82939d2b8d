use serde::{Deserialize, Serialize};

use crate::codec::fields::{is_zero, nullable};

/// Media file attached to an item, e.g. podcast audio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub mime_type: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "is_zero")]
    pub size_in_bytes: u64,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "is_zero")]
    pub duration_in_seconds: u64,
}

impl Attachment {
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size_in_bytes(mut self, size: u64) -> Self {
        self.size_in_bytes = size;
        self
    }

    pub fn with_duration_in_seconds(mut self, duration: u64) -> Self {
        self.duration_in_seconds = duration;
        self
    }
}
