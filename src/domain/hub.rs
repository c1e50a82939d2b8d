use serde::{Deserialize, Serialize};

use crate::codec::fields::nullable;

/// Endpoint offering real-time update notifications (WebSub, rssCloud).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub hub_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

impl Hub {
    pub fn new(hub_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            hub_type: hub_type.into(),
            url: url.into(),
        }
    }
}
