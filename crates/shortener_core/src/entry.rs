use serde::{Deserialize, Serialize};

use crate::ShortCode;

/// Prefix joined with the short code to form the displayed short URL.
pub const SHORT_URL_PREFIX: &str = "http://short.url/";

/// One original URL paired with its generated short form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedEntry {
    pub original: String,
    pub shortened: String,
    pub short_code: String,
}

impl ShortenedEntry {
    pub fn new(original: impl Into<String>, code: ShortCode) -> Self {
        let short_code = code.into_string();
        Self {
            original: original.into(),
            shortened: format!("{SHORT_URL_PREFIX}{short_code}"),
            short_code,
        }
    }
}
