use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata scraped from one subject detail page.
///
/// `id` and `url` are always set; every other field is best-effort. The value
/// owns all of its strings and keeps no reference to the parsed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub url: String,
    pub cover: String,
    /// 0-5 stars, 0 = no rating available
    pub rating: i32,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub identifiers: HashMap<String, String>,
}

impl Book {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            authors: Vec::new(),
            url: url.into(),
            cover: String::new(),
            rating: 0,
            tags: Vec::new(),
            description: String::new(),
            publisher: None,
            published_date: None,
            series: None,
            identifiers: HashMap::new(),
        }
    }
}
