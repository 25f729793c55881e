//! Data models for metadata search results

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed descriptor naming a metadata source.
///
/// Constant across all records produced by one provider instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaSourceInfo {
    pub id: String,
    pub description: String,
    pub link: String,
}

/// Normalized metadata record handed to the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaRecord {
    /// Source-assigned catalog identifier
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    /// Canonical detail-page URL
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
    /// Identifier values keyed by the label text they were found under
    /// (e.g. "ISBN", "统一书号"); not a fixed enumeration
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub identifiers: HashMap<String, String>,
    pub source: MetaSourceInfo,
}
