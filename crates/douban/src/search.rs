use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::client::{DoubanClient, USER_AGENT};
use crate::error::DoubanError;
use crate::Result;

/// 图书分类
const SEARCH_CATEGORY: &str = "1001";

/// At most this many search result entries are considered per query.
const MAX_CANDIDATES: usize = 10;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sid: (?P<id>\d+),").unwrap());

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub total: i64,
    #[serde(default)]
    pub items: Vec<String>,
}

impl DoubanClient {
    /// Resolve a query into candidate subject ids.
    ///
    /// Issues one GET against the search endpoint with a fixed book-category
    /// filter. Zero total results is not an error and yields an empty list.
    pub async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(&self.search_url)
            .header("User-Agent", USER_AGENT)
            .query(&[("cat", SEARCH_CATEGORY), ("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DoubanError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let results: SearchResponse = response.json().await?;
        if results.total == 0 {
            return Ok(Vec::new());
        }

        Ok(candidate_ids(&results.items))
    }
}

/// Extract subject ids from search result snippets, capped at
/// [`MAX_CANDIDATES`]. Snippets without a recognizable `sid: <digits>,`
/// marker are skipped.
pub(crate) fn candidate_ids(items: &[String]) -> Vec<String> {
    items
        .iter()
        .take(MAX_CANDIDATES)
        .filter_map(|item| ID_PATTERN.captures(item))
        .map(|caps| caps["id"].to_string())
        .collect()
}
