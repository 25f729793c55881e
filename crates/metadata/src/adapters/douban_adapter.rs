//! Douban metadata provider adapter

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use douban::{Book, DoubanClient};
use futures::stream::{self, StreamExt};

use crate::error::ProviderError;
use crate::models::{MetaRecord, MetaSourceInfo};
use crate::provider::MetadataProvider;
use crate::title::title_tokens;

const SOURCE_ID: &str = "douban";
const SOURCE_DESCRIPTION: &str = "豆瓣";
const SOURCE_LINK: &str = "https://book.douban.com/";

/// Detail pages fetched in parallel per search call.
const MAX_CONCURRENT_FETCHES: usize = 5;

/// Douban book metadata provider
pub struct DoubanProvider {
    client: Arc<DoubanClient>,
    active: AtomicBool,
}

impl DoubanProvider {
    pub fn new(client: Arc<DoubanClient>) -> Self {
        Self {
            client,
            active: AtomicBool::new(true),
        }
    }

    /// Create a new DoubanProvider with a reqwest Client
    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self::new(Arc::new(DoubanClient::new(http_client)))
    }

    async fn search_records(
        &self,
        query: &str,
        generic_cover: &str,
    ) -> Result<Vec<MetaRecord>, ProviderError> {
        let tokens = title_tokens(query, false);
        let query = if tokens.is_empty() {
            query.to_string()
        } else {
            tokens.join("+")
        };

        let ids = self.client.search_ids(&query).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.fetch_books(ids, generic_cover).await)
    }

    /// Concurrently fetch detail pages for the candidate ids, dropping
    /// failed candidates. Results arrive in completion order.
    async fn fetch_books(&self, ids: Vec<String>, generic_cover: &str) -> Vec<MetaRecord> {
        // Clone data upfront to avoid lifetime issues
        let items: Vec<_> = ids
            .into_iter()
            .map(|id| (id, generic_cover.to_string(), Arc::clone(&self.client)))
            .collect();

        let tasks = items.into_iter().map(|(id, generic_cover, client)| async move {
            match client.get_book(&id, &generic_cover).await {
                Ok(book) => Some(book),
                Err(e) => {
                    tracing::warn!("Failed to fetch douban subject {}: {}", id, e);
                    None
                }
            }
        });

        let books: Vec<Book> = stream::iter(tasks)
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .filter_map(|book| async { book })
            .collect()
            .await;

        books.into_iter().map(|book| self.to_record(book)).collect()
    }

    fn to_record(&self, book: Book) -> MetaRecord {
        MetaRecord {
            id: book.id,
            title: book.title,
            authors: book.authors,
            url: book.url,
            cover: book.cover,
            rating: book.rating,
            tags: book.tags,
            description: book.description,
            publisher: book.publisher,
            published_date: book.published_date,
            series: book.series,
            identifiers: book.identifiers,
            source: self.source(),
        }
    }
}

#[async_trait]
impl MetadataProvider for DoubanProvider {
    async fn search(
        &self,
        query: &str,
        generic_cover: &str,
        _locale: &str,
    ) -> Option<Vec<MetaRecord>> {
        if !self.is_active() {
            return None;
        }

        tracing::debug!("Starting search '{}' on douban", query);
        match self.search_records(query, generic_cover).await {
            Ok(records) => {
                tracing::debug!("Search '{}' yielded {} records", query, records.len());
                Some(records)
            }
            Err(e) => {
                tracing::warn!("Douban search '{}' failed: {}", query, e);
                None
            }
        }
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    fn source(&self) -> MetaSourceInfo {
        MetaSourceInfo {
            id: SOURCE_ID.to_string(),
            description: SOURCE_DESCRIPTION.to_string(),
            link: SOURCE_LINK.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        SOURCE_ID
    }
}
