use reqwest::Client;

const BASE_URL: &str = "https://book.douban.com";
const SEARCH_URL: &str = "https://www.douban.com/j/search";

pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/98.0.4758.102 Safari/537.36 Edg/98.0.1108.56";

pub struct DoubanClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) search_url: String,
}

impl DoubanClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
            search_url: SEARCH_URL.to_string(),
        }
    }

    pub fn with_base_urls(
        client: Client,
        base_url: impl Into<String>,
        search_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            search_url: search_url.into(),
        }
    }

    /// Canonical detail-page URL for a subject id.
    pub fn subject_url(&self, id: &str) -> String {
        format!("{}/subject/{}/", self.base_url, id)
    }
}
