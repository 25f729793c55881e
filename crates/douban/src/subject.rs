use scraper::{Html, Selector};

use crate::client::{DoubanClient, USER_AGENT};
use crate::error::DoubanError;
use crate::extract;
use crate::models::Book;
use crate::rating;
use crate::text;
use crate::Result;

impl DoubanClient {
    /// Fetch and parse one subject detail page.
    ///
    /// Transport failures and pages without a recognizable title element are
    /// errors; the caller decides whether to drop just this candidate.
    pub async fn get_book(&self, id: &str, generic_cover: &str) -> Result<Book> {
        let url = self.subject_url(id);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(DoubanError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        parse_subject(&body, id, &url, generic_cover)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| DoubanError::Parse(e.to_string()))
}

/// Parse a subject detail page into a [`Book`].
///
/// Pure and deterministic: the same markup always yields the same record.
/// The title is the only mandatory field; everything else degrades to its
/// fallback when absent.
pub fn parse_subject(html: &str, id: &str, url: &str, generic_cover: &str) -> Result<Book> {
    let document = Html::parse_document(html);

    let title_selector = selector("span[property='v:itemreviewed']")?;
    let cover_selector = selector("a.nbg")?;
    let rating_selector = selector("div.rating_self.clearfix > strong")?;
    let tags_selector = selector("a[class*='tag']")?;
    let description_selector = selector("#link-report .intro")?;
    let info_selector = selector("#info span.pl")?;

    let mut book = Book::new(id, url);

    book.title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .ok_or_else(|| DoubanError::Parse(format!("subject {id} has no title element")))?;

    book.cover = document
        .select(&cover_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .filter(|href| !href.is_empty())
        .unwrap_or(generic_cover)
        .to_string();

    book.rating = document
        .select(&rating_selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .map(rating::to_stars)
        .unwrap_or(0);

    book.tags = document
        .select(&tags_selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();

    // Some pages carry a short teaser plus the full intro; the last one wins
    if let Some(intro) = document.select(&description_selector).last() {
        book.description = text::render_fragment(intro);
    }

    extract::apply_info_rules(document.select(&info_selector), &mut book);

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC_COVER: &str = "https://example.com/generic.jpg";

    fn fixture_page() -> &'static str {
        r#"<html><body>
        <h1><span property="v:itemreviewed">三体</span></h1>
        <a class="nbg" href="https://img.example.com/s2768378.jpg"><img src=""></a>
        <div class="rating_self clearfix"><strong class="ll rating_num" property="v:average"> 8.7 </strong></div>
        <div id="info">
          <span class="pl"> 作者</span>: <a href="/author/1">刘慈欣</a><br/>
          <span class="pl">出版社:</span> 重庆出版社<br/>
          <span class="pl">副标题:</span> 地球往事三部曲之一<br/>
          <span class="pl">出版年:</span> 2008-1<br/>
          <span class="pl">丛书:</span> <a href="/series/1">中国科幻基石丛书</a><br/>
          <span class="pl">ISBN:</span> 9787536692930<br/>
        </div>
        <div id="link-report">
          <div class="intro"><p>短版简介。</p></div>
          <div class="intro"><p>文化大革命如火如荼进行的同时，军方探寻外星文明的<em>红岸工程</em>取得了突破性进展。</p></div>
        </div>
        <div id="db-tags-section">
          <a class="tag" href="/tag/科幻">科幻</a>
          <a class="tag" href="/tag/刘慈欣">刘慈欣</a>
        </div>
        </body></html>"#
    }

    fn parse_fixture() -> Book {
        parse_subject(
            fixture_page(),
            "2567698",
            "https://book.douban.com/subject/2567698/",
            GENERIC_COVER,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_full_page() {
        let book = parse_fixture();
        assert_eq!(book.id, "2567698");
        assert_eq!(book.url, "https://book.douban.com/subject/2567698/");
        assert_eq!(book.title, "三体:地球往事三部曲之一");
        assert_eq!(book.authors, vec!["刘慈欣"]);
        assert_eq!(book.cover, "https://img.example.com/s2768378.jpg");
        assert_eq!(book.rating, 5);
        assert_eq!(book.tags, vec!["科幻", "刘慈欣"]);
        assert_eq!(book.publisher.as_deref(), Some("重庆出版社"));
        assert_eq!(book.published_date.as_deref(), Some("2008-1"));
        assert_eq!(book.series.as_deref(), Some("中国科幻基石丛书"));
        assert_eq!(
            book.identifiers.get("ISBN").map(String::as_str),
            Some("9787536692930")
        );
    }

    #[test]
    fn test_last_intro_wins() {
        let book = parse_fixture();
        assert!(book.description.contains("红岸工程"));
        assert!(book.description.contains("*红岸工程*"));
        assert!(!book.description.contains("短版简介"));
    }

    #[test]
    fn test_parsing_is_idempotent() {
        assert_eq!(parse_fixture(), parse_fixture());
    }

    #[test]
    fn test_missing_title_is_parse_failure() {
        let html = "<html><body><div id='info'></div></body></html>";
        let result = parse_subject(html, "1", "https://book.douban.com/subject/1/", "");
        assert!(matches!(result, Err(DoubanError::Parse(_))));
    }

    #[test]
    fn test_missing_cover_falls_back_to_generic() {
        let html = r#"<html><body>
            <span property="v:itemreviewed">无封面书</span>
        </body></html>"#;
        let book =
            parse_subject(html, "1", "https://book.douban.com/subject/1/", GENERIC_COVER).unwrap();
        assert_eq!(book.cover, GENERIC_COVER);
        assert_eq!(book.rating, 0);
        assert!(book.tags.is_empty());
        assert!(book.description.is_empty());
    }

    #[test]
    fn test_non_numeric_rating_is_zero() {
        let html = r#"<html><body>
            <span property="v:itemreviewed">书</span>
            <div class="rating_self clearfix"><strong>暂无评分</strong></div>
        </body></html>"#;
        let book = parse_subject(html, "1", "https://book.douban.com/subject/1/", "").unwrap();
        assert_eq!(book.rating, 0);
    }

    #[test]
    fn test_low_rating_scale() {
        let html = r#"<html><body>
            <span property="v:itemreviewed">书</span>
            <div class="rating_self clearfix"><strong> 4.0 </strong></div>
        </body></html>"#;
        let book = parse_subject(html, "1", "https://book.douban.com/subject/1/", "").unwrap();
        assert_eq!(book.rating, 2);
    }
}
