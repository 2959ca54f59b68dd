use scraper::{Html, Selector};
use serde::Deserialize;

use crate::domain::{
    business_page::{
        extract_contact_info, extract_features, extract_testimonials, extract_title,
    },
    page_record::ScrapeRecord,
};

use super::{FetchResult, PageFetcher};

/// Field rules applied to a fetched page, picked from configuration when
/// the scraper is built.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractVariant {
    Links,
    BusinessPage,
}

impl ExtractVariant {
    pub fn extract_fields(&self, document: &Html, url: &str) -> ScrapeRecord {
        match self {
            ExtractVariant::Links => ScrapeRecord::Links {
                url: url.to_string(),
                links: extract_links(document),
            },
            ExtractVariant::BusinessPage => ScrapeRecord::Business {
                title: extract_title(document),
                features: extract_features(document),
                testimonials: extract_testimonials(document),
                contact_info: extract_contact_info(document),
            },
        }
    }
}

pub struct SiteScraper {
    fetcher: PageFetcher,
    url: String,
    variant: ExtractVariant,
}

impl SiteScraper {
    pub fn new(fetcher: PageFetcher, url: String, variant: ExtractVariant) -> Self {
        SiteScraper {
            fetcher,
            url,
            variant,
        }
    }

    pub async fn scrape(&self) -> ScrapeRecord {
        log::info!("Starting to scrape {}", self.url);

        match self.fetcher.fetch_page(&self.url).await {
            FetchResult::NoContent => ScrapeRecord::Empty {},
            FetchResult::Content(html_content) => {
                let html_document = Html::parse_document(&html_content);
                self.variant.extract_fields(&html_document, &self.url)
            }
        }
    }
}

pub fn extract_links(document: &Html) -> Vec<String> {
    let a_tag_selector = Selector::parse("a").unwrap();

    document
        .select(&a_tag_selector)
        .filter_map(|tag| tag.value().attr("href").map(|url| url.to_string()))
        .collect()
}
