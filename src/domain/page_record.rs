use serde::Serialize;

/// Record produced by one scrape. `Empty` is what a failed fetch yields;
/// it serializes to `{}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScrapeRecord {
    Links {
        url: String,
        links: Vec<String>,
    },
    Business {
        title: String,
        features: Vec<String>,
        testimonials: Vec<Testimonial>,
        contact_info: ContactInfo,
    },
    Empty {},
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

/// `social_media` is only present when a contact container was located on
/// the page; without one, `contact_info` serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<Vec<String>>,
}
