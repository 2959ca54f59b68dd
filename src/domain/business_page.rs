use scraper::{ElementRef, Html, Selector};

use crate::domain::page_record::{ContactInfo, Testimonial};

const SOCIAL_PLATFORMS: [&str; 4] = ["facebook", "twitter", "linkedin", "instagram"];

pub fn extract_title(document: &Html) -> String {
    let title_selector = Selector::parse("title").unwrap();

    document
        .select(&title_selector)
        .next()
        .map(|tag| tag.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Footer boilerplate shares the h3 level with feature callouts; anything
/// whose trimmed text starts with the copyright marker is skipped.
pub fn extract_features(document: &Html) -> Vec<String> {
    let h3_selector = Selector::parse("h3").unwrap();

    document
        .select(&h3_selector)
        .map(|tag| tag.text().collect::<String>().trim().to_string())
        .filter(|text| !text.starts_with('©'))
        .collect()
}

/// Candidate sections are elements whose class attribute mentions
/// "testimonial". A record is only emitted when a section yields both a
/// quote and an author; partial sections are dropped.
pub fn extract_testimonials(document: &Html) -> Vec<Testimonial> {
    let any_selector = Selector::parse("*").unwrap();
    let quote_selector = Selector::parse("p, div").unwrap();
    let author_selector = Selector::parse("h1, h2, h3, h4, h5, h6, em, strong, cite").unwrap();

    document
        .select(&any_selector)
        .filter(has_testimonial_class)
        .filter_map(|section| {
            let quote = section
                .select(&quote_selector)
                .map(|tag| tag.text().collect::<String>().trim().to_string())
                .find(|text| !text.is_empty());

            let author = section
                .select(&author_selector)
                .next()
                .map(|tag| tag.text().collect::<String>().trim().to_string());

            match (quote, author) {
                (Some(quote), Some(author)) => Some(Testimonial { quote, author }),
                _ => None,
            }
        })
        .collect()
}

/// The first div or section whose full text mentions contact details
/// scopes the link pass; only links to a known platform are kept.
pub fn extract_contact_info(document: &Html) -> ContactInfo {
    let container_selector = Selector::parse("div, section").unwrap();
    let a_tag_selector = Selector::parse("a").unwrap();

    let container = document.select(&container_selector).find(|tag| {
        let text = tag.text().collect::<String>().to_lowercase();
        text.contains("contact") || text.contains("get in touch")
    });

    match container {
        Some(container) => {
            let social_media = container
                .select(&a_tag_selector)
                .filter_map(|tag| tag.value().attr("href"))
                .filter(|href| {
                    let href = href.to_lowercase();
                    SOCIAL_PLATFORMS
                        .iter()
                        .any(|platform| href.contains(platform))
                })
                .map(|href| href.to_string())
                .collect();

            ContactInfo {
                social_media: Some(social_media),
            }
        }
        None => ContactInfo { social_media: None },
    }
}

fn has_testimonial_class(tag: &ElementRef) -> bool {
    match tag.value().attr("class") {
        Some(class) => class.to_lowercase().contains("testimonial"),
        None => false,
    }
}
