use url::Url;

/// Label used in the output file name, derived from the target url's host.
/// Unparseable urls fall back to a generic label so saving still works.
pub fn site_label_from_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed_url) => match parsed_url.host_str() {
            Some(host) => {
                let host = match host.strip_prefix("www.") {
                    Some(h) => h,
                    None => host,
                };
                host.replace('.', "_")
            }
            None => "site".to_string(),
        },
        Err(_) => "site".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::site_label_from_url;

    #[test]
    fn site_label_valid() {
        assert_eq!(
            site_label_from_url("https://www.buygoods.com/platform"),
            "buygoods_com"
        );
        assert_eq!(site_label_from_url("https://example.com"), "example_com");
        assert_eq!(
            site_label_from_url("https://shop.example.co.uk/about"),
            "shop_example_co_uk"
        );
    }

    #[test]
    fn site_label_invalid_url() {
        assert_eq!(site_label_from_url("not a url"), "site");
        assert_eq!(site_label_from_url(""), "site");
    }
}
