use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::services::ExtractVariant;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scraper: ScraperSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    pub target_url: String,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_timeout_seconds: u64,
    pub output_dir: String,
    pub variant: ExtractVariant,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::Settings;
    use crate::services::ExtractVariant;

    #[test]
    fn settings_deserialize_valid() {
        let yaml = r#"
scraper:
  target_url: "https://www.buygoods.com"
  user_agent: "Mozilla/5.0"
  request_timeout_seconds: "30"
  output_dir: "."
  variant: business_page
"#;

        let settings = config::Config::builder()
            .add_source(config::File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.scraper.target_url, "https://www.buygoods.com");
        assert_eq!(settings.scraper.request_timeout_seconds, 30);
        assert_eq!(settings.scraper.variant, ExtractVariant::BusinessPage);
    }

    #[test]
    fn settings_deserialize_links_variant() {
        let yaml = r#"
scraper:
  target_url: "https://example.com"
  user_agent: "Mozilla/5.0"
  request_timeout_seconds: 10
  output_dir: "/tmp"
  variant: links
"#;

        let settings = config::Config::builder()
            .add_source(config::File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.scraper.variant, ExtractVariant::Links);
    }
}
