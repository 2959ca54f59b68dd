use std::{io::Write, path::Path, time::Duration};

use env_logger::Env;
use recon::{
    configuration::get_configuration,
    domain::{page_record::ScrapeRecord, site::site_label_from_url},
    services::{save_record, PageFetcher, SiteScraper},
};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .init();

    if let Err(e) = run().await {
        log::error!("An error occurred: {:?}", e);
    }
}

async fn run() -> anyhow::Result<()> {
    let configuration = get_configuration()?;
    let scraper_settings = configuration.scraper;

    let fetcher = PageFetcher::new(
        scraper_settings.user_agent,
        Duration::from_secs(scraper_settings.request_timeout_seconds),
    );
    let site_scraper = SiteScraper::new(
        fetcher,
        scraper_settings.target_url.clone(),
        scraper_settings.variant,
    );

    let record = site_scraper.scrape().await;
    log_summary(&record);

    let site_label = site_label_from_url(&scraper_settings.target_url);
    save_record(&record, &site_label, Path::new(&scraper_settings.output_dir))?;

    Ok(())
}

fn log_summary(record: &ScrapeRecord) {
    match record {
        ScrapeRecord::Links { links, .. } => {
            log::info!("Found {} links", links.len());
            for link in links.iter().take(5) {
                log::info!("Link found: {}", link);
            }
        }
        ScrapeRecord::Business {
            title,
            features,
            testimonials,
            ..
        } => {
            log::info!("Scraped page titled: {}", title);
            log::info!(
                "Found {} features, {} testimonials",
                features.len(),
                testimonials.len()
            );
            for feature in features.iter().take(5) {
                log::info!("Feature found: {}", feature);
            }
        }
        ScrapeRecord::Empty {} => {
            log::error!("Scrape returned no content");
        }
    }
}
