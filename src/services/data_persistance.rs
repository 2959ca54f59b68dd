use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::domain::page_record::ScrapeRecord;

pub fn save_record(
    record: &ScrapeRecord,
    site_label: &str,
    output_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let file_path = output_dir.join(data_file_name(site_label, Local::now()));

    let json = serde_json::to_string_pretty(record)?;
    fs::write(&file_path, json)?;

    log::info!("Saved scrape results to {}", file_path.display());

    Ok(file_path)
}

fn data_file_name(site_label: &str, now: DateTime<Local>) -> String {
    format!("{}_data_{}.json", site_label, now.format("%Y%m%d-%H%M%S"))
}
