use std::time::Duration;

use reqwest::{header::USER_AGENT, Client};

pub enum FetchResult {
    Content(String),
    NoContent,
}

/// Transport failures and non-2xx statuses are logged and collapsed into
/// `NoContent`; callers never see an error kind.
pub struct PageFetcher {
    client: Client,
    user_agent: String,
}

impl PageFetcher {
    pub fn new(user_agent: String, request_timeout: Duration) -> Self {
        let client = Client::builder()
            .read_timeout(request_timeout)
            .build()
            .unwrap();

        PageFetcher { client, user_agent }
    }

    pub async fn fetch_page(&self, url: &str) -> FetchResult {
        let req = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str());

        match req.send().await {
            Ok(res) => match res.error_for_status() {
                Ok(res) => match res.text().await {
                    Ok(html_content) => FetchResult::Content(html_content),
                    Err(e) => {
                        log::error!("Failed to read text from response. Error: {:?}", e);
                        FetchResult::NoContent
                    }
                },
                Err(e) => {
                    log::error!("Error fetching the page: {:?}", e);
                    FetchResult::NoContent
                }
            },
            Err(e) => {
                log::error!("Error fetching the page: {:?}", e);
                FetchResult::NoContent
            }
        }
    }
}
