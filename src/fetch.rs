use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Serialize;

use crate::error::FetchError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// One page to ask the scrape endpoint for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchRequest {
    pub url: String,
}

impl FetchRequest {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeBody<'a> {
    url: &'a str,
    page_options: PageOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageOptions {
    only_main_content: bool,
}

pub fn client_with_timeout(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()
}

/// POST `request` to the scrape endpoint and return the raw response body.
///
/// A single attempt: non-2xx status and transport failures are both errors.
pub async fn fetch_page(
    client: &Client,
    request: &FetchRequest,
    endpoint: &str,
    api_key: &str,
) -> Result<String, FetchError> {
    let body = ScrapeBody {
        url: &request.url,
        page_options: PageOptions {
            only_main_content: true,
        },
    };
    debug!("POST {endpoint} for {}.", request.url);
    let response = client
        .post(endpoint)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(FetchError::Status { status, detail });
    }
    Ok(response.text().await?)
}
