use log::{debug, info, warn};
use reqwest::Client;
use tokio::time::sleep;

use crate::{
    config::PackerConfig,
    error::{Error, FetchError, Result},
    extract::{extract_page, ScrapedPage},
    fetch::{client_with_timeout, fetch_page, FetchRequest},
    pack::{pack_pages, PackedDocument},
};

/// A URL that could not be turned into a page.
#[derive(Debug)]
pub struct Failure {
    pub url: String,
    pub error: Error,
}

impl Failure {
    /// `<url>: <kind>: <message>`, as logged during the run.
    pub fn warning(&self) -> String {
        format!("{}: {}: {}", self.url, self.error.kind(), self.error)
    }
}

#[derive(Debug)]
pub struct RunResult {
    pub pages: Vec<ScrapedPage>,
    pub failures: Vec<Failure>,
    pub document: PackedDocument,
}

impl RunResult {
    pub fn success_count(&self) -> usize {
        self.pages.len()
    }

    pub fn error_count(&self) -> usize {
        self.failures.len()
    }
}

/// Fetches URLs one at a time, with a fixed delay between requests.
#[derive(Debug)]
pub struct Scheduler {
    client: Client,
    config: PackerConfig,
}

impl Scheduler {
    pub fn new(config: PackerConfig) -> Result<Self> {
        config.validate()?;
        let client = client_with_timeout(config.timeout).map_err(FetchError::from)?;
        Ok(Self::from_client(client, config))
    }

    pub fn from_client(client: Client, config: PackerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Fetch and extract every URL in order.
    ///
    /// A failing URL is recorded and skipped; the run only fails
    /// if nothing was fetched, or in strict mode if anything failed.
    pub async fn run(&self, urls: &[String]) -> Result<RunResult> {
        let total = urls.len();
        let mut pages = Vec::new();
        let mut failures = Vec::new();
        for (index, url) in urls.iter().enumerate() {
            if index > 0 {
                sleep(self.config.delay).await;
            }
            info!("Processing {}/{total}: {url}", index + 1);
            let request = FetchRequest::new(url.as_str());
            match self.scrape_one(&request).await {
                Ok(page) => {
                    debug!("{url}: got `{}`.", page.title);
                    pages.push(page);
                }
                Err(error) => {
                    let failure = Failure {
                        url: request.url,
                        error,
                    };
                    warn!("{}", failure.warning());
                    failures.push(failure);
                }
            }
        }
        if pages.is_empty() {
            return Err(Error::NoContent);
        }
        if self.config.strict && !failures.is_empty() {
            return Err(Error::Incomplete {
                failed: failures.len(),
                total,
            });
        }
        let document = pack_pages(&pages);
        Ok(RunResult {
            pages,
            failures,
            document,
        })
    }

    async fn scrape_one(&self, request: &FetchRequest) -> Result<ScrapedPage> {
        let text = fetch_page(
            &self.client,
            request,
            &self.config.endpoint,
            &self.config.api_key,
        )
        .await?;
        extract_page(&text)
    }
}
