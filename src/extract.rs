use serde_json::Value;

use crate::error::{Error, Result};

/// Main content of one page, as returned by the scrape endpoint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScrapedPage {
    pub title: String,
    pub source_url: String,
    pub markdown_content: String,
}

/// Pull the title, source URL and markdown out of a scrape response.
pub fn extract_page(json_text: &str) -> Result<ScrapedPage> {
    let page: Value = serde_json::from_str(json_text)?;
    Ok(ScrapedPage {
        title: string_at(&page, &["data", "metadata", "title"])?,
        source_url: string_at(&page, &["data", "metadata", "sourceURL"])?,
        markdown_content: string_at(&page, &["data", "markdown"])?,
    })
}

/// A non-string value counts as missing.
fn string_at(value: &Value, path: &[&str]) -> Result<String> {
    path.iter()
        .try_fold(value, |value, key| value.get(key))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::Schema(path.join(".")))
}
