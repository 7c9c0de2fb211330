use reqwest::Url;

use crate::error::ValidationError;

/// `true` if `url` parses with both a scheme and a non-empty host.
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(url) => {
            !url.scheme().is_empty() && url.host_str().map_or(false, |host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Split newline-separated input into URLs, in order.
///
/// Every line is trimmed; a blank line between URLs counts as invalid.
/// Fails listing all the lines that are not valid URLs.
pub fn parse_url_list(text: &str) -> Result<Vec<String>, ValidationError> {
    let urls: Vec<String> = text
        .trim()
        .lines()
        .map(|line| line.trim().to_owned())
        .collect();
    if urls.iter().all(String::is_empty) {
        return Err(ValidationError::Missing("urls"));
    }
    let invalid: Vec<String> = urls
        .iter()
        .filter(|url| !is_valid_url(url))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationError::Urls(invalid));
    }
    Ok(urls)
}
