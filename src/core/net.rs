// src/core/net.rs

// Blocking HTTP GET. Only ever called from the page context thread.

use std::time::Duration;

use url::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;

pub fn http_get(url: &Url) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url.clone()).send()?.error_for_status()?;
    logd!("Net: {} → {}", url, resp.status());
    Ok(resp.text()?)
}
