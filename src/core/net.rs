// src/core/net.rs

// Blocking HTTP GET against the judge APIs. HTTPS required, hence ureq.

use std::error::Error;
use std::io::Read;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

/// Fetch `url` and return the response body as a String.
/// Non-2xx statuses, transport failures and timeouts are all errors.
pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let resp = match ureq::get(url)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .set("User-Agent", USER_AGENT)
        .call()
    {
        Ok(r) => r,
        Err(ureq::Error::Status(code, r)) => {
            return Err(format!("HTTP error: {} {}", code, r.status_text()).into());
        }
        Err(e) => return Err(format!("transport error: {}", e).into()),
    };

    // No fixed read cap; the merged problem list runs to several MB.
    let mut body = String::new();
    resp.into_reader().read_to_string(&mut body)?;
    Ok(body)
}

/// Fetch `url` and decode the JSON body into `T`.
/// A body that doesn't match the expected schema is an error here,
/// not a bag of missing fields later.
pub fn http_get_json<T: DeserializeOwned>(url: &str) -> Result<T, Box<dyn Error>> {
    let body = http_get(url)?;
    Ok(serde_json::from_str(&body)?)
}
