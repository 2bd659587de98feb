// src/share.rs

//! Shareable links: the submitted judge URL, base64-encoded, carried in
//! a single query parameter on the tool's own page URL. Decoding gives
//! back the byte-identical original, so a share link alone is enough to
//! replay a lookup.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use url::Url;

use crate::config::consts::SHARE_PARAM;

/// Build a share link on top of `base` carrying `target` as its payload.
pub fn make_share_url(base: &str, target: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .clear()
        .append_pair(SHARE_PARAM, &BASE64.encode(target.as_bytes()));
    Ok(url.to_string())
}

/// Recover the embedded URL from a share link.
/// Returns None for anything that isn't a share link with a decodable
/// payload — callers fall back to treating the input as a judge URL.
pub fn decode_share_url(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let payload = url
        .query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())?;
    let bytes = BASE64.decode(payload.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::SHARE_BASE_URL;

    #[test]
    fn share_link_carries_single_q_parameter() {
        let link = make_share_url(SHARE_BASE_URL, "https://atcoder.jp/contests/abc300/tasks/abc300_a")
            .unwrap();
        let url = Url::parse(&link).unwrap();
        assert_eq!(url.query_pairs().count(), 1);
        assert!(url.query_pairs().any(|(k, _)| k == SHARE_PARAM));
    }

    #[test]
    fn decode_rejects_plain_judge_urls() {
        assert_eq!(decode_share_url("https://atcoder.jp/contests/abc300/tasks/abc300_a"), None);
        assert_eq!(decode_share_url("not a url at all"), None);
    }

    #[test]
    fn decode_rejects_garbage_payload() {
        let link = join!(SHARE_BASE_URL, "?q=!!!not-base64!!!");
        assert_eq!(decode_share_url(&link), None);
    }
}
