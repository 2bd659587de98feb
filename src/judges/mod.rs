// src/judges/mod.rs

pub mod atcoder;
pub mod codeforces;

use url::Url;

use crate::config::consts::{ATCODER_HOST, CODEFORCES_HOST};

/// Shown when a URL doesn't belong to any judge we know.
pub const SUPPORTED: &str = "AtCoder, Codeforces";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judge {
    AtCoder,
    Codeforces,
    Unsupported,
}

/// Pick the judge by host name substring. Never fails; a host that
/// matches neither is a valid `Unsupported` classification.
pub fn classify(url: &Url) -> Judge {
    let host = url.host_str().unwrap_or("");
    if host.contains(ATCODER_HOST) {
        Judge::AtCoder
    } else if host.contains(CODEFORCES_HOST) {
        Judge::Codeforces
    } else {
        Judge::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_str(u: &str) -> Judge {
        classify(&Url::parse(u).unwrap())
    }

    #[test]
    fn classify_by_host_substring() {
        assert_eq!(classify_str("https://atcoder.jp/contests/abc300"), Judge::AtCoder);
        assert_eq!(classify_str("https://beta.atcoder.jp/contests/abc300"), Judge::AtCoder);
        assert_eq!(classify_str("https://codeforces.com/contest/1/problem/A"), Judge::Codeforces);
        assert_eq!(classify_str("https://m1.codeforces.com/contest/1"), Judge::Codeforces);
    }

    #[test]
    fn classify_unknown_host_is_unsupported() {
        assert_eq!(classify_str("https://example.com/contests/abc300"), Judge::Unsupported);
        assert_eq!(classify_str("https://topcoder.com/x"), Judge::Unsupported);
    }

    #[test]
    fn classify_url_without_host_is_unsupported() {
        // data: URLs parse fine but have no host at all
        assert_eq!(classify_str("data:text/plain,hello"), Judge::Unsupported);
    }
}
