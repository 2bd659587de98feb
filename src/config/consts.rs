// src/config/consts.rs

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "oj_lookup/0.3";

// Judge detection (host name substring match)
pub const ATCODER_HOST: &str = "atcoder.jp";
pub const CODEFORCES_HOST: &str = "codeforces.com";

// AtCoder Problems API (kenkoooo.com), fixed endpoints, no parameters
pub const ATCODER_PROBLEMS_URL: &str = "https://kenkoooo.com/atcoder/resources/merged-problems.json";
pub const ATCODER_CONTESTS_URL: &str = "https://kenkoooo.com/atcoder/resources/contests.json";

// Codeforces API
pub const CODEFORCES_PROBLEMS_URL: &str = "https://codeforces.com/api/problemset.problems";
pub const CODEFORCES_CONTESTS_URL: &str = "https://codeforces.com/api/contest.list";

// Share links: base64 payload in a single query parameter
pub const SHARE_BASE_URL: &str = "https://oj-lookup.pages.dev/";
pub const SHARE_PARAM: &str = "q";
