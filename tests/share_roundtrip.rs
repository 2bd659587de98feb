// tests/share_roundtrip.rs
//
// A share link must reproduce the submitted URL byte for byte, and the
// decoded URL must flow through the pipeline exactly as typed.
//
use oj_lookup::config::consts::SHARE_BASE_URL;
use oj_lookup::render::VecSink;
use oj_lookup::runner;
use oj_lookup::share::{decode_share_url, make_share_url};

#[test]
fn roundtrip_is_byte_identical() {
    let cases = [
        "https://atcoder.jp/contests/abc300/tasks/abc300_a",
        "https://codeforces.com/contest/1850/problem/A",
        "https://example.com/path?x=1&y=2#frag",
        "https://example.com/ユニコード?q=+/=",
    ];
    for case in cases {
        let link = make_share_url(SHARE_BASE_URL, case).unwrap();
        assert_eq!(decode_share_url(&link).as_deref(), Some(case), "case: {case}");
    }
}

#[test]
fn decoded_share_link_replays_through_the_pipeline() {
    // Unsupported host so the pipeline terminates offline; the rendered
    // URL entry must carry the original input unchanged.
    let original = "https://example.org/some/problem?lang=en";
    let link = make_share_url(SHARE_BASE_URL, original).unwrap();
    let decoded = decode_share_url(&link).unwrap();

    let mut sink = VecSink::default();
    runner::run(&decoded, &mut sink);
    assert_eq!(sink.entries[0].value, original);
}

#[test]
fn decode_is_none_without_payload_parameter() {
    assert_eq!(decode_share_url(SHARE_BASE_URL), None);
    assert_eq!(decode_share_url("https://oj-lookup.pages.dev/?other=1"), None);
}
