// tests/pipeline_offline.rs
//
// Pipeline properties that terminate before any network call:
// classification failures, path parse failures, and the rule that a
// re-invocation fully replaces earlier output.
//
use oj_lookup::render::VecSink;
use oj_lookup::runner;

#[test]
fn unsupported_host_yields_error_plus_judge_listing() {
    let url = "https://example.com/contests/abc300/tasks/abc300_a";
    let mut sink = VecSink::default();
    runner::run(url, &mut sink);

    assert_eq!(sink.entries.len(), 2);
    assert_eq!(sink.entries[0].label, "error: invalid url");
    assert_eq!(sink.entries[0].value, url);
    assert_eq!(sink.entries[0].link.as_deref(), Some(url));
    assert_eq!(sink.entries[1].label, "Supported Online Judges");
    assert_eq!(sink.entries[1].value, "AtCoder, Codeforces");
}

#[test]
fn unparseable_input_yields_error_plus_judge_listing() {
    let mut sink = VecSink::default();
    runner::run("not a url", &mut sink);

    assert_eq!(sink.entries.len(), 2);
    assert_eq!(sink.entries[0].label, "error: invalid url");
    assert_eq!(sink.entries[0].value, "not a url");
    assert!(sink.entries[0].link.is_none());
    assert_eq!(sink.entries[1].label, "Supported Online Judges");
}

#[test]
fn malformed_atcoder_path_yields_single_parse_error() {
    let mut sink = VecSink::default();
    runner::run("https://atcoder.jp/contests/abc300", &mut sink);

    assert_eq!(sink.entries.len(), 1);
    assert_eq!(sink.entries[0].label, "error: failed to parse URL");
}

#[test]
fn malformed_codeforces_path_yields_single_parse_error() {
    let mut sink = VecSink::default();
    runner::run("https://codeforces.com/problemset/problem/1850/A", &mut sink);

    assert_eq!(sink.entries.len(), 1);
    assert_eq!(sink.entries[0].label, "error: failed to parse URL");
}

#[test]
fn input_is_trimmed_before_parsing() {
    let mut sink = VecSink::default();
    runner::run("  https://atcoder.jp/contests/abc300  ", &mut sink);

    // Trimmed input classifies as AtCoder and fails on path shape,
    // not on URL syntax.
    assert_eq!(sink.entries.len(), 1);
    assert_eq!(sink.entries[0].label, "error: failed to parse URL");
}

#[test]
fn second_lookup_fully_replaces_first() {
    let mut sink = VecSink::default();

    runner::run("https://example.com/first", &mut sink);
    assert_eq!(sink.entries.len(), 2);

    runner::run("https://atcoder.jp/wrong/shape", &mut sink);
    assert_eq!(sink.entries.len(), 1);
    assert_eq!(sink.entries[0].label, "error: failed to parse URL");
    assert!(sink.entries.iter().all(|e| !e.value.contains("example.com/first")));
}
