// src/runner.rs

//! Top-level lookup pipeline: classify the URL, hand off to the judge
//! pipeline, stream entries into a render sink.
//!
//! This is the only entry point frontends call. It never returns an
//! error: every failure mode is rendered as an entry and the pipeline
//! stops there.

use url::Url;

use crate::judges::{self, Judge};
use crate::render::{icons, Entry, RenderSink};

/// Run one lookup. The sink is cleared first, so a second invocation
/// fully replaces the first's output.
pub fn run(raw_url: &str, sink: &mut dyn RenderSink) {
    sink.clear();

    let url = match Url::parse(raw_url.trim()) {
        Ok(u) => u,
        Err(_) => {
            sink.push(Entry::error("error: invalid url", raw_url));
            sink.push(Entry::text("Supported Online Judges", judges::SUPPORTED, icons::INFO));
            return;
        }
    };

    match judges::classify(&url) {
        Judge::AtCoder => judges::atcoder::lookup(&url, sink),
        Judge::Codeforces => judges::codeforces::lookup(&url, sink),
        Judge::Unsupported => {
            sink.push(Entry::linked("error: invalid url", url.as_str(), url.as_str(), icons::ERROR));
            sink.push(Entry::text("Supported Online Judges", judges::SUPPORTED, icons::INFO));
        }
    }
}
