// src/judges/codeforces.rs

//! Codeforces lookup, same shape as the AtCoder side with two twists:
//! problems are keyed by (contest id, index) rather than a single id,
//! and the problem list arrives wrapped in a status envelope that can
//! report failure on its own, independent of the HTTP status.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::config::consts::{CODEFORCES_CONTESTS_URL, CODEFORCES_PROBLEMS_URL};
use crate::core::net;
use crate::render::{icons, Entry, RenderSink};

#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    #[serde(rename = "contestId")]
    pub contest_id: i64,
    pub index: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rating: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contest {
    pub id: i64,
    pub name: String,
}

/// `problemset.problems` envelope. `status` must be "OK"; anything else
/// is an API-level failure even on HTTP 200.
#[derive(Debug, Deserialize)]
struct ProblemsEnvelope {
    status: String,
    comment: Option<String>,
    result: Option<ProblemsResult>,
}

#[derive(Debug, Deserialize)]
struct ProblemsResult {
    problems: Vec<Problem>,
}

// Tolerates repeated slashes, e.g. //contest//1850//problem//A
static PROBLEM_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/+contest/+(\d+)/+problem/+(\w+)").expect("problem path regex"));

/// Extract (contest id, problem index) from a URL path.
/// Contest ids are numeric on Codeforces; an id too large for i64 is
/// treated as a non-match.
pub fn parse_path(path: &str) -> Option<(i64, String)> {
    let caps = PROBLEM_PATH.captures(path)?;
    let contest_id: i64 = caps[1].parse().ok()?;
    Some((contest_id, s!(&caps[2])))
}

/// Run the whole Codeforces pipeline for `url`, rendering into `sink`.
pub fn lookup(url: &Url, sink: &mut dyn RenderSink) {
    let Some((contest_id, index)) = parse_path(url.path()) else {
        sink.push(Entry::error("error: failed to parse URL", ""));
        return;
    };
    let Some(problem) = resolve_problem(contest_id, &index, sink) else {
        return;
    };
    let Some(contest) = resolve_contest(problem.contest_id, sink) else {
        return;
    };
    for entry in map_fields(&problem, &contest, url) {
        sink.push(entry);
    }
}

/// Fixed display order: judge, contest, rating, type, tags, name, URL.
pub fn map_fields(problem: &Problem, contest: &Contest, url: &Url) -> Vec<Entry> {
    let contest_url = format!("https://codeforces.com/contest/{}", contest.id);
    let name = format!("{}. {}", problem.index, problem.name);
    vec![
        Entry::linked("Online Judge", "Codeforces", "https://codeforces.com/", icons::JUDGE),
        Entry::linked("Contest", &contest.name, &contest_url, icons::CONTEST),
        Entry::text("Rating", &fmt_rating(problem.rating), icons::RATING),
        Entry::text("Type", &problem.kind, icons::KIND),
        Entry::text("Tags", &problem.tags.join(", "), icons::TAGS),
        Entry::linked("Problem Name", &name, url.as_str(), icons::PROBLEM),
        Entry::linked("URL", url.as_str(), url.as_str(), icons::LINK),
    ]
}

/* ---------- resolvers ---------- */

fn resolve_problem(contest_id: i64, index: &str, sink: &mut dyn RenderSink) -> Option<Problem> {
    let envelope = match net::http_get_json::<ProblemsEnvelope>(CODEFORCES_PROBLEMS_URL) {
        Ok(env) => env,
        Err(e) => {
            sink.push(Entry::error(
                "error: failed to call API of Codeforces",
                &e.to_string(),
            ));
            return None;
        }
    };
    let problems = match unwrap_envelope(envelope) {
        Ok(list) => list,
        Err(comment) => {
            sink.push(Entry::error("error: Codeforces API reported a failure", &comment));
            return None;
        }
    };
    match find_problem(problems, contest_id, index) {
        Some(p) => Some(p),
        None => {
            sink.push(Entry::error(
                "error: problem info is not found on Codeforces",
                &format!("{}{}", contest_id, index),
            ));
            None
        }
    }
}

fn resolve_contest(contest_id: i64, sink: &mut dyn RenderSink) -> Option<Contest> {
    let contests = match net::http_get_json::<Vec<Contest>>(CODEFORCES_CONTESTS_URL) {
        Ok(list) => list,
        Err(e) => {
            sink.push(Entry::error(
                "error: failed to call API of Codeforces",
                &e.to_string(),
            ));
            return None;
        }
    };
    match find_contest(contests, contest_id) {
        Some(c) => Some(c),
        None => {
            sink.push(Entry::error(
                "error: contest info is not found on Codeforces",
                &contest_id.to_string(),
            ));
            None
        }
    }
}

/// Reduce the envelope to its problem list, or to the failure comment.
fn unwrap_envelope(envelope: ProblemsEnvelope) -> Result<Vec<Problem>, String> {
    if envelope.status != "OK" {
        return Err(envelope.comment.unwrap_or_else(|| envelope.status));
    }
    match envelope.result {
        Some(result) => Ok(result.problems),
        None => Err(s!("status OK but no result payload")),
    }
}

/// Linear scan; problems are keyed by (contest id, index), first match wins.
pub fn find_problem(problems: Vec<Problem>, contest_id: i64, index: &str) -> Option<Problem> {
    problems
        .into_iter()
        .find(|p| p.contest_id == contest_id && p.index == index)
}

pub fn find_contest(contests: Vec<Contest>, contest_id: i64) -> Option<Contest> {
    contests.into_iter().find(|c| c.id == contest_id)
}

/* ---------- helpers ---------- */

fn fmt_rating(rating: Option<i64>) -> String {
    match rating {
        Some(r) => r.to_string(),
        None => s!("-"),
    }
}
