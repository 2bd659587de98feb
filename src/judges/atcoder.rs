// src/judges/atcoder.rs

//! AtCoder lookup: path parse → problem → contest → field entries.
//!
//! Problem and contest metadata come from the AtCoder Problems API
//! (kenkoooo.com), which serves flat JSON arrays of the whole archive.
//! Both lookups are a linear scan of that archive; first match wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::config::consts::{ATCODER_CONTESTS_URL, ATCODER_PROBLEMS_URL};
use crate::core::net;
use crate::render::{icons, Entry, RenderSink};

/// One row of the merged problem list. Unknown fields are ignored;
/// `point` and `solver_count` are null for unrated/archived problems.
#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    pub id: String,
    pub contest_id: String,
    pub title: String,
    pub point: Option<f64>,
    pub solver_count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contest {
    pub id: String,
    pub title: String,
}

// Tolerates repeated slashes, e.g. //contests//abc300//tasks//abc300_a
static TASK_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/+contests/+(\w+)/+tasks/+(\w+)").expect("task path regex"));

/// Extract (contest id, problem id) from a URL path.
pub fn parse_path(path: &str) -> Option<(String, String)> {
    let caps = TASK_PATH.captures(path)?;
    Some((s!(&caps[1]), s!(&caps[2])))
}

/// ABC/ARC/AGC bucket from the problem id. Check order is fixed;
/// the first matching substring wins.
pub fn category(problem_id: &str) -> &'static str {
    if problem_id.contains("abc") {
        "ABC"
    } else if problem_id.contains("arc") {
        "ARC"
    } else if problem_id.contains("agc") {
        "AGC"
    } else {
        "others"
    }
}

/// Run the whole AtCoder pipeline for `url`, rendering into `sink`.
/// Every failure renders one error entry and aborts right there.
pub fn lookup(url: &Url, sink: &mut dyn RenderSink) {
    let Some((_contest_id, problem_id)) = parse_path(url.path()) else {
        sink.push(Entry::error("error: failed to parse URL", ""));
        return;
    };
    let Some(problem) = resolve_problem(&problem_id, sink) else {
        return;
    };
    // Contest comes from the problem's declared contest_id, not the path.
    let Some(contest) = resolve_contest(&problem.contest_id, sink) else {
        return;
    };
    for entry in map_fields(&problem, &contest, url) {
        sink.push(entry);
    }
}

/// Fixed display order: judge, category, contest, point, solvers, title, URL.
pub fn map_fields(problem: &Problem, contest: &Contest, url: &Url) -> Vec<Entry> {
    let contest_url = join!("https://atcoder.jp/contests/", &contest.id);
    vec![
        Entry::linked("Online Judge", "AtCoder", "https://atcoder.jp/", icons::JUDGE),
        Entry::text("Category", category(&problem.id), icons::CATEGORY),
        Entry::linked("Contest", &contest.title, &contest_url, icons::CONTEST),
        Entry::text("Point", &fmt_point(problem.point), icons::POINT),
        Entry::text("Solver Count", &fmt_count(problem.solver_count), icons::SOLVERS),
        Entry::linked("Problem Title", &problem.title, url.as_str(), icons::PROBLEM),
        Entry::linked("URL", url.as_str(), url.as_str(), icons::LINK),
    ]
}

/* ---------- resolvers ---------- */

fn resolve_problem(problem_id: &str, sink: &mut dyn RenderSink) -> Option<Problem> {
    let problems = fetch_list::<Problem>(ATCODER_PROBLEMS_URL, sink)?;
    match find_problem(problems, problem_id) {
        Some(p) => Some(p),
        None => {
            sink.push(Entry::error(
                "error: problem info is not found in AtCoder Problems",
                problem_id,
            ));
            None
        }
    }
}

fn resolve_contest(contest_id: &str, sink: &mut dyn RenderSink) -> Option<Contest> {
    let contests = fetch_list::<Contest>(ATCODER_CONTESTS_URL, sink)?;
    match find_contest(contests, contest_id) {
        Some(c) => Some(c),
        None => {
            sink.push(Entry::error(
                "error: contest info is not found in AtCoder Problems",
                contest_id,
            ));
            None
        }
    }
}

fn fetch_list<T: serde::de::DeserializeOwned>(
    url: &str,
    sink: &mut dyn RenderSink,
) -> Option<Vec<T>> {
    match net::http_get_json::<Vec<T>>(url) {
        Ok(list) => Some(list),
        Err(e) => {
            sink.push(Entry::error(
                "error: failed to call API of AtCoder Problems",
                &e.to_string(),
            ));
            None
        }
    }
}

/// Linear scan by id; the archive is small enough that nothing fancier pays.
pub fn find_problem(problems: Vec<Problem>, problem_id: &str) -> Option<Problem> {
    problems.into_iter().find(|p| p.id == problem_id)
}

pub fn find_contest(contests: Vec<Contest>, contest_id: &str) -> Option<Contest> {
    contests.into_iter().find(|c| c.id == contest_id)
}

/* ---------- helpers ---------- */

fn fmt_point(point: Option<f64>) -> String {
    match point {
        // Points are whole numbers in practice; don't print "100.0"
        Some(p) if p.fract() == 0.0 => format!("{}", p as i64),
        Some(p) => p.to_string(),
        None => s!("-"),
    }
}

fn fmt_count(count: Option<i64>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => s!("-"),
    }
}
