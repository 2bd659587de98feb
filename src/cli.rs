// src/cli.rs
use std::env;

use color_eyre::eyre::{bail, Result};

use crate::config::consts::SHARE_BASE_URL;
use crate::render::{Entry, RenderSink};
use crate::runner;
use crate::share;

#[derive(Debug, Default)]
pub struct Params {
    pub url: Option<String>,
    pub share: bool,
}

pub fn run() -> Result<()> {
    let params = parse_cli()?;
    let Some(raw) = params.url else {
        bail!("Missing <URL> argument (see --help)");
    };

    // Share links are accepted wherever a judge URL is; replay the payload.
    let raw = share::decode_share_url(&raw).unwrap_or(raw);

    let mut sink = TermSink;
    runner::run(&raw, &mut sink);

    if params.share {
        println!();
        println!("Share link: {}", share::make_share_url(SHARE_BASE_URL, &raw)?);
    }
    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut params = Params::default();
    for a in env::args().skip(1) {
        match a.as_str() {
            "-s" | "--share" => params.share = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if a.starts_with('-') => bail!("Unknown arg: {}", a),
            _ => {
                if params.url.is_some() {
                    bail!("More than one URL given: {}", a);
                }
                params.url = Some(a);
            }
        }
    }
    Ok(params)
}

/* ---------- terminal sink ---------- */

/// One printed line per entry; the link rides along in parentheses
/// unless it just repeats the value.
struct TermSink;

impl RenderSink for TermSink {
    fn clear(&mut self) {
        // One-shot process; there is never previous output to clear.
    }

    fn push(&mut self, entry: Entry) {
        match &entry.link {
            Some(link) if *link != entry.value => {
                println!("{}: {} ({})", entry.label, entry.value, link);
            }
            _ => println!("{}: {}", entry.label, entry.value),
        }
    }
}
