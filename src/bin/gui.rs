// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use oj_lookup::{gui, share};

fn main() {
    // A share link passed at launch replays its embedded lookup,
    // same as opening the page with the q parameter set.
    let initial = std::env::args()
        .nth(1)
        .map(|arg| share::decode_share_url(&arg).unwrap_or(arg));

    if let Err(e) = gui::run(initial) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
