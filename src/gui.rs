// src/gui.rs
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui;

use crate::config::consts::SHARE_BASE_URL;
use crate::render::{icons, Entry, VecSink};
use crate::runner;
use crate::share;

pub fn run(initial_url: Option<String>) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "OJ Lookup",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(initial_url)))),
    )?;
    Ok(())
}

/// State shared with the lookup worker thread. Entries are swapped
/// wholesale when a lookup finishes; never patched in place.
struct Shared {
    entries: Vec<Entry>,
    running: bool,
}

pub struct App {
    input_url: String,
    share_url: String,
    shared: Arc<Mutex<Shared>>,

    // Set when launched from a share link; fires one lookup on the first frame
    autorun: bool,
}

impl App {
    pub fn new(initial_url: Option<String>) -> Self {
        let autorun = initial_url.is_some();
        Self {
            input_url: initial_url.unwrap_or_default(),
            share_url: s!(),
            shared: Arc::new(Mutex::new(Shared { entries: Vec::new(), running: false })),
            autorun,
        }
    }

    fn start_lookup(&mut self, ctx: &egui::Context) {
        let url = self.input_url.trim().to_string();
        if url.is_empty() {
            return;
        }

        // At most one lookup in flight; the button is disabled while
        // running, this is the backstop.
        {
            let mut shared = self.shared.lock().unwrap();
            if shared.running {
                return;
            }
            shared.running = true;
        }

        self.share_url = share::make_share_url(SHARE_BASE_URL, &url).unwrap_or_default();

        let shared = self.shared.clone();
        let ctx2 = ctx.clone();
        thread::spawn(move || {
            let mut sink = VecSink::default();
            runner::run(&url, &mut sink);

            let mut sh = shared.lock().unwrap();
            sh.entries = sink.entries;
            sh.running = false;
            ctx2.request_repaint();
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.autorun {
            self.autorun = false;
            self.start_lookup(ctx);
        }

        let (entries, running) = {
            let shared = self.shared.lock().unwrap();
            (shared.entries.clone(), shared.running)
        };

        egui::TopBottomPanel::top("lookup-input").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Problem URL:");
                let edit = egui::TextEdit::singleline(&mut self.input_url)
                    .hint_text("https://atcoder.jp/contests/.../tasks/...")
                    .desired_width(f32::INFINITY);
                ui.add(edit);
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let button = ui.add_enabled(!running, egui::Button::new("Look up"));
                if button.clicked() {
                    self.start_lookup(ctx);
                }
                if running {
                    ui.spinner();
                    ui.label("Looking up…");
                }
                if !self.share_url.is_empty() {
                    ui.label("Share:");
                    ui.hyperlink(&self.share_url);
                }
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (i, entry) in entries.iter().enumerate() {
                    let header = format!("{}  {}", icon_glyph(entry.icon), entry.label);
                    egui::CollapsingHeader::new(header)
                        .id_salt(i)
                        .show(ui, |ui| match &entry.link {
                            Some(link) => {
                                ui.hyperlink_to(&entry.value, link);
                            }
                            None => {
                                ui.label(&entry.value);
                            }
                        });
                }
            });
        });
    }
}

/// Icon tag → glyph. Purely cosmetic; unknown tags get a neutral dot.
fn icon_glyph(tag: &str) -> &'static str {
    match tag {
        icons::JUDGE => "🌐",
        icons::CATEGORY => "🗀",
        icons::CONTEST => "🏆",
        icons::POINT => "⭐",
        icons::SOLVERS => "👥",
        icons::RATING => "📈",
        icons::KIND => "⚙",
        icons::TAGS => "🏷",
        icons::PROBLEM => "📖",
        icons::LINK => "🔗",
        icons::ERROR => "⚠",
        icons::INFO => "ℹ",
        _ => "•",
    }
}
