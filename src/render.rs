// src/render.rs

//! Display entries and the sink the pipeline renders them into.
//!
//! The pipeline never touches a frontend directly: it pushes `Entry`
//! values into a `RenderSink`, in order. GUI and CLI implement the
//! sink; tests use `VecSink`.

/// Fixed icon tags carried on each entry. Presentation only — frontends
/// map them to glyphs (or ignore them), the pipeline just passes them through.
pub mod icons {
    pub const JUDGE: &str = "globe";
    pub const CATEGORY: &str = "folder";
    pub const CONTEST: &str = "trophy";
    pub const POINT: &str = "star";
    pub const SOLVERS: &str = "people";
    pub const RATING: &str = "graph";
    pub const KIND: &str = "gear";
    pub const TAGS: &str = "tag";
    pub const PROBLEM: &str = "book";
    pub const LINK: &str = "link";
    pub const ERROR: &str = "alert";
    pub const INFO: &str = "info";
}

/// One collapsible row of lookup output: label + icon up front,
/// value (optionally a hyperlink) when expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub value: String,
    pub link: Option<String>,
    pub icon: &'static str,
}

impl Entry {
    pub fn text(label: &str, value: &str, icon: &'static str) -> Self {
        Self { label: s!(label), value: s!(value), link: None, icon }
    }

    pub fn linked(label: &str, value: &str, link: &str, icon: &'static str) -> Self {
        Self { label: s!(label), value: s!(value), link: Some(s!(link)), icon }
    }

    pub fn error(label: &str, value: &str) -> Self {
        Self::text(label, value, icons::ERROR)
    }
}

/// Where the pipeline sends its entries.
///
/// `clear` drops everything a previous lookup rendered; `push` appends
/// one entry. Callers rely on push order being preserved.
pub trait RenderSink {
    fn clear(&mut self);
    fn push(&mut self, entry: Entry);
}

/// Collects entries in memory. Backs the GUI worker and the tests.
#[derive(Debug, Default)]
pub struct VecSink {
    pub entries: Vec<Entry>,
}

impl RenderSink for VecSink {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}
