use serde::Serialize;

/// The four activity categories counted by the monthly export. The labels
/// are what the statistics query returns and sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Added,
    Files,
    Updated,
    SearchChanges,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Added,
        Category::Files,
        Category::Updated,
        Category::SearchChanges,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Added => "01 added",
            Category::Files => "02 files",
            Category::Updated => "03 updated",
            Category::SearchChanges => "04 search changes",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

/// One `(label, count)` row of the statistics query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsRow {
    pub what: String,
    pub cnt: i64,
}

impl StatisticsRow {
    pub fn new(what: impl Into<String>, cnt: i64) -> Self {
        Self {
            what: what.into(),
            cnt,
        }
    }

    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.what)
    }
}
