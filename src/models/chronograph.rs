use crate::errors::AppResult;
use crate::utils::date::month_name_ru;
use serde::Serialize;

/// A month of the chronograph archive. Sections are named
/// "<month name> <year>" ("Март 2029") and found by that name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChronographPeriod {
    pub month: u32,
    pub year: i32,
}

impl ChronographPeriod {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    pub fn section_name(&self) -> AppResult<String> {
        Ok(format!("{} {}", month_name_ru(self.month)?, self.year))
    }

    /// Same month, `years` earlier.
    pub fn years_back(&self, years: i32) -> Self {
        Self {
            month: self.month,
            year: self.year - years,
        }
    }
}

/// Outcome of rolling a chronograph section forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChronographRoll {
    pub new_section_id: i64,
    pub previous_section_id: i64,
    pub moved_elements: usize,
}
