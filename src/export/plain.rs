use super::report::MonthlyReport;
use crate::models::StatisticsRow;
use tracing::info;

/// Prints the report to stdout.
#[derive(Debug, Default)]
pub struct PlainExporter;

impl PlainExporter {
    fn render(&self, statistics: &[StatisticsRow]) -> String {
        MonthlyReport::from_rows(statistics).render()
    }

    pub fn export(&self, statistics: &[StatisticsRow]) {
        info!("Pretty printing statistics ...");
        println!("{}", self.render(statistics));
    }
}
