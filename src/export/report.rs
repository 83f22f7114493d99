use crate::models::{Category, StatisticsRow};

const TEMPLATE: &str = "
    Добрый день!

    Уникальные действия:
      – страниц добавлено на сайт: {pages_added}
      – файлов добавлено на сайт: {files_added}
      – страниц обновлено на сайте: {pages_updated}
      – поисковых индексов обновлено на сайте: {search_index_updated}

    Постоянные действия:
      – оперативное размещение материалов, обработка текстов и изображений для сайта.
      – составление ежемесячного Хронографа.
      – поддержка актуализации раздела «Информация» нормативными документами.
      – оптимизация времени исполнения страниц, HTML- и CSS-кода и метаописания.
      – проведение мероприятий по резервному копированию сайта.
      – сбор и ведение статистики.

    С уважением,
    Евгений
    ";

/// The four monthly counters. Categories absent from the query result
/// stay at zero; unknown labels are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyReport {
    pub pages_added: i64,
    pub files_added: i64,
    pub pages_updated: i64,
    pub search_index_updated: i64,
}

impl MonthlyReport {
    pub fn from_rows(rows: &[StatisticsRow]) -> Self {
        rows.iter().fold(Self::default(), |mut report, row| {
            match row.category() {
                Some(Category::Added) => report.pages_added = row.cnt,
                Some(Category::Files) => report.files_added = row.cnt,
                Some(Category::Updated) => report.pages_updated = row.cnt,
                Some(Category::SearchChanges) => report.search_index_updated = row.cnt,
                None => {}
            }
            report
        })
    }

    pub fn render(&self) -> String {
        textwrap::dedent(TEMPLATE)
            .replace("{pages_added}", &self.pages_added.to_string())
            .replace("{files_added}", &self.files_added.to_string())
            .replace("{pages_updated}", &self.pages_updated.to_string())
            .replace("{search_index_updated}", &self.search_index_updated.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_categories_default_to_zero() {
        let rows = vec![
            StatisticsRow::new("01 added", 3),
            StatisticsRow::new("02 files", 0),
            StatisticsRow::new("04 search changes", 7),
        ];
        let report = MonthlyReport::from_rows(&rows);
        assert_eq!(
            report,
            MonthlyReport {
                pages_added: 3,
                files_added: 0,
                pages_updated: 0,
                search_index_updated: 7,
            }
        );
    }

    #[test]
    fn unknown_labels_are_ignored() {
        let rows = vec![StatisticsRow::new("99 other", 42)];
        assert_eq!(MonthlyReport::from_rows(&rows), MonthlyReport::default());
    }

    #[test]
    fn rendered_report_carries_counters() {
        let report = MonthlyReport {
            pages_added: 3,
            files_added: 0,
            pages_updated: 0,
            search_index_updated: 7,
        };
        let text = report.render();

        assert!(text.contains("страниц добавлено на сайт: 3\n"));
        assert!(text.contains("файлов добавлено на сайт: 0\n"));
        assert!(text.contains("страниц обновлено на сайте: 0\n"));
        assert!(text.contains("поисковых индексов обновлено на сайте: 7\n"));
        assert!(text.contains("\nДобрый день!\n"));
        assert!(text.trim_end().ends_with("Евгений"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn template_is_dedented() {
        let text = MonthlyReport::default().render();
        assert!(text.lines().any(|l| l == "Уникальные действия:"));
        assert!(text.lines().any(|l| l.starts_with("  – сбор")));
    }
}
