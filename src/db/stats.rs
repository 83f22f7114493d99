use super::rows::decode_rows;
use crate::errors::AppResult;
use crate::models::{Category, StatisticsRow};
use chrono::NaiveDate;
use sqlx::mysql::MySqlConnection;

/// Union of the four timestamp sources, each tagged with its category
/// label, counted per label inside `[start, end)`.
fn statistics_sql() -> String {
    format!(
        "SELECT whats.what AS what, COUNT(*) AS cnt
         FROM (
             SELECT '{files}' AS what, b_file.TIMESTAMP_X AS ts FROM b_file
             UNION ALL
             SELECT '{search}' AS what, b_search_content.DATE_CHANGE AS ts FROM b_search_content
             UNION ALL
             SELECT '{added}' AS what, b_iblock_element.DATE_CREATE AS ts FROM b_iblock_element
             UNION ALL
             SELECT '{updated}' AS what, b_iblock_element.TIMESTAMP_X AS ts FROM b_iblock_element
         ) AS whats
         WHERE whats.ts >= ? AND whats.ts < ?
         GROUP BY whats.what
         ORDER BY whats.what",
        files = Category::Files.label(),
        search = Category::SearchChanges.label(),
        added = Category::Added.label(),
        updated = Category::Updated.label(),
    )
}

pub(crate) async fn count_activity(
    conn: &mut MySqlConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<StatisticsRow>> {
    let sql = statistics_sql();
    let rows = sqlx::query(&sql)
        .bind(start.and_time(chrono::NaiveTime::MIN))
        .bind(end.and_time(chrono::NaiveTime::MIN))
        .fetch_all(&mut *conn)
        .await?;

    decode_rows(&rows)?
        .iter()
        .map(|row| Ok(StatisticsRow::new(row.get_string("what")?, row.get_i64("cnt")?)))
        .collect()
}
