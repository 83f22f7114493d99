//! SQL steps for the monthly chronograph archive.
//!
//! Sections have no external key and are looked up by display name. When
//! several sections share a name the lowest id wins; a warning is logged
//! because the result may not be the intended section.

use super::events::Audit;
use super::rows::decode_rows;
use crate::config::ChronographSchema;
use crate::errors::{AppError, AppResult};
use sqlx::mysql::MySqlConnection;
use tracing::warn;

const INSERT_SECTION: &str = "
    INSERT INTO b_iblock_section (TIMESTAMP_X, MODIFIED_BY, DATE_CREATE, CREATED_BY, IBLOCK_ID,
                                  IBLOCK_SECTION_ID, ACTIVE, GLOBAL_ACTIVE, SORT, NAME, PICTURE,
                                  DEPTH_LEVEL, SEARCHABLE_CONTENT, TMP_ID, DETAIL_PICTURE, SOCNET_GROUP_ID)
    VALUES (?, ?, ?, ?, ?, NULL, 'Y', 'Y', ?, ?, NULL, 1, ?, '0', NULL, NULL)";

const MOVE_ELEMENTS: &str = "
    UPDATE b_iblock_element
    SET IBLOCK_SECTION_ID = ?,
        MODIFIED_BY = ?,
        DATE_CREATE = ?,
        CREATED_BY = ?,
        ACTIVE = 'Y',
        ACTIVE_FROM = ACTIVE_FROM + INTERVAL ? YEAR,
        ACTIVE_TO = ACTIVE_TO + INTERVAL ? YEAR
    WHERE IBLOCK_SECTION_ID = ?";

const BUMP_YEARS_AGO: &str = "
    UPDATE b_iblock_element_property
    SET VALUE = VALUE + ?
    WHERE IBLOCK_ELEMENT_ID = ? AND IBLOCK_PROPERTY_ID = ?";

pub(crate) async fn insert_section(
    conn: &mut MySqlConnection,
    schema: &ChronographSchema,
    audit: &Audit,
    name: &str,
) -> AppResult<()> {
    sqlx::query(INSERT_SECTION)
        .bind(audit.now)
        .bind(audit.user_id)
        .bind(audit.now)
        .bind(audit.user_id)
        .bind(schema.iblock_id)
        .bind(schema.sort)
        .bind(name)
        .bind(name.to_uppercase())
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub(crate) async fn find_section_by_name(conn: &mut MySqlConnection, name: &str) -> AppResult<i64> {
    let rows = sqlx::query("SELECT ID AS id FROM b_iblock_section WHERE NAME = ? ORDER BY ID")
        .bind(name)
        .fetch_all(&mut *conn)
        .await?;
    let rows = decode_rows(&rows)?;

    let Some(first) = rows.first() else {
        return Err(AppError::SectionNotFound(name.to_string()));
    };
    let id = first.get_i64("id")?;

    if rows.len() > 1 {
        warn!(
            "{} sections are named '{}', using the first one (ID {})",
            rows.len(),
            name,
            id
        );
    }
    Ok(id)
}

/// Re-point every element of `previous` to `new`, moving its active window
/// forward and refreshing audit fields.
pub(crate) async fn move_elements(
    conn: &mut MySqlConnection,
    schema: &ChronographSchema,
    audit: &Audit,
    new_section: i64,
    previous_section: i64,
) -> AppResult<u64> {
    let done = sqlx::query(MOVE_ELEMENTS)
        .bind(new_section)
        .bind(audit.user_id)
        .bind(audit.now)
        .bind(audit.user_id)
        .bind(schema.years_shift)
        .bind(schema.years_shift)
        .bind(previous_section)
        .execute(&mut *conn)
        .await?;
    Ok(done.rows_affected())
}

pub(crate) async fn element_ids(conn: &mut MySqlConnection, section: i64) -> AppResult<Vec<i64>> {
    let rows = sqlx::query("SELECT ID AS id FROM b_iblock_element WHERE IBLOCK_SECTION_ID = ?")
        .bind(section)
        .fetch_all(&mut *conn)
        .await?;
    decode_rows(&rows)?.iter().map(|r| r.get_i64("id")).collect()
}

/// Assumes property `years_ago_property_id` is a numeric "years ago"
/// counter on every element; nothing checks that it is.
pub(crate) async fn bump_years_ago(
    conn: &mut MySqlConnection,
    schema: &ChronographSchema,
    element_id: i64,
) -> AppResult<()> {
    sqlx::query(BUMP_YEARS_AGO)
        .bind(schema.years_shift)
        .bind(element_id)
        .bind(schema.years_ago_property_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub(crate) async fn deactivate_section(conn: &mut MySqlConnection, section: i64) -> AppResult<()> {
    sqlx::query("UPDATE b_iblock_section SET ACTIVE = 'N' WHERE ID = ?")
        .bind(section)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
