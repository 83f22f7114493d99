//! SQL steps for reading, pinning and copying events. Every function runs
//! on the connection it is given, so callers decide the transaction scope.

use super::rows::decode_rows;
use crate::config::{EventSchema, PinSchema};
use crate::errors::{AppError, AppResult};
use crate::models::Event;
use chrono::NaiveDateTime;
use sqlx::mysql::MySqlConnection;
use tracing::{debug, warn};

const SELECT_EVENT: &str = "
    SELECT
        e.ID AS id,
        e.NAME AS name,
        e.ACTIVE_FROM AS active_from,
        e.ACTIVE_TO AS active_to,
        e.PREVIEW_PICTURE AS preview_picture,
        e.PREVIEW_TEXT AS preview_text,
        e.PREVIEW_TEXT_TYPE AS preview_text_type,
        e.DETAIL_PICTURE AS detail_picture,
        e.DETAIL_TEXT AS detail_text,
        e.DETAIL_TEXT_TYPE AS detail_text_type,
        e.TAGS AS tags
    FROM b_iblock_element e
    WHERE e.ID = ?
    LIMIT 1";

const COPY_FILE: &str = "
    INSERT INTO b_file (TIMESTAMP_X, MODULE_ID, HEIGHT, WIDTH, FILE_SIZE, CONTENT_TYPE,
                        SUBDIR, FILE_NAME, ORIGINAL_NAME, DESCRIPTION, HANDLER_ID, EXTERNAL_ID)
    SELECT TIMESTAMP_X, MODULE_ID, HEIGHT, WIDTH, FILE_SIZE, CONTENT_TYPE,
           SUBDIR, FILE_NAME, ORIGINAL_NAME, DESCRIPTION, HANDLER_ID, EXTERNAL_ID
    FROM b_file
    WHERE ID = ?";

const INSERT_PIN: &str = "
    INSERT INTO b_iblock_element (TIMESTAMP_X, MODIFIED_BY, DATE_CREATE, CREATED_BY, IBLOCK_ID,
                                  IBLOCK_SECTION_ID, ACTIVE, ACTIVE_FROM, ACTIVE_TO, SORT, NAME,
                                  PREVIEW_PICTURE, SEARCHABLE_CONTENT, TMP_ID)
    VALUES (?, ?, ?, ?, ?, ?, 'Y', ?, ?, ?, ?, ?, ?, '0')";

const INSERT_EVENT_COPY: &str = "
    INSERT INTO b_iblock_element (TIMESTAMP_X, MODIFIED_BY, DATE_CREATE, CREATED_BY, IBLOCK_ID,
                                  ACTIVE, ACTIVE_FROM, ACTIVE_TO, SORT, NAME,
                                  PREVIEW_PICTURE, PREVIEW_TEXT, PREVIEW_TEXT_TYPE,
                                  DETAIL_PICTURE, DETAIL_TEXT, DETAIL_TEXT_TYPE,
                                  SEARCHABLE_CONTENT, TAGS, TMP_ID)
    VALUES (?, ?, ?, ?, ?, 'Y', ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, '0')";

const INSERT_PIN_PROPERTIES: &str = "
    INSERT INTO b_iblock_element_property (IBLOCK_PROPERTY_ID, IBLOCK_ELEMENT_ID, VALUE, VALUE_TYPE, VALUE_NUM)
    VALUES (?, ?, ?, 'text', 0.0000),
           (?, ?, ?, 'text', 0.0000),
           (?, ?, ?, 'text', 0.0000)";

const COPY_PROPERTIES: &str = "
    INSERT INTO b_iblock_element_property (IBLOCK_PROPERTY_ID, IBLOCK_ELEMENT_ID, VALUE, VALUE_TYPE, VALUE_NUM)
    SELECT IBLOCK_PROPERTY_ID, ?, VALUE, VALUE_TYPE, VALUE_NUM
    FROM b_iblock_element_property
    WHERE IBLOCK_ELEMENT_ID = ?";

/// Columns the insert steps stamp on every new element.
pub(crate) struct Audit {
    pub now: NaiveDateTime,
    pub user_id: i64,
}

pub(crate) async fn fetch_event(conn: &mut MySqlConnection, id: i64) -> AppResult<Event> {
    let rows = sqlx::query(SELECT_EVENT).bind(id).fetch_all(&mut *conn).await?;
    let rows = decode_rows(&rows)?;

    let Some(row) = rows.first() else {
        return Err(AppError::EventNotFound(id));
    };

    Ok(Event {
        id: row.get_i64("id")?,
        name: row.get_string("name")?,
        active_from: row.get_datetime("active_from")?,
        active_to: row.get_datetime("active_to")?,
        preview_picture: row.get_opt_i64("preview_picture")?,
        preview_text: row.get_opt_string("preview_text")?,
        preview_text_type: row.get_string("preview_text_type")?,
        detail_picture: row.get_opt_i64("detail_picture")?,
        detail_text: row.get_opt_string("detail_text")?,
        detail_text_type: row.get_string("detail_text_type")?,
        tags: row.get_opt_string("tags")?,
    })
}

/// Highest id in `table`; stands in for the id of the row just inserted.
/// Only sound while nobody else writes to the table.
pub(crate) async fn max_id(conn: &mut MySqlConnection, table: &'static str) -> AppResult<i64> {
    let sql = format!("SELECT MAX(ID) AS id FROM {table}");
    let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
    let rows = decode_rows(&rows)?;
    match rows.first() {
        Some(row) => row.get_i64("id"),
        None => Err(AppError::Decode {
            column: "id".to_string(),
            reason: format!("no rows in {table}"),
        }),
    }
}

/// Duplicate a `b_file` row; the copy is independent of the original.
/// Returns `None` when there is nothing to copy.
pub(crate) async fn copy_picture(
    conn: &mut MySqlConnection,
    picture_id: Option<i64>,
) -> AppResult<Option<i64>> {
    let Some(picture_id) = picture_id else {
        return Ok(None);
    };

    let done = sqlx::query(COPY_FILE).bind(picture_id).execute(&mut *conn).await?;
    if done.rows_affected() == 0 {
        warn!("File {} does not exist, the copy will have no picture", picture_id);
        return Ok(None);
    }

    let new_id = max_id(conn, "b_file").await?;
    debug!("Copied file {} to {}", picture_id, new_id);
    Ok(Some(new_id))
}

pub(crate) async fn insert_pin(
    conn: &mut MySqlConnection,
    schema: &PinSchema,
    audit: &Audit,
    event: &Event,
    preview_picture: Option<i64>,
) -> AppResult<i64> {
    sqlx::query(INSERT_PIN)
        .bind(audit.now)
        .bind(audit.user_id)
        .bind(audit.now)
        .bind(audit.user_id)
        .bind(schema.iblock_id)
        .bind(schema.section_id)
        .bind(event.active_from)
        .bind(event.active_to)
        .bind(schema.sort)
        .bind(&event.name)
        .bind(preview_picture)
        .bind(event.searchable_name())
        .execute(&mut *conn)
        .await?;

    max_id(conn, "b_iblock_element").await
}

pub(crate) async fn insert_event_copy(
    conn: &mut MySqlConnection,
    schema: &EventSchema,
    audit: &Audit,
    event: &Event,
    pictures: (Option<i64>, Option<i64>),
    active_to: NaiveDateTime,
) -> AppResult<i64> {
    let (preview_picture, detail_picture) = pictures;

    sqlx::query(INSERT_EVENT_COPY)
        .bind(audit.now)
        .bind(audit.user_id)
        .bind(audit.now)
        .bind(audit.user_id)
        .bind(schema.iblock_id)
        .bind(audit.now)
        .bind(active_to)
        .bind(schema.sort)
        .bind(&event.name)
        .bind(preview_picture)
        .bind(&event.preview_text)
        .bind(&event.preview_text_type)
        .bind(detail_picture)
        .bind(&event.detail_text)
        .bind(&event.detail_text_type)
        .bind(event.searchable_name())
        .bind(&event.tags)
        .execute(&mut *conn)
        .await?;

    max_id(conn, "b_iblock_element").await
}

/// The CMS deduplicates by XML_ID; new elements carry their own id there.
pub(crate) async fn tag_with_own_id(conn: &mut MySqlConnection, element_id: i64) -> AppResult<()> {
    sqlx::query("UPDATE b_iblock_element SET XML_ID = ? WHERE ID = ?")
        .bind(element_id.to_string())
        .bind(element_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub(crate) async fn insert_pin_properties(
    conn: &mut MySqlConnection,
    schema: &PinSchema,
    pin_id: i64,
    event: &Event,
    event_url: &str,
) -> AppResult<()> {
    sqlx::query(INSERT_PIN_PROPERTIES)
        .bind(schema.link_property_id)
        .bind(pin_id)
        .bind(event_url)
        .bind(schema.button_text_property_id)
        .bind(pin_id)
        .bind(&schema.button_text)
        .bind(schema.name_property_id)
        .bind(pin_id)
        .bind(&event.name)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub(crate) async fn copy_properties(
    conn: &mut MySqlConnection,
    from_element: i64,
    to_element: i64,
) -> AppResult<u64> {
    let done = sqlx::query(COPY_PROPERTIES)
        .bind(to_element)
        .bind(from_element)
        .execute(&mut *conn)
        .await?;
    Ok(done.rows_affected())
}

pub(crate) async fn set_property(
    conn: &mut MySqlConnection,
    element_id: i64,
    property_id: i64,
    value: &str,
) -> AppResult<()> {
    let done = sqlx::query(
        "UPDATE b_iblock_element_property
         SET VALUE = ?
         WHERE IBLOCK_ELEMENT_ID = ? AND IBLOCK_PROPERTY_ID = ?",
    )
    .bind(value)
    .bind(element_id)
    .bind(property_id)
    .execute(&mut *conn)
    .await?;

    if done.rows_affected() == 0 {
        warn!(
            "Element {} has no property {} (or it already holds '{}')",
            element_id, property_id, value
        );
    }
    Ok(())
}

pub(crate) async fn add_to_section(
    conn: &mut MySqlConnection,
    element_id: i64,
    section_id: i64,
) -> AppResult<()> {
    sqlx::query(
        "INSERT INTO b_iblock_section_element (IBLOCK_SECTION_ID, IBLOCK_ELEMENT_ID, ADDITIONAL_PROPERTY_ID)
         VALUES (?, ?, NULL)",
    )
    .bind(section_id)
    .bind(element_id)
    .execute(&mut *conn)
    .await?;
    Ok(())
}
