//! Numeric identifiers of the target CMS schema (iblocks, sections,
//! properties). They must match the deployment exactly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// User written into created_by / modified_by.
    pub default_user_id: i64,
    pub pin: PinSchema,
    pub event: EventSchema,
    pub chronograph: ChronographSchema,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            default_user_id: 1,
            pin: PinSchema::default(),
            event: EventSchema::default(),
            chronograph: ChronographSchema::default(),
        }
    }
}

/// Teaser block on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinSchema {
    pub iblock_id: i64,
    pub section_id: Option<i64>,
    pub sort: i64,
    pub link_property_id: i64,
    pub button_text_property_id: i64,
    pub name_property_id: i64,
    pub button_text: String,
}

impl Default for PinSchema {
    fn default() -> Self {
        Self {
            iblock_id: 38,
            section_id: None,
            sort: 50,
            link_property_id: 150,
            button_text_property_id: 149,
            name_property_id: 148,
            button_text: "Подробнее".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSchema {
    pub iblock_id: i64,
    pub section_id: i64,
    pub sort: i64,
    pub time_property_id: i64,
    pub date_property_id: i64,
    pub price_property_id: i64,
}

impl Default for EventSchema {
    fn default() -> Self {
        Self {
            iblock_id: 6,
            section_id: 7,
            sort: 500,
            time_property_id: 14,
            date_property_id: 15,
            price_property_id: 129,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChronographSchema {
    pub iblock_id: i64,
    pub sort: i64,
    /// How far a section is rolled forward, and the "years ago" increment.
    pub years_shift: i32,
    /// Numeric "years ago" counter carried by every chronograph element.
    pub years_ago_property_id: i64,
}

impl Default for ChronographSchema {
    fn default() -> Self {
        Self {
            iblock_id: 8,
            sort: 500,
            years_shift: 5,
            years_ago_property_id: 23,
        }
    }
}
