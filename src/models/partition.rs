use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#4a90d2";

/// A user-defined category grouping events. The color is display-only and
/// carries no meaning for the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String, // "#rrggbb"
    pub created: DateTime<Local>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Partition {
    pub fn new(id: i64, name: String, color: String, now: DateTime<Local>) -> Self {
        Self {
            id,
            name,
            color,
            created: now,
        }
    }
}
