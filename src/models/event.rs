use super::priority::Priority;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A deadline-bound task record.
///
/// On disk the record keeps the legacy camelCase field names and RFC 3339
/// dates, so a store written by any version of the tool reads back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64, // creation-timestamp derived (ms), immutable
    pub title: String,
    pub deadline: DateTime<Local>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Urgency window in hours ("urgentTime" in the stored record).
    #[serde(rename = "urgentTime", default = "default_urgent_hours")]
    pub urgent_hours: i64,
    #[serde(default)]
    pub partition_id: Option<i64>,
    pub created: DateTime<Local>,
    #[serde(default)]
    pub completed: bool,
    /// Present iff `completed` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Local>>,
}

fn default_urgent_hours() -> i64 {
    24
}

impl Event {
    pub fn new(
        id: i64,
        title: String,
        deadline: DateTime<Local>,
        priority: Priority,
        description: Option<String>,
        urgent_hours: i64,
        partition_id: Option<i64>,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            title,
            deadline,
            priority,
            description,
            urgent_hours,
            partition_id,
            created: now,
            completed: false,
            completed_at: None,
        }
    }

    /// The single place where the completed/completedAt invariant is enforced:
    /// `completed_at` exists iff `completed` is true. Un-completing always
    /// clears the stamp, it is never restored to a prior value.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Local>) {
        self.completed = completed;
        self.completed_at = if completed { Some(now) } else { None };
    }
}
