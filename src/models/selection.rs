//! Closed selection types driving the view pipeline.
//! Free-form strings from the legacy data are accepted as serde aliases only.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewFilter {
    All,
    History,
    Urgent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    Grid,
    List,
    Partition,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Deadline,
    #[serde(alias = "created-desc")]
    Created,
    #[serde(alias = "priority-desc")]
    Priority,
    Status,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl ViewFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewFilter::All => "all",
            ViewFilter::History => "history",
            ViewFilter::Urgent => "urgent",
        }
    }
}

impl GroupingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingMode::Grid => "grid",
            GroupingMode::List => "list",
            GroupingMode::Partition => "partition",
        }
    }
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Deadline => "deadline",
            SortKey::Created => "created",
            SortKey::Priority => "priority",
            SortKey::Status => "status",
        }
    }
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Everything the pipeline needs to know about what the user is looking at.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub view: ViewFilter,
    pub active_partition: Option<i64>,
    pub grouping: GroupingMode,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            view: ViewFilter::All,
            active_partition: None,
            grouping: GroupingMode::Grid,
            sort_key: SortKey::Deadline,
            sort_direction: SortDirection::Asc,
        }
    }
}
