//! Display records shown on the dashboard.

use std::fmt;

use serde::Serialize;

/// Headline metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

/// One point of the weekly activity series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSeriesRow {
    pub day: &'static str,
    pub count: u32,
}

/// Share of listings per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub category: &'static str,
    pub volume: u32,
}

/// Lending state of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemStatus {
    Available,
    #[serde(rename = "Active Loan")]
    ActiveLoan,
    Maintenance,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "Available",
            ItemStatus::ActiveLoan => "Active Loan",
            ItemStatus::Maintenance => "Maintenance",
        }
    }

    /// CSS class for the status pill.
    pub fn css_class(&self) -> &'static str {
        match self {
            ItemStatus::Available => "status-available",
            ItemStatus::ActiveLoan => "status-loan",
            ItemStatus::Maintenance => "status-maintenance",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row of the inventory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub price: &'static str,
    pub status: ItemStatus,
    pub owner: &'static str,
}

/// Step of the engagement funnel, as a share of the top step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunnelStage {
    pub stage: &'static str,
    pub percent: u32,
}

/// Daily retention for the stickiness chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RetentionRow {
    pub day: &'static str,
    pub percent: u32,
}

/// Label/value tile without a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
}

/// User-visible error banner entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
