//! Dashboard page model.
//!
//! [`Dashboard::build`] gathers the static records, the chart documents and
//! any notices raised by the credential guard into one value that both the
//! HTML renderer and the JSON API read from.

pub mod charts;
pub mod data;
mod types;

pub use charts::{
    ChartKind, ChartSpec, category_pie_chart, stickiness_bar_chart, weekly_line_chart,
};
pub use types::{
    CategoryRow, FunnelStage, InventoryRow, ItemStatus, Metric, Notice, RetentionRow, StatTile,
    TimeSeriesRow,
};

use serde::Serialize;

use crate::llm::AiClient;

/// Page title, icon and headings.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub page_title: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Everything the console displays.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub meta: PageMeta,
    pub notices: Vec<Notice>,
    pub metrics: Vec<Metric>,
    pub weekly_transactions: Vec<TimeSeriesRow>,
    pub categories: Vec<CategoryRow>,
    pub inventory: Vec<InventoryRow>,
    pub engagement_funnel: Vec<FunnelStage>,
    pub weekly_stickiness: Vec<RetentionRow>,
    pub gemini_performance: Vec<StatTile>,
    pub weekly_chart: ChartSpec,
    pub category_chart: ChartSpec,
    pub stickiness_chart: ChartSpec,
    pub ai_trace: &'static str,
    pub ai_configured: bool,
}

impl Dashboard {
    /// Build the dashboard. Works the same whether or not the AI client is
    /// configured; an unconfigured client only adds a notice.
    pub fn build(ai: &AiClient) -> Self {
        let notices: Vec<Notice> = ai
            .error()
            .map(|err| Notice::new(err.to_string()))
            .into_iter()
            .collect();

        Self {
            meta: PageMeta {
                page_title: data::PAGE_TITLE,
                icon: data::PAGE_ICON,
                title: data::TITLE,
                subtitle: data::SUBTITLE,
            },
            notices,
            metrics: data::METRICS.to_vec(),
            weekly_transactions: data::WEEKLY_TRANSACTIONS.to_vec(),
            categories: data::CATEGORIES.to_vec(),
            inventory: data::INVENTORY.to_vec(),
            engagement_funnel: data::ENGAGEMENT_FUNNEL.to_vec(),
            weekly_stickiness: data::WEEKLY_STICKINESS.to_vec(),
            gemini_performance: data::GEMINI_PERFORMANCE.to_vec(),
            weekly_chart: weekly_line_chart(&data::WEEKLY_TRANSACTIONS),
            category_chart: category_pie_chart(&data::CATEGORIES),
            stickiness_chart: stickiness_bar_chart(&data::WEEKLY_STICKINESS),
            ai_trace: data::AI_TRACE,
            ai_configured: ai.is_configured(),
        }
    }
}
