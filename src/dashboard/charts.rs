//! Chart documents for the browser-side ECharts renderer.
//!
//! Records are copied into the option documents as-is; nothing is aggregated
//! or reordered.

use serde::Serialize;
use serde_json::{Value, json};

use super::types::{CategoryRow, RetentionRow, TimeSeriesRow};

pub const LINE_COLOR: &str = "#059669";
pub const PIE_PALETTE: [&str; 4] = ["#059669", "#10b981", "#34d399", "#6ee7b7"];

/// Inner radius of the category donut, as a fraction of the outer radius.
const DONUT_HOLE: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
}

/// A chart ready to hand to ECharts.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub kind: ChartKind,
    pub option: Value,
}

impl ChartSpec {
    /// Option document as a string safe to embed inside a `<script>` block.
    pub fn script_json(&self) -> Result<String, serde_json::Error> {
        let raw = serde_json::to_string(&self.option)?;
        Ok(raw.replace("</", "<\\/"))
    }
}

/// Smoothed line with markers, one point per day.
pub fn weekly_line_chart(rows: &[TimeSeriesRow]) -> ChartSpec {
    let days: Vec<&str> = rows.iter().map(|r| r.day).collect();
    let counts: Vec<u32> = rows.iter().map(|r| r.count).collect();

    ChartSpec {
        id: "weekly-transactions",
        kind: ChartKind::Line,
        option: json!({
            "backgroundColor": "white",
            "color": [LINE_COLOR],
            "grid": { "left": 0, "right": 0, "top": 20, "bottom": 0, "containLabel": true },
            "tooltip": { "trigger": "axis" },
            "xAxis": { "type": "category", "name": "Day", "data": days },
            "yAxis": { "type": "value", "name": "Transactions" },
            "series": [{
                "name": "Transactions",
                "type": "line",
                "smooth": true,
                "showSymbol": true,
                "symbol": "circle",
                "data": counts,
            }],
        }),
    }
}

/// Donut chart of category volumes.
pub fn category_pie_chart(rows: &[CategoryRow]) -> ChartSpec {
    let data: Vec<Value> = rows
        .iter()
        .map(|r| json!({ "name": r.category, "value": r.volume }))
        .collect();

    let inner = format!("{}%", (DONUT_HOLE * 70.0).round());

    ChartSpec {
        id: "popular-categories",
        kind: ChartKind::Pie,
        option: json!({
            "color": PIE_PALETTE,
            "tooltip": { "trigger": "item", "formatter": "{b}: {c} ({d}%)" },
            "legend": { "bottom": 0 },
            "series": [{
                "name": "Volume",
                "type": "pie",
                "radius": [inner, "70%"],
                "label": { "formatter": "{d}%" },
                "data": data,
            }],
        }),
    }
}

/// One bar per day, heights in percent.
pub fn stickiness_bar_chart(rows: &[RetentionRow]) -> ChartSpec {
    let days: Vec<&str> = rows.iter().map(|r| r.day).collect();
    let percents: Vec<u32> = rows.iter().map(|r| r.percent).collect();

    ChartSpec {
        id: "weekly-stickiness",
        kind: ChartKind::Bar,
        option: json!({
            "backgroundColor": "#0f172a",
            "color": [PIE_PALETTE[1]],
            "grid": { "left": 0, "right": 0, "top": 20, "bottom": 0, "containLabel": true },
            "tooltip": { "trigger": "axis", "valueFormatter": "{value}%" },
            "xAxis": { "type": "category", "data": days, "axisLabel": { "color": "#94a3b8" } },
            "yAxis": { "type": "value", "max": 100, "show": false },
            "series": [{
                "name": "Retention",
                "type": "bar",
                "itemStyle": { "borderRadius": [12, 12, 0, 0], "opacity": 0.6 },
                "data": percents,
            }],
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dashboard::data::{CATEGORIES, WEEKLY_STICKINESS, WEEKLY_TRANSACTIONS};

    #[test]
    fn test_line_chart_is_identity_of_rows() {
        let chart = weekly_line_chart(&WEEKLY_TRANSACTIONS);
        assert_eq!(chart.kind, ChartKind::Line);

        let days = &chart.option["xAxis"]["data"];
        assert_eq!(
            days,
            &json!(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"])
        );
        let counts = &chart.option["series"][0]["data"];
        assert_eq!(counts, &json!([12, 18, 15, 25, 30, 10, 8]));
        assert_eq!(chart.option["series"][0]["smooth"], true);
        assert_eq!(chart.option["color"][0], LINE_COLOR);
    }

    #[test]
    fn test_pie_chart_is_identity_of_rows() {
        let chart = category_pie_chart(&CATEGORIES);
        assert_eq!(chart.kind, ChartKind::Pie);

        let data = chart.option["series"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 4);
        for (entry, row) in data.iter().zip(CATEGORIES.iter()) {
            assert_eq!(entry["name"], row.category);
            assert_eq!(entry["value"], row.volume);
        }
        assert_eq!(chart.option["series"][0]["radius"], json!(["28%", "70%"]));
    }

    #[test]
    fn test_stickiness_chart_is_identity_of_rows() {
        let chart = stickiness_bar_chart(&WEEKLY_STICKINESS);
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.option["xAxis"]["data"].as_array().unwrap().len(), 7);
        assert_eq!(
            chart.option["series"][0]["data"],
            json!([40, 35, 60, 55, 75, 80, 85])
        );
        assert_eq!(chart.option["yAxis"]["max"], 100);
    }

    #[test]
    fn test_script_json_escapes_closing_tags() {
        let chart = ChartSpec {
            id: "x",
            kind: ChartKind::Line,
            option: json!({ "title": "</script><b>" }),
        };
        let embedded = chart.script_json().unwrap();
        assert!(!embedded.contains("</script>"));
        assert!(embedded.contains("<\\/script>"));
    }
}
