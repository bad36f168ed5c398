//! Sample content for the console.

use super::types::{
    CategoryRow, FunnelStage, InventoryRow, ItemStatus, Metric, RetentionRow, StatTile,
    TimeSeriesRow,
};

pub const PAGE_TITLE: &str = "Neighbor-Share Backend";
pub const PAGE_ICON: &str = "🤝";
pub const TITLE: &str = "🚀 Neighbor-Share: Console";
pub const SUBTITLE: &str = "ממשק הניהול וה-AI של הכלכלה השיתופית המקומית - v1.0.0";

pub const WEEKLY_HEADING: &str = "📈 צמיחה קהילתית (Weekly)";
pub const CATEGORIES_HEADING: &str = "🏷️ קטגוריות פופולריות";
pub const INVENTORY_HEADING: &str = "🛠 ניהול מלאי - תצוגה מורחבת";
pub const TRACE_HEADING: &str = "🔍 AI Generation Logs (Trace)";
pub const FUNNEL_HEADING: &str = "Engagement Funnel";
pub const STICKINESS_HEADING: &str = "Weekly Stickiness";
pub const STICKINESS_CAPTION: &str = "User retention trends over 7 days.";
pub const GEMINI_HEADING: &str = "Gemini Performance";

pub const METRICS: [Metric; 4] = [
    Metric {
        label: "Active Neighbors",
        value: "1,240",
        delta: "12%",
    },
    Metric {
        label: "Inventory Items",
        value: "450",
        delta: "5%",
    },
    Metric {
        label: "Trust Transactions",
        value: "89",
        delta: "18%",
    },
    Metric {
        label: "AI Smart Fill Success",
        value: "94%",
        delta: "2%",
    },
];

pub const WEEKLY_TRANSACTIONS: [TimeSeriesRow; 7] = [
    TimeSeriesRow { day: "Sun", count: 12 },
    TimeSeriesRow { day: "Mon", count: 18 },
    TimeSeriesRow { day: "Tue", count: 15 },
    TimeSeriesRow { day: "Wed", count: 25 },
    TimeSeriesRow { day: "Thu", count: 30 },
    TimeSeriesRow { day: "Fri", count: 10 },
    TimeSeriesRow { day: "Sat", count: 8 },
];

pub const CATEGORIES: [CategoryRow; 4] = [
    CategoryRow {
        category: "כלי עבודה",
        volume: 45,
    },
    CategoryRow {
        category: "גינון",
        volume: 25,
    },
    CategoryRow {
        category: "קמפינג",
        volume: 20,
    },
    CategoryRow {
        category: "אלקטרוניקה",
        volume: 10,
    },
];

pub const INVENTORY: [InventoryRow; 4] = [
    InventoryRow {
        id: "i1",
        name: "פטישון DeWalt",
        category: "כלי עבודה",
        price: "₪40",
        status: ItemStatus::Available,
        owner: "שרה לוי",
    },
    InventoryRow {
        id: "i2",
        name: "סולם אלומיניום",
        category: "כלי עבודה",
        price: "₪0",
        status: ItemStatus::ActiveLoan,
        owner: "דוד כהן",
    },
    InventoryRow {
        id: "i3",
        name: "מכונת שטיפה בלחץ",
        category: "ניקיון",
        price: "₪60",
        status: ItemStatus::Available,
        owner: "שרה לוי",
    },
    InventoryRow {
        id: "i4",
        name: "אוהל ל-4 אנשים",
        category: "קמפינג",
        price: "₪35",
        status: ItemStatus::Maintenance,
        owner: "דוד כהן",
    },
];

pub const ENGAGEMENT_FUNNEL: [FunnelStage; 4] = [
    FunnelStage {
        stage: "Awareness",
        percent: 100,
    },
    FunnelStage {
        stage: "Discovery",
        percent: 65,
    },
    FunnelStage {
        stage: "Magic Fill Usage",
        percent: 30,
    },
    FunnelStage {
        stage: "Pro Conversion",
        percent: 8,
    },
];

pub const WEEKLY_STICKINESS: [RetentionRow; 7] = [
    RetentionRow { day: "Day 1", percent: 40 },
    RetentionRow { day: "Day 2", percent: 35 },
    RetentionRow { day: "Day 3", percent: 60 },
    RetentionRow { day: "Day 4", percent: 55 },
    RetentionRow { day: "Day 5", percent: 75 },
    RetentionRow { day: "Day 6", percent: 80 },
    RetentionRow { day: "Day 7", percent: 85 },
];

/// Placeholder figures; not measured from the configured client.
pub const GEMINI_PERFORMANCE: [StatTile; 4] = [
    StatTile {
        label: "Avg Latency",
        value: "1.12s",
    },
    StatTile {
        label: "Uptime",
        value: "99.9%",
    },
    StatTile {
        label: "Today's Tokens",
        value: "42K",
    },
    StatTile {
        label: "Total Sessions",
        value: "1.2K",
    },
];

/// Static excerpt shown in the trace panel. Not a live log.
pub const AI_TRACE: &str = r#"[2024-03-20 14:22] Request: Generate metadata for "Drill"
[2024-03-20 14:22] Model: gemini-3-flash-preview
[2024-03-20 14:22] Tokens: 142
[2024-03-20 14:22] Response: { "description": "מקדחה עוצמתית...", "price": 45 }"#;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_every_display_field_is_non_empty() {
        for m in METRICS {
            assert!(!m.label.is_empty() && !m.value.is_empty() && !m.delta.is_empty());
        }
        for row in WEEKLY_TRANSACTIONS {
            assert!(!row.day.is_empty());
        }
        for row in CATEGORIES {
            assert!(!row.category.is_empty());
        }
        for row in INVENTORY {
            assert!(!row.id.is_empty() && !row.name.is_empty() && !row.category.is_empty());
            assert!(!row.price.is_empty() && !row.owner.is_empty());
        }
    }

    #[test]
    fn test_inventory_owners() {
        let owners: BTreeSet<&str> = INVENTORY.iter().map(|row| row.owner).collect();
        assert_eq!(owners, BTreeSet::from(["שרה לוי", "דוד כהן"]));
    }

    #[test]
    fn test_inventory_ids_are_unique() {
        let ids: BTreeSet<&str> = INVENTORY.iter().map(|row| row.id).collect();
        assert_eq!(ids.len(), INVENTORY.len());
    }

    #[test]
    fn test_funnel_narrows_from_full_awareness() {
        assert_eq!(ENGAGEMENT_FUNNEL[0].percent, 100);
        assert!(
            ENGAGEMENT_FUNNEL
                .windows(2)
                .all(|pair| pair[0].percent >= pair[1].percent)
        );
    }

    #[test]
    fn test_stickiness_values() {
        let values: Vec<u32> = WEEKLY_STICKINESS.iter().map(|r| r.percent).collect();
        assert_eq!(values, vec![40, 35, 60, 55, 75, 80, 85]);
    }

    #[test]
    fn test_gemini_tiles_non_empty() {
        for tile in GEMINI_PERFORMANCE {
            assert!(!tile.label.is_empty() && !tile.value.is_empty());
        }
    }

    #[test]
    fn test_trace_has_four_lines() {
        assert_eq!(AI_TRACE.lines().count(), 4);
        assert!(AI_TRACE.contains("gemini-3-flash-preview"));
    }
}
