//! Server-side HTML rendering of the dashboard.

use askama::Template;

use crate::dashboard::{Dashboard, data};
use crate::error::RenderError;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    dashboard: &'a Dashboard,
    weekly_chart_json: String,
    category_chart_json: String,
    stickiness_chart_json: String,
    weekly_heading: &'static str,
    categories_heading: &'static str,
    inventory_heading: &'static str,
    funnel_heading: &'static str,
    stickiness_heading: &'static str,
    stickiness_caption: &'static str,
    gemini_heading: &'static str,
    trace_heading: &'static str,
}

/// Render the full dashboard page.
pub fn render_page(dashboard: &Dashboard) -> Result<String, RenderError> {
    let page = DashboardPage {
        dashboard,
        weekly_chart_json: dashboard.weekly_chart.script_json()?,
        category_chart_json: dashboard.category_chart.script_json()?,
        stickiness_chart_json: dashboard.stickiness_chart.script_json()?,
        weekly_heading: data::WEEKLY_HEADING,
        categories_heading: data::CATEGORIES_HEADING,
        inventory_heading: data::INVENTORY_HEADING,
        funnel_heading: data::FUNNEL_HEADING,
        stickiness_heading: data::STICKINESS_HEADING,
        stickiness_caption: data::STICKINESS_CAPTION,
        gemini_heading: data::GEMINI_HEADING,
        trace_heading: data::TRACE_HEADING,
    };
    Ok(page.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiConfig;
    use crate::llm::AiClient;

    fn page_for(config: &GeminiConfig) -> String {
        let ai = AiClient::resolve(config);
        render_page(&Dashboard::build(&ai)).unwrap()
    }

    #[test]
    fn test_missing_credential_page_shows_error_and_all_sections() {
        let html = page_for(&GeminiConfig::unconfigured());

        assert!(html.contains("Missing GEMINI_KEY environment variable"));
        assert!(html.contains("role=\"alert\""));
        assert_eq!(html.matches("class=\"stMetric metric-card\"").count(), 4);
        assert_eq!(html.matches("class=\"inventory-row\"").count(), 4);
        assert!(html.contains("id=\"weekly-transactions\""));
        assert!(html.contains("id=\"popular-categories\""));
    }

    #[test]
    fn test_configured_page_has_no_error() {
        let html = page_for(&GeminiConfig::with_api_key("test-key-123"));

        assert!(!html.contains("GEMINI_KEY"));
        assert!(!html.contains("role=\"alert\""));
        assert_eq!(html.matches("class=\"stMetric metric-card\"").count(), 4);
    }

    #[test]
    fn test_records_appear_verbatim() {
        let html = page_for(&GeminiConfig::unconfigured());

        for metric in data::METRICS {
            assert!(html.contains(metric.label));
            assert!(html.contains(metric.value));
            assert!(html.contains(&format!("↑ {}", metric.delta)));
        }
        for row in data::INVENTORY {
            assert!(html.contains(row.name));
            assert!(html.contains(row.price));
            assert!(html.contains(row.status.as_str()));
        }
        for row in data::CATEGORIES {
            assert!(html.contains(row.category));
        }
        assert!(html.contains("[\"Sun\",\"Mon\",\"Tue\",\"Wed\",\"Thu\",\"Fri\",\"Sat\"]"));
        assert!(html.contains("[12,18,15,25,30,10,8]"));
    }

    #[test]
    fn test_owners_present_in_both_states() {
        for config in [
            GeminiConfig::unconfigured(),
            GeminiConfig::with_api_key("test-key-123"),
        ] {
            let html = page_for(&config);
            assert_eq!(html.matches("שרה לוי").count(), 2);
            assert_eq!(html.matches("דוד כהן").count(), 2);
        }
    }

    #[test]
    fn test_analytics_panels_rendered() {
        let html = page_for(&GeminiConfig::unconfigured());

        assert!(html.contains("Engagement Funnel"));
        assert_eq!(html.matches("class=\"funnel-stage\"").count(), 4);
        for stage in data::ENGAGEMENT_FUNNEL {
            assert!(html.contains(stage.stage));
            assert!(html.contains(&format!("width: {}%", stage.percent)));
        }

        assert!(html.contains("Weekly Stickiness"));
        assert!(html.contains("id=\"weekly-stickiness\""));
        assert!(html.contains("[40,35,60,55,75,80,85]"));

        assert!(html.contains("Gemini Performance"));
        assert_eq!(html.matches("class=\"stat-tile\"").count(), 4);
        for tile in data::GEMINI_PERFORMANCE {
            assert!(html.contains(&tile.label.replace('\'', "&#x27;")));
            assert!(html.contains(tile.value));
        }

        // analytics tiles do not add to the headline row
        assert_eq!(html.matches("class=\"stMetric metric-card\"").count(), 4);
    }

    #[test]
    fn test_inventory_has_category_column() {
        let html = page_for(&GeminiConfig::unconfigured());
        assert!(html.contains("<th>Category</th>"));
        assert_eq!(html.matches("<td class=\"category\">").count(), 4);
        assert!(html.contains("<td class=\"category\">ניקיון</td>"));
    }

    #[test]
    fn test_trace_panel_rendered() {
        let html = page_for(&GeminiConfig::unconfigured());
        assert!(html.contains("<details>"));
        assert!(html.contains("AI Generation Logs (Trace)"));
        assert!(html.contains("Model: gemini-3-flash-preview"));
        assert!(html.contains("Tokens: 142"));
    }

    #[test]
    fn test_page_metadata() {
        let html = page_for(&GeminiConfig::unconfigured());
        assert!(html.contains("<title>Neighbor-Share Backend</title>"));
        assert!(html.contains("🚀 Neighbor-Share: Console"));
        assert!(html.contains("dir=\"rtl\""));
    }
}
