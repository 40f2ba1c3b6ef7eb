//! Self-contained HTML report generation.
//!
//! Produces a single HTML document with embedded CSS: a dashboard card row
//! built from the report's `dashboard_metrics`, followed by the per-type
//! detail tables. No external assets, works offline.

use std::collections::BTreeMap;

use crate::pipeline::ReportBundle;
use crate::types::{
    AnalysisReport, ComprehensiveReport, CostReport, PerformanceReport, SecurityReport,
};

#[must_use]
pub fn render_html(bundle: &ReportBundle) -> String {
    let meta = &bundle.generation_metadata;
    let body = match &bundle.analysis {
        AnalysisReport::Security(report) => render_security(report),
        AnalysisReport::Performance(report) => render_performance(report),
        AnalysisReport::Cost(report) => render_cost(report),
        AnalysisReport::Comprehensive(report) => render_comprehensive(report),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<div class="container">
<header>
<h1>{title}</h1>
<p class="meta">{records} records analyzed &middot; generated {generated}</p>
</header>
{body}
</div>
</body>
</html>"#,
        title = escape(&meta.data_source),
        records = meta.records_analyzed,
        generated = escape(&meta.generated_at),
        css = inline_css(),
        body = body,
    )
}

fn render_security(report: &SecurityReport) -> String {
    let d = &report.dashboard_metrics;
    let cards = [
        card("Total Actions", d.total_actions.to_string()),
        card("Critical Issues", d.critical_issues.to_string()),
        card("Working Hours", format!("{:.1}", d.working_hours)),
        card("Security Score", d.security_score.to_string()),
        card("Risk Level", d.risk_level.label().to_string()),
    ]
    .join("\n");

    let priorities = report
        .priority_recommendations
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&r.recommendation),
                escape(&r.resource_type),
                escape(&r.business_impact),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="cards">{cards}</section>
{gaps}
<section>
<h2>Priority Recommendations</h2>
<table>
<thead><tr><th>Recommendation</th><th>Resource Type</th><th>Impact</th></tr></thead>
<tbody>{priorities}</tbody>
</table>
</section>"#,
        cards = cards,
        gaps = counts_section("Compliance Gaps", &report.compliance_gaps),
        priorities = priorities,
    )
}

fn render_performance(report: &PerformanceReport) -> String {
    let d = &report.dashboard_metrics;
    let cards = [
        card("Total Actions", d.total_actions.to_string()),
        card("Critical Optimizations", d.critical_optimizations.to_string()),
        card("Working Hours", format!("{:.1}", d.working_hours)),
        card("Performance Score", d.performance_score.to_string()),
        card(
            "Optimization Potential",
            format!("{}%", d.optimization_potential),
        ),
        card("Efficiency", d.efficiency_rating.label().to_string()),
    ]
    .join("\n");

    let bottlenecks = report
        .bottleneck_analysis
        .iter()
        .map(|b| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&b.recommendation),
                escape(&b.resource_type),
                escape(&b.estimated_improvement),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="cards">{cards}</section>
{opportunities}
<section>
<h2>Bottlenecks</h2>
<table>
<thead><tr><th>Recommendation</th><th>Resource Type</th><th>Estimated Improvement</th></tr></thead>
<tbody>{bottlenecks}</tbody>
</table>
</section>"#,
        cards = cards,
        opportunities =
            counts_section("Optimization Opportunities", &report.optimization_opportunities),
        bottlenecks = bottlenecks,
    )
}

fn render_cost(report: &CostReport) -> String {
    let d = &report.dashboard_metrics;
    let roi = &report.roi_analysis;
    let cards = [
        card("Total Actions", d.total_actions.to_string()),
        card("Monthly Savings", format!("${:.0}", d.monthly_savings)),
        card("Annual Savings", format!("${:.0}", d.annual_savings)),
        card("Working Hours", format!("{:.1}", d.working_hours)),
        card("ROI", format!("{}%", d.roi_percentage)),
        card("Payback", format!("{} mo", d.payback_months)),
        card("Optimization Score", d.optimization_score.to_string()),
    ]
    .join("\n");

    format!(
        r#"<section class="cards">{cards}</section>
{opportunities}
<section>
<h2>ROI Analysis</h2>
<table>
<tbody>
<tr><td>Implementation cost</td><td>${impl_cost:.0}</td></tr>
<tr><td>Monthly ROI</td><td>{monthly_roi}%</td></tr>
<tr><td>Payback period</td><td>{payback} months</td></tr>
<tr><td>Three year value</td><td>${three_year:.0}</td></tr>
</tbody>
</table>
</section>"#,
        cards = cards,
        opportunities = counts_section(
            "Cost Optimization Opportunities",
            &report.cost_optimization_opportunities
        ),
        impl_cost = roi.implementation_cost,
        monthly_roi = roi.monthly_roi_percentage,
        payback = roi.payback_period_months,
        three_year = roi.three_year_value,
    )
}

fn render_comprehensive(report: &ComprehensiveReport) -> String {
    let d = &report.dashboard_metrics;
    let cards = [
        card("Total Recommendations", d.total_recommendations.to_string()),
        card("High Impact", d.high_impact.to_string()),
        card("Working Hours", format!("{:.1}", d.working_hours)),
        card("Monthly Investment", format!("${:.0}", d.monthly_investment)),
        card("Categories", d.categories_count.to_string()),
    ]
    .join("\n");

    format!(
        "<section class=\"cards\">{cards}</section>\n{categories}\n{impacts}",
        cards = cards,
        categories = counts_section("By Category", &report.category_breakdown),
        impacts = counts_section("By Business Impact", &report.impact_breakdown),
    )
}

fn card(label: &str, value: String) -> String {
    format!(
        r#"<div class="card"><div class="value">{}</div><div class="label">{}</div></div>"#,
        escape(&value),
        escape(label),
    )
}

fn counts_section(title: &str, counts: &BTreeMap<String, usize>) -> String {
    if counts.is_empty() {
        return String::new();
    }
    let rows = counts
        .iter()
        .map(|(label, count)| format!("<tr><td>{}</td><td>{count}</td></tr>", escape(label)))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<section>\n<h2>{}</h2>\n<table><tbody>{rows}</tbody></table>\n</section>",
        escape(title),
    )
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn inline_css() -> &'static str {
    r"
body { font-family: 'Segoe UI', Arial, sans-serif; margin: 0; background: #f4f6f8; color: #212121; }
.container { max-width: 960px; margin: 0 auto; padding: 24px; }
header h1 { margin-bottom: 4px; color: #1976d2; }
.meta { color: #666; margin-top: 0; }
.cards { display: flex; flex-wrap: wrap; gap: 12px; margin: 24px 0; }
.card { background: #fff; border-radius: 8px; padding: 16px 20px; box-shadow: 0 1px 3px rgba(0,0,0,0.12); min-width: 140px; }
.card .value { font-size: 1.8em; font-weight: 700; color: #1976d2; }
.card .label { color: #666; font-size: 0.85em; margin-top: 4px; }
section h2 { border-bottom: 2px solid #1976d2; padding-bottom: 4px; }
table { width: 100%; border-collapse: collapse; background: #fff; }
td, th { text-align: left; padding: 8px 12px; border-bottom: 1px solid #e0e0e0; }
th { background: #1976d2; color: #fff; }
"
}
