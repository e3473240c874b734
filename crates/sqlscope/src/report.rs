//! Plain-text analysis reports.

use sqlscope_core::{Finding, analyze_sql, format_sql};

/// Line written when the analyzer has nothing to report.
pub const NO_ISSUES: &str = "-- No issues found.";

/// Renders findings as SQL comment lines, one per finding.
#[must_use]
pub fn render_findings(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return format!("{NO_ISSUES}\n");
    }
    findings
        .iter()
        .map(|finding| format!("-- {finding}\n"))
        .collect()
}

/// Formats `sql` and appends the analyzer report.
#[must_use]
pub fn render_analysis(sql: &str) -> String {
    let mut report = format_sql(sql);
    report.push_str(&render_findings(&analyze_sql(sql)));
    report
}
