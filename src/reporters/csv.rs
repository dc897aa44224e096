//! CSV reporter
//!
//! Emits the two output tables as CSV documents with RFC 4180 quoting.
//! Null timestamp columns render as empty fields; the interconnection
//! ratio is rounded to 3 decimals at this boundary only.

use crate::models::OverlapReport;
use std::borrow::Cow;
use std::fmt::Write;

/// Quote a field when it contains a comma, quote, or newline
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn opt_i64(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render the pair-connection table
pub fn render_interconnections(report: &OverlapReport) -> String {
    let mut out = String::from(
        "user,community_a,community_b,interaction_type,interaction_count,first_interaction,last_interaction\n",
    );
    for row in &report.connections {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            escape(&row.user),
            escape(&row.community_a),
            escape(&row.community_b),
            escape(&row.interaction_type),
            row.interaction_count,
            opt_i64(row.first_interaction),
            opt_i64(row.last_interaction),
        );
    }
    out
}

/// Render the community statistics table
pub fn render_community_stats(report: &OverlapReport) -> String {
    let mut out = String::from(
        "community,total_users,multi_community_users,interconnection_ratio,connected_communities_count,connected_communities\n",
    );
    for stats in &report.community_stats {
        let connected = stats.connected_communities.join(", ");
        let _ = writeln!(
            out,
            "{},{},{},{:.3},{},{}",
            escape(&stats.community),
            stats.total_users,
            stats.multi_community_users,
            stats.interconnection_ratio,
            stats.connected_communities_count,
            escape(&connected),
        );
    }
    out
}
