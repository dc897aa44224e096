//! Text (terminal) reporter

use crate::models::OverlapReport;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render report as a formatted terminal summary
pub fn render(report: &OverlapReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Crosstalk Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Communities: {}  Users: {}  Multi-community users: {}  Connections: {}\n\n",
        report.total_communities,
        report.total_users,
        report.multi_community_users,
        report.connections.len()
    ));

    out.push_str(&format!("{BOLD}COMMUNITIES{RESET}\n"));
    for stats in &report.community_stats {
        out.push_str(&format!(
            "  {BOLD}{}{RESET}  users: {}  multi: {}  ratio: {:.3}",
            stats.community,
            stats.total_users,
            stats.multi_community_users,
            stats.interconnection_ratio
        ));
        if stats.connected_communities.is_empty() {
            out.push_str(&format!("  {DIM}(isolated){RESET}\n"));
        } else {
            out.push_str(&format!(
                "  connects: {}\n",
                stats.connected_communities.join(", ")
            ));
        }
    }

    if report.community_stats.is_empty() {
        out.push_str(&format!("  {DIM}(no communities observed){RESET}\n"));
    }
    out
}
