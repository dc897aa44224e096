//! End-to-end tests: JSONL fixture -> ingest -> analyze -> render
//!
//! Each test builds its own fixture in an isolated temp directory and runs
//! the full library pipeline the way the CLI does.

use crosstalk::analysis;
use crosstalk::ingest::{IngestStats, Ingestor};
use crosstalk::models::OverlapReport;
use crosstalk::reporters::{render_community_stats, render_interconnections};
use crosstalk::session::Session;
use crosstalk::source::JsonlSource;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

/// Write JSONL lines to a fixture file and return its temp dir and path
fn fixture(lines: &[&str]) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("activity.jsonl");
    let mut file = std::fs::File::create(&path).expect("create fixture");
    for line in lines {
        writeln!(file, "{line}").expect("write fixture");
    }
    (dir, path)
}

/// Run the full pipeline over a fixture, skipping bad lines
fn analyze_file(path: &Path) -> (OverlapReport, IngestStats) {
    let ingestor = Ingestor::new();
    let mut session = Session::new();
    let mut stats = IngestStats::default();

    for item in JsonlSource::open(path).expect("open fixture") {
        match item {
            // errors take the log-and-skip path; stats already counted them
            Ok(record) => {
                let _ = ingestor.ingest_record(&mut session, &record, &mut stats);
            }
            Err(_) => stats.malformed += 1,
        }
    }
    (analysis::analyze(&session), stats)
}

#[test]
fn full_pipeline_over_three_communities() {
    // alpha={u1,u2,u3}, beta={u2,u4}, gamma={u3}; u2 replies twice in
    // alpha and once in beta, u3 never interacts
    let (_dir, path) = fixture(&[
        r#"{"author":"u1","community":"alpha","role":"post_author"}"#,
        r#"{"author":"u2","community":"alpha","role":"commenter","parent_author":"u1","created_utc":100}"#,
        r#"{"author":"u2","community":"alpha","role":"commenter","parent_author":"u3","created_utc":101}"#,
        r#"{"author":"u3","community":"alpha","role":"commenter"}"#,
        r#"{"author":"u2","community":"beta","role":"commenter","parent_author":"u4","created_utc":102}"#,
        r#"{"author":"u4","community":"beta","role":"post_author"}"#,
        r#"{"author":"u3","community":"gamma","role":"post_author"}"#,
    ]);

    let (report, stats) = analyze_file(&path);
    assert_eq!(stats.records, 7);
    assert_eq!(stats.activities_recorded, 7);
    assert_eq!(stats.interactions_recorded, 3);

    assert_eq!(report.total_communities, 3);
    assert_eq!(report.total_users, 4);
    assert_eq!(report.multi_community_users, 2);

    // u2 bridges (alpha, beta) with 2 + 1 interactions; u3 bridges
    // (alpha, gamma) with none
    assert_eq!(report.connections.len(), 2);
    let u2 = report.connections.iter().find(|c| c.user == "u2").expect("u2 row");
    assert_eq!((u2.community_a.as_str(), u2.community_b.as_str()), ("alpha", "beta"));
    assert_eq!(u2.interaction_count, 3);
    let u3 = report.connections.iter().find(|c| c.user == "u3").expect("u3 row");
    assert_eq!((u3.community_a.as_str(), u3.community_b.as_str()), ("alpha", "gamma"));
    assert_eq!(u3.interaction_count, 0);

    let alpha = &report.community_stats[0];
    assert_eq!(alpha.community, "alpha");
    assert_eq!(alpha.total_users, 3);
    assert_eq!(alpha.multi_community_users, 2);
    assert_eq!(alpha.connected_communities, vec!["beta", "gamma"]);
    let gamma = &report.community_stats[2];
    assert_eq!(gamma.interconnection_ratio, 1.0);
    assert_eq!(gamma.connected_communities, vec!["alpha"]);
}

#[test]
fn rendered_tables_match_the_report() {
    let (_dir, path) = fixture(&[
        r#"{"author":"u1","community":"alpha","role":"post_author"}"#,
        r#"{"author":"u1","community":"beta","role":"commenter","parent_author":"u2","created_utc":5}"#,
        r#"{"author":"u2","community":"beta","role":"post_author"}"#,
    ]);
    let (report, _) = analyze_file(&path);

    let pairs_csv = render_interconnections(&report);
    assert_eq!(pairs_csv.lines().count(), 2);
    assert_eq!(
        pairs_csv.lines().nth(1).unwrap(),
        "u1,alpha,beta,multi_community_user,1,,"
    );

    let stats_csv = render_community_stats(&report);
    assert_eq!(stats_csv.lines().count(), 3);
    assert!(stats_csv.contains("alpha,1,1,1.000,1,beta"));
    assert!(stats_csv.contains("beta,2,1,0.500,1,alpha"));
}

#[test]
fn deleted_users_and_bad_lines_are_excluded() {
    let (_dir, path) = fixture(&[
        r#"{"author":"[deleted]","community":"alpha","role":"post_author"}"#,
        r#"{"author":"u1","community":"alpha","role":"commenter","parent_author":"[deleted]","created_utc":10}"#,
        "garbage line",
        r#"{"author":"","community":"alpha","role":"commenter"}"#,
        r#"{"author":"u1","community":"beta","role":"post_author"}"#,
    ]);

    let (report, stats) = analyze_file(&path);
    assert_eq!(stats.skipped_sentinel, 1);
    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.invalid, 1);

    // only u1 survives; the sentinel never enters the index or ledger
    assert_eq!(report.total_users, 1);
    assert_eq!(report.multi_community_users, 1);
    assert_eq!(report.connections.len(), 1);
    assert_eq!(report.connections[0].interaction_count, 0);
}

#[test]
fn no_overlap_means_no_connections_anywhere() {
    let (_dir, path) = fixture(&[
        r#"{"author":"u1","community":"alpha","role":"post_author"}"#,
        r#"{"author":"u2","community":"beta","role":"post_author"}"#,
        r#"{"author":"u3","community":"gamma","role":"commenter"}"#,
    ]);

    let (report, _) = analyze_file(&path);
    assert!(report.connections.is_empty());
    for stats in &report.community_stats {
        assert_eq!(stats.interconnection_ratio, 0.0);
        assert!(stats.connected_communities.is_empty());
    }
}

#[test]
fn reanalysis_of_the_same_session_is_identical() {
    let (_dir, path) = fixture(&[
        r#"{"author":"u1","community":"alpha","role":"post_author"}"#,
        r#"{"author":"u1","community":"beta","role":"commenter","parent_author":"u2","created_utc":1}"#,
        r#"{"author":"u2","community":"beta","role":"post_author"}"#,
        r#"{"author":"u2","community":"gamma","role":"post_author"}"#,
    ]);

    let ingestor = Ingestor::new();
    let mut session = Session::new();
    let mut stats = IngestStats::default();
    for item in JsonlSource::open(&path).expect("open fixture") {
        ingestor
            .ingest_record(&mut session, &item.expect("clean fixture"), &mut stats)
            .expect("ingest");
    }

    let first = analysis::analyze(&session);
    let second = analysis::analyze(&session);
    assert_eq!(first.connections, second.connections);
    assert_eq!(first.community_stats, second.community_stats);
}
