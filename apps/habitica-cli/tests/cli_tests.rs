//! End-to-end pipeline tests against a mock Habitica server

use habitica_cli::{run_profile_export, run_tasks_export, RunSummary, SourceOutcome};
use habitica_core::{test_utils, DataExporter, ExportConfig, HabiticaClient, HabiticaConfig};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pipeline_for(server: &MockServer, dir: &TempDir) -> (HabiticaClient, DataExporter) {
    let config = HabiticaConfig::new("8da99757-7c6e-467c-9024-6d254e6645e3", "test-token")
        .with_base_url(server.uri());
    let client = HabiticaClient::new(&config).unwrap();
    let exporter = DataExporter::new(ExportConfig::new(dir.path()).with_include_rewards(true));
    (client, exporter)
}

async fn mount_tasks_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/tasks/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(test_utils::tasks_response()))
        .mount(server)
        .await;
}

async fn mount_profile_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(test_utils::profile_response()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_export_writes_all_six_files() {
    let server = MockServer::start().await;
    mount_tasks_ok(&server).await;
    mount_profile_ok(&server).await;

    let dir = TempDir::new().unwrap();
    let (client, exporter) = pipeline_for(&server, &dir);

    let summary = RunSummary {
        profile: run_profile_export(&client, &exporter).await,
        tasks: run_tasks_export(&client, &exporter).await,
    };

    assert_eq!(
        summary.tasks,
        SourceOutcome::Exported {
            rows: test_utils::sample_tasks().len()
        }
    );
    assert_eq!(summary.profile, SourceOutcome::Exported { rows: 2 });
    assert!(!summary.all_failed());

    for name in [
        "habits.csv",
        "dailies.csv",
        "todos.csv",
        "rewards.csv",
        "user_stats.csv",
        "user_achievements.csv",
    ] {
        assert!(dir.path().join(name).exists(), "{name} missing");
    }
}

#[tokio::test]
async fn profile_failure_does_not_prevent_task_export() {
    let server = MockServer::start().await;
    mount_tasks_ok(&server).await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (client, exporter) = pipeline_for(&server, &dir);

    let profile = run_profile_export(&client, &exporter).await;
    let tasks = run_tasks_export(&client, &exporter).await;

    assert!(matches!(profile, SourceOutcome::Failed { .. }));
    assert!(matches!(tasks, SourceOutcome::Exported { .. }));
    assert!(dir.path().join("habits.csv").exists());
    assert!(!dir.path().join("user_stats.csv").exists());
}

#[tokio::test]
async fn task_failure_does_not_prevent_profile_export() {
    let server = MockServer::start().await;
    mount_profile_ok(&server).await;
    Mock::given(method("GET"))
        .and(path("/tasks/user"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (client, exporter) = pipeline_for(&server, &dir);

    let tasks = run_tasks_export(&client, &exporter).await;
    let profile = run_profile_export(&client, &exporter).await;

    assert!(matches!(tasks, SourceOutcome::Failed { .. }));
    assert_eq!(profile, SourceOutcome::Exported { rows: 2 });
    assert!(dir.path().join("user_stats.csv").exists());
}

#[tokio::test]
async fn api_level_failure_skips_export_with_distinct_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(test_utils::failed_response()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (client, exporter) = pipeline_for(&server, &dir);

    let outcome = run_tasks_export(&client, &exporter).await;

    match outcome {
        SourceOutcome::Failed { reason } => {
            assert!(reason.contains("not successful"));
            assert!(!reason.contains("transport"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(!dir.path().join("habits.csv").exists());
}

#[tokio::test]
async fn both_sources_failing_marks_the_run_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (client, exporter) = pipeline_for(&server, &dir);

    let summary = RunSummary {
        profile: run_profile_export(&client, &exporter).await,
        tasks: run_tasks_export(&client, &exporter).await,
    };

    assert!(summary.all_failed());
}
