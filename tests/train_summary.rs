use clap::Parser;
use smartcab::cli::commands::train::{TrainArgs, execute};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> TrainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TrainArgs::parse_from(args)
}

#[test]
fn summary_without_extension_appends_json() {
    let tmp = tempdir().unwrap();
    let summary_stem = tmp.path().join("run_overview");

    let args = parse_args([
        "smartcab-train",
        "--trials",
        "5",
        "--seed",
        "42",
        "--summary",
        summary_stem.to_str().unwrap(),
        "--progress",
        "false",
    ]);

    execute(args).expect("training with summary should succeed");

    let expected_path = summary_stem.with_extension("json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["total_trials"], 5);
    assert_eq!(
        parsed["infractions_record"].as_array().unwrap().len(),
        5
    );
}

#[test]
fn summary_directory_argument_creates_default_file() {
    let tmp = tempdir().unwrap();
    let summary_dir = tmp.path().join("reports");
    let summary_arg = format!("{}/", summary_dir.display());

    let args = parse_args([
        "smartcab-train",
        "--trials",
        "3",
        "--seed",
        "7",
        "--summary",
        &summary_arg,
        "--progress",
        "false",
    ]);

    execute(args).expect("training with directory summary should succeed");

    let expected_path = summary_dir.join("performance_report.json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["total_trials"], 3);
}

#[test]
fn saved_report_round_trips() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("report.json");

    let args = parse_args([
        "smartcab-train",
        "--trials",
        "4",
        "--seed",
        "11",
        "--summary",
        path.to_str().unwrap(),
        "--progress",
        "false",
    ]);
    execute(args).unwrap();

    let report = smartcab::PerformanceReport::load(&path).unwrap();
    assert_eq!(report.total_trials, 4);
    assert_eq!(report.infractions_record.len(), 4);
}
