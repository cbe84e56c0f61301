use logtriage::persist;
use logtriage::{analyze, AnalysisResult, AnalyzerConfig};
use regex::Regex;

fn sample_result() -> AnalysisResult {
    let text = "2024-01-01 10:00:00 ERROR disk full\n\
                2024-01-01 10:05:00 ERROR disk full\n\
                2024-01-01 10:07:00 ERROR disk full\n\
                INFO ok\n";
    analyze(text, &AnalyzerConfig::default()).unwrap()
}

#[test]
fn artifact_lands_in_a_freshly_created_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("nested").join("results");
    assert!(!out_dir.exists());

    let result = sample_result();
    let path = persist::save_results(&result, &out_dir).unwrap();
    assert!(out_dir.is_dir());
    assert!(path.is_file());

    let name = path.file_name().unwrap().to_str().unwrap();
    let re = Regex::new(r"^analysis_\d{8}_\d{6}\.json$").unwrap();
    assert!(re.is_match(name), "unexpected artifact name {name}");
}

#[test]
fn artifact_round_trips_the_analysis_result() {
    let tmp = tempfile::tempdir().unwrap();
    let result = sample_result();
    let path = persist::save_results(&result, tmp.path()).unwrap();

    let raw = std::fs::read_to_string(path).unwrap();
    let restored: AnalysisResult = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, result);
}

#[test]
fn artifact_keeps_the_contracted_field_names() {
    let tmp = tempfile::tempdir().unwrap();
    let result = sample_result();
    assert!(!result.error_groups.is_empty());
    assert!(!result.recommendations.is_empty());

    let path = persist::save_results(&result, tmp.path()).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(value["status"], "success");
    assert_eq!(value["error_count"], 3);
    assert_eq!(value["error_frequency"]["ERROR disk full"], 3);
    let group = &value["error_groups"][0];
    assert_eq!(group["pattern"], "ERROR disk full");
    assert_eq!(group["count"], 3);
    assert_eq!(group["similar_messages"].as_array().unwrap().len(), 2);
    let rec = &value["recommendations"][0];
    assert_eq!(rec["type"], "frequent_error");
    assert_eq!(rec["occurrences"], 3);
    // output_file is the caller's to set; the artifact itself never has it.
    assert!(value.get("output_file").is_none());
}

#[test]
fn unwritable_directory_is_a_storage_error() {
    let tmp = tempfile::tempdir().unwrap();
    // A file where the directory should go makes create_dir_all fail.
    let blocker = tmp.path().join("occupied");
    std::fs::write(&blocker, b"in the way").unwrap();

    let err = persist::save_results(&sample_result(), &blocker).unwrap_err();
    assert!(err.to_string().contains("failed to create output directory"));
}
