//! Unit tests for the header patch run against the in-memory filesystem

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use cfpatch::error::PatchError;
    use cfpatch::operations::{OutputFormat, PatchOperation, patch};
    use cfpatch::system::{System as _, mock::MockSystem};
    use serde_json::{Value, json};
    use std::path::Path;

    const FIXTURE: &str = include_str!("fixtures/cf_config.json");

    fn system_with_input(contents: &str) -> MockSystem {
        MockSystem::new()
            .with_file("/work/cf_config.json", contents.as_bytes())
            .unwrap()
    }

    fn read_json(system: &MockSystem, path: &str) -> Value {
        serde_json::from_str(&system.file_contents(path).unwrap()).unwrap()
    }

    fn expect_error(result: anyhow::Result<String>) -> PatchError {
        let err = result.unwrap_err();
        match err.downcast::<PatchError>() {
            Ok(patch_error) => patch_error,
            Err(other) => panic!("expected a PatchError, got {other:#}"),
        }
    }

    #[test]
    fn patches_minimal_document() {
        let system = system_with_input(
            r#"{"ETag": "E123", "DistributionConfig": {"DefaultCacheBehavior": {"ForwardedValues": {"Headers": {"Quantity": 0, "Items": []}}}, "Other": "X"}}"#,
        );

        let etag = patch(&system, "/work/cf_config.json", "/work/updated_config.json").unwrap();

        assert_eq!(etag, "E123");
        assert_eq!(
            read_json(&system, "/work/updated_config.json"),
            json!({
                "DefaultCacheBehavior": {
                    "ForwardedValues": {"Headers": {"Quantity": 1, "Items": ["Origin"]}}
                },
                "Other": "X"
            })
        );
    }

    #[test]
    fn output_is_compact_and_drops_etag() {
        let system = system_with_input(
            r#"{"ETag": "E123", "DistributionConfig": {"DefaultCacheBehavior": {"ForwardedValues": {}}, "Other": "X"}}"#,
        );

        patch(&system, "/work/cf_config.json", "/work/updated_config.json").unwrap();

        assert_eq!(
            system.file_contents("/work/updated_config.json").unwrap(),
            r#"{"DefaultCacheBehavior":{"ForwardedValues":{"Headers":{"Quantity":1,"Items":["Origin"]}}},"Other":"X"}"#
        );
    }

    #[test]
    fn only_default_behavior_headers_change() {
        let system = system_with_input(FIXTURE);

        let etag = patch(&system, "/work/cf_config.json", "/work/updated_config.json").unwrap();
        assert_eq!(etag, "E2QWRUHAPOMQZL");

        let input: Value = serde_json::from_str(FIXTURE).unwrap();
        let mut expected = input["DistributionConfig"].clone();
        expected["DefaultCacheBehavior"]["ForwardedValues"]["Headers"] =
            json!({"Quantity": 1, "Items": ["Origin"]});

        let output = read_json(&system, "/work/updated_config.json");
        assert_eq!(output, expected);
        assert_eq!(
            output["CacheBehaviors"],
            input["DistributionConfig"]["CacheBehaviors"]
        );
    }

    #[test]
    fn output_keeps_key_order() {
        let system = system_with_input(FIXTURE);
        patch(&system, "/work/cf_config.json", "/work/updated_config.json").unwrap();

        let written = system.file_contents("/work/updated_config.json").unwrap();
        assert!(written.starts_with(r#"{"CallerReference":"reality-os-2024-11-02","Aliases""#));
        assert!(written.ends_with(r#""IsIPV6Enabled":true}"#));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let system = system_with_input(FIXTURE);

        patch(&system, "/work/cf_config.json", "/work/first.json").unwrap();
        patch(&system, "/work/cf_config.json", "/work/second.json").unwrap();

        assert_eq!(
            system.file_contents("/work/first.json"),
            system.file_contents("/work/second.json")
        );
    }

    #[test]
    fn input_is_not_modified() {
        let system = system_with_input(FIXTURE);
        patch(&system, "/work/cf_config.json", "/work/updated_config.json").unwrap();
        assert_eq!(system.file_contents("/work/cf_config.json").unwrap(), FIXTURE);
    }

    #[test]
    fn overwrites_existing_output() {
        let system = system_with_input(FIXTURE)
            .with_file("/work/updated_config.json", b"stale")
            .unwrap();

        patch(&system, "/work/cf_config.json", "/work/updated_config.json").unwrap();

        let output = read_json(&system, "/work/updated_config.json");
        assert_eq!(output["Comment"], "Reality OS");
    }

    #[test]
    fn missing_input_is_file_access_error() {
        let system = MockSystem::new();
        let err = expect_error(patch(&system, "/work/cf_config.json", "/work/out.json"));

        assert!(matches!(err, PatchError::FileAccess { .. }));
        assert!(err.to_string().contains("Input file not found"));
        assert!(!system.exists(Path::new("/work/out.json")));
    }

    #[test]
    fn invalid_json_is_malformed_document_error() {
        let system = system_with_input(r#"{"ETag": "E123", "DistributionConfig": "#);
        let err = expect_error(patch(&system, "/work/cf_config.json", "/work/out.json"));

        assert!(matches!(err, PatchError::MalformedDocument { .. }));
        assert!(!system.exists(Path::new("/work/out.json")));
    }

    #[test]
    fn missing_default_cache_behavior_is_schema_error() {
        let system =
            system_with_input(r#"{"ETag": "E123", "DistributionConfig": {"Other": "X"}}"#);
        let err = expect_error(patch(&system, "/work/cf_config.json", "/work/out.json"));

        assert!(matches!(err, PatchError::Schema { .. }));
        assert!(err.to_string().contains("DefaultCacheBehavior"));
        assert!(!system.exists(Path::new("/work/out.json")));
    }

    #[test]
    fn missing_distribution_config_is_schema_error() {
        let system = system_with_input(r#"{"ETag": "E1"}"#);
        let err = expect_error(patch(&system, "/work/cf_config.json", "/work/out.json"));

        assert!(matches!(err, PatchError::Schema { .. }));
        assert!(err.to_string().contains("DistributionConfig"));
        assert!(!system.exists(Path::new("/work/out.json")));
    }

    #[test]
    fn large_integers_are_written_back_exactly() {
        let system = system_with_input(
            r#"{"ETag": "E1", "DistributionConfig": {"DefaultCacheBehavior": {"ForwardedValues": {}}, "Big": 123456789012345678901234567890, "Ratio": 0.10}}"#,
        );

        patch(&system, "/work/cf_config.json", "/work/updated_config.json").unwrap();

        let written = system.file_contents("/work/updated_config.json").unwrap();
        assert!(written.contains(r#""Big":123456789012345678901234567890"#));
        assert!(written.contains(r#""Ratio":0.10"#));
    }

    #[test]
    fn missing_etag_is_schema_error() {
        let system = system_with_input(
            r#"{"DistributionConfig": {"DefaultCacheBehavior": {"ForwardedValues": {}}}}"#,
        );
        let err = expect_error(patch(&system, "/work/cf_config.json", "/work/out.json"));

        assert!(matches!(err, PatchError::Schema { .. }));
        assert!(err.to_string().contains("ETag"));
    }

    #[test]
    fn non_string_etag_is_schema_error() {
        let system = system_with_input(
            r#"{"ETag": 7, "DistributionConfig": {"DefaultCacheBehavior": {"ForwardedValues": {}}}}"#,
        );
        let err = expect_error(patch(&system, "/work/cf_config.json", "/work/out.json"));
        assert!(matches!(err, PatchError::Schema { .. }));
    }

    #[test]
    fn unwritable_output_is_file_access_error() {
        let system = system_with_input(FIXTURE);
        let err = expect_error(patch(
            &system,
            "/work/cf_config.json",
            "/missing/dir/updated_config.json",
        ));
        assert!(matches!(err, PatchError::FileAccess { .. }));
    }

    #[test]
    fn pretty_format_and_etag_file() {
        let system = system_with_input(FIXTURE);

        let etag = PatchOperation::new(&system, "/work/cf_config.json", "/work/updated_config.json")
            .with_format(OutputFormat::Pretty)
            .with_etag_file(Some("/work/cf_etag.txt".to_owned()))
            .execute()
            .unwrap();

        let written = system.file_contents("/work/updated_config.json").unwrap();
        assert!(written.starts_with("{\n  \"CallerReference\""));
        assert_eq!(
            system.file_contents("/work/cf_etag.txt").as_deref(),
            Some(etag.as_str())
        );
    }

    #[test]
    fn dry_run_writes_nothing() {
        let system = system_with_input(FIXTURE);

        let etag = PatchOperation::new(&system, "/work/cf_config.json", "/work/updated_config.json")
            .with_etag_file(Some("/work/cf_etag.txt".to_owned()))
            .with_dry_run(true)
            .execute()
            .unwrap();

        assert_eq!(etag, "E2QWRUHAPOMQZL");
        assert!(!system.exists(Path::new("/work/updated_config.json")));
        assert!(!system.exists(Path::new("/work/cf_etag.txt")));
    }

    #[test]
    fn dry_run_still_reports_schema_errors() {
        let system = system_with_input(r#"{"ETag": "E1", "DistributionConfig": {}}"#);
        let err = expect_error(
            PatchOperation::new(&system, "/work/cf_config.json", "/work/out.json")
                .with_dry_run(true)
                .execute(),
        );
        assert!(matches!(err, PatchError::Schema { .. }));
    }
}
