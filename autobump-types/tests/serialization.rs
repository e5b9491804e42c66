use autobump_types::{
    BumpSpec, ChangeResult, MatchMode, Options, PrMetadata, RunRecord, Selector, ToolInfo,
};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

#[test]
fn options_parse_images_and_versions_from_yaml() {
    let yaml = r#"
images:
  fluent-bit: fluent/fluent-bit
versions:
  fluent-bit:
    - "1.8.11"
    - "1.8.12"
"#;
    let opts: Options = serde_yaml::from_str(yaml).expect("parse options");

    assert_eq!(opts.image("fluent-bit"), Some("fluent/fluent-bit"));
    assert_eq!(opts.versions_for("fluent-bit"), ["1.8.11", "1.8.12"]);
    assert!(opts.versions_for("otel-collector").is_empty());
}

#[test]
fn options_ignore_unknown_keys_and_default_missing_maps() {
    let yaml = r#"
gitHubOrg: kyma-project
versions:
  otel: ["0.1"]
"#;
    let opts: Options = serde_yaml::from_str(yaml).expect("parse options");

    assert!(opts.images.is_empty());
    assert_eq!(opts.versions_for("otel"), ["0.1"]);
}

#[test]
fn selector_serializes_adjacently_tagged() {
    let spec = BumpSpec::new("a", "b", Selector::base_name_prefix("Dockerfile"));
    let value = serde_json::to_value(&spec).expect("serialize");

    assert_eq!(
        value,
        serde_json::json!({
            "old": "a",
            "new": "b",
            "selector": { "type": "base_name_prefix", "value": "Dockerfile" },
            "mode": "literal"
        })
    );
}

#[test]
fn bump_spec_mode_defaults_to_literal() {
    let spec: BumpSpec = serde_json::from_value(serde_json::json!({
        "old": "a",
        "new": "b",
        "selector": { "type": "base_name_prefix", "value": "Dockerfile" }
    }))
    .expect("deserialize");

    assert_eq!(spec.mode, MatchMode::Literal);
}

#[test]
fn run_record_new_sets_schema_and_omits_missing_end() {
    let started = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let mut record = RunRecord::new(
        ToolInfo {
            name: "autobump".to_string(),
            version: None,
        },
        started,
    );
    record.results.push(ChangeResult::new(0, "debian-base-image", "Bump it"));
    record.pr = PrMetadata {
        title: "t".to_string(),
        body: "Bump it".to_string(),
    };

    assert_eq!(record.schema, autobump_types::schema::AUTOBUMP_RUN_V1);
    assert_eq!(record.messages().collect::<Vec<_>>(), vec!["Bump it"]);

    let value = serde_json::to_value(&record).expect("serialize");
    assert!(value.get("ended_at").is_none());
    assert!(value["tool"].get("version").is_none());
    assert_eq!(value["results"][0]["name"], "debian-base-image");
}
