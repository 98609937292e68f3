//! Tests for the generic chart URL builder.
mod common;
use common::*;
use quickchart_formulas::prelude::*;

#[test]
fn test_line_chart_end_to_end() {
    let url = FormulaPack::default()
        .execute("Chart", &line_chart_args())
        .expect("chart should build");

    assert_eq!(
        url,
        "https://quickchart.io/chart?c={\n".to_string()
            + "  \"type\": \"line\",\n"
            + "  \"data\": {\n"
            + "    \"labels\": [\n"
            + "      0,\n"
            + "      1,\n"
            + "      2\n"
            + "    ],\n"
            + "    \"datasets\": [\n"
            + "      {\n"
            + "        \"label\": \"data1\",\n"
            + "        \"data\": [\n"
            + "          100,\n"
            + "          80,\n"
            + "          95\n"
            + "        ]\n"
            + "      }\n"
            + "    ]\n"
            + "  }\n"
            + "}"
    );
}

#[test]
fn test_datasets_keep_input_order() {
    let mut args = line_chart_args();
    args.push(Some("data2".into()));
    args.push(Some(vec![1.5, 2.0].into()));
    let url = FormulaPack::default().execute("Chart", &args).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(url.trim_start_matches("https://quickchart.io/chart?c=")).unwrap();
    let datasets = json["data"]["datasets"].as_array().unwrap();
    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0]["label"], "data1");
    assert_eq!(datasets[1]["label"], "data2");
    assert_eq!(datasets[1]["data"], serde_json::json!([1.5, 2]));
}

#[test]
fn test_no_datasets_and_no_labels() {
    let url = ChartInput::new("radialGauge")
        .url(&PackConfig::default())
        .unwrap();
    assert_eq!(
        url,
        "https://quickchart.io/chart?c={\n  \"type\": \"radialGauge\",\n  \"data\": {\n    \"datasets\": []\n  }\n}"
    );
}

#[test]
fn test_string_labels_are_quoted() {
    let url = ChartInput::new("bar")
        .with_labels(strings(&["Q1", "Q2"]))
        .with_dataset("sales", vec![3.0, 4.25])
        .url(&PackConfig::default())
        .unwrap();
    assert!(url.contains("\"labels\": [\n      \"Q1\",\n      \"Q2\"\n    ]"));
    assert!(url.contains("          4.25\n"));
}

#[test]
fn test_unset_dataset_fields_are_omitted() {
    let mut args = line_chart_args();
    args.truncate(6);
    args.push(None);
    args.push(Some(vec![7.0].into()));
    let url = FormulaPack::default().execute("Chart", &args).unwrap();
    assert!(url.contains("      {\n        \"data\": [\n          7\n        ]\n      }"));
    assert!(!url.contains("\"label\""));
}

#[test]
fn test_odd_trailing_arguments_are_rejected() {
    let mut args = line_chart_args();
    args.push(Some("dangling".into()));
    let err = FormulaPack::default().execute("Chart", &args).unwrap_err();
    assert_eq!(
        err,
        FormulaError::IncompleteVarargs {
            formula: "Chart".to_string(),
            group_size: 2,
            found: 3,
        }
    );
}

#[test]
fn test_chart_is_never_cached() {
    let pack = FormulaPack::default();
    assert_eq!(pack.get("Chart").unwrap().cache_ttl_secs(), Some(0));
    assert_eq!(pack.get("WordCloud").unwrap().cache_ttl_secs(), None);
}
