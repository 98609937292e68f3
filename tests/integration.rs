//! Integration tests for the formula pack
//!
//! End-to-end tests for registration, configuration and argument checking.
//!
mod common;
use common::*;
use quickchart_formulas::prelude::*;

#[test]
fn test_default_pack_registers_all_formulas() {
    let pack = FormulaPack::default();
    assert_eq!(pack.names(), vec!["Chart", "GraphNodes", "QRCode", "WordCloud"]);

    let word_cloud = pack.get("WordCloud").unwrap();
    assert_eq!(word_cloud.parameters().len(), 17);
    assert_eq!(pack.get("QRCode").unwrap().parameters().len(), 9);
    assert_eq!(pack.get("GraphNodes").unwrap().parameters().len(), 9);
    assert_eq!(pack.get("Chart").unwrap().vararg_parameters().len(), 2);

    let names: Vec<_> = word_cloud.parameters().iter().map(|p| p.name).collect();
    assert_eq!(names[0], "text");
    assert_eq!(names[16], "useWordList");
    assert!(!word_cloud.parameters()[0].optional);
    assert_eq!(
        word_cloud.parameters()[2].default_value,
        Some(ParamDefault::Number(600.0))
    );
}

#[test]
fn test_base_url_and_palette_overrides() {
    let pack = FormulaPack::builder()
        .with_base_url("http://localhost:3400/")
        .with_palette(ColorPalette::new(["plum1"]))
        .build();

    let url = pack
        .execute("QRCode", &[Some("hi".into())])
        .unwrap();
    assert_eq!(url, "http://localhost:3400/qr?text=hi");

    let url = org_chart().url(pack.config());
    assert!(url.starts_with("http://localhost:3400/graphviz?graph=digraph{"));
    assert_eq!(url.matches("color=\"plum1\"").count(), 4);
}

#[test]
fn test_config_loaded_from_json() {
    let config = PackConfig::from_json(r#"{"baseUrl": "https://charts.internal", "palette": ["red"]}"#)
        .unwrap();
    let pack = FormulaPack::builder().with_config(config).build();
    let url = pack.execute("Chart", &line_chart_args()).unwrap();
    assert!(url.starts_with("https://charts.internal/chart?c={"));
}

#[test]
fn test_alias_exposes_builtin_formula() {
    let pack = FormulaPack::builder()
        .with_alias("QuickChart.WordCloud", "WordCloud")
        .with_alias("Broken", "NoSuchFormula")
        .build();

    let direct = pack.execute("WordCloud", &word_cloud_args()).unwrap();
    let aliased = pack.execute("QuickChart.WordCloud", &word_cloud_args()).unwrap();
    assert_eq!(direct, aliased);
    assert!(pack.get("Broken").is_none());
}

struct EchoFormula;

impl Formula for EchoFormula {
    fn name(&self) -> &str {
        "Echo"
    }

    fn description(&self) -> &str {
        "Returns the endpoint with the given text"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        const PARAMS: &[ParameterSpec] =
            &[ParameterSpec::required("text", ParamKind::String, "Text to echo")];
        PARAMS
    }

    fn execute(&self, args: &Args<'_>, config: &PackConfig) -> Result<String, FormulaError> {
        let text = args.required(0, args.text(0)?)?;
        Ok(format!("{}{}", config.endpoint("echo?text="), text))
    }
}

#[test]
fn test_custom_formula_registration() {
    let pack = FormulaPack::builder()
        .with_formula(Box::new(EchoFormula))
        .build();
    assert_eq!(
        pack.execute("Echo", &[Some("ping".into())]).unwrap(),
        "https://quickchart.io/echo?text=ping"
    );
}

#[test]
fn test_required_past_schema_reports_position() {
    struct LookupFormula;

    impl Formula for LookupFormula {
        fn name(&self) -> &str {
            "Lookup"
        }

        fn description(&self) -> &str {
            "Reads an argument the schema does not declare"
        }

        fn parameters(&self) -> &'static [ParameterSpec] {
            const PARAMS: &[ParameterSpec] =
                &[ParameterSpec::required("text", ParamKind::String, "Text")];
            PARAMS
        }

        fn execute(&self, args: &Args<'_>, _config: &PackConfig) -> Result<String, FormulaError> {
            args.required(3, args.text(3)?)
        }
    }

    let pack = FormulaPack::builder()
        .with_formula(Box::new(LookupFormula))
        .build();
    let err = pack.execute("Lookup", &[Some("ping".into())]).unwrap_err();
    assert_eq!(
        err,
        FormulaError::MissingParameter {
            formula: "Lookup".to_string(),
            param: "#3".to_string(),
        }
    );
}

#[test]
fn test_unknown_formula() {
    let err = FormulaPack::default().execute("Sparkline", &[]).unwrap_err();
    assert_eq!(err, FormulaError::UnknownFormula("Sparkline".to_string()));
}

#[test]
fn test_too_many_arguments() {
    let mut args = word_cloud_args();
    args.push(Some("extra".into()));
    let err = FormulaPack::default().execute("WordCloud", &args).unwrap_err();
    assert_eq!(
        err,
        FormulaError::ArityMismatch {
            formula: "WordCloud".to_string(),
            expected: 17,
            found: 18,
        }
    );
}

#[test]
fn test_type_mismatch_names_the_parameter() {
    let mut args = word_cloud_args();
    args[2] = Some("wide".into());
    let err = FormulaPack::default().execute("WordCloud", &args).unwrap_err();
    assert_eq!(
        err,
        FormulaError::TypeMismatch {
            formula: "WordCloud".to_string(),
            param: "width".to_string(),
            expected: ParamKind::Number,
            found: ParamKind::String,
        }
    );
    assert_eq!(
        err.to_string(),
        "Parameter 'width' of formula 'WordCloud' expects number, but found string"
    );
}

#[test]
fn test_vararg_type_mismatch_names_the_vararg() {
    let mut args = line_chart_args();
    args[7] = Some("not numbers".into());
    let err = FormulaPack::default().execute("Chart", &args).unwrap_err();
    assert!(matches!(
        err,
        FormulaError::TypeMismatch { ref param, .. } if param == "data"
    ));
}

#[test]
fn test_json_arguments_drive_every_formula() {
    let pack = FormulaPack::default();
    let cases = [
        ("WordCloud", r#"["a b", null, 300]"#, "https://quickchart.io/wordcloud?text=a%20b&width=300"),
        ("QRCode", r#"["x", null, null, null, null, "Low"]"#, "https://quickchart.io/qr?text=x&ecLevel=L"),
        (
            "GraphNodes",
            r#"[["a", "b"], "directed", ["b", ""]]"#,
            "https://quickchart.io/graphviz?graph=digraph{a->b;a [label=\"a\"];b [label=\"b\"];}",
        ),
    ];
    for (name, json, expected) in cases {
        let args: Vec<Option<ParamValue>> = serde_json::from_str(json).unwrap();
        assert_eq!(pack.execute(name, &args).unwrap(), expected, "{}", name);
    }
}
