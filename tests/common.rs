//! Common fixtures shared by the formula tests.
use quickchart_formulas::prelude::*;

/// Positional word cloud arguments with every option set.
#[allow(dead_code)]
pub fn word_cloud_args() -> Vec<Option<ParamValue>> {
    vec![
        Some("hello".into()),
        Some("png".into()),
        Some(600.0.into()),
        Some(600.0.into()),
        Some("transparent".into()),
        Some("serif".into()),
        Some(25.0.into()),
        Some("linear".into()),
        Some(1.0.into()),
        Some(0.0.into()),
        Some(200.0.into()),
        Some(1.0.into()),
        Some("lower".into()),
        Some("random".into()),
        Some(false.into()),
        Some("en".into()),
        Some(false.into()),
    ]
}

/// Positional chart arguments: one line series over three points.
#[allow(dead_code)]
pub fn line_chart_args() -> Vec<Option<ParamValue>> {
    vec![
        Some("line".into()),
        Some(vec![0.0, 1.0, 2.0].into()),
        Some("svg".into()),
        Some(800.0.into()),
        Some(600.0.into()),
        Some("transparent".into()),
        Some("data1".into()),
        Some(vec![100.0, 80.0, 95.0].into()),
    ]
}

/// Helper to build an owned string list.
#[allow(dead_code)]
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// A small directed org chart with two teams.
#[allow(dead_code)]
pub fn org_chart() -> GraphNodesInput {
    GraphNodesInput {
        nodes: strings(&["Ada", "Grace Hopper", "Linus", "Ken"]),
        graph_type: GraphType::Directed,
        edges: strings(&["GraceHopper,Linus", "", "Ken", ""]),
        color_nodes: strings(&["lead", "compilers", "kernels", "kernels"]),
        ..Default::default()
    }
}

/// Pulls the `graph=` value out of a graphviz URL.
#[allow(dead_code)]
pub fn graph_body(url: &str) -> &str {
    let start = url.find("graph=").expect("url has a graph parameter") + "graph=".len();
    let rest = &url[start..];
    let end = rest.find('}').expect("graph body is closed") + 1;
    &rest[..end]
}
