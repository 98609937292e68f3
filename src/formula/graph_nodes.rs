use super::{Args, Formula};
use crate::config::PackConfig;
use crate::dot::{GraphDescription, GraphType, node_id};
use crate::error::FormulaError;
use crate::params::{ParamDefault, ParamKind, ParameterSpec, format_number};
use crate::query::QueryBuilder;

/// Layout engines the rendering service understands.
pub const KNOWN_LAYOUTS: &[&str] = &["dot", "fdp", "neato", "circo", "twopi", "osage", "patchwork"];

const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec::required("nodes", ParamKind::StringArray, "Node labels."),
    ParameterSpec::optional("graphType", ParamKind::String, "'directed' or 'undirected'")
        .with_default(ParamDefault::Text("undirected")),
    ParameterSpec::optional(
        "edges",
        ParamKind::StringArray,
        "Comma-separated edge targets per node",
    ),
    ParameterSpec::optional(
        "colorNodes",
        ParamKind::StringArray,
        "Color nodes based on unique labels in this array, one color per label.",
    ),
    ParameterSpec::optional(
        "layout",
        ParamKind::String,
        "'dot', 'fdp', 'neato', 'circo', 'twopi', 'osage', 'patchwork'",
    )
    .with_default(ParamDefault::Text("dot")),
    ParameterSpec::optional(
        "allowOverlap",
        ParamKind::Boolean,
        "Set to false to force the layout engine to avoid overlapping nodes",
    )
    .with_default(ParamDefault::Boolean(true)),
    ParameterSpec::optional("format", ParamKind::String, "Image output format - svg or png")
        .with_default(ParamDefault::Text("png")),
    ParameterSpec::optional("height", ParamKind::Number, "Image height")
        .with_default(ParamDefault::Number(600.0)),
    ParameterSpec::optional("width", ParamKind::Number, "Image width")
        .with_default(ParamDefault::Number(600.0)),
];

/// A node graph: labels, per-node edge lists and optional color groups.
///
/// `edges` and `color_nodes` run parallel to `nodes`; a missing entry means
/// the node has no edges or no color.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNodesInput {
    pub nodes: Vec<String>,
    pub graph_type: GraphType,
    pub edges: Vec<String>,
    pub color_nodes: Vec<String>,
    pub layout: Option<String>,
    pub allow_overlap: bool,
    pub format: Option<String>,
    pub height: Option<f64>,
    pub width: Option<f64>,
}

impl Default for GraphNodesInput {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            graph_type: GraphType::Undirected,
            edges: Vec::new(),
            color_nodes: Vec::new(),
            layout: None,
            allow_overlap: true,
            format: None,
            height: None,
            width: None,
        }
    }
}

impl GraphNodesInput {
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn from_args(args: &Args<'_>) -> Result<Self, FormulaError> {
        Ok(Self {
            nodes: args.required(0, args.string_list(0)?)?,
            graph_type: args
                .text(1)?
                .map_or(GraphType::Undirected, |t| GraphType::from_param(&t)),
            edges: args.string_list(2)?.unwrap_or_default(),
            color_nodes: args.string_list(3)?.unwrap_or_default(),
            layout: args.text(4)?,
            allow_overlap: args.boolean(5)?.unwrap_or(true),
            format: args.text(6)?,
            height: args.number(7)?,
            width: args.number(8)?,
        })
    }

    /// Builds the DOT description, assigning colors from `config.palette`.
    pub fn graph(&self, config: &PackConfig) -> GraphDescription {
        let mut graph = GraphDescription::new(self.graph_type);
        let mut colors = config.palette.assigner();

        for (i, label) in self.nodes.iter().enumerate() {
            let id = node_id(label);

            if let Some(targets) = self.edges.get(i) {
                for target in node_id(targets).split(',').filter(|t| !t.is_empty()) {
                    graph.add_edge(id.as_str(), target);
                }
            }

            let fill = self
                .color_nodes
                .get(i)
                .filter(|group| !group.trim().is_empty())
                .map(|group| colors.color_for(&node_id(group)).to_string());
            graph.add_node(id, label.as_str(), fill);
        }

        if !self.allow_overlap {
            graph.set_attribute("overlap", "false");
        }
        log::debug!(
            "Built graph with {} nodes, {} edges and {} color groups",
            graph.node_count(),
            graph.edge_count(),
            colors.len()
        );
        graph
    }

    /// Builds the graphviz URL. The DOT text is embedded without escaping.
    pub fn url(&self, config: &PackConfig) -> String {
        if let Some(layout) = self.layout.as_deref() {
            if !layout.is_empty() && !KNOWN_LAYOUTS.contains(&layout) {
                log::warn!("Unknown layout engine '{}', passing it through", layout);
            }
        }

        let mut query = QueryBuilder::new();
        query
            .push_non_empty("layout", self.layout.as_deref())
            .push("graph", self.graph(config))
            .push_non_empty("format", self.format.as_deref())
            .push_opt("height", self.height.map(format_number))
            .push_opt("width", self.width.map(format_number));
        query.to_url(&config.endpoint("graphviz?"))
    }
}

/// Renders a node graph through Graphviz.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphNodesFormula;

impl Formula for GraphNodesFormula {
    fn name(&self) -> &str {
        "GraphNodes"
    }

    fn description(&self) -> &str {
        "Generate a node graph image. More documentation: https://quickchart.io/documentation/graphviz-api/"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    fn execute(&self, args: &Args<'_>, config: &PackConfig) -> Result<String, FormulaError> {
        Ok(GraphNodesInput::from_args(args)?.url(config))
    }
}
