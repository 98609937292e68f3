//! A small builder for the Graphviz DOT subset the graph formula emits.
use std::fmt::{self, Write};

/// Whether edges have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphType {
    Directed,
    #[default]
    Undirected,
}

impl GraphType {
    /// `directed` selects a directed graph; anything else is undirected.
    pub fn from_param(value: &str) -> Self {
        if value == "directed" {
            GraphType::Directed
        } else {
            GraphType::Undirected
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            GraphType::Directed => "digraph",
            GraphType::Undirected => "graph",
        }
    }

    pub fn edge_op(self) -> &'static str {
        match self {
            GraphType::Directed => "->",
            GraphType::Undirected => "--",
        }
    }
}

/// One statement inside the graph body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Edge {
        from: String,
        to: String,
    },
    Node {
        id: String,
        label: String,
        fill: Option<String>,
    },
    Attribute {
        name: &'static str,
        value: String,
    },
}

/// Statements of one graph, rendered as `<keyword>{...}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphDescription {
    graph_type: GraphType,
    statements: Vec<Statement>,
}

/// Turns a label into a node identifier by dropping its first space.
///
/// Later spaces are kept, so `"New York City"` becomes `"NewYork City"`.
pub fn node_id(label: &str) -> String {
    label.replacen(' ', "", 1)
}

impl GraphDescription {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            statements: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.statements.push(Statement::Edge {
            from: from.into(),
            to: to.into(),
        });
    }

    pub fn add_node(&mut self, id: impl Into<String>, label: impl Into<String>, fill: Option<String>) {
        self.statements.push(Statement::Node {
            id: id.into(),
            label: label.into(),
            fill,
        });
    }

    pub fn set_attribute(&mut self, name: &'static str, value: impl Into<String>) {
        self.statements.push(Statement::Attribute {
            name,
            value: value.into(),
        });
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn node_count(&self) -> usize {
        self.statements
            .iter()
            .filter(|s| matches!(s, Statement::Node { .. }))
            .count()
    }

    pub fn edge_count(&self) -> usize {
        self.statements
            .iter()
            .filter(|s| matches!(s, Statement::Edge { .. }))
            .count()
    }

    fn write_statement(&self, f: &mut impl Write, statement: &Statement) -> fmt::Result {
        match statement {
            Statement::Edge { from, to } => {
                write!(f, "{}{}{};", from, self.graph_type.edge_op(), to)
            }
            Statement::Node { id, label, fill } => {
                write!(f, "{} [label=\"{}\"", id, label.replace('"', "\\\""))?;
                if let Some(color) = fill {
                    write!(f, " style=filled,color=\"{}\"", color)?;
                }
                f.write_str("];")
            }
            Statement::Attribute { name, value } => write!(f, "{}={};", name, value),
        }
    }
}

impl fmt::Display for GraphDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.graph_type.keyword())?;
        for statement in &self.statements {
            log::trace!("DOT statement: {:?}", statement);
            self.write_statement(f, statement)?;
        }
        f.write_char('}')
    }
}
