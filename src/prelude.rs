//! Prelude module for convenient imports
//!
//! Re-exports the types most hosts and callers need.
//!
//! ```rust
//! use quickchart_formulas::prelude::*;
//!
//! let pack = FormulaPack::default();
//! let url = pack.execute("WordCloud", &[Some("hello world".into())])?;
//! assert_eq!(url, "https://quickchart.io/wordcloud?text=hello%20world");
//! # Ok::<(), FormulaError>(())
//! ```

// Registry and configuration
pub use crate::config::PackConfig;
pub use crate::pack::{FormulaPack, FormulaPackBuilder};

// Formulas and their typed inputs
pub use crate::formula::{
    Args, ChartFormula, ChartInput, DatasetInput, Formula, GraphNodesFormula, GraphNodesInput,
    QrCodeFormula, QrCodeInput, WordCloudFormula, WordCloudInput,
};

// Graph building blocks
pub use crate::dot::{GraphDescription, GraphType};
pub use crate::palette::{ColorAssigner, ColorPalette};

// Parameter schema and values
pub use crate::params::{ParamDefault, ParamKind, ParamValue, ParameterSpec};

// Error types
pub use crate::error::{ConfigError, FormulaError};
