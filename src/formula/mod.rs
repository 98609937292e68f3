use crate::config::PackConfig;
use crate::error::FormulaError;
use crate::params::{ParamValue, ParameterSpec, format_number};
use ahash::AHashMap;
use std::iter::StepBy;
use std::ops::Range;

pub mod chart;
pub mod graph_nodes;
pub mod qr_code;
pub mod word_cloud;

pub use chart::{ChartFormula, ChartInput, DatasetInput};
pub use graph_nodes::{GraphNodesFormula, GraphNodesInput};
pub use qr_code::{QrCodeFormula, QrCodeInput};
pub use word_cloud::{WordCloudFormula, WordCloudInput};

/// A named, host-invoked function with a declared parameter schema.
pub trait Formula: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Fixed parameters, in the order the host passes them.
    fn parameters(&self) -> &'static [ParameterSpec];

    /// Parameters that repeat as a group after the fixed ones.
    fn vararg_parameters(&self) -> &'static [ParameterSpec] {
        &[]
    }

    /// How long the host may cache a result. `Some(0)` means always re-run.
    fn cache_ttl_secs(&self) -> Option<u32> {
        None
    }

    /// Builds the image URL from positional arguments.
    fn execute(&self, args: &Args<'_>, config: &PackConfig) -> Result<String, FormulaError>;
}

/// Positional arguments of one invocation, checked against a formula's schema.
///
/// Trailing arguments that the host left out read as null.
#[derive(Debug)]
pub struct Args<'a> {
    formula: &'a str,
    params: &'static [ParameterSpec],
    vararg_params: &'static [ParameterSpec],
    values: &'a [Option<ParamValue>],
}

impl<'a> Args<'a> {
    pub fn new(
        formula: &'a dyn Formula,
        values: &'a [Option<ParamValue>],
    ) -> Result<Self, FormulaError> {
        let params = formula.parameters();
        let vararg_params = formula.vararg_parameters();

        if vararg_params.is_empty() {
            if values.len() > params.len() {
                return Err(FormulaError::ArityMismatch {
                    formula: formula.name().to_string(),
                    expected: params.len(),
                    found: values.len(),
                });
            }
        } else {
            let trailing = values.len().saturating_sub(params.len());
            if trailing % vararg_params.len() != 0 {
                return Err(FormulaError::IncompleteVarargs {
                    formula: formula.name().to_string(),
                    group_size: vararg_params.len(),
                    found: trailing,
                });
            }
        }

        Ok(Self {
            formula: formula.name(),
            params,
            vararg_params,
            values,
        })
    }

    fn value(&self, index: usize) -> Option<&'a ParamValue> {
        self.values.get(index).and_then(Option::as_ref)
    }

    /// Declared parameter at `index`, or `None` past the end of the schema.
    fn spec(&self, index: usize) -> Option<&'static ParameterSpec> {
        match index.checked_sub(self.params.len()) {
            None => self.params.get(index),
            Some(_) if self.vararg_params.is_empty() => None,
            Some(offset) => self.vararg_params.get(offset % self.vararg_params.len()),
        }
    }

    fn param_name(&self, index: usize) -> String {
        self.spec(index)
            .map_or_else(|| format!("#{}", index), |spec| spec.name.to_string())
    }

    fn mismatch(&self, index: usize, found: &ParamValue) -> FormulaError {
        match self.spec(index) {
            Some(spec) => FormulaError::TypeMismatch {
                formula: self.formula.to_string(),
                param: spec.name.to_string(),
                expected: spec.kind,
                found: found.kind(),
            },
            None => FormulaError::ArityMismatch {
                formula: self.formula.to_string(),
                expected: self.params.len(),
                found: self.values.len(),
            },
        }
    }

    /// Unwraps a value that the schema marks as required.
    ///
    /// Indices past the schema are reported by position (`#3`).
    pub fn required<T>(&self, index: usize, value: Option<T>) -> Result<T, FormulaError> {
        value.ok_or_else(|| FormulaError::MissingParameter {
            formula: self.formula.to_string(),
            param: self.param_name(index),
        })
    }

    /// Reads a string. Scalars of other kinds are coerced to their text form.
    pub fn text(&self, index: usize) -> Result<Option<String>, FormulaError> {
        match self.value(index) {
            None => Ok(None),
            Some(ParamValue::String(s)) => Ok(Some(s.clone())),
            Some(v @ (ParamValue::Number(_) | ParamValue::Boolean(_))) => Ok(Some(v.to_string())),
            Some(other) => Err(self.mismatch(index, other)),
        }
    }

    pub fn number(&self, index: usize) -> Result<Option<f64>, FormulaError> {
        match self.value(index) {
            None => Ok(None),
            Some(ParamValue::Number(n)) => Ok(Some(*n)),
            Some(other) => Err(self.mismatch(index, other)),
        }
    }

    pub fn boolean(&self, index: usize) -> Result<Option<bool>, FormulaError> {
        match self.value(index) {
            None => Ok(None),
            Some(ParamValue::Boolean(b)) => Ok(Some(*b)),
            Some(other) => Err(self.mismatch(index, other)),
        }
    }

    /// Reads a string list. Number lists are accepted and rendered as text.
    pub fn string_list(&self, index: usize) -> Result<Option<Vec<String>>, FormulaError> {
        match self.value(index) {
            None => Ok(None),
            Some(ParamValue::StringArray(values)) => Ok(Some(values.clone())),
            Some(ParamValue::NumberArray(values)) => Ok(Some(
                values
                    .iter()
                    .map(|n| format_number(*n))
                    .collect(),
            )),
            Some(other) => Err(self.mismatch(index, other)),
        }
    }

    pub fn number_list(&self, index: usize) -> Result<Option<Vec<f64>>, FormulaError> {
        match self.value(index) {
            None => Ok(None),
            Some(ParamValue::NumberArray(values)) => Ok(Some(values.clone())),
            // An empty list carries no element type.
            Some(ParamValue::StringArray(values)) if values.is_empty() => Ok(Some(Vec::new())),
            Some(other) => Err(self.mismatch(index, other)),
        }
    }

    /// Reads a list of either kind, kept as given.
    pub fn any_list(&self, index: usize) -> Result<Option<ParamValue>, FormulaError> {
        match self.value(index) {
            None => Ok(None),
            Some(v @ (ParamValue::NumberArray(_) | ParamValue::StringArray(_))) => {
                Ok(Some(v.clone()))
            }
            Some(other) => Err(self.mismatch(index, other)),
        }
    }

    /// Start indices of each repeated vararg group, in input order.
    pub fn vararg_groups(&self) -> StepBy<Range<usize>> {
        let step = self.vararg_params.len().max(1);
        (self.params.len()..self.values.len()).step_by(step)
    }
}

/// Formulas a pack registers out of the box, keyed by name.
pub(crate) fn register_default_formulas(registry: &mut AHashMap<String, Box<dyn Formula>>) {
    for formula in default_formulas() {
        registry.insert(formula.name().to_string(), formula);
    }
}

pub(crate) fn create_formula_by_name(name: &str) -> Option<Box<dyn Formula>> {
    default_formulas().into_iter().find(|f| f.name() == name)
}

fn default_formulas() -> Vec<Box<dyn Formula>> {
    vec![
        Box::new(WordCloudFormula),
        Box::new(QrCodeFormula),
        Box::new(GraphNodesFormula),
        Box::new(ChartFormula),
    ]
}
