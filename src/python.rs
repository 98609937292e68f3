use crate::pack::FormulaPack;
use crate::params::ParamValue;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python-side argument, tried in declaration order.
#[derive(FromPyObject)]
enum PyParam {
    Boolean(bool),
    Number(f64),
    String(String),
    NumberArray(Vec<f64>),
    StringArray(Vec<Option<String>>),
}

impl From<PyParam> for ParamValue {
    fn from(value: PyParam) -> Self {
        match value {
            PyParam::Boolean(b) => ParamValue::Boolean(b),
            PyParam::Number(n) => ParamValue::Number(n),
            PyParam::String(s) => ParamValue::String(s),
            PyParam::NumberArray(v) => ParamValue::NumberArray(v),
            PyParam::StringArray(v) => {
                ParamValue::StringArray(v.into_iter().map(Option::unwrap_or_default).collect())
            }
        }
    }
}

/// Builds the image URL for a formula.
///
/// Args:
///     name (str): Formula name: "WordCloud", "QRCode", "GraphNodes" or "Chart".
///     args (list): Positional arguments in declaration order. Use None to
///         leave an optional parameter unset.
///
/// Returns:
///     str: The QuickChart image URL.
///
/// Raises:
///     ValueError: If the formula is unknown or an argument does not match
///         the formula's parameter list.
#[pyfunction]
fn execute(name: &str, args: Vec<Option<PyParam>>) -> PyResult<String> {
    let values: Vec<Option<ParamValue>> = args.into_iter().map(|a| a.map(Into::into)).collect();
    FormulaPack::default()
        .execute(name, &values)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Lists every formula with its parameter names.
///
/// Returns:
///     dict: Formula name mapped to the list of its parameter names.
#[pyfunction]
fn formulas(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    let pack = FormulaPack::default();
    let dict = PyDict::new(py);
    for name in pack.names() {
        if let Some(formula) = pack.get(name) {
            let params: Vec<&str> = formula
                .parameters()
                .iter()
                .chain(formula.vararg_parameters())
                .map(|p| p.name)
                .collect();
            dict.set_item(name, params)?;
        }
    }
    Ok(dict)
}

/// QuickChart formula adapters.
///
/// Builds QuickChart image URLs for word clouds, QR codes, node graphs and
/// generic charts.
#[pymodule]
fn quickchart_formulas(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(execute, m)?)?;
    m.add_function(wrap_pyfunction!(formulas, m)?)?;
    Ok(())
}
