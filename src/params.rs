use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The value kinds a formula parameter can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    StringArray,
    NumberArray,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::StringArray => "string array",
            ParamKind::NumberArray => "number array",
        };
        f.write_str(name)
    }
}

/// Documented default of an optional parameter.
///
/// Defaults describe what the rendering service assumes when a key is left out
/// of the query. Builders never substitute them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Text(&'static str),
    Number(f64),
    Boolean(bool),
}

impl fmt::Display for ParamDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamDefault::Text(s) => f.write_str(s),
            ParamDefault::Number(n) => f.write_str(&format_number(*n)),
            ParamDefault::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Static declaration of one formula parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub optional: bool,
    pub default_value: Option<ParamDefault>,
    pub description: &'static str,
}

impl ParameterSpec {
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            optional: false,
            default_value: None,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            optional: true,
            default_value: None,
            description,
        }
    }

    pub const fn with_default(mut self, default: ParamDefault) -> Self {
        self.default_value = Some(default);
        self
    }
}

/// A single argument value handed over by the host.
///
/// Blank cells inside a string list arrive as null and read as empty strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Boolean(bool),
    Number(f64),
    String(String),
    NumberArray(Vec<f64>),
    StringArray(#[serde(deserialize_with = "strings_with_blanks")] Vec<String>),
}

fn strings_with_blanks<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let cells = Vec::<Option<String>>::deserialize(deserializer)?;
    Ok(cells.into_iter().map(Option::unwrap_or_default).collect())
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Boolean(_) => ParamKind::Boolean,
            ParamValue::Number(_) => ParamKind::Number,
            ParamValue::String(_) => ParamKind::String,
            ParamValue::NumberArray(_) => ParamKind::NumberArray,
            ParamValue::StringArray(_) => ParamKind::StringArray,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Boolean(value)
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(value: Vec<f64>) -> Self {
        ParamValue::NumberArray(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::StringArray(value)
    }
}

// Renders the way the host coerces values into query strings: integral numbers
// lose their fractional part and arrays are comma-joined.
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Boolean(b) => write!(f, "{}", b),
            ParamValue::Number(n) => f.write_str(&format_number(*n)),
            ParamValue::String(s) => f.write_str(s),
            ParamValue::NumberArray(values) => {
                write!(f, "{}", values.iter().map(|n| format_number(*n)).join(","))
            }
            ParamValue::StringArray(values) => write!(f, "{}", values.iter().join(",")),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Boolean(b) => serializer.serialize_bool(*b),
            ParamValue::Number(n) => serialize_number(n, serializer),
            ParamValue::String(s) => serializer.serialize_str(s),
            ParamValue::NumberArray(values) => serialize_numbers(values, serializer),
            ParamValue::StringArray(values) => serializer.collect_seq(values),
        }
    }
}

/// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

/// Formats a number the way the host turns numbers into text.
///
/// Integral values drop the trailing `.0`. Magnitudes below `1e-6` or from
/// `1e21` up switch to exponent form with a signed exponent (`1e-7`, `1e+21`).
pub fn format_number(n: f64) -> String {
    if is_integral(n) {
        return format!("{}", n as i64);
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let exponent = format!("{:e}", n);
        match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exponent,
        }
    } else {
        format!("{}", n)
    }
}

/// Serializes an f64 as a JSON integer when it carries no fractional part.
pub fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if is_integral(*n) {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

/// Sequence form of [`serialize_number`].
pub fn serialize_numbers<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    struct Num(f64);
    impl Serialize for Num {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_number(&self.0, serializer)
        }
    }
    serializer.collect_seq(values.iter().map(|n| Num(*n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_fraction_only_when_integral() {
        assert_eq!(format_number(600.0), "600");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn null_cells_in_string_lists_read_as_blank() {
        let args: Vec<Option<ParamValue>> =
            serde_json::from_str(r#"[["a","b"], null, ["b",""], ["x", null], [null]]"#).unwrap();
        assert_eq!(
            args,
            vec![
                Some(ParamValue::StringArray(vec!["a".into(), "b".into()])),
                None,
                Some(ParamValue::StringArray(vec!["b".into(), "".into()])),
                Some(ParamValue::StringArray(vec!["x".into(), "".into()])),
                Some(ParamValue::StringArray(vec!["".into()])),
            ]
        );
    }

    #[test]
    fn arrays_render_comma_joined() {
        let value = ParamValue::NumberArray(vec![1.0, 2.5]);
        assert_eq!(value.to_string(), "1,2.5");
        let value = ParamValue::StringArray(vec!["a".into(), "b".into()]);
        assert_eq!(value.to_string(), "a,b");
    }

    #[test]
    fn json_arguments_pick_the_narrowest_kind() {
        let args: Vec<Option<ParamValue>> =
            serde_json::from_str(r#"["x", 2, true, null, [1, 2], ["a"]]"#).unwrap();
        let kinds: Vec<_> = args.iter().map(|a| a.as_ref().map(|v| v.kind())).collect();
        assert_eq!(
            kinds,
            vec![
                Some(ParamKind::String),
                Some(ParamKind::Number),
                Some(ParamKind::Boolean),
                None,
                Some(ParamKind::NumberArray),
                Some(ParamKind::StringArray),
            ]
        );
    }
}
