use super::{Args, Formula};
use crate::config::PackConfig;
use crate::error::FormulaError;
use crate::params::{ParamDefault, ParamKind, ParameterSpec, format_number};
use crate::query::{QueryBuilder, escape_quotes_and_whitespace};

const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec::required("text", ParamKind::String, "The text to turn into a QR code link."),
    ParameterSpec::optional("format", ParamKind::String, "Image output format - svg or png")
        .with_default(ParamDefault::Text("png")),
    ParameterSpec::optional("margin", ParamKind::Number, "Whitespace around the QR image")
        .with_default(ParamDefault::Number(4.0)),
    ParameterSpec::optional("width", ParamKind::Number, "Image width")
        .with_default(ParamDefault::Number(600.0)),
    ParameterSpec::optional("height", ParamKind::Number, "Image height")
        .with_default(ParamDefault::Number(600.0)),
    ParameterSpec::optional(
        "ecLevel",
        ParamKind::String,
        "Error correction level (Low, Medium, Quartile, High - default is Medium)",
    )
    .with_default(ParamDefault::Text("Medium")),
    ParameterSpec::optional(
        "foregroundColor",
        ParamKind::String,
        "Color of the dark foreground as a hex code (eg: 000000)",
    )
    .with_default(ParamDefault::Text("000000")),
    ParameterSpec::optional(
        "backgroundColor",
        ParamKind::String,
        "Color of the light background as a hex code (eg: ffffff)",
    )
    .with_default(ParamDefault::Text("ffffff")),
    ParameterSpec::optional("size", ParamKind::Number, "Height and width in pixels"),
];

/// Options of a QR code image. Unset options are left out of the URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QrCodeInput {
    pub text: String,
    pub format: Option<String>,
    pub margin: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Spelled-out level such as `Medium`; only the first character is sent.
    pub ec_level: Option<String>,
    pub foreground_color: Option<String>,
    pub background_color: Option<String>,
    pub size: Option<f64>,
}

/// The leading character of `value`, or an empty string.
fn first_char(value: &str) -> &str {
    value
        .chars()
        .next()
        .map_or("", |c| &value[..c.len_utf8()])
}

impl QrCodeInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn from_args(args: &Args<'_>) -> Result<Self, FormulaError> {
        Ok(Self {
            text: args.required(0, args.text(0)?)?,
            format: args.text(1)?,
            margin: args.number(2)?,
            width: args.number(3)?,
            height: args.number(4)?,
            ec_level: args.text(5)?,
            foreground_color: args.text(6)?,
            background_color: args.text(7)?,
            size: args.number(8)?,
        })
    }

    fn query(&self) -> QueryBuilder {
        let number = |n: Option<f64>| n.map(format_number);
        let mut query = QueryBuilder::new();
        query
            .push("text", &self.text)
            .push_opt("format", self.format.as_ref())
            .push_opt("margin", number(self.margin))
            .push_opt("width", number(self.width))
            .push_opt("height", number(self.height))
            .push_opt("ecLevel", self.ec_level.as_deref().map(first_char))
            .push_opt("dark", self.foreground_color.as_ref())
            .push_opt("light", self.background_color.as_ref())
            .push_opt("size", number(self.size));
        query
    }

    /// Builds the QR code URL with quotes and whitespace escaped.
    pub fn url(&self, config: &PackConfig) -> String {
        let query = self.query();
        log::debug!("Building QR code URL with {} options", query.len());
        escape_quotes_and_whitespace(&query.to_url(&config.endpoint("qr?")))
    }
}

/// Renders text as a QR code image.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeFormula;

impl Formula for QrCodeFormula {
    fn name(&self) -> &str {
        "QRCode"
    }

    fn description(&self) -> &str {
        "Generate a QR Code image. More documentation: https://quickchart.io/documentation/#qr"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    fn execute(&self, args: &Args<'_>, config: &PackConfig) -> Result<String, FormulaError> {
        Ok(QrCodeInput::from_args(args)?.url(config))
    }
}
