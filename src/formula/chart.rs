use super::{Args, Formula};
use crate::config::PackConfig;
use crate::error::FormulaError;
use crate::params::{ParamDefault, ParamKind, ParamValue, ParameterSpec, serialize_numbers};
use serde::{Serialize, Serializer};

const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec::required(
        "chartType",
        ParamKind::String,
        "Chart type (line, bar, radar, doughnut, pie, bubble, scatter, violin, horizontalViolin, sparkline, progressBar, radialGauge)",
    ),
    ParameterSpec::optional("xaxis", ParamKind::StringArray, "X-axis labels"),
    ParameterSpec::optional("format", ParamKind::String, "Image output format - svg or png")
        .with_default(ParamDefault::Text("png")),
    ParameterSpec::optional("width", ParamKind::Number, "Image width")
        .with_default(ParamDefault::Number(600.0)),
    ParameterSpec::optional("height", ParamKind::Number, "Image height")
        .with_default(ParamDefault::Number(600.0)),
    ParameterSpec::optional(
        "backgroundColor",
        ParamKind::String,
        "Background of the chart canvas (rgb, color name, or url-encoded hex such as %23ff00ff)",
    )
    .with_default(ParamDefault::Text("transparent")),
];

const VARARG_PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec::optional("datasetName", ParamKind::String, "Name for this column"),
    ParameterSpec::optional("data", ParamKind::NumberArray, "Array of data"),
];

/// One named data series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetInput {
    pub name: Option<String>,
    pub data: Option<Vec<f64>>,
}

impl DatasetInput {
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: Some(name.into()),
            data: Some(data),
        }
    }
}

/// A chart of any type the service supports, with its data series.
///
/// `format`, `width`, `height` and `background_color` are accepted for
/// schema compatibility but do not appear in the chart definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartInput {
    pub chart_type: String,
    /// Either a string or a number list.
    pub x_axis_labels: Option<ParamValue>,
    pub format: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background_color: Option<String>,
    pub datasets: Vec<DatasetInput>,
}

/// The JSON chart definition embedded in the URL.
#[derive(Debug, Serialize)]
pub struct ChartSpec<'a> {
    #[serde(rename = "type")]
    pub chart_type: &'a str,
    pub data: ChartData<'a>,
}

#[derive(Debug, Serialize)]
pub struct ChartData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<&'a ParamValue>,
    pub datasets: Vec<Dataset<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Dataset<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_series"
    )]
    pub data: Option<&'a [f64]>,
}

fn serialize_series<S: Serializer>(values: &Option<&[f64]>, serializer: S) -> Result<S::Ok, S::Error> {
    match values {
        Some(values) => serialize_numbers(values, serializer),
        None => serializer.serialize_none(),
    }
}

impl ChartInput {
    pub fn new(chart_type: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            ..Default::default()
        }
    }

    pub fn with_labels(mut self, labels: impl Into<ParamValue>) -> Self {
        self.x_axis_labels = Some(labels.into());
        self
    }

    pub fn with_dataset(mut self, name: impl Into<String>, data: Vec<f64>) -> Self {
        self.datasets.push(DatasetInput::new(name, data));
        self
    }

    pub fn from_args(args: &Args<'_>) -> Result<Self, FormulaError> {
        let datasets = args
            .vararg_groups()
            .map(|start| -> Result<DatasetInput, FormulaError> {
                Ok(DatasetInput {
                    name: args.text(start)?,
                    data: args.number_list(start + 1)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            chart_type: args.required(0, args.text(0)?)?,
            x_axis_labels: args.any_list(1)?,
            format: args.text(2)?,
            width: args.number(3)?,
            height: args.number(4)?,
            background_color: args.text(5)?,
            datasets,
        })
    }

    pub fn spec(&self) -> ChartSpec<'_> {
        ChartSpec {
            chart_type: &self.chart_type,
            data: ChartData {
                labels: self.x_axis_labels.as_ref(),
                datasets: self
                    .datasets
                    .iter()
                    .map(|d| Dataset {
                        label: d.name.as_deref(),
                        data: d.data.as_deref(),
                    })
                    .collect(),
            },
        }
    }

    /// Builds the chart URL with a pretty-printed JSON definition.
    pub fn url(&self, config: &PackConfig) -> Result<String, FormulaError> {
        let json = serde_json::to_string_pretty(&self.spec())
            .map_err(|e| FormulaError::Serialization(e.to_string()))?;
        log::debug!(
            "Building '{}' chart URL with {} datasets",
            self.chart_type,
            self.datasets.len()
        );
        Ok(format!("{}{}", config.endpoint("chart?c="), json))
    }
}

/// Renders a generic Chart.js chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartFormula;

impl Formula for ChartFormula {
    fn name(&self) -> &str {
        "Chart"
    }

    fn description(&self) -> &str {
        "Generate a generic Chart image. More documentation: https://quickchart.io/documentation/#parameters"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    fn vararg_parameters(&self) -> &'static [ParameterSpec] {
        VARARG_PARAMETERS
    }

    // Always re-run.
    fn cache_ttl_secs(&self) -> Option<u32> {
        Some(0)
    }

    fn execute(&self, args: &Args<'_>, config: &PackConfig) -> Result<String, FormulaError> {
        ChartInput::from_args(args)?.url(config)
    }
}
