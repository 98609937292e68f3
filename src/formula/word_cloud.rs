use super::{Args, Formula};
use crate::config::PackConfig;
use crate::error::FormulaError;
use crate::params::{ParamDefault, ParamKind, ParameterSpec, format_number};
use crate::query::{QueryBuilder, encode_uri};

const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec::required("text", ParamKind::String, "The text to turn into a word cloud."),
    ParameterSpec::optional("format", ParamKind::String, "Image output format - svg or png")
        .with_default(ParamDefault::Text("png")),
    ParameterSpec::optional("width", ParamKind::Number, "Image width")
        .with_default(ParamDefault::Number(600.0)),
    ParameterSpec::optional("height", ParamKind::Number, "Image height")
        .with_default(ParamDefault::Number(600.0)),
    ParameterSpec::optional(
        "backgroundColor",
        ParamKind::String,
        "Background color of image (rgb, hsl, hex, or name value)",
    )
    .with_default(ParamDefault::Text("transparent")),
    ParameterSpec::optional("fontFamily", ParamKind::String, "Font family to use")
        .with_default(ParamDefault::Text("serif")),
    ParameterSpec::optional("fontScale", ParamKind::Number, "Size of the largest font (roughly)")
        .with_default(ParamDefault::Number(25.0)),
    ParameterSpec::optional(
        "scale",
        ParamKind::String,
        "Frequency scaling method - linear, sqrt, or log",
    )
    .with_default(ParamDefault::Text("linear")),
    ParameterSpec::optional("padding", ParamKind::Number, "Padding between words, in pixels")
        .with_default(ParamDefault::Number(1.0)),
    ParameterSpec::optional("rotation", ParamKind::Number, "Maximum angle of rotation for words")
        .with_default(ParamDefault::Number(0.0)),
    ParameterSpec::optional(
        "maxNumWords",
        ParamKind::Number,
        "Maximum number of words to show. Fewer may be shown depending on size.",
    )
    .with_default(ParamDefault::Number(200.0)),
    ParameterSpec::optional(
        "minNumWords",
        ParamKind::Number,
        "Minimum character length of each word to include",
    )
    .with_default(ParamDefault::Number(1.0)),
    ParameterSpec::optional(
        "case",
        ParamKind::String,
        "Force words to this case - upper, lower, or none",
    )
    .with_default(ParamDefault::Text("lower")),
    ParameterSpec::optional(
        "colors",
        ParamKind::String,
        "List of colors for words in JSON format, assigned randomly. e.g. [\"red\", \"#00ff00\"]",
    )
    .with_default(ParamDefault::Text("random")),
    ParameterSpec::optional(
        "removeStopwords",
        ParamKind::Boolean,
        "If true, remove common words from the cloud",
    )
    .with_default(ParamDefault::Boolean(false)),
    ParameterSpec::optional(
        "language",
        ParamKind::String,
        "Two-letter language code of stopwords to remove",
    )
    .with_default(ParamDefault::Text("en")),
    ParameterSpec::optional(
        "useWordList",
        ParamKind::Boolean,
        "If true, treat text as a comma-separated list of words or phrases",
    )
    .with_default(ParamDefault::Boolean(false)),
];

/// Options of a word cloud image. Unset options are left out of the URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordCloudInput {
    pub text: String,
    pub format: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background_color: Option<String>,
    pub font_family: Option<String>,
    pub font_scale: Option<f64>,
    pub scale: Option<String>,
    pub padding: Option<f64>,
    pub rotation: Option<f64>,
    pub max_num_words: Option<f64>,
    pub min_num_words: Option<f64>,
    pub case: Option<String>,
    /// Passed through as given; usually a JSON list of color names.
    pub colors: Option<String>,
    pub remove_stopwords: Option<bool>,
    pub language: Option<String>,
    pub use_word_list: Option<bool>,
}

impl WordCloudInput {
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
            width: args.number(2)?,
            height: args.number(3)?,
            background_color: args.text(4)?,
            font_family: args.text(5)?,
            font_scale: args.number(6)?,
            scale: args.text(7)?,
            padding: args.number(8)?,
            rotation: args.number(9)?,
            max_num_words: args.number(10)?,
            min_num_words: args.number(11)?,
            case: args.text(12)?,
            colors: args.text(13)?,
            remove_stopwords: args.boolean(14)?,
            language: args.text(15)?,
            use_word_list: args.boolean(16)?,
        })
    }

    fn query(&self) -> QueryBuilder {
        let number = |n: Option<f64>| n.map(format_number);
        let mut query = QueryBuilder::new();
        query
            .push("text", &self.text)
            .push_opt("format", self.format.as_ref())
            .push_opt("width", number(self.width))
            .push_opt("height", number(self.height))
            .push_opt("backgroundColor", self.background_color.as_ref())
            .push_opt("fontFamily", self.font_family.as_ref())
            .push_opt("fontScale", number(self.font_scale))
            .push_opt("scale", self.scale.as_ref())
            .push_opt("padding", number(self.padding))
            .push_opt("rotation", number(self.rotation))
            .push_opt("maxNumWords", number(self.max_num_words))
            .push_opt("minNumWords", number(self.min_num_words))
            .push_opt("case", self.case.as_ref())
            .push_opt("colors", self.colors.as_ref())
            .push_opt("removeStopwords", self.remove_stopwords)
            .push_opt("language", self.language.as_ref())
            .push_opt("useWordList", self.use_word_list);
        query
    }

    /// Builds the percent-encoded word cloud URL.
    pub fn url(&self, config: &PackConfig) -> String {
        let query = self.query();
        log::debug!("Building word cloud URL with {} options", query.len());
        encode_uri(&query.to_url(&config.endpoint("wordcloud?")))
    }
}

/// Renders text as a word cloud image.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCloudFormula;

impl Formula for WordCloudFormula {
    fn name(&self) -> &str {
        "WordCloud"
    }

    fn description(&self) -> &str {
        "Generate a QuickChart Word Cloud image. More documentation: https://quickchart.io/documentation/word-cloud-api/"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    fn execute(&self, args: &Args<'_>, config: &PackConfig) -> Result<String, FormulaError> {
        Ok(WordCloudInput::from_args(args)?.url(config))
    }
}
