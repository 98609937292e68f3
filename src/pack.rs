use crate::config::{PackConfig, normalize_base_url};
use crate::error::FormulaError;
use crate::formula::{Args, Formula, create_formula_by_name, register_default_formulas};
use crate::palette::ColorPalette;
use crate::params::ParamValue;
use ahash::AHashMap;

/// A set of named formulas sharing one configuration.
pub struct FormulaPack {
    config: PackConfig,
    registry: AHashMap<String, Box<dyn Formula>>,
}

pub struct FormulaPackBuilder {
    config: PackConfig,
    registry: AHashMap<String, Box<dyn Formula>>,
}

impl FormulaPackBuilder {
    pub fn new() -> Self {
        let mut registry: AHashMap<String, Box<dyn Formula>> = AHashMap::new();
        register_default_formulas(&mut registry);
        Self {
            config: PackConfig::default(),
            registry,
        }
    }

    pub fn with_config(mut self, config: PackConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = normalize_base_url(base_url);
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.config.palette = palette;
        self
    }

    /// Exposes a built-in formula under another name, e.g. a namespaced one.
    pub fn with_alias(mut self, alias: &str, formula_name: &str) -> Self {
        match create_formula_by_name(formula_name) {
            Some(formula) => {
                self.registry.insert(alias.to_string(), formula);
            }
            None => log::warn!(
                "Cannot alias '{}': no built-in formula named '{}'",
                alias,
                formula_name
            ),
        }
        self
    }

    pub fn with_formula(mut self, formula: Box<dyn Formula>) -> Self {
        self.registry.insert(formula.name().to_string(), formula);
        self
    }

    pub fn build(self) -> FormulaPack {
        FormulaPack {
            config: self.config,
            registry: self.registry,
        }
    }
}

impl Default for FormulaPackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for FormulaPack {
    fn default() -> Self {
        FormulaPackBuilder::new().build()
    }
}

impl FormulaPack {
    pub fn builder() -> FormulaPackBuilder {
        FormulaPackBuilder::new()
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formula> {
        self.registry.get(name).map(|f| f.as_ref())
    }

    /// Registered names, sorted for stable listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Runs the formula registered under `name` with positional arguments.
    pub fn execute(&self, name: &str, values: &[Option<ParamValue>]) -> Result<String, FormulaError> {
        let formula = self
            .get(name)
            .ok_or_else(|| FormulaError::UnknownFormula(name.to_string()))?;
        let args = Args::new(formula, values)?;
        let url = formula.execute(&args, &self.config)?;
        log::debug!("{} produced a {} byte URL", name, url.len());
        Ok(url)
    }
}
