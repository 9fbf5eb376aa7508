use crate::built_in::{area::AreaCalculator, perimeter::PerimeterCalculator};
use crate::plugin::{CalculationResult, CalculatorPlugin, ValidatedInputs};
use crate::plugin_manager::PluginManager;
use segitiga_types::{FieldName, Locale, SegitigaError, SegitigaResult};
use tracing::{debug, instrument};

pub struct Calculator {
    plugin_manager: PluginManager,
    locale: Locale,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_locale(Locale::default())
    }

    /// Registers the built-in calculators with failure messages in `locale`.
    pub fn with_locale(locale: Locale) -> Self {
        let mut plugin_manager = PluginManager::new();
        plugin_manager.register(Box::new(AreaCalculator::new(locale)));
        plugin_manager.register(Box::new(PerimeterCalculator::new(locale)));
        Self { plugin_manager, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn register(&mut self, plugin: Box<dyn CalculatorPlugin>) {
        self.plugin_manager.register(plugin);
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugin_manager.names()
    }

    pub fn required_fields(&self, calculator_name: &str) -> SegitigaResult<&'static [FieldName]> {
        self.plugin(calculator_name).map(|plugin| plugin.required_fields())
    }

    #[instrument(skip(self, inputs), fields(inputs = inputs.len()))]
    pub fn calculate(&self, calculator_name: &str, inputs: &ValidatedInputs) -> CalculationResult {
        let outcome = self.plugin(calculator_name)?.calculate(inputs)?;
        debug!(success = outcome.is_success(), "Calculation finished");
        Ok(outcome)
    }

    fn plugin(&self, calculator_name: &str) -> SegitigaResult<&dyn CalculatorPlugin> {
        self.plugin_manager
            .get(calculator_name)
            .ok_or_else(|| SegitigaError::UnknownCalculator { name: calculator_name.to_string() })
    }
}
