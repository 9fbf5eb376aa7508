use crate::plugin::CalculatorPlugin;
use std::collections::HashMap;
use tracing::debug;

pub struct PluginManager {
    plugins: HashMap<String, Box<dyn CalculatorPlugin>>,
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginManager {
    pub fn new() -> Self {
        Self { plugins: HashMap::new() }
    }

    /// Registers `plugin`, replacing any plugin already registered under the same name.
    pub fn register(&mut self, plugin: Box<dyn CalculatorPlugin>) {
        let name = plugin.name().to_string();
        if self.plugins.insert(name.clone(), plugin).is_some() {
            debug!(calculator = %name, "Replaced registered calculator");
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn CalculatorPlugin> {
        self.plugins.get(name).map(|p| p.as_ref())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
