//! The rendering surface a [`crate::FormController`] drives.
//!
//! Controllers never look anything up themselves: field text, field error
//! slots and result slots are reached only through [`FormSurface`].
//! [`FormState`] is the in-memory implementation used by the web adapter and
//! by tests.

use segitiga_types::{Feature, FieldBinding, FieldName, ResultDisplay};
use std::collections::BTreeMap;

/// Read/write capabilities over the form markup.
pub trait FormSurface {
    /// Current raw text of `field`.
    fn read_field(&self, field: FieldName) -> String;

    /// Replaces the raw text of `field`.
    fn write_field(&mut self, field: FieldName, text: &str);

    /// Shows `message` in the error slot of `field`.
    fn show_field_error(&mut self, field: FieldName, message: &str);

    /// Empties and hides the error slot of `field`.
    fn clear_field_error(&mut self, field: FieldName);

    /// Replaces the result slot of `feature`.
    fn show_result(&mut self, feature: Feature, display: &ResultDisplay);
}

/// In-memory page state: every field binding plus one result slot per feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<FieldName, FieldBinding>,
    results: BTreeMap<Feature, ResultDisplay>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.into_iter().map(|f| (f, FieldBinding::new(f))).collect(),
            results: Feature::ALL.into_iter().map(|f| (f, ResultDisplay::default())).collect(),
        }
    }

    /// Builder-style variant of [`FormState::type_text`].
    pub fn with_raw(mut self, field: FieldName, text: impl Into<String>) -> Self {
        self.type_text(field, text);
        self
    }

    /// Sets a field's text the way a user typing would, leaving its error untouched.
    pub fn type_text(&mut self, field: FieldName, text: impl Into<String>) {
        self.binding_mut(field).raw = text.into();
    }

    pub fn field(&self, field: FieldName) -> &FieldBinding {
        &self.fields[&field]
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.field(field).error.as_deref()
    }

    pub fn result(&self, feature: Feature) -> &ResultDisplay {
        &self.results[&feature]
    }

    /// Bindings of `feature`, in display order.
    pub fn fields_of(&self, feature: Feature) -> impl Iterator<Item = &FieldBinding> {
        feature.fields().iter().map(move |f| self.field(*f))
    }

    fn binding_mut(&mut self, field: FieldName) -> &mut FieldBinding {
        self.fields.entry(field).or_insert_with(|| FieldBinding::new(field))
    }
}

impl FormSurface for FormState {
    fn read_field(&self, field: FieldName) -> String {
        self.field(field).raw.clone()
    }

    fn write_field(&mut self, field: FieldName, text: &str) {
        self.binding_mut(field).raw = text.to_string();
    }

    fn show_field_error(&mut self, field: FieldName, message: &str) {
        self.binding_mut(field).error = Some(message.to_string());
    }

    fn clear_field_error(&mut self, field: FieldName) {
        self.binding_mut(field).error = None;
    }

    fn show_result(&mut self, feature: Feature, display: &ResultDisplay) {
        self.results.insert(feature, display.clone());
    }
}
