//! PromptBuilder -- template registry and interpolation.

use std::collections::HashMap;

use dineai_types::error::PromptError;
use dineai_types::form::FormInput;

use super::library::builtin_bodies;
use super::template::PromptTemplate;

/// Maps template ids to parsed templates and renders them.
///
/// Built once at startup and shared read-only by every pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    templates: HashMap<String, PromptTemplate>,
}

impl PromptBuilder {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in feature and insight template.
    pub fn builtin() -> Result<Self, PromptError> {
        let mut builder = Self::new();
        for (id, body) in builtin_bodies() {
            builder.register(PromptTemplate::new(id, body)?);
        }
        Ok(builder)
    }

    /// Add or replace a template, returning the one it replaced.
    pub fn register(&mut self, template: PromptTemplate) -> Option<PromptTemplate> {
        self.templates.insert(template.id().to_string(), template)
    }

    pub fn template(&self, id: &str) -> Option<&PromptTemplate> {
        self.templates.get(id)
    }

    /// Render template `template_id` with `values`.
    pub fn build(&self, template_id: &str, values: &FormInput) -> Result<String, PromptError> {
        self.templates
            .get(template_id)
            .ok_or_else(|| PromptError::UnknownTemplate(template_id.to_string()))?
            .render(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::library::ids;

    #[test]
    fn test_builtin_registers_all_templates() {
        let builder = PromptBuilder::builtin().unwrap();
        for (id, _) in builtin_bodies() {
            assert!(builder.template(id).is_some(), "template {id} missing");
        }
    }

    #[test]
    fn test_build_event_plan() {
        let builder = PromptBuilder::builtin().unwrap();
        let values = FormInput::new()
            .with("occasion", "Wedding")
            .with("people", 50)
            .with("cuisine", "Mixed")
            .with("drinks", "Mocktails")
            .with("budget", "$5000");

        let prompt = builder.build(ids::EVENT_PLAN, &values).unwrap();
        assert!(prompt.contains("- Occasion: Wedding"));
        assert!(prompt.contains("- Guests: 50"));
        assert!(prompt.contains("- Cuisine: Mixed"));
        assert!(prompt.contains("- Drinks: Mocktails"));
        assert!(prompt.contains("- Budget: $5000"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = PromptBuilder::builtin().unwrap();
        let values = FormInput::new().with("user_input", "How many tables for 40 people?");
        let a = builder.build(ids::CHATBOT, &values).unwrap();
        let b = builder.build(ids::CHATBOT, &values).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_template() {
        let builder = PromptBuilder::new();
        assert_eq!(
            builder.build("nope", &FormInput::new()),
            Err(PromptError::UnknownTemplate("nope".to_string()))
        );
    }

    #[test]
    fn test_missing_field_is_reported() {
        let builder = PromptBuilder::builtin().unwrap();
        let values = FormInput::new().with("leftover_type", "Rice");
        assert_eq!(
            builder.build(ids::LEFTOVER_OPTIMIZATION, &values),
            Err(PromptError::MissingField("quantity".to_string()))
        );
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut builder = PromptBuilder::builtin().unwrap();
        let replaced = builder.register(PromptTemplate::new(ids::CHATBOT, "Q: {user_input}").unwrap());
        assert!(replaced.is_some());

        let values = FormInput::new().with("user_input", "hi");
        assert_eq!(builder.build(ids::CHATBOT, &values).unwrap(), "Q: hi");
    }
}
