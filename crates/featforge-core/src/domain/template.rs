//! Template rendering context.
//!
//! A **Value Object** carrying everything a template body needs: the derived
//! name forms plus any strategy-supplied variables (import spellings, DI
//! snippets). Template bodies are plain string literals with `{{VARIABLE}}`
//! placeholders over a fixed schema, so correctness of a body is testable
//! independently of how it gets stitched together.
//!
//! ## Built-in Variables
//!
//! | Variable | Example | Source |
//! |----------|---------|--------|
//! | `PASCAL` | "OrderHistory" | `NameForms::pascal` |
//! | `CAMEL`  | "orderHistory" | `NameForms::camel` |
//! | `SNAKE`  | "order_history" | `NameForms::snake` |
//! | `LOWER`  | "orderhistory" | lowercased pascal, package segments |

use std::collections::HashMap;

use crate::domain::names::NameForms;

/// Context for template rendering.
///
/// Immutable after creation; transformations create new instances (see
/// [`TemplateContext::with_var`]).
#[derive(Debug, Clone)]
pub struct TemplateContext {
    names: NameForms,
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a context seeded with the standard name-form variables.
    ///
    /// These four are the contract between featforge and every template
    /// body; any body using `{{PASCAL}}` can expect it to exist.
    pub fn new(names: NameForms) -> Self {
        let mut vars = HashMap::new();
        vars.insert("PASCAL".to_string(), names.pascal.clone());
        vars.insert("CAMEL".to_string(), names.camel.clone());
        vars.insert("SNAKE".to_string(), names.snake.clone());
        vars.insert("LOWER".to_string(), names.package_segment());

        Self {
            names,
            variables: vars,
        }
    }

    /// Add a strategy- or catalog-supplied variable, consuming self.
    ///
    /// Later insertions win, so a strategy can in principle shadow a
    /// built-in. Discouraged, but harmless.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// The name forms this context was built from.
    pub fn names(&self) -> &NameForms {
        &self.names
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template body by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is; template bodies are Kotlin, Java,
    /// Dart or XML source, so literal single braces pass through untouched.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
