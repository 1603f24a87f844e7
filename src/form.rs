//! Form state and validation for an interactive front end.
//!
//! A front end keeps a [`FormState`] value, updates it as the user picks a
//! source type and types into fields, and calls [`render`] to obtain the
//! reference. `render` is a pure function of the state and the formatter; it
//! checks required fields before handing the values to the core.
//!
//! # Example
//!
//! ```
//! use harvref::{HarvardFormatter, SourceType, ValidationError, ReferenceError};
//! use harvref::form::{FormState, render};
//!
//! let mut state = FormState::new();
//! state.select(SourceType::Book);
//! state.set("authors", "John Smith, Jane Doe");
//! state.set("year", "2020");
//! state.set("title", "Design Patterns");
//!
//! let formatter = HarvardFormatter::new();
//! let err = render(&state, &formatter).unwrap_err();
//! assert!(matches!(
//!     err,
//!     ReferenceError::Validation(ValidationError::MissingFields { .. })
//! ));
//!
//! state.set("place", "London");
//! state.set("publisher", "Pearson");
//! let reference = render(&state, &formatter).unwrap();
//! assert_eq!(
//!     reference.text(),
//!     "Smith, J. and Doe, J. (2020) Design Patterns. London: Pearson."
//! );
//! ```

use crate::author::split_author_string;
use crate::error::{ReferenceError, ValidationError, fields};
use crate::schema::Requirement;
use crate::{FormattedReference, HarvardFormatter, ReferenceInput, SourceType};
use std::collections::BTreeMap;

/// Fields whose requirement is not met by `input`, in schema order.
///
/// A field counts as missing when it is absent or blank. An
/// [`Requirement::EitherOf`] pair is reported once, under its first member,
/// when neither member has a value.
pub fn missing_fields(source_type: SourceType, input: &ReferenceInput) -> Vec<&'static str> {
    let mut missing = Vec::new();
    for rule in source_type.schema().fields {
        let absent = input.is_blank(rule.name);
        match rule.requirement {
            Requirement::Required if absent => missing.push(rule.name),
            Requirement::EitherOf(other) if absent && input.is_blank(other) => {
                if !missing.contains(&other) {
                    missing.push(rule.name);
                }
            }
            _ => {}
        }
    }
    missing
}

/// Values collected by a form for the currently selected source type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    selected: Option<SourceType>,
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    /// Create a state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected source type.
    pub fn selected(&self) -> Option<SourceType> {
        self.selected
    }

    /// Select a source type. Values entered for the previous type are dropped.
    pub fn select(&mut self, source_type: SourceType) -> &mut Self {
        if self.selected != Some(source_type) {
            self.values.clear();
        }
        self.selected = Some(source_type);
        self
    }

    /// The field names to show for the current selection.
    pub fn fields(&self) -> Vec<&'static str> {
        self.selected
            .map(|source_type| source_type.schema().field_names().collect())
            .unwrap_or_default()
    }

    /// Store a trimmed value for a field of the selected source type.
    ///
    /// Returns `false` (and stores nothing) when no source type is selected or
    /// the field is not part of its schema.
    pub fn set(&mut self, field: &str, value: &str) -> bool {
        let Some(source_type) = self.selected else {
            return false;
        };
        let Some(name) = source_type.schema().field_names().find(|name| *name == field) else {
            tracing::debug!(field, %source_type, "ignoring value for unrecognised field");
            return false;
        };
        self.values.insert(name, value.trim().to_string());
        true
    }

    /// The value entered for a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Empty every field, keeping the selection.
    pub fn clear(&mut self) -> &mut Self {
        self.values.clear();
        self
    }

    /// Convert the entered values into formatter input.
    ///
    /// The raw authors value is split on commas into a list, so the list
    /// policy applies.
    pub fn to_input(&self) -> ReferenceInput {
        let mut input = ReferenceInput::new();
        for (&name, value) in &self.values {
            if name == fields::AUTHORS {
                input.insert(name, split_author_string(value));
            } else {
                input.insert(name, value.as_str());
            }
        }
        input
    }
}

/// Validate the form and format its reference.
///
/// # Errors
///
/// - [`ValidationError::NoSourceSelected`] when no source type is selected.
/// - [`ValidationError::MissingFields`] when required fields are blank.
pub fn render(
    state: &FormState,
    formatter: &HarvardFormatter,
) -> Result<FormattedReference, ReferenceError> {
    let source_type = state.selected.ok_or(ValidationError::NoSourceSelected)?;
    let input = state.to_input();

    let missing = missing_fields(source_type, &input);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields {
            source_type,
            fields: missing,
        }
        .into());
    }

    Ok(formatter.format(source_type, &input))
}
