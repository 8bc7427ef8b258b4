use super::component::SelectMenuTag;
use super::ComponentType;
use crate::guild::Emoji;
use crate::{json, BoxError, ModelError, Nullable, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Applies to labels, values, descriptions, placeholders and custom ids.
pub const MAX_TEXT_LENGTH: usize = 100;
pub const MAX_OPTIONS: usize = 25;
pub const MAX_VALUES: u8 = 25;

/// Called with the values the user picked. The output is what the framework
/// sends back as the interaction response.
pub type SelectHandler = Arc<dyn Fn(&[Box<str>]) -> Result<Value> + Send + Sync>;

#[derive(Serialize, Deserialize, Clone)]
pub struct SelectMenu {
    #[serde(rename = "type", default)]
    kind: SelectMenuTag,
    pub custom_id: Box<str>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub options: Nullable<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub placeholder: Nullable<Box<str>>,
    /// 0-25, defaults to 1
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub min_values: Nullable<u8>,
    /// 1-25, defaults to 1
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub max_values: Nullable<u8>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub disabled: Nullable<bool>,
    #[serde(skip)]
    handler: Option<SelectHandler>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: Box<str>,
    pub value: Box<str>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub description: Nullable<Box<str>>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub emoji: Nullable<Emoji>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub default: Nullable<bool>,
}

impl SelectMenu {
    pub fn new(custom_id: impl Into<Box<str>>) -> SelectMenu {
        SelectMenu {
            kind: SelectMenuTag::default(),
            custom_id: custom_id.into(),
            options: Nullable::Missing,
            placeholder: Nullable::Missing,
            min_values: Nullable::Missing,
            max_values: Nullable::Missing,
            disabled: Nullable::Missing,
            handler: None,
        }
    }

    pub fn from_value(value: Value) -> Result<SelectMenu> {
        json::from_value(value)
    }

    pub fn kind(&self) -> ComponentType {
        ComponentType::SelectMenu
    }

    pub fn placeholder(mut self, placeholder: impl Into<Box<str>>) -> SelectMenu {
        self.placeholder = Nullable::Present(placeholder.into());
        self
    }

    pub fn value_range(mut self, min_values: u8, max_values: u8) -> SelectMenu {
        self.min_values = Nullable::Present(min_values);
        self.max_values = Nullable::Present(max_values);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> SelectMenu {
        self.disabled = Nullable::Present(disabled);
        self
    }

    pub fn min_values(&self) -> u8 {
        self.min_values.unwrap_or(1)
    }

    pub fn max_values(&self) -> u8 {
        self.max_values.unwrap_or(1)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    pub fn with_handler<F, R>(mut self, handler: F) -> SelectMenu
    where
        F: Fn(&[Box<str>]) -> std::result::Result<R, BoxError> + Send + Sync + 'static,
        R: Serialize + 'static,
    {
        let handler: SelectHandler = Arc::new(move |values: &[Box<str>]| -> Result<Value> {
            let output = handler(values).map_err(ModelError::HandlerError)?;
            json::to_value(&output)
        });

        self.handler = Some(handler);
        self
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Forwards the selected values to the bound handler and returns its output.
    pub fn invoke(&self, values: &[Box<str>]) -> Result<Value> {
        let handler = self
            .handler
            .as_ref()
            .ok_or_else(|| ModelError::NoHandler(self.custom_id.clone()))?;

        debug!(custom_id = %self.custom_id, values = values.len(), "Invoking select menu handler");

        handler(values)
    }

    /// Returns a copy of this menu with `options` replaced. The receiver is not modified.
    pub fn with_options<I>(&self, options: I) -> SelectMenu
    where
        I: IntoIterator<Item = SelectOption>,
    {
        let mut copy = self.clone();
        copy.options = Nullable::Present(options.into_iter().collect());

        trace!(custom_id = %self.custom_id, "Replaced select menu options");
        copy
    }

    /// Returns a copy of this menu with `options` appended to the existing ones.
    /// Fails if this menu has no options set.
    pub fn with_appended_options<I>(&self, options: I) -> Result<SelectMenu>
    where
        I: IntoIterator<Item = SelectOption>,
    {
        if !self.options.is_present() {
            return ModelError::NothingToAppend(self.custom_id.clone()).into();
        }

        let mut copy = self.clone();
        if let Nullable::Present(existing) = &mut copy.options {
            existing.extend(options);
        }

        trace!(custom_id = %self.custom_id, "Appended select menu options");
        Ok(copy)
    }

    /// Checks the limits discord enforces on select menus.
    pub fn validate(&self) -> Result<()> {
        check_text("custom_id", &self.custom_id)?;

        if let Some(placeholder) = self.placeholder.as_option() {
            check_length("placeholder", placeholder)?;
        }

        if let Some(options) = self.options.as_option() {
            if options.len() > MAX_OPTIONS {
                return ModelError::TooMany {
                    field: "options",
                    max: MAX_OPTIONS,
                    actual: options.len(),
                }
                .into();
            }

            options.iter().try_for_each(SelectOption::validate)?;
        }

        let max_values = self.max_values();
        if !(1..=MAX_VALUES).contains(&max_values) {
            return ModelError::OutOfRange {
                field: "max_values",
                min: 1,
                max: MAX_VALUES,
                actual: max_values,
            }
            .into();
        }

        let min_values = self.min_values();
        if min_values > max_values {
            return ModelError::OutOfRange {
                field: "min_values",
                min: 0,
                max: max_values,
                actual: min_values,
            }
            .into();
        }

        Ok(())
    }
}

impl SelectOption {
    pub fn new(label: impl Into<Box<str>>, value: impl Into<Box<str>>) -> SelectOption {
        SelectOption {
            label: label.into(),
            value: value.into(),
            description: Nullable::Missing,
            emoji: Nullable::Missing,
            default: Nullable::Missing,
        }
    }

    pub fn description(mut self, description: impl Into<Box<str>>) -> SelectOption {
        self.description = Nullable::Present(description.into());
        self
    }

    pub fn emoji(mut self, emoji: Emoji) -> SelectOption {
        self.emoji = Nullable::Present(emoji);
        self
    }

    pub fn default(mut self, default: bool) -> SelectOption {
        self.default = Nullable::Present(default);
        self
    }

    pub fn from_value(value: Value) -> Result<SelectOption> {
        json::from_value(value)
    }

    pub fn is_default(&self) -> bool {
        self.default.unwrap_or(false)
    }

    /// Besides the text limits, the emoji may only carry id, name and animated.
    pub fn validate(&self) -> Result<()> {
        check_text("label", &self.label)?;
        check_text("value", &self.value)?;

        if let Some(description) = self.description.as_option() {
            check_length("description", description)?;
        }

        if let Some(emoji) = self.emoji.as_option() {
            if !emoji.is_partial() {
                return ModelError::NotPartialEmoji("emoji").into();
            }
        }

        Ok(())
    }
}

fn check_text(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return ModelError::EmptyField(field).into();
    }

    check_length(field, value)
}

fn check_length(field: &'static str, value: &str) -> Result<()> {
    let actual = value.chars().count();
    if actual > MAX_TEXT_LENGTH {
        return ModelError::TooLong {
            field,
            max: MAX_TEXT_LENGTH,
            actual,
        }
        .into();
    }

    Ok(())
}

// handler is left out, closures have no meaningful equality
impl PartialEq for SelectMenu {
    fn eq(&self, other: &Self) -> bool {
        self.custom_id == other.custom_id
            && self.options == other.options
            && self.placeholder == other.placeholder
            && self.min_values == other.min_values
            && self.max_values == other.max_values
            && self.disabled == other.disabled
    }
}

impl fmt::Debug for SelectMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectMenu")
            .field("type", &self.kind())
            .field("custom_id", &self.custom_id)
            .field("options", &self.options)
            .field("placeholder", &self.placeholder)
            .field("min_values", &self.min_values)
            .field("max_values", &self.max_values)
            .field("disabled", &self.disabled)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
