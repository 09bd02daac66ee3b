use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported field input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    Number,
    File,
    Hidden,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Tel => "tel",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::File => "file",
            FieldType::Hidden => "hidden",
        }
    }

    /// Whether records of this kind carry an `options` list.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            FieldType::Select | FieldType::Checkbox | FieldType::Radio
        )
    }

    /// Name given to freshly added fields of this kind.
    pub fn default_name(&self) -> String {
        match self {
            FieldType::Email => "email".into(),
            FieldType::Tel => "phone".into(),
            other => other.as_str().to_lowercase(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    Basic,
    Choice,
    Advanced,
}

impl FieldCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCategory::Basic => "basic",
            FieldCategory::Choice => "choice",
            FieldCategory::Advanced => "advanced",
        }
    }
}

/// Opaque identity of a field record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Allocates a fresh identifier backed by a random v4 UUID.
    pub fn generate() -> Self {
        FieldId(format!("field_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        FieldId(value.to_string())
    }
}

impl From<String> for FieldId {
    fn from(value: String) -> Self {
        FieldId(value)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One form-input definition managed by the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub label: String,
    pub name: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub required: bool,
    #[serde(
        rename = "validation",
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    #[schemars(with = "String")]
    pub validation_rule: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub css_class: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_value: String,
}

impl FieldRecord {
    /// Custom rule text, if one is set and non-empty.
    pub fn custom_rule(&self) -> Option<&str> {
        self.validation_rule
            .as_deref()
            .filter(|rule| !rule.is_empty())
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|rule| !rule.is_empty()))
}

fn none_as_empty<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

/// Partial update applied to a [`FieldRecord`]; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(
        rename = "validation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub validation_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl FieldPatch {
    /// Builds an options list from one-option-per-line text, dropping blank lines.
    pub fn options_from_lines(text: &str) -> Vec<String> {
        text.split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == FieldPatch::default()
    }

    /// Merges the patch into `record`, last write wins.
    pub fn apply_to(self, record: &mut FieldRecord) {
        if let Some(label) = self.label {
            record.label = label;
        }
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(placeholder) = self.placeholder {
            record.placeholder = placeholder;
        }
        if let Some(required) = self.required {
            record.required = required;
        }
        if let Some(rule) = self.validation_rule {
            record.validation_rule = Some(rule).filter(|rule| !rule.is_empty());
        }
        // options only exist on choice kinds
        if let Some(options) = self.options
            && record.kind.is_choice()
        {
            record.options = options;
        }
        if let Some(css_class) = self.css_class {
            record.css_class = css_class;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(default_value) = self.default_value {
            record.default_value = default_value;
        }
    }
}
