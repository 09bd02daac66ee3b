use serde::Serialize;
use thiserror::Error;

use crate::spec::field::{FieldCategory, FieldType};

/// Catalog entry describing one kind of input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldTypeDescriptor {
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub label: &'static str,
    pub category: FieldCategory,
}

static CATALOG: [FieldTypeDescriptor; 11] = [
    descriptor(FieldType::Text, "Text Input", FieldCategory::Basic),
    descriptor(FieldType::Email, "Email", FieldCategory::Basic),
    descriptor(FieldType::Tel, "Phone", FieldCategory::Basic),
    descriptor(FieldType::Textarea, "Textarea", FieldCategory::Basic),
    descriptor(FieldType::Select, "Dropdown", FieldCategory::Choice),
    descriptor(FieldType::Checkbox, "Checkbox", FieldCategory::Choice),
    descriptor(FieldType::Radio, "Radio Buttons", FieldCategory::Choice),
    descriptor(FieldType::Date, "Date", FieldCategory::Advanced),
    descriptor(FieldType::Number, "Number", FieldCategory::Advanced),
    descriptor(FieldType::File, "File Upload", FieldCategory::Advanced),
    descriptor(FieldType::Hidden, "Hidden Field", FieldCategory::Advanced),
];

const fn descriptor(
    kind: FieldType,
    label: &'static str,
    category: FieldCategory,
) -> FieldTypeDescriptor {
    FieldTypeDescriptor {
        kind,
        label,
        category,
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown field type '{0}'")]
    UnknownType(String),
}

/// All supported field types in display order.
pub fn all() -> &'static [FieldTypeDescriptor] {
    &CATALOG
}

/// Descriptors of one category, catalog order preserved.
pub fn by_category(category: FieldCategory) -> impl Iterator<Item = &'static FieldTypeDescriptor> {
    CATALOG
        .iter()
        .filter(move |descriptor| descriptor.category == category)
}

pub fn lookup(kind: FieldType) -> &'static FieldTypeDescriptor {
    &CATALOG[slot(kind)]
}

/// Position of `kind` in `CATALOG`.
const fn slot(kind: FieldType) -> usize {
    match kind {
        FieldType::Text => 0,
        FieldType::Email => 1,
        FieldType::Tel => 2,
        FieldType::Textarea => 3,
        FieldType::Select => 4,
        FieldType::Checkbox => 5,
        FieldType::Radio => 6,
        FieldType::Date => 7,
        FieldType::Number => 8,
        FieldType::File => 9,
        FieldType::Hidden => 10,
    }
}

/// Resolves a type id such as `"email"` to its descriptor.
pub fn find(type_id: &str) -> Result<&'static FieldTypeDescriptor, CatalogError> {
    let needle = type_id.trim().to_lowercase();
    CATALOG
        .iter()
        .find(|descriptor| descriptor.kind.as_str() == needle)
        .ok_or_else(|| CatalogError::UnknownType(type_id.to_string()))
}
