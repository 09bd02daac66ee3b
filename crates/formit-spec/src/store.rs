use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::FieldTypeDescriptor;
use crate::spec::field::{FieldId, FieldPatch, FieldRecord};

/// Direction for [`FieldStore::move_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Ordered collection of field records. Insertion order is generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldStore {
    fields: Vec<FieldRecord>,
    selected: Option<FieldId>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from persisted records, keeping their ids.
    pub fn from_fields(fields: Vec<FieldRecord>, selected: Option<FieldId>) -> Self {
        let selected = selected.filter(|id| fields.iter().any(|field| &field.id == id));
        Self { fields, selected }
    }

    pub fn fields(&self) -> &[FieldRecord] {
        &self.fields
    }

    pub fn snapshot(&self) -> Vec<FieldRecord> {
        self.fields.clone()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, id: &FieldId) -> Option<&FieldRecord> {
        self.fields.iter().find(|field| &field.id == id)
    }

    fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|field| &field.id == id)
    }

    pub fn selected(&self) -> Option<&FieldId> {
        self.selected.as_ref()
    }

    /// Marks `id` as selected; an unknown id clears the selection.
    pub fn select(&mut self, id: &FieldId) {
        self.selected = self.position(id).map(|_| id.clone());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Appends a new record built from `descriptor` and selects it.
    pub fn add(&mut self, descriptor: &FieldTypeDescriptor) -> FieldRecord {
        let kind = descriptor.kind;
        let options = if kind.is_choice() {
            vec!["Option 1".to_string(), "Option 2".to_string()]
        } else {
            Vec::new()
        };
        let record = FieldRecord {
            id: self.fresh_id(),
            kind,
            label: descriptor.label.to_string(),
            name: kind.default_name(),
            placeholder: String::new(),
            required: false,
            validation_rule: None,
            options,
            css_class: "form-control".into(),
            description: String::new(),
            default_value: String::new(),
        };
        tracing::debug!(id = %record.id, kind = %kind, "field added");
        self.fields.push(record.clone());
        self.selected = Some(record.id.clone());
        record
    }

    /// Merges `patch` into the record with `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: &FieldId, patch: FieldPatch) {
        match self.fields.iter_mut().find(|field| &field.id == id) {
            Some(field) => {
                tracing::debug!(%id, "field updated");
                patch.apply_to(field);
            }
            None => tracing::warn!(%id, "update ignored: unknown field"),
        }
    }

    pub fn remove(&mut self, id: &FieldId) {
        let Some(index) = self.position(id) else {
            tracing::warn!(%id, "remove ignored: unknown field");
            return;
        };
        self.fields.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        tracing::debug!(%id, "field removed");
    }

    /// Copies the record with `id` right after itself, suffixing its name with `_copy`.
    pub fn duplicate(&mut self, id: &FieldId) -> Option<FieldRecord> {
        let index = self.position(id)?;
        let mut copy = self.fields[index].clone();
        copy.id = self.fresh_id();
        copy.name.push_str("_copy");
        self.fields.insert(index + 1, copy.clone());
        tracing::debug!(source = %id, id = %copy.id, "field duplicated");
        Some(copy)
    }

    /// Swaps the record with its neighbour; no-op at the boundaries.
    pub fn move_field(&mut self, id: &FieldId, direction: Direction) {
        let Some(index) = self.position(id) else {
            tracing::warn!(%id, "move ignored: unknown field");
            return;
        };
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|next| *next < self.fields.len()),
        };
        if let Some(target) = target {
            self.fields.swap(index, target);
            tracing::debug!(%id, ?direction, "field moved");
        }
    }

    pub fn into_parts(self) -> (Vec<FieldRecord>, Option<FieldId>) {
        (self.fields, self.selected)
    }

    fn fresh_id(&self) -> FieldId {
        loop {
            let id = FieldId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}
