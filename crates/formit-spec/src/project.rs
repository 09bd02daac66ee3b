use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    render::{RenderedArtifacts, render_all},
    spec::{
        field::{FieldId, FieldRecord},
        settings::{SettingsRecord, SettingsStore},
    },
    store::FieldStore,
};

/// Persistable pair of store snapshots edited by a presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Project {
    #[serde(default)]
    pub settings: SettingsRecord,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<FieldId>,
}

impl Project {
    /// Splits the project into live stores.
    pub fn into_stores(self) -> (FieldStore, SettingsStore) {
        (
            FieldStore::from_fields(self.fields, self.selected),
            SettingsStore::new(self.settings),
        )
    }

    /// Captures the current state of both stores.
    pub fn from_stores(fields: &FieldStore, settings: &SettingsStore) -> Self {
        Self {
            settings: settings.snapshot(),
            fields: fields.snapshot(),
            selected: fields.selected().cloned(),
        }
    }

    pub fn render(&self) -> RenderedArtifacts {
        render_all(&self.fields, &self.settings)
    }
}
