use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    project::Project,
    render::{Artifact, render_all},
    spec::{field::FieldRecord, settings::SettingsRecord},
};

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to encode bundle: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode bundle: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("embedded {artifact} does not match the regenerated output")]
    Drift { artifact: &'static str },
}

/// Complete export: the project data plus every generated artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportBundle {
    pub settings: SettingsRecord,
    pub fields: Vec<FieldRecord>,
    pub formit_code: String,
    pub html: String,
    pub email_template: String,
}

impl ExportBundle {
    pub fn build(fields: &[FieldRecord], settings: &SettingsRecord) -> Self {
        let rendered = render_all(fields, settings);
        Self {
            settings: settings.clone(),
            fields: fields.to_vec(),
            formit_code: rendered.formit_code,
            html: rendered.html,
            email_template: rendered.email_template,
        }
    }

    pub fn from_project(project: &Project) -> Self {
        Self::build(&project.fields, &project.settings)
    }

    pub fn embedded(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::Snippet => &self.formit_code,
            Artifact::Html => &self.html,
            Artifact::EmailTemplate => &self.email_template,
        }
    }

    /// Artifacts whose embedded text differs from a fresh render of the embedded data.
    pub fn drifted_artifacts(&self) -> Vec<Artifact> {
        let rendered = render_all(&self.fields, &self.settings);
        Artifact::ALL
            .into_iter()
            .filter(|artifact| rendered.get(*artifact) != self.embedded(*artifact))
            .collect()
    }

    /// Fails on the first artifact that no longer round-trips.
    pub fn verify(&self) -> Result<(), BundleError> {
        match self.drifted_artifacts().first() {
            Some(artifact) => Err(BundleError::Drift {
                artifact: artifact.as_str(),
            }),
            None => Ok(()),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, BundleError> {
        serde_json::to_string_pretty(self).map_err(BundleError::Encode)
    }

    pub fn from_json(json: &str) -> Result<Self, BundleError> {
        serde_json::from_str(json).map_err(BundleError::Decode)
    }
}

/// JSON schema describing the exported bundle.
pub fn bundle_schema() -> Value {
    serde_json::to_value(schemars::schema_for!(ExportBundle)).unwrap_or(Value::Null)
}
