use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use formit_spec::{
    BundleError, Direction, ExportBundle, FieldId, FieldPatch, FieldType, Project, SettingsPatch,
    catalog, lint as lint_fields,
};

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("failed to parse project: {0}")]
    ProjectParse(#[source] serde_json::Error),
    #[error("failed to parse operation: {0}")]
    OpParse(#[source] serde_json::Error),
    #[error("json encode error: {0}")]
    JsonEncode(#[source] serde_json::Error),
    #[error(transparent)]
    Bundle(#[from] BundleError),
}

/// Edit requested by a presentation layer against a project snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ProjectOp {
    Add {
        #[serde(rename = "type")]
        kind: FieldType,
    },
    Update {
        id: FieldId,
        #[serde(default)]
        patch: FieldPatch,
    },
    Remove {
        id: FieldId,
    },
    Duplicate {
        id: FieldId,
    },
    Move {
        id: FieldId,
        direction: Direction,
    },
    Select {
        id: FieldId,
    },
    Settings {
        #[serde(default)]
        patch: SettingsPatch,
    },
}

/// Applies `op` to `project` and returns the next snapshot.
pub fn apply_op(project: Project, op: ProjectOp) -> Project {
    let (mut fields, mut settings) = project.into_stores();
    match op {
        ProjectOp::Add { kind } => {
            fields.add(catalog::lookup(kind));
        }
        ProjectOp::Update { id, patch } => fields.update(&id, patch),
        ProjectOp::Remove { id } => fields.remove(&id),
        ProjectOp::Duplicate { id } => {
            fields.duplicate(&id);
        }
        ProjectOp::Move { id, direction } => fields.move_field(&id, direction),
        ProjectOp::Select { id } => fields.select(&id),
        ProjectOp::Settings { patch } => settings.apply(patch),
    }
    Project::from_stores(&fields, &settings)
}

pub fn parse_project(project_json: &str) -> Result<Project, ComponentError> {
    if project_json.trim().is_empty() {
        return Ok(Project::default());
    }
    serde_json::from_str(project_json).map_err(ComponentError::ProjectParse)
}

fn respond(result: Result<Value, ComponentError>) -> String {
    match result {
        Ok(value) => serde_json::to_string(&value).unwrap_or_else(|error| {
            json!({"error": format!("json encode: {}", error)}).to_string()
        }),
        Err(err) => {
            tracing::warn!(error = %err, "component call failed");
            json!({ "error": err.to_string() }).to_string()
        }
    }
}

fn to_value(value: &impl Serialize) -> Result<Value, ComponentError> {
    serde_json::to_value(value).map_err(ComponentError::JsonEncode)
}

/// Field type catalog in display order.
pub fn describe_catalog() -> String {
    respond(to_value(&catalog::all()))
}

pub fn new_project() -> String {
    respond(to_value(&Project::default()))
}

pub fn apply(project_json: &str, op_json: &str) -> String {
    respond(parse_project(project_json).and_then(|project| {
        let op: ProjectOp = serde_json::from_str(op_json).map_err(ComponentError::OpParse)?;
        to_value(&apply_op(project, op))
    }))
}

pub fn generate(project_json: &str) -> String {
    respond(parse_project(project_json).map(|project| {
        let rendered = project.render();
        json!({
            "formit_code": rendered.formit_code,
            "html": rendered.html,
            "email_template": rendered.email_template,
        })
    }))
}

pub fn export(project_json: &str) -> String {
    respond(parse_project(project_json).and_then(|project| {
        to_value(&ExportBundle::from_project(&project))
    }))
}

pub fn verify(bundle_json: &str) -> String {
    respond(
        ExportBundle::from_json(bundle_json)
            .map_err(ComponentError::from)
            .map(|bundle| {
                let drifted = bundle
                    .drifted_artifacts()
                    .iter()
                    .map(|artifact| artifact.as_str())
                    .collect::<Vec<_>>();
                json!({
                    "valid": drifted.is_empty(),
                    "drifted": drifted,
                })
            }),
    )
}

pub fn lint(project_json: &str) -> String {
    respond(parse_project(project_json).and_then(|project| to_value(&lint_fields(&project.fields))))
}
