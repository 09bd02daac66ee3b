#![allow(missing_docs)]

pub mod bundle;
pub mod catalog;
pub mod lint;
pub mod project;
pub mod render;
pub mod spec;
pub mod store;
pub mod template;
pub mod validate;

pub use bundle::{BundleError, ExportBundle, bundle_schema};
pub use catalog::{CatalogError, FieldTypeDescriptor};
pub use lint::{LintFinding, lint};
pub use project::Project;
pub use render::{
    Artifact, RenderedArtifacts, render_all, render_email_template, render_html, render_snippet,
};
pub use spec::{
    FieldCategory, FieldId, FieldPatch, FieldRecord, FieldType, SettingsPatch, SettingsRecord,
    SettingsStore,
};
pub use store::{Direction, FieldStore};
pub use template::{ExportNameError, ExportNames};
pub use validate::{rule_tokens, validation_rules};
