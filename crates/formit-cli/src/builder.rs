use serde::Serialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use formit_spec::{
    ExportBundle, ExportNames, Project,
    template::{DEFAULT_BUNDLE_FILE_NAME, DEFAULT_HTML_FILE_NAME},
};

/// File-name templates used by `export`.
#[derive(Debug, Clone)]
pub struct ExportTemplates {
    pub html: String,
    pub bundle: String,
}

impl Default for ExportTemplates {
    fn default() -> Self {
        Self {
            html: DEFAULT_HTML_FILE_NAME.into(),
            bundle: DEFAULT_BUNDLE_FILE_NAME.into(),
        }
    }
}

/// Paths written by [`write_export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub html: PathBuf,
    pub bundle: PathBuf,
}

/// Read a project file; a missing file yields the default project.
pub fn load_project(path: &Path) -> io::Result<Project> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "project file missing; using defaults");
        return Ok(Project::default());
    }
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(io::Error::other)
}

pub fn save_project(path: &Path, project: &Project) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    write_json(path, project)
}

pub fn load_bundle(path: &Path) -> io::Result<ExportBundle> {
    let contents = fs::read_to_string(path)?;
    ExportBundle::from_json(&contents).map_err(io::Error::other)
}

/// Write the HTML fragment and the complete bundle into `out_root`.
pub fn write_export(
    project: &Project,
    out_root: &Path,
    templates: &ExportTemplates,
) -> io::Result<ExportedFiles> {
    let names = ExportNames::new();
    let html_name = names
        .render(&templates.html, &project.settings)
        .map_err(io::Error::other)?;
    let bundle_name = names
        .render(&templates.bundle, &project.settings)
        .map_err(io::Error::other)?;

    fs::create_dir_all(out_root)?;
    let bundle = ExportBundle::from_project(project);

    let html_path = out_root.join(sanitize_file_name(&html_name));
    fs::write(&html_path, &bundle.html)?;

    let bundle_path = out_root.join(sanitize_file_name(&bundle_name));
    let contents = bundle.to_json_pretty().map_err(io::Error::other)?;
    fs::write(&bundle_path, contents)?;

    tracing::info!(
        html = %html_path.display(),
        bundle = %bundle_path.display(),
        "export written"
    );
    Ok(ExportedFiles {
        html: html_path,
        bundle: bundle_path,
    })
}

fn sanitize_file_name(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' {
                ch
            } else {
                '-'
            }
        })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|ch| ch == '.') {
        "export".into()
    } else {
        cleaned
    }
}

fn write_json(path: &Path, value: &impl Serialize) -> io::Result<()> {
    let contents = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(path, contents)
}
