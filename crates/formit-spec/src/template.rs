use handlebars::Handlebars;
use thiserror::Error;

use crate::spec::settings::SettingsRecord;

pub const DEFAULT_HTML_FILE_NAME: &str = "{{formName}}_form.html";
pub const DEFAULT_BUNDLE_FILE_NAME: &str = "{{formName}}_complete.json";

#[derive(Debug, Error)]
pub enum ExportNameError {
    #[error("failed to render file name: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("file name template '{0}' rendered to an empty name")]
    Empty(String),
}

/// Renders export file names from Handlebars templates over the form settings.
pub struct ExportNames {
    registry: Handlebars<'static>,
}

impl Default for ExportNames {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportNames {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        // file names are not HTML
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Renders `template` with the settings record (camelCase keys) as context.
    pub fn render(
        &self,
        template: &str,
        settings: &SettingsRecord,
    ) -> Result<String, ExportNameError> {
        let name = self.registry.render_template(template, settings)?;
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ExportNameError::Empty(template.to_string()));
        }
        Ok(name)
    }

    pub fn html_file_name(&self, settings: &SettingsRecord) -> Result<String, ExportNameError> {
        self.render(DEFAULT_HTML_FILE_NAME, settings)
    }

    pub fn bundle_file_name(&self, settings: &SettingsRecord) -> Result<String, ExportNameError> {
        self.render(DEFAULT_BUNDLE_FILE_NAME, settings)
    }
}
