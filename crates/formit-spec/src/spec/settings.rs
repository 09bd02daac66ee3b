use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Form-level configuration feeding the snippet and email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub form_name: String,
    pub redirect_to: String,
    pub email_to: String,
    pub email_subject: String,
    #[serde(default = "default_enabled")]
    pub validate: bool,
    #[serde(default = "default_enabled")]
    pub spam: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            form_name: "contact_form".into(),
            redirect_to: "thank-you".into(),
            email_to: "admin@example.com".into(),
            email_subject: "New Form Submission".into(),
            validate: true,
            spam: true,
        }
    }
}

/// Partial settings edit; unspecified fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spam: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == SettingsPatch::default()
    }
}

/// Single-instance holder for the session's [`SettingsRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    record: SettingsRecord,
}

impl SettingsStore {
    pub fn new(record: SettingsRecord) -> Self {
        Self { record }
    }

    pub fn get(&self) -> &SettingsRecord {
        &self.record
    }

    pub fn snapshot(&self) -> SettingsRecord {
        self.record.clone()
    }

    /// Merges `patch` into the current record. Content is not validated.
    pub fn apply(&mut self, patch: SettingsPatch) {
        tracing::debug!(?patch, "applying settings patch");
        if let Some(form_name) = patch.form_name {
            self.record.form_name = form_name;
        }
        if let Some(redirect_to) = patch.redirect_to {
            self.record.redirect_to = redirect_to;
        }
        if let Some(email_to) = patch.email_to {
            self.record.email_to = email_to;
        }
        if let Some(email_subject) = patch.email_subject {
            self.record.email_subject = email_subject;
        }
        if let Some(validate) = patch.validate {
            self.record.validate = validate;
        }
        if let Some(spam) = patch.spam {
            self.record.spam = spam;
        }
    }
}
