use crate::{
    spec::{
        field::{FieldRecord, FieldType},
        settings::SettingsRecord,
    },
    validate::validation_rules,
};

const FULL_WIDTH_CONTROL: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-2";
const INLINE_LABEL_CLASS: &str = "ml-3 text-sm font-medium text-gray-700";
const REQUIRED_MARKER: &str = " <span class=\"text-red-500\">*</span>";

/// Which generated artifact a string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// The `[[!FormIt? ...]]` snippet call.
    Snippet,
    /// The form markup fragment.
    Html,
    /// The notification email body.
    EmailTemplate,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [Artifact::Snippet, Artifact::Html, Artifact::EmailTemplate];

    /// Key used for the artifact in exported bundles.
    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::Snippet => "formit_code",
            Artifact::Html => "html",
            Artifact::EmailTemplate => "email_template",
        }
    }

    pub fn render(&self, fields: &[FieldRecord], settings: &SettingsRecord) -> String {
        match self {
            Artifact::Snippet => render_snippet(fields, settings),
            Artifact::Html => render_html(fields),
            Artifact::EmailTemplate => render_email_template(fields, settings),
        }
    }
}

/// All three artifacts for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub formit_code: String,
    pub html: String,
    pub email_template: String,
}

impl RenderedArtifacts {
    pub fn get(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::Snippet => &self.formit_code,
            Artifact::Html => &self.html,
            Artifact::EmailTemplate => &self.email_template,
        }
    }
}

/// Render every artifact from the given snapshots.
pub fn render_all(fields: &[FieldRecord], settings: &SettingsRecord) -> RenderedArtifacts {
    RenderedArtifacts {
        formit_code: render_snippet(fields, settings),
        html: render_html(fields),
        email_template: render_email_template(fields, settings),
    }
}

/// Render the FormIt snippet call. Every parameter line is always present.
pub fn render_snippet(fields: &[FieldRecord], settings: &SettingsRecord) -> String {
    let validation = validation_rules(fields);
    let lines = [
        "[[!FormIt? ".to_string(),
        "  &hooks=`spam,email,redirect`".to_string(),
        format!("  &emailTpl=`{}_email`", settings.form_name),
        format!("  &emailTo=`{}`", settings.email_to),
        format!("  &emailSubject=`{}`", settings.email_subject),
        format!("  &redirectTo=`{}`", settings.redirect_to),
        format!("  &validate=`{}`", validation),
        "  &validationErrorMessage=`Please correct the errors below.`".to_string(),
        "  &successMessage=`Thank you! Your message has been sent.`".to_string(),
        "]]".to_string(),
    ];
    lines.join("\n")
}

/// Render the form markup fragment wired to FormIt placeholders.
pub fn render_html(fields: &[FieldRecord]) -> String {
    let mut lines = vec![
        "<div class=\"formit-form max-w-lg mx-auto\">".to_string(),
        "  <input type=\"hidden\" name=\"nospam:blank\" value=\"\" />".to_string(),
        String::new(),
    ];

    for field in fields {
        push_field(&mut lines, field);
    }

    lines.push("  <div class=\"mb-6\">".to_string());
    lines.push("    <button type=\"submit\" class=\"w-full bg-blue-600 hover:bg-blue-700 text-white font-medium py-3 px-6 rounded-lg transition-colors focus:ring-2 focus:ring-blue-500 focus:ring-offset-2\">Submit</button>".to_string());
    lines.push("  </div>".to_string());
    lines.push("</div>".to_string());
    lines.push(String::new());
    lines.push("[[!+fi.validation_error_message:notempty=`<div class=\"bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg mb-4\">[[!+fi.validation_error_message]]</div>`]]".to_string());
    lines.push("[[!+fi.successMessage:notempty=`<div class=\"bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded-lg mb-4\">[[!+fi.successMessage]]</div>`]]".to_string());
    lines.join("\n")
}

fn push_field(lines: &mut Vec<String>, field: &FieldRecord) {
    let name = &field.name;
    let required = required_attr(field);

    lines.push(format!("  <!-- {} -->", field.label));
    lines.push("  <div class=\"mb-6\">".to_string());

    if !matches!(field.kind, FieldType::Hidden | FieldType::Checkbox) {
        lines.push(format!(
            "    <label for=\"{name}\" class=\"{LABEL_CLASS}\">{}</label>",
            label_text(field)
        ));
    }

    match field.kind {
        FieldType::Textarea => lines.push(format!(
            "    <textarea name=\"{name}\" id=\"{name}\" class=\"{FULL_WIDTH_CONTROL}\" placeholder=\"{}\" {required} rows=\"4\">[[!+fi.{name}]]</textarea>",
            field.placeholder
        )),
        FieldType::Select => {
            lines.push(format!(
                "    <select name=\"{name}\" id=\"{name}\" class=\"{FULL_WIDTH_CONTROL}\" {required}>"
            ));
            lines.push("      <option value=\"\">Choose...</option>".to_string());
            for option in &field.options {
                lines.push(format!(
                    "      <option value=\"{option}\" [[!+fi.{name}:FormItIsSelected=`{option}`]]>{option}</option>"
                ));
            }
            lines.push("    </select>".to_string());
        }
        FieldType::Checkbox => {
            lines.push("    <div class=\"flex items-center\">".to_string());
            lines.push(format!(
                "      <input type=\"checkbox\" name=\"{name}\" id=\"{name}\" class=\"w-4 h-4 text-blue-600 border-gray-300 rounded focus:ring-blue-500\" value=\"1\" [[!+fi.{name}:FormItIsChecked=`1`]] {required} />"
            ));
            lines.push(format!(
                "      <label for=\"{name}\" class=\"{INLINE_LABEL_CLASS}\">{}</label>",
                label_text(field)
            ));
            lines.push("    </div>".to_string());
        }
        FieldType::Radio => {
            for (index, option) in field.options.iter().enumerate() {
                lines.push("    <div class=\"flex items-center mb-2\">".to_string());
                lines.push(format!(
                    "      <input type=\"radio\" name=\"{name}\" id=\"{name}_{index}\" class=\"w-4 h-4 text-blue-600 border-gray-300 focus:ring-blue-500\" value=\"{option}\" [[!+fi.{name}:FormItIsSelected=`{option}`]] {required} />"
                ));
                lines.push(format!(
                    "      <label for=\"{name}_{index}\" class=\"{INLINE_LABEL_CLASS}\">{option}</label>"
                ));
                lines.push("    </div>".to_string());
            }
        }
        FieldType::Hidden => lines.push(format!(
            "    <input type=\"hidden\" name=\"{name}\" value=\"{}\" />",
            field.default_value
        )),
        kind => lines.push(format!(
            "    <input type=\"{kind}\" name=\"{name}\" id=\"{name}\" class=\"{FULL_WIDTH_CONTROL}\" placeholder=\"{}\" value=\"[[!+fi.{name}]]\" {required} />",
            field.placeholder
        )),
    }

    if !field.description.is_empty() {
        lines.push(format!(
            "    <p class=\"text-sm text-gray-500 mt-1\">{}</p>",
            field.description
        ));
    }

    lines.push(format!(
        "    [[!+fi.error.{name}:notempty=`<p class=\"text-red-500 text-sm mt-1\">[[!+fi.error.{name}]]</p>`]]"
    ));
    lines.push("  </div>".to_string());
    lines.push(String::new());
}

fn required_attr(field: &FieldRecord) -> &'static str {
    if field.required { "required" } else { "" }
}

fn label_text(field: &FieldRecord) -> String {
    if field.required {
        format!("{}{}", field.label, REQUIRED_MARKER)
    } else {
        field.label.clone()
    }
}

/// Render the notification email body. Hidden and unnamed fields are skipped.
pub fn render_email_template(fields: &[FieldRecord], settings: &SettingsRecord) -> String {
    let mut lines = vec![
        format!(
            "<h2 style=\"color: #1f2937; font-size: 24px; margin-bottom: 16px;\">New Form Submission: {}</h2>",
            settings.form_name
        ),
        String::new(),
        "<table border=\"0\" cellpadding=\"12\" cellspacing=\"0\" style=\"border: 1px solid #e5e7eb; border-collapse: collapse; width: 100%;\">".to_string(),
    ];

    for field in fields
        .iter()
        .filter(|field| field.kind != FieldType::Hidden && !field.name.is_empty())
    {
        lines.push("  <tr style=\"border-bottom: 1px solid #f3f4f6;\">".to_string());
        lines.push(format!(
            "    <td style=\"background-color: #f9fafb; font-weight: 600; color: #374151; width: 30%;\">{}:</td>",
            field.label
        ));
        lines.push(format!(
            "    <td style=\"color: #1f2937;\">[[+{}]]</td>",
            field.name
        ));
        lines.push("  </tr>".to_string());
    }

    lines.push("</table>".to_string());
    lines.push(String::new());
    lines.push("<p style=\"color: #6b7280; font-size: 14px; margin-top: 24px;\"><em>Submitted on [[+date]] at [[+time]]</em></p>".to_string());
    lines.join("\n")
}
