use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::spec::field::{FieldId, FieldRecord};

/// Advisory finding about a field list. Findings never change generated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum LintFinding {
    /// Several fields share a name and will collide in the generated placeholders.
    DuplicateName { name: String, ids: Vec<FieldId> },
    /// Field has no name and is left out of the email template.
    EmptyName { id: FieldId },
    /// Name is not a plain form identifier.
    UnusualName { id: FieldId, name: String },
    /// Choice field without any options.
    NoOptions { id: FieldId },
}

impl LintFinding {
    pub fn message(&self) -> String {
        match self {
            LintFinding::DuplicateName { name, ids } => format!(
                "name '{}' is used by {} fields; their placeholders will collide",
                name,
                ids.len()
            ),
            LintFinding::EmptyName { id } => {
                format!("field {} has no name and is omitted from the email template", id)
            }
            LintFinding::UnusualName { id, name } => {
                format!("field {} name '{}' is not a plain identifier", id, name)
            }
            LintFinding::NoOptions { id } => format!("choice field {} has no options", id),
        }
    }
}

fn identifier_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-\[\]]*$").ok())
        .as_ref()
}

/// Inspect `fields` for names and options that produce surprising artifacts.
pub fn lint(fields: &[FieldRecord]) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    let mut by_name: BTreeMap<&str, Vec<FieldId>> = BTreeMap::new();

    for field in fields {
        if field.name.is_empty() {
            findings.push(LintFinding::EmptyName {
                id: field.id.clone(),
            });
        } else {
            by_name
                .entry(field.name.as_str())
                .or_default()
                .push(field.id.clone());
            if identifier_pattern().is_some_and(|pattern| !pattern.is_match(&field.name)) {
                findings.push(LintFinding::UnusualName {
                    id: field.id.clone(),
                    name: field.name.clone(),
                });
            }
        }

        if field.kind.is_choice() && field.options.is_empty() {
            findings.push(LintFinding::NoOptions {
                id: field.id.clone(),
            });
        }
    }

    findings.extend(
        by_name
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(name, ids)| LintFinding::DuplicateName {
                name: name.to_string(),
                ids,
            }),
    );

    for finding in &findings {
        tracing::debug!(finding = %finding.message(), "field lint");
    }

    findings
}
