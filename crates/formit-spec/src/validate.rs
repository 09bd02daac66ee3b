use crate::spec::field::{FieldRecord, FieldType};

/// Rule tokens in field order; per field: required, email, then the custom rule.
pub fn rule_tokens(fields: &[FieldRecord]) -> Vec<String> {
    let mut tokens = Vec::new();

    for field in fields {
        if field.required {
            tokens.push(format!("{}:required", field.name));
        }
        if field.kind == FieldType::Email {
            tokens.push(format!("{}:email", field.name));
        }
        if let Some(rule) = field.custom_rule() {
            tokens.push(format!("{}:{}", field.name, rule));
        }
    }

    tokens
}

/// The `&validate` parameter value for the FormIt snippet.
pub fn validation_rules(fields: &[FieldRecord]) -> String {
    rule_tokens(fields).join(",")
}
