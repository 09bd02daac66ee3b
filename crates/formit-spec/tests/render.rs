use formit_spec::{
    Artifact, FieldId, FieldRecord, FieldType, Project, SettingsRecord, render_all,
    render_email_template, render_html, render_snippet,
};

fn fixture(name: &str) -> &'static str {
    match name {
        "contact_form" => include_str!("../tests/fixtures/contact_form.json"),
        _ => panic!("unknown fixture {}", name),
    }
}

fn contact_form() -> Project {
    serde_json::from_str(fixture("contact_form")).expect("deserialize")
}

fn field(id: &str, kind: FieldType, name: &str, label: &str) -> FieldRecord {
    FieldRecord {
        id: FieldId::from(id),
        kind,
        label: label.into(),
        name: name.into(),
        placeholder: String::new(),
        required: false,
        validation_rule: None,
        options: if kind.is_choice() {
            vec!["Option 1".into(), "Option 2".into()]
        } else {
            Vec::new()
        },
        css_class: "form-control".into(),
        description: String::new(),
        default_value: String::new(),
    }
}

const HTML_TAIL: &str = concat!(
    "  <div class=\"mb-6\">\n",
    "    <button type=\"submit\" class=\"w-full bg-blue-600 hover:bg-blue-700 text-white font-medium py-3 px-6 rounded-lg transition-colors focus:ring-2 focus:ring-blue-500 focus:ring-offset-2\">Submit</button>\n",
    "  </div>\n",
    "</div>\n\n",
    "[[!+fi.validation_error_message:notempty=`<div class=\"bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg mb-4\">[[!+fi.validation_error_message]]</div>`]]\n",
    "[[!+fi.successMessage:notempty=`<div class=\"bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded-lg mb-4\">[[!+fi.successMessage]]</div>`]]",
);

#[test]
fn snippet_lists_every_parameter_in_order() {
    let project = contact_form();
    let snippet = render_snippet(&project.fields, &project.settings);

    let expected = concat!(
        "[[!FormIt? \n",
        "  &hooks=`spam,email,redirect`\n",
        "  &emailTpl=`contact_form_email`\n",
        "  &emailTo=`admin@example.com`\n",
        "  &emailSubject=`New Form Submission`\n",
        "  &redirectTo=`thank-you`\n",
        "  &validate=`name:required,email:required,email:email,message:minLength=^10^,contact:required`\n",
        "  &validationErrorMessage=`Please correct the errors below.`\n",
        "  &successMessage=`Thank you! Your message has been sent.`\n",
        "]]",
    );
    assert_eq!(snippet, expected);
}

#[test]
fn snippet_keeps_lines_for_empty_values() {
    let settings = SettingsRecord {
        form_name: String::new(),
        redirect_to: String::new(),
        email_to: String::new(),
        email_subject: String::new(),
        validate: false,
        spam: false,
    };
    let snippet = render_snippet(&[], &settings);
    assert_eq!(snippet.lines().count(), 10);
    assert!(snippet.contains("  &emailTpl=`_email`\n"));
    assert!(snippet.contains("  &validate=``\n"));
    assert!(snippet.contains("&hooks=`spam,email,redirect`"));
}

#[test]
fn html_for_empty_list_has_only_frame() {
    let html = render_html(&[]);
    let expected = format!(
        "<div class=\"formit-form max-w-lg mx-auto\">\n  <input type=\"hidden\" name=\"nospam:blank\" value=\"\" />\n\n{}",
        HTML_TAIL
    );
    assert_eq!(html, expected);
    assert!(!html.contains("<label"));
    assert!(!html.contains("fi.error."));
}

#[test]
fn html_renders_required_input_block() {
    let mut email = field("field_email", FieldType::Email, "email", "Email");
    email.required = true;
    email.placeholder = "you@example.com".into();

    let html = render_html(&[email]);
    let block = concat!(
        "  <!-- Email -->\n",
        "  <div class=\"mb-6\">\n",
        "    <label for=\"email\" class=\"block text-sm font-medium text-gray-700 mb-2\">Email <span class=\"text-red-500\">*</span></label>\n",
        "    <input type=\"email\" name=\"email\" id=\"email\" class=\"w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all\" placeholder=\"you@example.com\" value=\"[[!+fi.email]]\" required />\n",
        "    [[!+fi.error.email:notempty=`<p class=\"text-red-500 text-sm mt-1\">[[!+fi.error.email]]</p>`]]\n",
        "  </div>\n\n",
    );
    assert!(html.contains(block), "missing block in:\n{}", html);
    assert!(html.ends_with(HTML_TAIL));
}

#[test]
fn html_keeps_blank_required_slot() {
    let textarea = field("field_msg", FieldType::Textarea, "msg", "Message");
    let html = render_html(&[textarea]);
    assert!(html.contains("placeholder=\"\"  rows=\"4\">[[!+fi.msg]]</textarea>\n"));

    let checkbox = field("field_terms", FieldType::Checkbox, "terms", "Terms");
    let html = render_html(&[checkbox]);
    assert!(html.contains("value=\"1\" [[!+fi.terms:FormItIsChecked=`1`]]  />\n"));
}

#[test]
fn html_checkbox_label_is_inline_only() {
    let mut checkbox = field("field_terms", FieldType::Checkbox, "terms", "Terms");
    checkbox.required = true;
    let html = render_html(&[checkbox]);

    assert!(!html.contains("mb-2\">Terms"));
    assert!(html.contains(
        "      <label for=\"terms\" class=\"ml-3 text-sm font-medium text-gray-700\">Terms <span class=\"text-red-500\">*</span></label>\n"
    ));
    assert!(html.contains("[[!+fi.terms:FormItIsChecked=`1`]] required />"));
}

#[test]
fn html_select_and_radio_follow_option_order() {
    let project = contact_form();
    let html = render_html(&project.fields);

    let choose = html.find("<option value=\"\">Choose...</option>").expect("choose");
    let sales = html
        .find("<option value=\"Sales\" [[!+fi.topic:FormItIsSelected=`Sales`]]>Sales</option>")
        .expect("sales");
    let support = html
        .find("<option value=\"Support\" [[!+fi.topic:FormItIsSelected=`Support`]]>Support</option>")
        .expect("support");
    assert!(choose < sales && sales < support);

    assert!(html.contains("id=\"contact_0\""));
    assert!(html.contains("value=\"Email\" [[!+fi.contact:FormItIsSelected=`Email`]] required />"));
    assert!(html.contains("<label for=\"contact_1\" class=\"ml-3 text-sm font-medium text-gray-700\">Email</label>"));
}

#[test]
fn html_hidden_field_uses_default_value_without_label() {
    let project = contact_form();
    let html = render_html(&project.fields);

    assert!(html.contains("    <input type=\"hidden\" name=\"source\" value=\"website\" />\n"));
    assert!(!html.contains("<label for=\"source\""));
    assert!(html.contains("[[!+fi.error.source:notempty="));
}

#[test]
fn html_description_follows_control() {
    let project = contact_form();
    let html = render_html(&project.fields);
    let control = html.find("value=\"[[!+fi.email]]\"").expect("email control");
    let description = html
        .find("    <p class=\"text-sm text-gray-500 mt-1\">We never share your address.</p>\n")
        .expect("description");
    let error = html.find("[[!+fi.error.email:").expect("error slot");
    assert!(control < description && description < error);
}

#[test]
fn html_fields_appear_in_collection_order() {
    let project = contact_form();
    let html = render_html(&project.fields);
    let positions = project
        .fields
        .iter()
        .map(|field| html.find(&format!("<!-- {} -->", field.label)).expect("comment"))
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn email_template_skips_hidden_and_unnamed_fields() {
    let mut project = contact_form();
    project.fields[2].name.clear();
    let template = render_email_template(&project.fields, &project.settings);

    assert!(template.starts_with(
        "<h2 style=\"color: #1f2937; font-size: 24px; margin-bottom: 16px;\">New Form Submission: contact_form</h2>\n\n"
    ));
    assert!(!template.contains("[[+source]]"));
    assert!(!template.contains("Topic:"));
    assert_eq!(template.matches("<tr ").count(), 5);

    let order = ["[[+name]]", "[[+email]]", "[[+message]]", "[[+contact]]", "[[+terms]]"]
        .iter()
        .map(|token| template.find(token).expect("row"))
        .collect::<Vec<_>>();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(template.ends_with(
        "</table>\n\n<p style=\"color: #6b7280; font-size: 14px; margin-top: 24px;\"><em>Submitted on [[+date]] at [[+time]]</em></p>"
    ));
}

#[test]
fn email_template_row_shape() {
    let text = field("field_city", FieldType::Text, "city", "City");
    let template = render_email_template(&[text], &SettingsRecord::default());
    assert!(template.contains(concat!(
        "  <tr style=\"border-bottom: 1px solid #f3f4f6;\">\n",
        "    <td style=\"background-color: #f9fafb; font-weight: 600; color: #374151; width: 30%;\">City:</td>\n",
        "    <td style=\"color: #1f2937;\">[[+city]]</td>\n",
        "  </tr>\n",
    )));
}

#[test]
fn generators_are_idempotent() {
    let project = contact_form();
    let first = render_all(&project.fields, &project.settings);
    let second = render_all(&project.fields, &project.settings);
    assert_eq!(first, second);
    for artifact in Artifact::ALL {
        assert_eq!(
            artifact.render(&project.fields, &project.settings),
            first.get(artifact)
        );
    }
}
