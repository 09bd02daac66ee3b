use formit_spec::{
    FieldCategory, FieldRecord, LintFinding, Project, catalog, render::RenderedArtifacts,
};

/// Controls how much detail the presenter prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: one line per item.
    Clean,
    /// Verbose output: ids, options and descriptions.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Which artifacts `show` prints.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ArtifactSelection {
    Snippet,
    Html,
    Email,
    All,
}

/// Prints catalog, field list and generated artifacts to stdout.
pub struct ProjectPresenter {
    verbosity: Verbosity,
}

impl ProjectPresenter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn show_catalog(&self) {
        for category in [
            FieldCategory::Basic,
            FieldCategory::Choice,
            FieldCategory::Advanced,
        ] {
            println!("{} fields:", category_title(category));
            for descriptor in catalog::by_category(category) {
                println!("  {:<10} {}", descriptor.kind.as_str(), descriptor.label);
            }
        }
    }

    pub fn show_fields(&self, project: &Project) {
        println!("Form: {}", project.settings.form_name);
        if project.fields.is_empty() {
            println!("No fields yet; add one with `formit-builder add --type <type>`.");
            return;
        }
        for (index, field) in project.fields.iter().enumerate() {
            let selected = project.selected.as_ref() == Some(&field.id);
            println!("{}", field_line(index + 1, field, selected));
            if self.verbosity.is_verbose() {
                self.print_field_details(field);
            }
        }
    }

    fn print_field_details(&self, field: &FieldRecord) {
        println!("     id: {}", field.id);
        if !field.placeholder.is_empty() {
            println!("     placeholder: {}", field.placeholder);
        }
        if let Some(rule) = field.custom_rule() {
            println!("     validation: {}", rule);
        }
        if !field.options.is_empty() {
            println!("     options: {}", field.options.join(", "));
        }
        if !field.description.is_empty() {
            println!("     description: {}", field.description);
        }
        if !field.default_value.is_empty() {
            println!("     default: {}", field.default_value);
        }
    }

    pub fn show_artifacts(&self, rendered: &RenderedArtifacts, selection: ArtifactSelection) {
        match selection {
            ArtifactSelection::Snippet => println!("{}", rendered.formit_code),
            ArtifactSelection::Html => println!("{}", rendered.html),
            ArtifactSelection::Email => println!("{}", rendered.email_template),
            ArtifactSelection::All => {
                println!("FormIt snippet:\n{}\n", rendered.formit_code);
                println!("Form HTML:\n{}\n", rendered.html);
                println!("Email template:\n{}", rendered.email_template);
            }
        }
    }

    pub fn show_findings(&self, findings: &[LintFinding]) {
        if findings.is_empty() {
            println!("No issues found.");
            return;
        }
        for finding in findings {
            eprintln!("warning: {}", finding.message());
        }
    }
}

fn category_title(category: FieldCategory) -> &'static str {
    match category {
        FieldCategory::Basic => "Basic",
        FieldCategory::Choice => "Choice",
        FieldCategory::Advanced => "Advanced",
    }
}

fn field_line(position: usize, field: &FieldRecord, selected: bool) -> String {
    let marker = if selected { '>' } else { ' ' };
    let label = if field.label.is_empty() {
        field.kind.as_str()
    } else {
        field.label.as_str()
    };
    let mut line = format!(
        "{} {}. {} ({}) [{}]",
        marker, position, label, field.name, field.kind
    );
    if field.required {
        line.push_str(" [required]");
    }
    line
}
