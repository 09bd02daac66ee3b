pub mod builder;

mod presenter;

use builder::{ExportTemplates, load_bundle, load_project, save_project, write_export};
use clap::{Parser, Subcommand, ValueEnum};
use component_formit::{ProjectOp, apply_op};
use formit_spec::{
    Direction, FieldId, FieldPatch, FieldType, Project, SettingsPatch, bundle_schema, catalog,
    lint,
};
use presenter::{ArtifactSelection, ProjectPresenter, Verbosity};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const DEFAULT_PROJECT_FILE: &str = "formit.project.json";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Visual-free FormIt form builder",
    long_about = "Edits a FormIt form project and generates the snippet call, form HTML and email template"
)]
struct Cli {
    /// Project file to edit (defaults to FORMIT_PROJECT or ./formit.project.json).
    #[arg(long, global = true, value_name = "PROJECT")]
    project: Option<PathBuf>,
    /// Show ids, options and other field details.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MoveDirection {
    Up,
    Down,
}

impl From<MoveDirection> for Direction {
    fn from(value: MoveDirection) -> Self {
        match value {
            MoveDirection::Up => Direction::Up,
            MoveDirection::Down => Direction::Down,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ShowFormat {
    Snippet,
    Html,
    Email,
    All,
}

impl From<ShowFormat> for ArtifactSelection {
    fn from(value: ShowFormat) -> Self {
        match value {
            ShowFormat::Snippet => ArtifactSelection::Snippet,
            ShowFormat::Html => ArtifactSelection::Html,
            ShowFormat::Email => ArtifactSelection::Email,
            ShowFormat::All => ArtifactSelection::All,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List the supported field types.
    Catalog,
    /// Create a project file with default settings.
    Init {
        /// Overwrite an existing project file.
        #[arg(long)]
        force: bool,
    },
    /// Print the fields of the project in order.
    List,
    /// Append a field of the given type.
    Add {
        /// Field type id (text, email, tel, textarea, select, checkbox, radio, date, number, file, hidden).
        #[arg(long = "type", value_name = "TYPE", value_parser = parse_field_type)]
        kind: FieldType,
    },
    /// Edit attributes of a field; omitted flags leave the attribute unchanged.
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        placeholder: Option<String>,
        #[arg(long)]
        required: Option<bool>,
        /// Custom FormIt validator appended to the generated rules.
        #[arg(long)]
        validation: Option<String>,
        /// Choice option; repeat for each option, blank values are dropped.
        #[arg(long = "option", value_name = "OPTION")]
        options: Vec<String>,
        #[arg(long)]
        css_class: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        default_value: Option<String>,
    },
    /// Delete a field.
    Remove {
        #[arg(long)]
        id: String,
    },
    /// Copy a field directly after itself.
    Duplicate {
        #[arg(long)]
        id: String,
    },
    /// Swap a field with its neighbour.
    Move {
        #[arg(long)]
        id: String,
        #[arg(long, value_enum)]
        direction: MoveDirection,
    },
    /// Mark a field as the selected one.
    Select {
        #[arg(long)]
        id: String,
    },
    /// Edit form-level settings.
    Settings {
        #[arg(long)]
        form_name: Option<String>,
        #[arg(long)]
        email_to: Option<String>,
        #[arg(long)]
        email_subject: Option<String>,
        #[arg(long)]
        redirect_to: Option<String>,
        #[arg(long)]
        validate: Option<bool>,
        #[arg(long)]
        spam: Option<bool>,
    },
    /// Print generated artifacts.
    Show {
        #[arg(long, value_enum, default_value_t = ShowFormat::All)]
        format: ShowFormat,
    },
    /// Write the HTML fragment and the complete JSON bundle.
    Export {
        /// Output directory (defaults to FORMIT_OUTPUT_DIR or the current directory).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Handlebars template for the HTML file name.
        #[arg(long, value_name = "TEMPLATE")]
        html_name: Option<String>,
        /// Handlebars template for the bundle file name.
        #[arg(long, value_name = "TEMPLATE")]
        bundle_name: Option<String>,
    },
    /// Check that an exported bundle still matches its embedded fields and settings.
    Verify {
        #[arg(long, value_name = "BUNDLE")]
        bundle: PathBuf,
    },
    /// Report duplicate or unusual field names.
    Lint,
    /// Print the JSON schema of the exported bundle.
    Schema,
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();
    let presenter = ProjectPresenter::new(Verbosity::from_verbose(cli.verbose));
    let project_path = resolve_project_path(cli.project)?;

    match cli.command {
        Command::Catalog => {
            presenter.show_catalog();
            Ok(())
        }
        Command::Init { force } => run_init(&project_path, force),
        Command::List => {
            presenter.show_fields(&load_project(&project_path)?);
            Ok(())
        }
        Command::Add { kind } => run_add(&project_path, kind),
        Command::Update {
            id,
            label,
            name,
            placeholder,
            required,
            validation,
            options,
            css_class,
            description,
            default_value,
        } => {
            let patch = FieldPatch {
                label,
                name,
                placeholder,
                required,
                validation_rule: validation,
                options: options_patch(&options),
                css_class,
                description,
                default_value,
            };
            if patch.is_empty() {
                return Err("update needs at least one attribute flag".into());
            }
            edit_project(&project_path, ProjectOp::Update {
                id: FieldId::from(id),
                patch,
            })
        }
        Command::Remove { id } => edit_project(&project_path, ProjectOp::Remove {
            id: FieldId::from(id),
        }),
        Command::Duplicate { id } => run_duplicate(&project_path, FieldId::from(id)),
        Command::Move { id, direction } => edit_project(&project_path, ProjectOp::Move {
            id: FieldId::from(id),
            direction: direction.into(),
        }),
        Command::Select { id } => edit_project(&project_path, ProjectOp::Select {
            id: FieldId::from(id),
        }),
        Command::Settings {
            form_name,
            email_to,
            email_subject,
            redirect_to,
            validate,
            spam,
        } => {
            let patch = SettingsPatch {
                form_name,
                redirect_to,
                email_to,
                email_subject,
                validate,
                spam,
            };
            if patch.is_empty() {
                let project = load_project(&project_path)?;
                println!("{}", serde_json::to_string_pretty(&project.settings)?);
                return Ok(());
            }
            edit_project(&project_path, ProjectOp::Settings { patch })
        }
        Command::Show { format } => {
            let project = load_project(&project_path)?;
            presenter.show_artifacts(&project.render(), format.into());
            Ok(())
        }
        Command::Export {
            out,
            html_name,
            bundle_name,
        } => run_export(&project_path, out, html_name, bundle_name),
        Command::Verify { bundle } => run_verify(&bundle),
        Command::Lint => {
            let project = load_project(&project_path)?;
            presenter.show_findings(&lint(&project.fields));
            Ok(())
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&bundle_schema())?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FORMIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn parse_field_type(value: &str) -> Result<FieldType, String> {
    catalog::find(value)
        .map(|descriptor| descriptor.kind)
        .map_err(|err| err.to_string())
}

fn options_patch(options: &[String]) -> Option<Vec<String>> {
    if options.is_empty() {
        None
    } else {
        Some(FieldPatch::options_from_lines(&options.join("\n")))
    }
}

fn resolve_project_path(project: Option<PathBuf>) -> CliResult<PathBuf> {
    let candidate = match project {
        Some(path) => path,
        None => env::var_os("FORMIT_PROJECT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_FILE)),
    };
    if candidate.as_os_str().is_empty() {
        return Err("project path cannot be empty".into());
    }
    Ok(candidate)
}

fn resolve_output_root(out: Option<PathBuf>) -> CliResult<PathBuf> {
    let candidate = match out {
        Some(path) => path,
        None => env::var_os("FORMIT_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    if candidate.as_os_str().is_empty() {
        return Err("output directory cannot be empty".into());
    }
    Ok(candidate)
}

fn run_init(project_path: &Path, force: bool) -> CliResult<()> {
    if project_path.exists() && !force {
        return Err(format!(
            "project {} already exists; rerun with --force to overwrite",
            project_path.display()
        )
        .into());
    }
    save_project(project_path, &Project::default())?;
    println!("Created FormIt project at {}", project_path.display());
    Ok(())
}

fn edit_project(project_path: &Path, op: ProjectOp) -> CliResult<()> {
    let project = load_project(project_path)?;
    let next = apply_op(project, op);
    save_project(project_path, &next)?;
    Ok(())
}

fn run_add(project_path: &Path, kind: FieldType) -> CliResult<()> {
    let project = load_project(project_path)?;
    let next = apply_op(project, ProjectOp::Add { kind });
    save_project(project_path, &next)?;
    if let Some(id) = &next.selected {
        println!("{}", id);
    }
    Ok(())
}

fn run_duplicate(project_path: &Path, id: FieldId) -> CliResult<()> {
    let project = load_project(project_path)?;
    let index = project
        .fields
        .iter()
        .position(|field| field.id == id)
        .ok_or_else(|| format!("field '{}' not found", id))?;
    let next = apply_op(project, ProjectOp::Duplicate { id });
    save_project(project_path, &next)?;
    if let Some(copy) = next.fields.get(index + 1) {
        println!("{}", copy.id);
    }
    Ok(())
}

fn run_export(
    project_path: &Path,
    out: Option<PathBuf>,
    html_name: Option<String>,
    bundle_name: Option<String>,
) -> CliResult<()> {
    let project = load_project(project_path)?;
    let out_root = resolve_output_root(out)?;
    let defaults = ExportTemplates::default();
    let templates = ExportTemplates {
        html: html_name.unwrap_or(defaults.html),
        bundle: bundle_name.unwrap_or(defaults.bundle),
    };
    let files = write_export(&project, &out_root, &templates)?;
    println!("Wrote {}", files.html.display());
    println!("Wrote {}", files.bundle.display());
    Ok(())
}

fn run_verify(bundle_path: &Path) -> CliResult<()> {
    let bundle = load_bundle(bundle_path)?;
    let drifted = bundle.drifted_artifacts();
    if drifted.is_empty() {
        println!("Bundle {} is consistent.", bundle_path.display());
        return Ok(());
    }
    for artifact in &drifted {
        eprintln!("  {} differs from regenerated output", artifact.as_str());
    }
    bundle.verify()?;
    Ok(())
}
