use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use staff_intake::auth::{Page, Role, Session};
use staff_intake::config::{Config, StoreKind};
use staff_intake::core::{FieldKey, FieldRegistry, FileRef, Section, Value};
use staff_intake::state::{FormRecord, Navigation, Wizard, validate_all};
use staff_intake::store::{DirectoryStore, MemoryStore, RecordStore};
use staff_intake::submit::{SubmissionGateway, SubmitError};
use staff_intake::ui::render;
use staff_intake::ui::{Color, Style, Theme};
use staff_intake::logging;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "intake", about = "Employee registration wizard")]
struct Cli {
    /// YAML configuration file; the embedded default is used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List sections and their fields.
    Sections,
    /// Validate a YAML file of field values section by section.
    Check { values: PathBuf },
    /// Walk the wizard with the given values and submit the record.
    Submit {
        values: PathBuf,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "hr_officer")]
        role: Role,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;
    logging::init(&config.log_filter)?;

    let theme = if cli.plain { Theme::PLAIN } else { Theme::ANSI };
    let registry = Arc::new(FieldRegistry::employee());
    let sections = config
        .sections
        .clone()
        .unwrap_or_else(|| registry.sections());

    match cli.command {
        Command::Sections => list_sections(&registry, &sections, theme),
        Command::Check { values } => check(&registry, &sections, &values, theme),
        Command::Submit {
            values,
            email,
            password,
            role,
        } => {
            let mut session = Session::anonymous();
            session.login(&email, &password, role)?;
            if !session.can_access(Page::EmployeeEntry) {
                bail!("role `{role}` cannot register employees");
            }
            let store = open_store(&config)?;
            let mut gateway = SubmissionGateway::new(registry.clone(), store);
            let mut wizard = Wizard::with_sections(registry, sections)?;
            submit(&mut wizard, &mut gateway, &session, &values, theme)
        }
    }
}

fn list_sections(registry: &FieldRegistry, sections: &[Section], theme: Theme) -> anyhow::Result<()> {
    for section in sections {
        println!("{}", theme.paint(section.label(), Style::new().bold()));
        for definition in registry.definitions_for(*section) {
            let marker = if definition.required { "*" } else { " " };
            let values = definition.enum_values();
            let kind = if values.is_empty() {
                definition.kind.name().to_string()
            } else {
                format!("{} [{}]", definition.kind.name(), values.join(", "))
            };
            println!(
                "  {marker} {:<20} {}",
                definition.key.id(),
                theme.paint(&kind, Style::new().color(Color::DarkGrey))
            );
        }
    }
    Ok(())
}

fn check(
    registry: &FieldRegistry,
    sections: &[Section],
    values: &Path,
    theme: Theme,
) -> anyhow::Result<()> {
    let record = load_values(values)?;
    let results = validate_all(registry, sections, &record);
    for result in &results {
        if result.is_valid() {
            let line = format!("✓ {}", result.section.label());
            println!("{}", theme.paint(&line, Style::new().color(Color::Green)));
        } else {
            println!("{}", theme.paint(result.section.label(), Style::new().bold()));
            for line in render::error_lines(registry, result, theme) {
                println!("{line}");
            }
        }
    }
    if results.iter().any(|r| !r.is_valid()) {
        bail!("record is incomplete");
    }
    Ok(())
}

fn submit<S: RecordStore>(
    wizard: &mut Wizard,
    gateway: &mut SubmissionGateway<S>,
    session: &Session,
    values: &Path,
    theme: Theme,
) -> anyhow::Result<()> {
    for (key, value) in load_values(values)?.iter() {
        wizard.set_value(key, value.clone());
    }

    loop {
        for line in render::header(wizard, theme) {
            println!("{line}");
        }
        match wizard.request_next() {
            Ok(Navigation::Moved { .. }) => continue,
            Ok(Navigation::Stayed(_)) => break,
            Err(result) => {
                for line in render::error_lines(wizard.registry(), &result, theme) {
                    println!("{line}");
                }
                bail!("section `{}` is incomplete", result.section.label());
            }
        }
    }

    match wizard.submit(gateway, session) {
        Ok(receipt) => {
            let line = format!("Employee record submitted: {}", receipt.id);
            println!("{}", theme.paint(&line, Style::new().color(Color::Green)));
            Ok(())
        }
        Err(SubmitError::Invalid(failures)) => {
            for line in render::failure_report(wizard.registry(), &failures, theme) {
                println!("{line}");
            }
            bail!("submission failed validation")
        }
        Err(err) => Err(err).context("submission failed"),
    }
}

fn open_store(config: &Config) -> anyhow::Result<Box<dyn RecordStore>> {
    Ok(match config.store.kind {
        StoreKind::Memory => Box::new(MemoryStore::new()),
        StoreKind::Directory => Box::new(
            DirectoryStore::open(&config.store.path)
                .with_context(|| format!("opening {}", config.store.path.display()))?,
        ),
    })
}

/// Reads `field id -> value` pairs; scalars become text, mappings become file handles.
fn load_values(path: &Path) -> anyhow::Result<FormRecord> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: serde_yaml::Mapping =
        serde_yaml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;

    let mut record = FormRecord::new();
    for (key, value) in raw {
        let Some(id) = key.as_str() else {
            bail!("field names must be strings, got {key:?}");
        };
        let key: FieldKey = id.parse()?;
        record.set(key, yaml_value(key, value)?);
    }
    Ok(record)
}

fn yaml_value(key: FieldKey, value: serde_yaml::Value) -> anyhow::Result<Value> {
    use serde_yaml::Value as Yaml;
    Ok(match value {
        Yaml::Null => Value::None,
        Yaml::String(s) => Value::Text(s),
        Yaml::Number(n) => Value::Text(n.to_string()),
        Yaml::Bool(b) => Value::Text(if b { "yes" } else { "no" }.to_string()),
        Yaml::Mapping(_) => Value::File(
            serde_yaml::from_value::<FileRef>(value)
                .with_context(|| format!("`{key}` is not a file description"))?,
        ),
        other => bail!("unsupported value for `{key}`: {other:?}"),
    })
}
