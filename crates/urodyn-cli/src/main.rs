//! urodyn: interpret a urodynamic study from the command line.
//!
//! Usage:
//!   urodyn analyze [<record.json>|-] [--case <id>] [--template <id>] [--force]
//!   urodyn validate [<record.json>|-] [--case <id>] [--template <id>] [--previous-template <id>]
//!   urodyn cases
//!   urodyn templates
//!   urodyn vocabulary
//!   urodyn config show|init

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use serde::Serialize;
use urodyn_catalog::cases::{all_cases, get_case};
use urodyn_catalog::error::CatalogError;
use urodyn_catalog::templates::{all_templates, apply_template, refine_for_template};
use urodyn_cli::config::{self, OutputFormat, UrodynConfig};
use urodyn_cli::report;
use urodyn_core::models::patient::PatientMeasurement;
use urodyn_core::models::result::ValidationReport;
use urodyn_core::models::vocabulary::{History, Symptom, Treatment};
use urodyn_engine::Engine;

#[derive(Parser)]
#[command(name = "urodyn")]
#[command(version)]
#[command(about = "Rule-based interpretation of urodynamic studies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and interpret a measurement record
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Interpret even when the record fails validation
        #[arg(long)]
        force: bool,
    },

    /// Check a measurement record for consistency
    Validate {
        #[command(flatten)]
        input: InputArgs,

        /// Template the form was using before the current one
        #[arg(long)]
        previous_template: Option<String>,
    },

    /// List the built-in clinical cases
    Cases,

    /// List the exam templates
    Templates,

    /// List the symptom, history and treatment tags
    Vocabulary,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a config file with default values
    Init,
}

#[derive(Args)]
struct InputArgs {
    /// Record file (JSON), or '-' for stdin
    file: Option<PathBuf>,

    /// Start from a built-in clinical case
    #[arg(long, conflicts_with = "file")]
    case: Option<u32>,

    /// Overlay an exam template on the record
    #[arg(long)]
    template: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_path()?,
    };
    let config = config::load_from(&config_path)?;
    init_tracing(&config);

    let format = cli.format.unwrap_or(config.output_format);
    let engine = Engine::new(config.thresholds)?;

    match cli.command {
        Commands::Analyze { input, force } => analyze(&engine, &input, force, format),
        Commands::Validate {
            input,
            previous_template,
        } => validate(&engine, &input, previous_template.as_deref(), format),
        Commands::Cases => list_cases(format),
        Commands::Templates => list_templates(format),
        Commands::Vocabulary => list_vocabulary(format),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("# {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigAction::Init => config::save_to(&config_path, &config),
        },
    }
}

fn init_tracing(config: &UrodynConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the report; logs go to stderr.
    if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_input(input: &InputArgs) -> Result<PatientMeasurement> {
    let base = if let Some(id) = input.case {
        get_case(id)
            .ok_or(CatalogError::UnknownCase(id))?
            .measurement
            .clone()
    } else if let Some(path) = &input.file {
        read_record(path)?
    } else {
        PatientMeasurement::default()
    };

    match &input.template {
        Some(id) => Ok(apply_template(&base, id)?),
        None => Ok(base),
    }
}

fn read_record(path: &Path) -> Result<PatientMeasurement> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read record at {}: {e}", path.display()))?
    };
    Ok(PatientMeasurement::from_json(&contents)?)
}

fn check(
    engine: &Engine,
    m: &PatientMeasurement,
    template: Option<&str>,
    previous: Option<&str>,
) -> ValidationReport {
    refine_for_template(engine.validate(m), m.sex, template, previous)
}

fn analyze(engine: &Engine, input: &InputArgs, force: bool, format: OutputFormat) -> Result<()> {
    let m = load_input(input)?;
    let validation = check(engine, &m, input.template.as_deref(), None);

    if !validation.coherent && !force {
        eprintln!("{}", report::render_validation(&validation));
        return Err(eyre::eyre!(
            "record failed validation with {} error(s); pass --force to interpret it anyway",
            validation.errors.len()
        ));
    }

    let mut result = engine.analyze(&m);
    result.validation = validation;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            if !result.is_trustworthy() {
                println!("WARNING: record failed validation; do not use clinically.\n");
            }
            println!("{}", report::render_result(&result));
        }
    }
    Ok(())
}

fn validate(
    engine: &Engine,
    input: &InputArgs,
    previous: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let m = load_input(input)?;
    let validation = check(engine, &m, input.template.as_deref(), previous);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&validation)?),
        OutputFormat::Text => println!("{}", report::render_validation(&validation)),
    }

    if validation.coherent {
        Ok(())
    } else {
        Err(eyre::eyre!("{} validation error(s)", validation.errors.len()))
    }
}

fn list_cases(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(all_cases())?),
        OutputFormat::Text => {
            for case in all_cases() {
                println!(
                    "{:>3}  {}  [{}]",
                    case.id,
                    case.title,
                    case.expected_diagnosis.label()
                );
            }
        }
    }
    Ok(())
}

fn list_templates(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(all_templates())?),
        OutputFormat::Text => {
            for template in all_templates() {
                let restriction = match template.sex_restriction {
                    Some(sex) => format!(" ({} only)", tag_id(&sex)?),
                    None => String::new(),
                };
                println!("{}  {}{restriction}", template.id, template.name);
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct VocabularyEntry {
    id: String,
    label: &'static str,
}

fn list_vocabulary(format: OutputFormat) -> Result<()> {
    let symptoms = Symptom::ALL
        .iter()
        .map(|s| entry(s, s.label()))
        .collect::<Result<Vec<_>>>()?;
    let history = History::ALL
        .iter()
        .map(|h| entry(h, h.label()))
        .collect::<Result<Vec<_>>>()?;
    let treatments = Treatment::ALL
        .iter()
        .map(|t| entry(t, t.label()))
        .collect::<Result<Vec<_>>>()?;

    match format {
        OutputFormat::Json => {
            let all = serde_json::json!({
                "symptoms": symptoms,
                "history": history,
                "treatments": treatments,
            });
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
        OutputFormat::Text => {
            for (title, entries) in [
                ("Symptoms", &symptoms),
                ("History", &history),
                ("Treatments", &treatments),
            ] {
                println!("{title}");
                for e in entries {
                    println!("  {:<36} {}", e.id, e.label);
                }
            }
        }
    }
    Ok(())
}

fn entry<T: Serialize>(tag: &T, label: &'static str) -> Result<VocabularyEntry> {
    Ok(VocabularyEntry {
        id: tag_id(tag)?,
        label,
    })
}

/// The wire name of a unit enum variant.
fn tag_id<T: Serialize>(tag: &T) -> Result<String> {
    match serde_json::to_value(tag)? {
        serde_json::Value::String(id) => Ok(id),
        other => Err(eyre::eyre!("expected a string tag, got {other}")),
    }
}
