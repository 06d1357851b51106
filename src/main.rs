//! resume-extract: confidence-scored resume field extraction

use clap::Parser;
use log::{error, info, warn};
use resume_extract::cli::{self, Cli, Commands, ConfigAction};
use resume_extract::config::{Config, OutputFormat};
use resume_extract::error::{Result, ResumeExtractError};
use resume_extract::extraction::{Extractor, SkillCategory, SourceKind};
use resume_extract::input::InputManager;
use resume_extract::output::formatter::{batch_filenames, save_report_to_file, ReportGenerator};
use std::path::{Path, PathBuf};
use std::process;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Extract {
            input,
            source_kind,
            output,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let source_kind = parse_source_kind(source_kind.as_deref())?;
            validate_input(&input)?;

            let extractor = Extractor::with_taxonomy(config.skill_taxonomy())?;
            let mut input_manager = input_manager(&config);

            let document = input_manager.load_document(&input, source_kind).await?;
            let result = extractor.extract_document(&document);

            let use_colors = config.output.color_output && save.is_none();
            let generator = report_generator(&config, &extractor, use_colors);
            let rendered = generator.generate(&result, format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    info!("Saved extraction to {}", path.display());
                }
                None => println!("{}", rendered),
            }
            Ok(())
        }

        Commands::Batch {
            inputs,
            source_kind,
            output,
            out_dir,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let source_kind = parse_source_kind(source_kind.as_deref())?;

            let extractor = Extractor::with_taxonomy(config.skill_taxonomy())?;
            let use_colors = config.output.color_output && out_dir.is_none();
            let generator = report_generator(&config, &extractor, use_colors);
            let mut input_manager = input_manager(&config);

            let destinations: Vec<Option<PathBuf>> = match out_dir.as_deref() {
                Some(dir) => batch_filenames(format, &inputs)
                    .into_iter()
                    .map(|file_name| Some(dir.join(file_name)))
                    .collect(),
                None => vec![None; inputs.len()],
            };

            let mut failures = 0usize;
            for (input, destination) in inputs.iter().zip(&destinations) {
                let outcome = extract_one(
                    input,
                    source_kind,
                    format,
                    destination.as_deref(),
                    &extractor,
                    &generator,
                    &mut input_manager,
                )
                .await;

                if let Err(e) = outcome {
                    failures += 1;
                    warn!("Skipping {}: {}", input.display(), e);
                }
            }

            info!(
                "Batch finished: {} extracted, {} failed",
                inputs.len() - failures,
                failures
            );
            if failures == inputs.len() {
                return Err(ResumeExtractError::Processing(
                    "No document in the batch could be extracted".to_string(),
                ));
            }
            Ok(())
        }

        Commands::Skills { category } => {
            let taxonomy = config.skill_taxonomy();
            let categories = match category {
                Some(label) => vec![SkillCategory::parse(&label).ok_or_else(|| {
                    ResumeExtractError::InvalidInput(format!("Unknown skill category: {}", label))
                })?],
                None => taxonomy.categories(),
            };

            for category in categories {
                println!("{} ({}):", category, category.slug());
                for skill in taxonomy.by_category(category) {
                    println!("  • {}", skill);
                }
            }
            Ok(())
        }

        Commands::Config { action } => handle_config_command(action, config),
    }
}

#[allow(clippy::too_many_arguments)]
async fn extract_one(
    input: &Path,
    source_kind: Option<SourceKind>,
    format: OutputFormat,
    destination: Option<&Path>,
    extractor: &Extractor,
    generator: &ReportGenerator,
    input_manager: &mut InputManager,
) -> Result<()> {
    validate_input(input)?;
    let document = input_manager.load_document(input, source_kind).await?;
    let result = extractor.extract_document(&document);
    let rendered = generator.generate(&result, format)?;

    match destination {
        Some(path) => {
            save_report_to_file(&rendered, path)?;
            info!("{} -> {}", input.display(), path.display());
        }
        None => {
            println!("=== {} ===", input.display());
            println!("{}", rendered);
        }
    }
    Ok(())
}

fn handle_config_command(action: Option<ConfigAction>, config: Config) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&config).map_err(|e| {
                ResumeExtractError::Configuration(format!("Failed to serialize config: {}", e))
            })?;
            println!("{}", content);
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path().display());
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Configuration reset to defaults at {}", Config::config_path().display());
        }
    }
    Ok(())
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(format) => cli::parse_output_format(format).map_err(ResumeExtractError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn parse_source_kind(flag: Option<&str>) -> Result<Option<SourceKind>> {
    flag.map(str::parse::<SourceKind>).transpose()
}

fn validate_input(path: &Path) -> Result<()> {
    cli::validate_file_extension(path, ALLOWED_EXTENSIONS)
        .map_err(|e| ResumeExtractError::InvalidInput(format!("{}: {}", path.display(), e)))
}

fn input_manager(config: &Config) -> InputManager {
    InputManager::new()
        .with_cache(config.input.enable_cache)
        .with_max_input_chars(config.extraction.max_input_chars)
}

/// Files never get ANSI colour codes, whatever the configuration says
fn report_generator(config: &Config, extractor: &Extractor, use_colors: bool) -> ReportGenerator {
    ReportGenerator::new(
        use_colors,
        config.output.pretty_json,
        extractor.taxonomy().clone(),
    )
}
