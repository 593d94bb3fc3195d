//! flashgen - Generate study flashcards from educational content using an LLM

mod content;
mod deck;
mod error;
mod export;
mod generate;
mod pipeline;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use llm_client::{Config, ModelPreset, get_provider};
use std::path::PathBuf;

use content::{chunker, validator};
use deck::FlashcardSet;
use export::ExportFormat;
use pipeline::{GenerateOptions, Pipeline};

#[derive(Parser, Debug)]
#[command(name = "flashgen")]
#[command(about = "Generate study flashcards from educational content using an LLM", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a flashcard set from text or a file
    Generate {
        /// Source file (.txt, .pdf, or .csv)
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Inline text content
        #[arg(long)]
        text: Option<String>,

        /// Subject the content belongs to
        #[arg(long, default_value = "General")]
        subject: String,

        /// Minimum number of cards to request
        #[arg(long, default_value_t = 10)]
        min_cards: usize,

        /// Maximum number of cards to request
        #[arg(long, default_value_t = 15)]
        max_cards: usize,

        /// Set name (default: "<subject> Flashcards")
        #[arg(long)]
        name: Option<String>,

        /// Set description
        #[arg(long, default_value = "Generated flashcard set")]
        description: String,

        /// Export the generated set (csv or json)
        #[arg(long)]
        export: Option<String>,

        /// Directory for exported files
        #[arg(long, default_value = "exports")]
        export_dir: PathBuf,

        /// Only print cards with this difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<String>,

        /// Only print cards whose topic contains this substring
        #[arg(long)]
        topic: Option<String>,

        /// Model preset to use (overrides default from config)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Inspect content without calling the LLM: metadata, validation, sections
    Inspect {
        /// Source file (.txt, .pdf, or .csv)
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Inline text content
        #[arg(long)]
        text: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// List available presets
    List,
    /// Set the default model preset
    SetDefault {
        /// Name of the preset to use as default
        preset: String,
    },
    /// Add a new preset
    AddPreset {
        /// Preset name
        name: String,
        /// Provider (gemini)
        #[arg(short, long)]
        provider: String,
        /// Model identifier
        #[arg(short = 'M', long)]
        model: String,
    },
}

/// Handle config subcommands
fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            let path = Config::config_path()?;
            println!("Config file: {}", path.display());
            println!();
            println!("{:#?}", config);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("Available presets:");
            for (name, preset) in &config.presets {
                let default_marker = if name == &config.default_preset {
                    " (default)"
                } else {
                    ""
                };
                println!(
                    "  {} - {} / {}{}",
                    name, preset.provider, preset.model, default_marker
                );
            }
        }
        ConfigAction::SetDefault { preset } => {
            let mut config = Config::load()?;
            // Verify preset exists
            config.get_preset(preset)?;
            config.default_preset = preset.clone();
            config.save()?;
            println!("Default preset set to: {}", preset);
        }
        ConfigAction::AddPreset {
            name,
            provider,
            model,
        } => {
            let mut config = Config::load()?;
            config.presets.insert(
                name.clone(),
                ModelPreset {
                    provider: provider.clone(),
                    model: model.clone(),
                },
            );
            config.save()?;
            println!("Added preset: {}", name);
        }
    }
    Ok(())
}

/// Build a provider from the named (or default) preset.
fn make_provider(model: Option<&str>) -> Result<Box<dyn llm_client::LlmProvider>> {
    let config = Config::load().context("Failed to load LLM configuration")?;
    let preset_name = model.unwrap_or(&config.default_preset);
    let preset = config
        .get_preset(preset_name)
        .context(format!("Unknown preset: {}", preset_name))?;
    let provider_config = config.get_provider_config(&preset.provider);
    get_provider(preset, provider_config).context(format!(
        "Failed to initialize provider '{}' for preset '{}'",
        preset.provider, preset_name
    ))
}

fn print_set(set: &FlashcardSet, difficulty: Option<&str>, topic: Option<&str>) {
    // Filters stack: difficulty first, then topic substring
    let cards: Vec<&deck::Flashcard> = match (difficulty, topic) {
        (Some(level), Some(needle)) => {
            let needle = needle.to_lowercase();
            let mut cards = set.by_difficulty(level);
            cards.retain(|card| card.topic.to_lowercase().contains(&needle));
            cards
        }
        (Some(level), None) => set.by_difficulty(level),
        (None, Some(needle)) => set.by_topic(needle),
        (None, None) => set.cards().iter().collect(),
    };

    println!("{} ({}) - {} card(s)", set.name, set.subject, cards.len());
    println!();
    for card in cards {
        println!("[{}] {} ({})", card.id, card.question, card.difficulty.label());
        println!("    {}", card.answer);
        if !card.topic.is_empty() {
            println!("    Topic: {}", card.topic);
        }
        println!();
    }

    let stats = set.statistics();
    println!("---");
    let mut difficulties: Vec<_> = stats.difficulties.iter().collect();
    difficulties.sort();
    let summary: Vec<String> = difficulties
        .iter()
        .map(|(level, count)| format!("{}: {}", level, count))
        .collect();
    println!("Difficulties: {}", summary.join(", "));
    if !stats.topics.is_empty() {
        println!("Topics: {}", stats.topics.join(", "));
    }
}

async fn handle_generate(
    file: Option<PathBuf>,
    text: Option<String>,
    subject: String,
    min_cards: usize,
    max_cards: usize,
    name: Option<String>,
    description: String,
    export: Option<String>,
    export_dir: PathBuf,
    difficulty: Option<String>,
    topic: Option<String>,
    model: Option<String>,
) -> Result<()> {
    let export_format = export
        .as_deref()
        .map(|s| s.parse::<ExportFormat>())
        .transpose()?;

    let provider = make_provider(model.as_deref())?;
    let pipeline = Pipeline::new(provider, export_dir);

    let options = GenerateOptions {
        set_name: name.unwrap_or_else(|| format!("{} Flashcards", subject)),
        subject,
        min_cards,
        max_cards,
        description,
    };

    let outcome = match (&file, &text) {
        (Some(path), None) => pipeline.generate_from_file(path, &options).await?,
        (None, Some(text)) => pipeline.generate_from_text(text, &options).await?,
        _ => anyhow::bail!("Provide exactly one of --file or --text"),
    };

    print_set(&outcome.set, difficulty.as_deref(), topic.as_deref());

    if let Some(format) = export_format {
        let path = pipeline.export(&outcome.set, format)?;
        println!("Exported to: {}", path.display());
    }

    Ok(())
}

fn handle_inspect(file: Option<PathBuf>, text: Option<String>) -> Result<()> {
    let normalized = match (&file, &text) {
        (Some(path), None) => content::normalize_file(path)?,
        (None, Some(text)) => content::normalize_text(text),
        _ => anyhow::bail!("Provide exactly one of --file or --text"),
    };

    println!("Words: {}", normalized.metadata.word_count);
    println!("Characters: {}", normalized.metadata.char_count);
    if let Some(format) = &normalized.metadata.file_format {
        println!("Format: {}", format);
    }

    let sections = chunker::split_sections(
        &normalized.content,
        chunker::DEFAULT_MAX_SECTION_LENGTH,
    );
    println!("Sections: {}", sections.len());

    let report = validator::validate_content(&normalized.content, validator::DEFAULT_MIN_WORDS);
    println!("Valid: {}", report.is_valid);
    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }
    for suggestion in &report.suggestions {
        println!("Suggestion: {}", suggestion);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Generate {
            file,
            text,
            subject,
            min_cards,
            max_cards,
            name,
            description,
            export,
            export_dir,
            difficulty,
            topic,
            model,
        } => {
            handle_generate(
                file, text, subject, min_cards, max_cards, name, description, export,
                export_dir, difficulty, topic, model,
            )
            .await
        }
        Commands::Inspect { file, text } => handle_inspect(file, text),
        Commands::Config { action } => handle_config_command(&action),
    }
}
