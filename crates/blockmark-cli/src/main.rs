use anyhow::{Context, Result};
use blockmark_config::Config;
use blockmark_engine::{ConvertOptions, Diagnostic, Document, io};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blockmark")]
#[command(about = "Convert between block markup and the block document JSON form")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/blockmark/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert markup to document JSON
    Parse {
        /// Markup file, or `-` for stdin
        input: PathBuf,
        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Single-line JSON regardless of config
        #[arg(long)]
        compact: bool,
    },
    /// Convert document JSON back to markup
    Render {
        /// JSON file, or `-` for stdin
        input: PathBuf,
        /// Write markup here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the plain text of a markup file
    Text {
        input: PathBuf,
        /// Block separator (defaults to the configured one)
        #[arg(long)]
        separator: Option<String>,
    },
    /// Print the heading outline of a markup file
    Outline {
        input: PathBuf,
        /// Emit `[{level, text}]` JSON instead of an indented list
        #[arg(long)]
        json: bool,
    },
    /// Print block, word and heading counts of a markup file
    Stats { input: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = load_config(cli.config.as_deref())?;
    let options = convert_options(&config);

    match cli.command {
        Commands::Parse {
            input,
            output,
            compact,
        } => {
            let document = convert(&input, &options)?;
            let pretty = config.output.pretty_json && !compact;
            match output {
                Some(path) => io::write_document(&path, &document, pretty)?,
                None if pretty => println!("{}", document.to_json_pretty()?),
                None => println!("{}", document.to_json()?),
            }
        }
        Commands::Render { input, output } => {
            let document = if is_stdin(&input) {
                Document::from_json(&read_stdin()?).context("Invalid document JSON on stdin")?
            } else {
                io::read_document(&input)?
            };
            let markup = document.to_markup();
            match output {
                Some(path) => io::write_markup(&path, &markup)?,
                None => println!("{markup}"),
            }
        }
        Commands::Text { input, separator } => {
            let document = convert(&input, &options)?;
            let separator = separator.unwrap_or(config.output.text_separator);
            println!("{}", document.plain_text(&separator));
        }
        Commands::Outline { input, json } => {
            let headings = convert(&input, &options)?.headings();
            if json {
                println!("{}", serde_json::to_string_pretty(&headings)?);
            } else {
                for heading in headings {
                    let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
                    println!("{indent}{}", heading.text);
                }
            }
        }
        Commands::Stats { input } => {
            let document = convert(&input, &options)?;
            println!("blocks:   {}", document.len());
            println!("words:    {}", document.word_count());
            println!("headings: {}", document.headings().len());
        }
    }

    Ok(())
}

/// An explicit `--config` path must exist; the default location is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn convert_options(config: &Config) -> ConvertOptions {
    ConvertOptions {
        repair_quiz_payloads: config.convert.repair_quiz_payloads,
        invalid_quiz_label: config.convert.invalid_quiz_label.clone(),
    }
}

/// Reads markup and converts it, reporting recoverable problems as warnings.
fn convert(input: &Path, options: &ConvertOptions) -> Result<Document> {
    let markup = if is_stdin(input) {
        read_stdin()?
    } else {
        io::read_markup(input)?
    };
    let (document, diagnostics) = Document::from_markup_with(&markup, options);
    report(input, &diagnostics);
    Ok(document)
}

fn report(input: &Path, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("warning: {}: {diagnostic}", input.display());
    }
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["blockmark", "stats", "notes.md", "-v", "--config", "c.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Commands::Stats { .. }));
    }

    #[test]
    fn test_config_maps_to_convert_options() {
        let mut config = Config::default();
        config.convert.repair_quiz_payloads = false;
        config.convert.invalid_quiz_label = "Quiz missing".to_string();

        let options = convert_options(&config);

        assert!(!options.repair_quiz_payloads);
        assert_eq!(options.invalid_quiz_text("Maths"), "[Quiz missing: Maths]");
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn test_convert_reads_markup_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("lesson.md");
        std::fs::write(&input, "# Title\n@quiz[T]{oops}").unwrap();

        let document = convert(&input, &ConvertOptions::default()).unwrap();

        assert_eq!(document.len(), 2);
        assert_eq!(document.plain_text("\n"), "Title\n[Invalid quiz: T]");
    }
}
