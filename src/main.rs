use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use miette::{Context, IntoDiagnostic, Result};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use gitwho_core::{
    ChangesResult, GitwhoConfig, GitwhoError, OutputFormat, OwnershipResult,
    OwnershipTimelineEntry, Verbosity,
};
use gitwho_report::{changes, duplicates, ownership, ranking, timeline};

#[derive(Parser)]
#[command(
    name = "gitwho",
    version,
    about = "Contribution reports from git line history",
    long_about = "gitwho turns per-author line-history aggregates into contribution reports:\n\
                   who touched what and how, leaderboards, code ownership, and duplicate clusters.\n\n\
                   Each subcommand reads a JSON aggregate produced by the analysis engine,\n\
                   from --input or stdin.\n\n\
                   Examples:\n  \
                     gitwho changes --input changes.json            Full changes breakdown\n  \
                     gitwho changes --input changes.json --format short  Leaderboards\n  \
                     gitwho ownership --input ownership.json        Lines owned per author\n  \
                     gitwho duplicates --input ownership.json       Duplicate code clusters\n  \
                     gitwho timeline --input timeline.json          Ownership over time"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (default: .gitwho.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        long_help = "Output format for command results.\n\n\
                       Formats:\n  \
                         text  Human-readable report (default)\n  \
                         json  Machine-readable JSON with camelCase keys"
    )]
    output: OutputFormat,

    /// Enable verbose logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Report lines touched per author over a range of history
    #[command(long_about = "Report lines touched per author over a range of history.\n\n\
        'full' prints the nested new/refactor/churn breakdown for the whole range and for\n\
        every active author, with their top files. 'short' prints the leaderboards:\n\
        top coders, new liners, refactorers, helpers and churners.\n\n\
        Examples:\n  gitwho changes --input changes.json\n  gitwho changes --format short < changes.json")]
    Changes {
        /// Read the aggregate from file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Report detail: full or short
        #[arg(long, default_value = "full")]
        format: Verbosity,
    },
    /// Report current code ownership per author
    #[command(long_about = "Report current code ownership per author.\n\n\
        'full' adds average line age, duplicated lines, author mails and per-author\n\
        duplicate counters.\n\n\
        Examples:\n  gitwho ownership --input ownership.json --format short")]
    Ownership {
        /// Read the aggregate from file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Report detail: full or short
        #[arg(long, default_value = "full")]
        format: Verbosity,
    },
    /// List duplicated code blocks and where they are repeated
    #[command(long_about = "List duplicated code blocks and where they are repeated.\n\n\
        'short' stops after [report].duplicate_limit related locations (default: 20).\n\n\
        Examples:\n  gitwho duplicates --input ownership.json --format full")]
    Duplicates {
        /// Read the aggregate from file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Report detail: full or short
        #[arg(long, default_value = "short")]
        format: Verbosity,
    },
    /// Report code ownership at each snapshot of a timeline
    #[command(long_about = "Report code ownership at each snapshot of a timeline.\n\n\
        Input is a JSON array of {\"date\": \"YYYY-MM-DD\", \"result\": <ownership>} entries.\n\n\
        Examples:\n  gitwho timeline --input timeline.json --format short")]
    Timeline {
        /// Read the timeline from file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Report detail: full or short
        #[arg(long, default_value = "short")]
        format: Verbosity,
    },
    /// Create a default .gitwho.toml configuration file
    #[command(long_about = "Create a default .gitwho.toml configuration file.\n\n\
        Generates a commented-out template with all available options.\n\
        Fails if .gitwho.toml already exists.")]
    Init,
    /// Generate shell completion scripts
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

const CONFIG_FILE: &str = ".gitwho.toml";

const DEFAULT_CONFIG: &str = r#"# gitwho configuration
# See: https://github.com/flaviostutz/gitwho

[report]
# Authors listed per leaderboard
# leaderboard_size = 3
# Files listed under each author in the full changes report
# top_files = 5
# Related duplicate locations shown before a short report is truncated
# duplicate_limit = 20
# Check counter invariants of the input before rendering
# validate = true
"#;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<GitwhoConfig> {
    let config = match path {
        Some(path) => GitwhoConfig::from_file(path)?,
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                GitwhoConfig::from_file(default_path)?
            } else {
                GitwhoConfig::default()
            }
        }
    };
    Ok(config)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            if !path.exists() {
                return Err(GitwhoError::FileNotFound(path.to_path_buf()).into());
            }
            std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err(format!("reading {}", path.display()))
        }
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .into_diagnostic()
                .wrap_err("reading stdin")?;
            Ok(input)
        }
    }
}

fn load_aggregate<T: DeserializeOwned>(file: Option<&Path>, what: &str) -> Result<T> {
    let input = read_input(file)?;
    let value = serde_json::from_str(&input)
        .map_err(GitwhoError::from)
        .wrap_err(format!("parsing {what}"))?;
    Ok(value)
}

fn ensure_valid(outcome: gitwho_core::Result<()>) -> gitwho_core::Result<()> {
    if let Err(err) = &outcome {
        tracing::warn!(%err, "aggregate failed validation");
    }
    outcome
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
    Ok(())
}

fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(output = %cli.output, report = ?config.report, "configuration loaded");

    match cli.command {
        Command::Changes { ref input, format } => {
            let result: ChangesResult = load_aggregate(input.as_deref(), "changes result")?;
            if config.report.validate {
                ensure_valid(result.validate())?;
            }
            tracing::info!(
                commits = result.total_commits,
                authors = result.authors_lines.len(),
                "changes result loaded"
            );

            match cli.output {
                OutputFormat::Json => {
                    let boards = ranking::leaderboards(&result, config.report.leaderboard_size);
                    print_json(&serde_json::json!({
                        "result": result,
                        "leaderboards": boards,
                    }))?;
                }
                OutputFormat::Text => {
                    let text = match format {
                        Verbosity::Full => changes::format_full_text(&result, &config.report),
                        Verbosity::Short => ranking::format_top_text(&result, &config.report),
                    };
                    print_text(&text);
                }
            }
        }
        Command::Ownership { ref input, format } => {
            let result: OwnershipResult = load_aggregate(input.as_deref(), "ownership result")?;
            if config.report.validate {
                ensure_valid(result.validate())?;
            }
            match cli.output {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Text => print_text(&ownership::format_ownership(&result, format)),
            }
        }
        Command::Duplicates { ref input, format } => {
            let result: OwnershipResult = load_aggregate(input.as_deref(), "ownership result")?;
            if config.report.validate {
                ensure_valid(result.validate())?;
            }
            match cli.output {
                OutputFormat::Json => print_json(&result.duplicate_line_groups)?,
                OutputFormat::Text => print_text(&duplicates::format_duplicates(
                    &result,
                    format,
                    &config.report,
                )),
            }
        }
        Command::Timeline { ref input, format } => {
            let entries: Vec<OwnershipTimelineEntry> =
                load_aggregate(input.as_deref(), "ownership timeline")?;
            if config.report.validate {
                for entry in &entries {
                    ensure_valid(entry.result.validate())
                        .wrap_err(format!("snapshot {}", entry.date))?;
                }
            }
            match cli.output {
                OutputFormat::Json => print_json(&entries)?,
                OutputFormat::Text => print_text(&timeline::format_timeline(&entries, format)),
            }
        }
        Command::Init => {
            let path = Path::new(CONFIG_FILE);
            if path.exists() {
                miette::bail!("{CONFIG_FILE} already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created {CONFIG_FILE} with default configuration");
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "gitwho", &mut std::io::stdout());
        }
    }

    Ok(())
}
