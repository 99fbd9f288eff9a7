use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use context_engineer::{ContextEngineer, EngineConfig};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    print_stdout(&text)
}

#[derive(Parser)]
#[command(name = "context-engineer")]
#[command(about = "Token-budgeted file selection for LLM context windows", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the most important files that fit the token budget
    Analyze(AnalyzeArgs),

    /// Rank every candidate file by importance, ignoring the budget
    Rank(RankArgs),
}

#[derive(Args)]
struct SelectionArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Focus keywords matched against file names (comma-separated)
    #[arg(long, value_delimiter = ',')]
    focus: Vec<String>,

    /// TOML config file (max_tokens, focus_areas)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct AnalyzeArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Token budget (overrides the config file)
    #[arg(long)]
    max_tokens: Option<usize>,
}

#[derive(Args)]
struct RankArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Print at most this many files
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Serialize)]
struct RankedEntry {
    path: String,
    score: f64,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Rank(args) => run_rank(args),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let mut config = resolve_config(&args.selection)?;
    if let Some(max_tokens) = args.max_tokens {
        config.max_tokens = max_tokens;
    }

    let engineer = ContextEngineer::from_config(&config);
    let context = engineer.build_analysis_context(&args.selection.path, &config.focus_areas);
    log::info!(
        "Context: {} files, {} tokens",
        context.selected_count,
        context.metadata.total_tokens
    );

    print_json(&context, args.selection.pretty)
}

fn run_rank(args: RankArgs) -> Result<()> {
    let config = resolve_config(&args.selection)?;

    let engineer = ContextEngineer::from_config(&config);
    let ranked = engineer.rank_files(&args.selection.path, &config.focus_areas);
    let limit = args.limit.unwrap_or(ranked.len());
    let entries: Vec<RankedEntry> = ranked
        .into_iter()
        .take(limit)
        .map(|file| RankedEntry {
            path: file.path.to_string_lossy().into_owned(),
            score: file.score,
        })
        .collect();

    print_json(&entries, args.selection.pretty)
}

/// Config file (or defaults) with `--focus` taking precedence when given
fn resolve_config(args: &SelectionArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if !args.focus.is_empty() {
        config.focus_areas = args.focus.clone();
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    EngineConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_focus_list_and_budget() {
        let cli = Cli::try_parse_from([
            "context-engineer",
            "analyze",
            "proj",
            "--focus",
            "auth,security",
            "--max-tokens",
            "500",
        ])
        .unwrap();

        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.selection.path, PathBuf::from("proj"));
        assert_eq!(args.selection.focus, vec!["auth", "security"]);
        assert_eq!(args.max_tokens, Some(500));
    }

    #[test]
    fn focus_flag_overrides_config_file() {
        let args = SelectionArgs {
            path: PathBuf::from("."),
            focus: vec!["db".to_string()],
            config: None,
            pretty: false,
        };

        let config = resolve_config(&args).unwrap();

        assert_eq!(config.focus_areas, vec!["db"]);
        assert_eq!(config.max_tokens, context_engineer::DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
