use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use cs_finder::config::{discover, FinderConfig};
use cs_finder::search::{FileFailure, LoadedFile, MatchResult, SourceSet};
use cs_finder::{aggregate, render_detailed, render_tree, Query};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cs-finder")]
#[command(about = "Find C# methods by signature and inspect syntax trees", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to csfinder.toml in the searched folder)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a folder for methods matching a signature query
    Search {
        /// Folder to search recursively
        dir: PathBuf,

        /// Query such as "string[], int -> void"
        query: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive shell: pick a folder, then run queries until `exit`
    Repl {
        /// Folder to search (prompted for when omitted)
        dir: Option<PathBuf>,
    },

    /// Print the syntax tree of a file
    Tree {
        file: PathBuf,

        /// Include source, spans, member details and statistics
        #[arg(short, long)]
        detailed: bool,
    },

    /// Print node statistics of a file
    Stats { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search { dir, query, json } => {
            let config = load_config(cli.config.as_deref(), Some(&dir), cli.no_color)?;
            cmd_search(&dir, &query, json, &config)
        }

        Commands::Repl { dir } => cmd_repl(dir, cli.config.as_deref(), cli.no_color),

        Commands::Tree { file, detailed } => {
            let config = load_config(cli.config.as_deref(), file.parent(), cli.no_color)?;
            cmd_tree(&file, detailed, config.output.color)
        }

        Commands::Stats { file } => {
            load_config(cli.config.as_deref(), file.parent(), cli.no_color)?;
            cmd_stats(&file)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Resolve the config and apply its output settings.
fn load_config(explicit: Option<&Path>, root: Option<&Path>, no_color: bool) -> Result<FinderConfig> {
    let mut config = discover(explicit, root)?;
    if no_color {
        config.output.color = false;
    }
    if !config.output.color {
        colored::control::set_override(false);
    }
    Ok(config)
}

fn print_match(hit: &MatchResult) {
    let block = format!(
        "\nFile : {} \nPosition in file : {}\n{}\n",
        hit.path.display(),
        hit.span,
        hit.signature
    );
    println!("{}", block.yellow());
}

fn print_failures(failures: &[FileFailure]) {
    for failure in failures {
        eprintln!(
            "{}",
            format!("Warning: skipped {}: {}", failure.path.display(), failure.error).yellow()
        );
    }
}

#[derive(Serialize)]
struct SearchReport<'a> {
    query: String,
    matches: &'a [MatchResult],
    skipped: Vec<SkippedFile>,
}

#[derive(Serialize)]
struct SkippedFile {
    path: PathBuf,
    reason: String,
}

fn cmd_search(dir: &Path, raw: &str, json: bool, config: &FinderConfig) -> Result<()> {
    let query = Query::parse(raw);
    if !query.is_valid() {
        eprintln!("{}", format!("Query is invalid : {raw}").red());
        std::process::exit(1);
    }

    let set = SourceSet::load(dir, &config.search)?;
    let hits = set.search(&query)?;

    if json {
        let report = SearchReport {
            query: query.to_string(),
            matches: &hits,
            skipped: set
                .failures()
                .iter()
                .map(|f| SkippedFile {
                    path: f.path.clone(),
                    reason: f.error.to_string(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_failures(set.failures());
    if set.is_empty() {
        println!("{}", "No .cs files found!".red());
        return Ok(());
    }

    for hit in &hits {
        print_match(hit);
    }

    println!("{}", "Summary:".bold());
    println!("  {} files searched", format!("{}", set.files().len()).green());
    println!("  {} matches", format!("{}", hits.len()).green());
    if !set.failures().is_empty() {
        println!("  {} skipped", format!("{}", set.failures().len()).yellow());
    }

    Ok(())
}

/// Print the prompt and read one trimmed line; `None` at end of input.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    print!("{}", ">> ".green());
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn ask_folder(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<PathBuf>> {
    println!("{}", "Write path to folder".green());
    loop {
        let Some(input) = prompt(lines)? else {
            return Ok(None);
        };
        if input.is_empty() {
            println!("{}", "Path to folder is empty".red());
            continue;
        }
        let path = PathBuf::from(&input);
        if !path.is_dir() {
            println!("{}", "Path folder not exist".red());
            continue;
        }
        return Ok(Some(path));
    }
}

fn cmd_repl(dir: Option<PathBuf>, config_path: Option<&Path>, no_color: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", "Welcome to cs-finder! Write exit to end\n".green());

    let dir = match dir {
        Some(dir) if dir.is_dir() => dir,
        Some(dir) => {
            println!("{}", format!("Path folder not exist: {}", dir.display()).red());
            match ask_folder(&mut lines)? {
                Some(dir) => dir,
                None => return Ok(()),
            }
        }
        None => match ask_folder(&mut lines)? {
            Some(dir) => dir,
            None => return Ok(()),
        },
    };

    let config = load_config(config_path, Some(&dir), no_color)?;
    let mut set = SourceSet::load(&dir, &config.search)
        .with_context(|| format!("failed to load {}", dir.display()))?;
    println!("{}", "Path successfully set!\n".green());
    print_failures(set.failures());
    if set.is_empty() {
        println!("{}", "No .cs files found!".red());
    }

    println!("Write query");
    while let Some(input) = prompt(&mut lines)? {
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.eq_ignore_ascii_case("reload") {
            set.reload();
            print_failures(set.failures());
            println!("Reloaded {} files", set.files().len());
            continue;
        }
        if input.is_empty() {
            println!("{}", "Query is empty".red());
            continue;
        }

        let query = Query::parse(&input);
        if !query.is_valid() {
            println!("{}", format!("Query is invalid : {input}").red());
            continue;
        }

        let hits = set.search(&query)?;
        for hit in &hits {
            print_match(hit);
        }
        println!("{} matches", hits.len());
    }

    Ok(())
}

fn load_file(path: &Path) -> Result<LoadedFile> {
    let file = LoadedFile::read(path, false)
        .with_context(|| format!("failed to load {}", path.display()))?;
    if file.root().inner().has_error() {
        tracing::warn!(path = %path.display(), "file has syntax errors; tree is partial");
    }
    Ok(file)
}

fn cmd_tree(path: &Path, detailed: bool, color: bool) -> Result<()> {
    let file = load_file(path)?;
    let text = if detailed {
        render_detailed(file.source(), file.root(), color)
    } else {
        render_tree(file.root(), color)
    };
    print!("{text}");
    Ok(())
}

fn cmd_stats(path: &Path) -> Result<()> {
    let file = load_file(path)?;
    let stats = aggregate(file.root());
    println!("{}", "=== AST STATISTICS ===".cyan());
    print!("{stats}");
    Ok(())
}
