mod output;

use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use commie_config::{Config, OutputFormat};
use commie_engine::{Language, SourceFile};
use output::{FileReport, FormatArg, JsonFile};

const STDIN: &str = "-";
const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, Parser)]
#[command(name = "commie", version, about = "Extract comments from source code")]
struct Cli {
    /// Scan every file as this language (name or extension) instead of
    /// guessing from the file name
    #[arg(short, long)]
    language: Option<Language>,

    /// Merge adjacent single-line comments into blocks
    #[arg(short, long)]
    group: bool,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Print comment text without its delimiters
    #[arg(long)]
    text_only: bool,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log scanner activity to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Files to scan; `-` reads standard input
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Scans every file and writes the results to `out`. Returns `false` if any
/// file could not be read or scanned to the end.
fn run(cli: &Cli, out: &mut impl Write) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let (group, format) = settings(cli, &config);
    log::debug!("group={group} format={format:?}");

    if cli.language.is_none() && cli.files.iter().any(|f| f.as_os_str() == STDIN) {
        bail!("reading standard input requires --language");
    }

    let mut clean = true;
    let mut json = Vec::new();

    for path in &cli.files {
        let file = match load_source(cli, &config, path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("{}: {e:#}", display_name(path));
                clean = false;
                continue;
            }
        };

        let report = FileReport::scan(&file, group);
        if let Some(e) = &report.error {
            eprintln!("{}: {e}", report.path.display());
            clean = false;
        }

        match format {
            OutputFormat::Text => output::write_text(out, &report, cli.text_only)?,
            OutputFormat::Json => json.push(JsonFile::from(&report)),
        }
    }

    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(clean)
}

/// Grouping and output format, with command-line flags taking precedence
/// over the config file.
fn settings(cli: &Cli, config: &Config) -> (bool, OutputFormat) {
    let group = cli.group || config.group;
    let format = cli.format.map_or(config.format, OutputFormat::from);
    (group, format)
}

fn display_name(path: &Path) -> Cow<'_, str> {
    if path.as_os_str() == STDIN {
        Cow::Borrowed(STDIN_NAME)
    } else {
        path.to_string_lossy()
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} does not exist", path.display())),
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

fn load_source(cli: &Cli, config: &Config, path: &Path) -> Result<SourceFile> {
    if path.as_os_str() == STDIN {
        let language = cli
            .language
            .context("reading standard input requires --language")?;
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(SourceFile::from_text(STDIN_NAME, language, text));
    }

    let language = match cli.language {
        Some(language) => language,
        None => config.language_for(path)?,
    };
    Ok(SourceFile::read_as(path, language)?)
}
