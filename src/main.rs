//zreplace/src/main.rs
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use zreplace::kernel::services::adapters::{
    ensure_settings_file, load_settings, load_settings_from, ConfigService,
};
use zreplace::kernel::services::ports::Settings;
use zreplace::{FindPanelState, TextStore};

mod logging;

const EXIT_IO: u8 = 1;
const EXIT_PATTERN: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "zreplace", version, about = "Find and replace text in a single buffer")]
struct Cli {
    /// Settings file (defaults to the per-user setting.json)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Echo log lines to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Args, Debug, Clone, Copy)]
struct MatchOptions {
    /// Match case exactly
    #[arg(short = 'c', long, overrides_with = "ignore_case")]
    case_sensitive: bool,

    /// Ignore case, even when the settings default to case sensitive
    #[arg(short = 'i', long, overrides_with = "case_sensitive")]
    ignore_case: bool,

    /// Treat the pattern as a regular expression
    #[arg(short = 'r', long, overrides_with = "literal")]
    regex: bool,

    /// Match the pattern literally, even when the settings default to regex
    #[arg(short = 'l', long, overrides_with = "regex")]
    literal: bool,
}

impl MatchOptions {
    /// 命令行选项优先于配置文件中的默认值
    fn apply(self, panel: &mut FindPanelState) {
        if self.case_sensitive {
            panel.case_sensitive = true;
        } else if self.ignore_case {
            panel.case_sensitive = false;
        }
        if self.regex {
            panel.use_regex = true;
        } else if self.literal {
            panel.use_regex = false;
        }
    }
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print the number of matches
    Count {
        pattern: String,
        file: Option<PathBuf>,
        #[command(flatten)]
        options: MatchOptions,
    },
    /// Replace every match and print the result
    Replace {
        pattern: String,
        replacement: String,
        file: Option<PathBuf>,
        #[command(flatten)]
        options: MatchOptions,
        /// Write the result back to FILE instead of stdout
        #[arg(long, requires = "file")]
        in_place: bool,
        /// Print the operation record as JSON on stderr
        #[arg(long)]
        json: bool,
    },
    /// Print word, line and character counts
    Stats { file: Option<PathBuf> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logging_guard = logging::init(cli.verbose);
    if let Some(guard) = logging_guard.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    let settings = resolve_settings(cli.settings.as_deref());
    let config = ConfigService::from_settings(&settings);

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "io failure");
            eprintln!("zreplace: {}", e);
            ExitCode::from(EXIT_IO)
        }
    }
}

fn resolve_settings(path: Option<&Path>) -> Settings {
    match path {
        Some(path) => load_settings_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "using default settings");
            eprintln!("zreplace: {}: {}", path.display(), e);
            Settings::default()
        }),
        None => {
            if let Err(e) = ensure_settings_file() {
                tracing::debug!(error = %e, "no settings file");
            }
            load_settings().unwrap_or_default()
        }
    }
}

fn run(command: CliCommand, config: &ConfigService) -> io::Result<ExitCode> {
    match command {
        CliCommand::Count {
            pattern,
            file,
            options,
        } => {
            let store = load_store(file.as_deref(), config)?;
            let mut panel = panel_for(config, options);
            panel.set_find_text(pattern, &store);
            match panel.match_count {
                Some(count) => {
                    println!("{}", count);
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(report_panel_error(&panel)),
            }
        }
        CliCommand::Replace {
            pattern,
            replacement,
            file,
            options,
            in_place,
            json,
        } => {
            let mut store = load_store(file.as_deref(), config)?;
            store.subscribe(|text: &str| {
                tracing::debug!(len = text.len(), "buffer updated");
            });

            let mut panel = panel_for(config, options);
            panel.find_text = pattern;
            panel.set_replace_text(replacement);
            panel.replace_all(&mut store);

            let Some(record) = store.last_operation() else {
                return Ok(report_panel_error(&panel));
            };
            if json {
                let line = serde_json::to_string(record).map_err(io::Error::other)?;
                eprintln!("{}", line);
            }

            match file.filter(|_| in_place) {
                Some(path) => std::fs::write(path, store.text())?,
                None => print!("{}", store.text()),
            }
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Stats { file } => {
            let store = load_store(file.as_deref(), config)?;
            let stats = store.stats();
            println!(
                "words: {}\nlines: {}\nchars: {}",
                stats.words, stats.lines, stats.chars
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_store(file: Option<&Path>, config: &ConfigService) -> io::Result<TextStore> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let mut store = TextStore::with_engine(config.match_engine());
    store.set_text(text);
    Ok(store)
}

fn panel_for(config: &ConfigService, options: MatchOptions) -> FindPanelState {
    let mut panel = FindPanelState::new(config.engine());
    options.apply(&mut panel);
    panel
}

fn report_panel_error(panel: &FindPanelState) -> ExitCode {
    match panel.error_message.as_deref() {
        Some(message) => eprintln!("zreplace: {}", message),
        None => eprintln!("zreplace: empty pattern, no search performed"),
    }
    ExitCode::from(EXIT_PATTERN)
}
