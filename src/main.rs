//! strsearch - command line entry point.
//!
//! Loads configuration, initializes logging and dispatches to the search,
//! demo, analysis and experiment commands. Reports go to stdout, logs to
//! stderr.

use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use strsearch_lib::analysis::{
    ConsoleReportSink, CorpusGenerator, CsvReportSink, ExperimentRunner, ReportSink, SearchReport,
    SymbolClass,
};
use strsearch_lib::config::{AppConfig, ConfigLoader, LogConfig, Validate, ENV_PREFIX};
use strsearch_lib::error::{AppError, AppResult, ErrorContext, ErrorReporter, TracingErrorReporter};
use strsearch_lib::matching::{
    has_substring, Algorithm, Alphabet, AlphabetKind, KmpMatcher, TableFootprint, UnmappedPolicy,
};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "strsearch", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Command to execute (defaults to `demo`)
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Search a text for a pattern and print a report
    Search {
        /// Pattern to search for
        #[arg(short, long)]
        pattern: String,

        /// Text to search in
        #[arg(short, long)]
        text: String,

        /// Algorithm to run
        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::All)]
        algorithm: AlgorithmArg,

        /// Symbol set for Boyer-Moore (overrides configuration)
        #[arg(long, value_enum)]
        alphabet: Option<AlphabetArg>,

        /// Alias unmapped symbols to index 0 instead of rejecting them
        #[arg(long)]
        alias_unmapped: bool,

        /// Print the KMP failure table
        #[arg(long)]
        show_table: bool,
    },

    /// Run the built-in Boyer-Moore and KMP demonstrations
    Demo,

    /// Search a random text with a planted random pattern using Boyer-Moore
    Analyze {
        /// Length of the generated text
        #[arg(long, default_value_t = 1000)]
        text_size: usize,

        /// Length of the generated pattern
        #[arg(long, default_value_t = 10)]
        pattern_size: usize,

        /// Seed for the generator
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the configured size grid and write CSV results
    Experiment {
        /// CSV output path (overrides configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Algorithms to measure (overrides configuration)
        #[arg(short, long, value_enum)]
        algorithm: Vec<AlgorithmArg>,

        /// Timed runs per cell (overrides configuration)
        #[arg(long)]
        runs: Option<u32>,

        /// Seed for the generator (overrides configuration)
        #[arg(long)]
        seed: Option<u64>,

        /// Do not print per-cell progress lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file (JSON for a `.json` path, TOML otherwise)
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Command {
    fn component(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Demo => "demo",
            Self::Analyze { .. } => "analyze",
            Self::Experiment { .. } => "experiment",
            Self::Validate => "validate",
            Self::GenConfig { .. } => "gen-config",
        }
    }

    /// What the command was working on, attached to a failure report.
    fn details(&self, config: &AppConfig) -> Option<String> {
        match self {
            Self::Search { pattern, .. } => Some(format!("pattern {pattern:?}")),
            Self::Analyze {
                text_size,
                pattern_size,
                seed,
            } => Some(format!(
                "text size {text_size}, pattern size {pattern_size}, seed {seed:?}"
            )),
            Self::Experiment { output, .. } => {
                let output = output.as_ref().unwrap_or(&config.experiment.output);
                Some(format!("output {}", output.display()))
            }
            Self::GenConfig { output } => Some(format!("output {}", output.display())),
            Self::Demo | Self::Validate => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Bm,
    Kmp,
    Naive,
    All,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Self::Bm => vec![Algorithm::BoyerMoore],
            Self::Kmp => vec![Algorithm::Kmp],
            Self::Naive => vec![Algorithm::Naive],
            Self::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlphabetArg {
    Latin,
    Ascii,
}

impl From<AlphabetArg> for AlphabetKind {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Latin => AlphabetKind::Latin,
            AlphabetArg::Ascii => AlphabetKind::Ascii,
        }
    }
}

/// Initialize the logging system.
fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("Failed to set global tracing subscriber: {e}"))
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load() {
        Ok(config) => config,
        Err(error) => {
            init_logging(&LogConfig::default()).context("failed to initialize logging")?;
            let details = args
                .config
                .as_ref()
                .map(|path| format!("config file {}", path.display()));
            TracingErrorReporter.report(&error_context(error.into(), "config", details));
            process::exit(1);
        }
    };

    init_logging(&config.log).context("failed to initialize logging")?;

    let command = args.command.unwrap_or(Command::Demo);
    let component = command.component();
    let details = command.details(&config);

    if let Err(error) = run(command, &config) {
        TracingErrorReporter.report(&error_context(error, component, details));
        process::exit(1);
    }

    Ok(())
}

fn error_context(error: AppError, component: &str, details: Option<String>) -> ErrorContext {
    let context = ErrorContext::new(error, component);
    match details {
        Some(details) => context.with_details(details),
        None => context,
    }
}

fn run(command: Command, config: &AppConfig) -> AppResult<()> {
    let alphabet = config.alphabet.to_alphabet();

    match command {
        Command::Search {
            pattern,
            text,
            algorithm,
            alphabet: kind,
            alias_unmapped,
            show_table,
        } => {
            let kind = kind.map_or(alphabet.kind(), AlphabetKind::from);
            let policy = if alias_unmapped {
                UnmappedPolicy::Alias
            } else {
                alphabet.policy()
            };
            let alphabet = Alphabet::new(kind, policy);

            for algorithm in algorithm.algorithms() {
                println!("{}\n", SearchReport::run(algorithm, &text, &pattern, &alphabet)?);
            }
            if show_table {
                print_failure_table(&pattern);
            }
            Ok(())
        }
        Command::Demo => {
            println!("== Boyer-Moore ==");
            let report =
                SearchReport::run(Algorithm::BoyerMoore, "GEMINIEATICECREAM", "ICE", &alphabet)?;
            println!("{report}\n");

            let (text, pattern) = ("abcxabcdabcdabcy", "abcdabcy");
            println!("== Knuth-Morris-Pratt ==");
            let text_symbols: Vec<char> = text.chars().collect();
            let pattern_symbols: Vec<char> = pattern.chars().collect();
            println!(
                "Naive Search Match: {}",
                has_substring(&text_symbols, &pattern_symbols)
            );
            print_failure_table(pattern);
            println!("{}", SearchReport::run(Algorithm::Kmp, text, pattern, &alphabet)?);
            Ok(())
        }
        Command::Analyze {
            text_size,
            pattern_size,
            seed,
        } => {
            let mut generator = CorpusGenerator::from_seed(seed, SymbolClass::Uppercase);
            let pattern = generator.pattern(pattern_size);
            let base = generator.text(text_size);
            let (text, planted_at) = generator.plant(&base, &pattern);
            info!(planted_at, %pattern, "pattern planted");

            println!("{}", SearchReport::run(Algorithm::BoyerMoore, &text, &pattern, &alphabet)?);
            Ok(())
        }
        Command::Experiment {
            output,
            algorithm,
            runs,
            seed,
            quiet,
        } => {
            let mut experiment = config.experiment.clone();
            if let Some(output) = output {
                experiment.output = output;
            }
            if !algorithm.is_empty() {
                experiment.set_algorithms(algorithm.into_iter().flat_map(AlgorithmArg::algorithms));
            }
            if let Some(runs) = runs {
                experiment.runs = runs;
            }
            if seed.is_some() {
                experiment.seed = seed;
            }
            experiment.validate()?;

            let output = experiment.output.clone();
            let mut csv_sink = CsvReportSink::create(&output)?;
            let mut console_sink = ConsoleReportSink::stdout();
            let mut sinks: Vec<&mut dyn ReportSink> = vec![&mut csv_sink];
            if !quiet {
                sinks.push(&mut console_sink);
            }

            let records = ExperimentRunner::new(experiment, alphabet).run(&mut sinks)?;
            info!(records = records.len(), output = %output.display(), "results written");
            Ok(())
        }
        Command::Validate => {
            config.validate()?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let defaults = AppConfig::default();
            let rendered = match output.extension().and_then(|ext| ext.to_str()) {
                Some("json") => serde_json::to_string_pretty(&defaults)?,
                _ => toml::to_string_pretty(&defaults)
                    .map_err(|e| AppError::Custom(format!("Failed to serialize config: {e}")))?,
            };
            std::fs::write(&output, rendered)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

fn print_failure_table(pattern: &str) {
    let matcher = KmpMatcher::new(pattern);
    let table = matcher.failure_table();

    println!("LPS Table:");
    for (i, value) in table.as_slice().iter().enumerate() {
        println!("π({i}) = {value}");
    }
    println!("Total LPS Space: {} bytes", table.bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use strsearch_lib::matching::MatchError;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("strsearch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_repeated_algorithms_kept_once_in_order() {
        let Some(Command::Experiment { algorithm, .. }) =
            parse(&["experiment", "-a", "kmp", "-a", "bm", "-a", "kmp", "-a", "all"]).command
        else {
            panic!("expected experiment command");
        };

        let mut experiment = AppConfig::default().experiment;
        experiment.set_algorithms(algorithm.into_iter().flat_map(AlgorithmArg::algorithms));

        assert_eq!(
            experiment.algorithms,
            vec![Algorithm::Kmp, Algorithm::BoyerMoore, Algorithm::Naive]
        );
        assert!(experiment.validate().is_ok());
    }

    #[test]
    fn test_details_name_command_input() {
        let config = AppConfig::default();

        let search = parse(&["search", "-p", "ICE", "-t", "ICE CREAM"]).command.unwrap();
        assert_eq!(search.details(&config).as_deref(), Some("pattern \"ICE\""));

        let experiment = parse(&["experiment"]).command.unwrap();
        assert_eq!(
            experiment.details(&config),
            Some(format!("output {}", config.experiment.output.display()))
        );

        let experiment = parse(&["experiment", "-o", "out/results.csv"]).command.unwrap();
        assert_eq!(experiment.details(&config).as_deref(), Some("output out/results.csv"));

        assert_eq!(Command::Demo.details(&config), None);
    }

    #[test]
    fn test_error_context_carries_details() {
        let context = error_context(
            MatchError::EmptyPattern.into(),
            "search",
            Some("pattern \"\"".to_string()),
        );
        assert_eq!(context.component, "search");
        assert_eq!(context.details.as_deref(), Some("pattern \"\""));
        assert!(context.to_string().contains("Details: pattern"));

        let context = error_context(MatchError::EmptyPattern.into(), "demo", None);
        assert!(context.details.is_none());
    }
}
