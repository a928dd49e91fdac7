//! Wordle Assist - CLI
//!
//! Feed in the guesses you played and the colors they got back; get the words
//! still possible, ranked by letter frequency, plus filler words to try.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use wordle_assist::{
    commands::{
        MAX_GUESSES, analyze_word, letter_frequencies, pick_targets, read_request, run_benchmark,
        run_request, run_simple, run_suggest,
    },
    config::SolverSettings,
    error::SolverResult,
    output::{
        print_analysis_result, print_benchmark_result, print_frequency_report,
        print_suggest_result,
    },
    solver::{Solver, SolverConfig},
    wordlists::{DictionaryCache, DictionaryLoader, DirectoryLoader, EmbeddedLoader, FallbackLoader},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Word-guessing assistant: filters a dictionary by guess feedback and ranks what is left",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding dictionary files (<id>, <id>.json or <id>.txt); built-in lists are the fallback
    #[arg(long, global = true)]
    dict_dir: Option<PathBuf>,

    /// Log solver internals to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    settings: SolverSettings,
}

/// Word length, prefix and dictionary shared by the game commands
#[derive(Args, Clone)]
struct GameArgs {
    /// Word length
    #[arg(short, long, default_value_t = 5)]
    length: i64,

    /// Known first letter
    #[arg(short, long)]
    prefix: Option<String>,

    /// Dictionary id
    #[arg(short, long, default_value = "english")]
    dictionary: String,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            length: 5,
            prefix: None,
            dictionary: "english".to_string(),
        }
    }
}

impl GameArgs {
    fn config(&self) -> SolverResult<SolverConfig> {
        SolverConfig::new(self.length, self.prefix.as_deref(), self.dictionary.clone())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a JSON request read from FILE or stdin
    Request {
        /// Request file (stdin when omitted)
        file: Option<PathBuf>,

        /// Pretty-print the reply
        #[arg(long)]
        pretty: bool,
    },

    /// Suggest words for a list of GUESS:FEEDBACK pairs (e.g. crane:bbgbg)
    Suggest {
        #[command(flatten)]
        game: GameArgs,

        /// Guesses played so far, in order
        history: Vec<String>,
    },

    /// Interactive mode (default)
    Simple {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Score a word against the dictionary
    Analyze {
        /// Word to analyze
        word: String,

        #[command(flatten)]
        game: GameArgs,
    },

    /// Self-play on random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for target selection
        #[arg(long)]
        seed: Option<u64>,

        /// Guesses allowed per game
        #[arg(long, default_value_t = MAX_GUESSES)]
        max_guesses: usize,

        #[command(flatten)]
        game: GameArgs,
    },

    /// Letter frequency table of the dictionary
    Frequency {
        #[command(flatten)]
        game: GameArgs,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_loader(dict_dir: Option<PathBuf>) -> Box<dyn DictionaryLoader> {
    match dict_dir {
        Some(dir) => Box::new(FallbackLoader::new(DirectoryLoader::new(dir), EmbeddedLoader)),
        None => Box::new(EmbeddedLoader),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cache = DictionaryCache::new(build_loader(cli.dict_dir));
    let solver = Solver::new(&cache, cli.settings);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple {
        game: GameArgs::default(),
    });

    match command {
        Commands::Request { file, pretty } => {
            let input = read_request(file.as_deref())?;
            println!("{}", run_request(&solver, &input, pretty));
        }
        Commands::Suggest { game, history } => {
            let result = run_suggest(&solver, game.config()?, &history)?;
            print_suggest_result(&result);
        }
        Commands::Simple { game } => {
            run_simple(&solver, game.config()?).map_err(|e| anyhow::anyhow!(e))?;
        }
        Commands::Analyze { word, game } => {
            let result = analyze_word(&solver, &game.config()?, &word)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
            game,
        } => {
            let config = game.config()?;
            let targets = pick_targets(&solver, &config, count, seed)?;
            println!("Running benchmark on {} random words...", targets.len());
            let result = run_benchmark(&solver, &config, &targets, max_guesses)?;
            print_benchmark_result(&result);
        }
        Commands::Frequency { game } => {
            let report = letter_frequencies(&solver, &game.config()?)?;
            print_frequency_report(&report);
        }
    }

    Ok(())
}
