use clap::{ArgAction, Parser, Subcommand};
use eyre::{Result, WrapErr};
use srecords::display::display_students;
use srecords::{Config, Loader, Student, StudentProcessor};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Use FILE instead of srecords.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Read the roster from FILE instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the roster as loaded
    List,
    /// Print the roster sorted by name then GPA
    Sort,
    /// Print students whose name starts with PREFIX
    Prefix {
        #[arg(allow_hyphen_values = true)]
        prefix: String,
    },
    /// Print students whose GPA is strictly above THRESHOLD
    Gpa {
        #[arg(allow_negative_numbers = true)]
        threshold: f64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(Targets::new().with_target("srecords", level))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_roster(args: &Args, config: &Config) -> Result<Vec<Student>> {
    let loader = Loader::from_config(&config.roster).wrap_err("invalid roster configuration")?;
    match args.input.as_ref().or(config.roster.path.as_ref()) {
        Some(path) => loader.load_path(path),
        None => {
            info!("reading roster from standard input");
            loader
                .load_reader(io::stdin().lock())
                .wrap_err("cannot load roster from standard input")
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args, "starting");
    let config = Config::load(args.config.as_deref())?;
    let precision = config.display.precision;
    let mut students = load_roster(&args, &config)?;
    info!(students = students.len(), "roster ready");
    let processor = StudentProcessor::new();
    let (title, students) = match &args.command {
        Command::List => ("Students".to_owned(), students),
        Command::Sort => {
            processor.sort(&mut students);
            ("Sorted students".to_owned(), students)
        }
        Command::Prefix { prefix } => (
            format!("Names starting with {prefix:?}"),
            processor.find_by_partial_name(&students, prefix),
        ),
        Command::Gpa { threshold } => (
            format!("GPA above {threshold}"),
            processor.find_higher_gpa(&students, *threshold),
        ),
    };
    display_students(&title, &students, precision).wrap_err("cannot write results")
}
