use RxnMatrix::Kinetics::reaction_set::ReactionSet;
use RxnMatrix::Kinetics::rxn_errors::RxnError;
use RxnMatrix::Kinetics::species_registry::SpeciesBase;
use RxnMatrix::Kinetics::term_tokenizer::RegexTokenizer;
use RxnMatrix::Utils::load_from_file::load_equations_from_file;
use RxnMatrix::settings::{DEFAULT_CONFIG_FILE, ParserConfig};
use log::{LevelFilter, error, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process::ExitCode;

const USAGE: &str = "usage: rxn_matrix [--config FILE] [--json] [--comment TEXT] (--file FILE | EQUATION...)

examples:
    rxn_matrix \"A + 2B = 3C\"
    rxn_matrix --json \"A = B\" \"B = C\"
    rxn_matrix --file mechanism.txt";

/// command line task
#[derive(Debug, Default)]
struct Task {
    config_file: Option<String>,
    equations_file: Option<String>,
    equations: Vec<String>,
    comment: Option<String>,
    json: bool,
}

fn parse_args(args: Vec<String>) -> Result<Task, String> {
    let mut task = Task::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                task.config_file = Some(iter.next().ok_or("--config needs a file name")?);
            }
            "--file" => {
                task.equations_file = Some(iter.next().ok_or("--file needs a file name")?);
            }
            "--comment" => {
                task.comment = Some(iter.next().ok_or("--comment needs a text")?);
            }
            "--json" => task.json = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ => task.equations.push(arg),
        }
    }
    if task.equations_file.is_none() && task.equations.is_empty() {
        return Err(USAGE.to_string());
    }
    Ok(task)
}

/// Starts the terminal logger at Info so that loading the config is already logged.
/// The logger itself passes every level; `apply_log_level` narrows it afterwards.
fn init_logger() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        warn!("terminal logger not started: {}", e);
    }
    log::set_max_level(LevelFilter::Info);
}

fn apply_log_level(config: &ParserConfig) {
    log::set_max_level(config.level_filter());
}

fn run(task: Task) -> Result<(), RxnError> {
    init_logger();
    let config = ParserConfig::load(task.config_file.as_deref().unwrap_or(DEFAULT_CONFIG_FILE))?;
    apply_log_level(&config);
    let (mut equations, mut comment) = (task.equations, String::new());
    if let Some(file) = task.equations_file {
        let loaded = load_equations_from_file(&file)?;
        equations.extend(loaded.equations);
        comment = loaded.comment;
    }
    if let Some(text) = task.comment {
        comment = text;
    }
    let mut base = SpeciesBase::new();
    let set = ReactionSet::build(
        equations.as_slice(),
        &comment,
        &mut base,
        &RegexTokenizer::new(),
        &config,
    )?;
    if task.json {
        println!("{}", set.to_json(&base)?);
    } else {
        set.pretty_print(&base);
    }
    Ok(())
}

fn main() -> ExitCode {
    let task = match parse_args(std::env::args().skip(1).collect()) {
        Ok(task) => task,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };
    match run(task) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
