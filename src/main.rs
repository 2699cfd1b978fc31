use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dialoguer::Input;
use tracing::debug;

use degrees::data_cleaning::load_dataset;
use degrees::name_resolver::{self, Resolution};
use degrees::{logging, report, shortest_path, DegreesError, GraphStore, PersonId, Result};

/// Find how many movies separate two people.
#[derive(Parser, Debug)]
#[command(name = "degrees", version, about, long_about = None)]
struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(env = "DEGREES_DATA", default_value = "large")]
    directory: PathBuf,

    /// First person's name; prompted for when omitted
    #[arg(long)]
    source: Option<String>,

    /// Second person's name; prompted for when omitted
    #[arg(long)]
    target: Option<String>,
}

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(DegreesError::PersonNotFound(name)) => {
            debug!(%name, "name did not resolve");
            println!("Person not found.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    println!("Loading data...");
    let (store, _) = load_dataset(&cli.directory)?;
    println!("Data loaded.");

    let source = person_for(&store, cli.source.as_deref())?;
    let target = person_for(&store, cli.target.as_deref())?;

    match shortest_path(&store, &source, &target) {
        None => println!("Not connected."),
        Some(path) => {
            println!("{}", report::degrees_line(path.len()));
            for line in report::hop_lines(&store, &source, &path) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Resolves a name, asking which one was meant when several people share it.
fn person_for(store: &GraphStore, given: Option<&str>) -> Result<PersonId> {
    let name = match given {
        Some(name) => name.to_string(),
        None => prompt("Name")?,
    };

    match name_resolver::resolve(store, &name) {
        Resolution::NotFound => Err(DegreesError::PersonNotFound(name)),
        Resolution::Unique(id) => Ok(id),
        Resolution::Ambiguous(candidates) => {
            println!("Which '{name}'?");
            for candidate in &candidates {
                println!("{candidate}");
            }
            let choice = prompt("Intended Person ID")?;
            name_resolver::choose(&candidates, &choice)
                .ok_or_else(|| DegreesError::PersonNotFound(name))
        }
    }
}

/// Reads one answer, through `dialoguer` on a terminal and line by line
/// from piped stdin otherwise. End of input reads as an empty answer.
fn prompt(label: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        let answer = Input::<String>::new().with_prompt(label).interact_text()?;
        return Ok(answer);
    }

    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
