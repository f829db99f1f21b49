// SPDX-License-Identifier: MIT
use babblefish::{Config, Extractor, OnDuplicate};
use clap::{CommandFactory, Parser};

/// Dictionary used when no input is given
const EXAMPLE_DICTIONARY: &str = "ExampleDictionary/example.tsv";

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,

    /// Header of the string ID column
    #[arg(short, long)]
    key_column: Option<String>,

    /// Header of the localized string column
    #[arg(short, long)]
    value_column: Option<String>,

    /// Duplicate string IDs: overwrite-and-log or reject
    #[arg(long)]
    on_duplicate: Option<OnDuplicate>,

    /// Log a warning for every duplicate string ID
    #[arg(long)]
    warn_duplicates: bool,

    /// Input glossary, .xlsx or tab separated .tsv
    input: Option<std::path::PathBuf>,
}

fn main() {
    env_logger::init();

    // parse commandline
    let cli = Cli::parse();

    let config = if let Some(cfg_file) = &cli.config {
        Config::with_config(cfg_file)
    } else {
        Config::new()
    };
    let mut config = match config {
        Ok(config) => config,
        Err(err) => error_exit(&err.to_string(), err.exit_code()),
    };

    // Command line overrides config file
    if let Some(key_column) = cli.key_column {
        config.key_column = key_column;
    }
    if let Some(value_column) = cli.value_column {
        config.value_column = value_column;
    }
    if let Some(on_duplicate) = cli.on_duplicate {
        config.on_duplicate = on_duplicate;
    }
    config.warn_on_duplicates |= cli.warn_duplicates;
    log::debug!(
        "columns {} / {}, duplicates {}",
        config.key_column,
        config.value_column,
        config.on_duplicate.as_str()
    );

    let input = match cli.input {
        Some(input) => input,
        None => {
            // Print help, then carry on with the example dictionary
            if let Err(err) = Cli::command().print_help() {
                log::warn!("Can not print help : {}", err);
            }
            println!("\nNo input given, using the example dictionary {}", EXAMPLE_DICTIONARY);
            std::path::PathBuf::from(EXAMPLE_DICTIONARY)
        }
    };

    let glossary = match Extractor::new(config).extract_file(&input) {
        Ok(glossary) => glossary,
        Err(err) => error_exit(&err.to_string(), err.exit_code()),
    };

    let stdout = std::io::stdout();
    if let Err(err) = babblefish::write_report(&glossary, &mut stdout.lock()) {
        error_exit(&err.to_string(), 1);
    }
}

/// Print fatal error and terminate
fn error_exit(message: &str, code: i32) -> ! {
    log::error!("{}", message);
    println!("\n~~~~~~~~~~~~~~~~~~~~~~");
    println!("Error:\n{}", message);
    std::process::exit(code)
}
