use pextgen::config::Config;
use pextgen::generator;

use std::{env, process};

use log::debug;

//-----------------------------------------------------------------------------

fn main() {
    pextgen::log::init_logger(pextgen::log::DEFAULT_LEVEL);

    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| String::from("pextgen"));

    let config = match Config::from_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print!("{}", Config::usage(&program));
            process::exit(0);
        },
        Err(f) => {
            eprintln!("{}", f);
            eprintln!("Try '{} --help' for more information.", program);
            process::exit(1);
        },
    };
    debug!("Generating module {}", config.module());

    let dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(f) => {
            eprintln!("Failed to determine the current directory: {}", f);
            process::exit(1);
        },
    };

    if let Err(f) = generator::write_to(&config, &dir) {
        eprintln!("{}", f);
        process::exit(1);
    }
}

//-----------------------------------------------------------------------------
