//! Command-line interface for tdoc
//!
//! This binary processes tdoc files into different output formats.
//!
//! Usage:
//!   tdoc process `<path>` `<format>`   - Process a file and output to stdout (explicit)
//!   tdoc `<path>` `<format>`           - Same as process (default command)
//!   tdoc formats                     - List all available formats

use clap::{Arg, Command};
use std::path::PathBuf;
use tdoc::tdoc::processor::{available_formats, process_file, ProcessingSpec};

fn main() {
    let matches = Command::new("tdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and rendering tdoc files")
        .subcommand_required(false)
        .arg_required_else_help(true)
        // Default command args
        .arg(
            Arg::new("path")
                .help("Path to the tdoc file to process")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .help("Output format (e.g., token-simple, doc-html)")
                .index(2),
        )
        // Subcommands
        .subcommand(
            Command::new("process")
                .about("Process a file and output to stdout (default command)")
                .arg(
                    Arg::new("path")
                        .help("Path to the tdoc file to process")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help("Output format (e.g., token-simple, doc-html)")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("process", sub)) => {
            let path = sub.get_one::<String>("path").map(PathBuf::from);
            let format = sub.get_one::<String>("format").cloned();
            run_process(path, format);
        }
        Some(("formats", _)) => {
            for format in available_formats() {
                println!("{}", format);
            }
        }
        _ => {
            // Default command: treat positional args as process
            let path = matches.get_one::<String>("path").map(PathBuf::from);
            let format = matches.get_one::<String>("format").cloned();
            run_process(path, format);
        }
    }
}

fn run_process(path: Option<PathBuf>, format: Option<String>) {
    let (Some(path), Some(format)) = (path, format) else {
        eprintln!("Usage: tdoc <path> <format>");
        eprintln!("Run 'tdoc formats' to list available formats");
        std::process::exit(2);
    };

    let spec = match ProcessingSpec::from_string(&format) {
        Ok(spec) => spec,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(2);
        }
    };

    match process_file(&path, &spec) {
        Ok(output) => println!("{}", output),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}
