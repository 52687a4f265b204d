use clap::{CommandFactory, Parser};
use std::process;
use weather_history::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // Without a subcommand there is nothing to load; show usage instead
    if args.command.is_none() {
        if let Err(e) = Args::command().print_help() {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        println!();
        process::exit(0);
    }

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
