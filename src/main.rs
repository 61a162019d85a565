mod cli;
mod error;
mod fmt;
mod layout;
mod ledger;
mod models;
mod reports;
mod settings;
mod voice;

use std::io::IsTerminal;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Parse {
            transcript,
            compose,
            json,
        }) => cli::parse::run(&transcript, compose, json),
        Some(Commands::Session { empty, compose }) => cli::session::run(empty, compose),
        Some(Commands::Summary { width }) => cli::summary::run(width),
        Some(Commands::List) => cli::summary::list(),
        Some(Commands::Add {
            kind,
            amount,
            description,
            date,
        }) => cli::add::run(&kind, amount, &description, date.as_deref()),
        Some(Commands::Config {
            policy,
            user_id,
            demo,
        }) => cli::config::run(policy.as_deref(), user_id.as_deref(), demo),
        None => cli::summary::run(None),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
