use anyhow::Result;

use user_pager::cli::Command;
use user_pager::{handle_browse, handle_completions, handle_fetch, handle_url, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Browse {
            endpoint,
            timeout,
            pacing,
        } => handle_browse(endpoint.clone(), *timeout, *pacing),
        Command::Url { page, endpoint } => handle_url(*page, endpoint.clone()),
        Command::Fetch {
            page,
            endpoint,
            timeout,
        } => handle_fetch(*page, endpoint.clone(), *timeout),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
