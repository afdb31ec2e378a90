pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod rate_limiter;
pub mod services;
pub mod shell;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::{BrowseService, LookupService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_browse(
    endpoint: Option<String>,
    timeout: Option<u64>,
    pacing: Option<u64>,
) -> Result<()> {
    let settings = AppConfig::new()
        .pager
        .with_endpoint(endpoint)
        .with_timeout(timeout)
        .with_pacing(pacing);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = BrowseService::new(settings);
        service.run().await
    })
}

pub fn handle_url(page: u32, endpoint: Option<String>) -> Result<()> {
    let settings = AppConfig::new().pager.with_endpoint(endpoint);
    let url = LookupService::new(settings).page_url(page)?;
    println!("{}", url);
    Ok(())
}

pub fn handle_fetch(page: u32, endpoint: Option<String>, timeout: Option<u64>) -> Result<()> {
    let settings = AppConfig::new()
        .pager
        .with_endpoint(endpoint)
        .with_timeout(timeout);

    let runtime = tokio::runtime::Runtime::new()?;
    let json = runtime.block_on(async {
        let service = LookupService::new(settings);
        service.fetch_page_json(page).await
    })?;
    println!("{}", json);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
