use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through a paginated user directory")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Browse users interactively, one at a time
    Browse {
        /// Directory endpoint (defaults to $USER_PAGER_ENDPOINT or randomuser.me)
        #[arg(short, long)]
        endpoint: Option<String>,
        /// Request timeout in seconds (no timeout by default)
        #[arg(short, long)]
        timeout: Option<u64>,
        /// Minimum delay between page requests in milliseconds
        #[arg(long)]
        pacing: Option<u64>,
    },
    /// Print the request URL for a page
    Url {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Fetch a single page and print it as JSON
    Fetch {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        #[arg(short, long)]
        endpoint: Option<String>,
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
