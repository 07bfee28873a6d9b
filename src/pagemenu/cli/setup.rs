use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagemenu", version)]
#[command(about = "Render paginated text menus from a list of items", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json (defaults to ./.pagemenu, then the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of a list, one item per input line
    #[command(alias = "s")]
    Show {
        /// File with one item per line (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Items per page (overrides the config)
        #[arg(long, value_name = "N")]
        per_page: Option<usize>,

        /// Topic shown in the header (overrides the config)
        #[arg(long)]
        topic: Option<String>,

        /// Command name used by navigation buttons (overrides the config)
        #[arg(long = "command", value_name = "NAME")]
        command_name: Option<String>,

        /// Fail on a page outside the list instead of showing the nearest one
        #[arg(long)]
        strict: bool,
    },

    /// Print the effective configuration, or write the default one
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}
