use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-relay")]
#[command(about = "Contact form endpoint that forwards submissions to Resend")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the contact endpoint on a local HTTP server
    Serve {
        /// Override `server.bind` from the config file
        #[arg(long)]
        bind: Option<String>,
    },

    /// Submit the contact form to a running endpoint
    Submit {
        /// Site base URL; the form posts to `<endpoint>/api/contact`
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        endpoint: String,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        message: String,
    },

    /// Print the email that a submission would produce, without sending it
    Preview {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}
