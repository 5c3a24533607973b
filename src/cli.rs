use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "repograde",
    version,
    about = "Heuristic quality scoring and improvement roadmaps for public GitHub repositories"
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Analyze(AnalyzeCommand),
    Serve(ServeCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// GitHub repository URL, e.g. https://github.com/owner/repo
    pub url: String,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Exit with code 1 when the score falls below this threshold
    #[arg(long)]
    pub fail_under: Option<u32>,
}

#[derive(Args)]
pub struct ServeCommand {
    /// Bind address, overrides server.host from the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, overrides server.port from the config file
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
