mod analyze;
mod cli;
mod config;
mod error;
mod fetch;
mod report;
mod server;
mod types;

use crate::error::RepogradeError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let fallback = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> Result<i32, RepogradeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let (owner, repo) = fetch::parse_repo_url(&cmd.url)?;
            let cfg = config::load()?;
            let client = fetch::github::GithubClient::new(&cfg.github)?;
            let snapshot = fetch::collect_snapshot(&client, &owner, &repo, &cfg.fetch).await?;
            let analysis = analyze::analyze(&snapshot, &cmd.url);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&analysis, output_format)?;
            println!("{rendered}");

            if let Some(threshold) = cmd.fail_under {
                if analysis.score < threshold {
                    eprintln!(
                        "score {} is below the required threshold {}",
                        analysis.score, threshold
                    );
                    return Ok(exit_code::BELOW_THRESHOLD);
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Serve(cmd) => {
            let mut cfg = config::load()?;
            if let Some(host) = cmd.host {
                cfg.server.host = host;
            }
            if let Some(port) = cmd.port {
                cfg.server.port = port;
            }
            server::serve(&cfg).await?;
            Ok(exit_code::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
