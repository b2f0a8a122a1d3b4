//! Habit MCP Server - Main Entry Point
//!
//! This is the main entry point for the habit MCP server application.
//! The actual implementation is in the `habit_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use habit_mcp::HabitServerHandler;
use mcp_attr::server::serve_stdio;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Habit MCP Server - track habits and streaks via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the habit data file (.toml, or .json for the legacy layout)
    file: String,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Logs go to stderr; stdout carries the MCP stdio transport.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_tracing(&args.log_level);

    let handler = HabitServerHandler::new(&args.file)?;
    info!(file = %args.file, "serving habit tracker over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
