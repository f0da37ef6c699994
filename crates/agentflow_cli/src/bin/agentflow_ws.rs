//! `agentflow-ws` — database-backed workspace management tool.

use agentflow_cli::commands::workspace::{self, WsCommand};
use agentflow_cli::{init_logging, Context};
use clap::Parser;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "agentflow-ws", about = "AgentFlow workspace tool (SQLite storage)")]
struct Cli {
    #[command(subcommand)]
    command: WsCommand,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = Context::load().and_then(|mut ctx| {
        init_logging(&ctx);
        workspace::run(&mut ctx, cli.command)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[!] {err:#}");
            ExitCode::FAILURE
        }
    }
}
