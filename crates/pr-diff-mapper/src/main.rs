//! pr-diff-mapper: line-level diff summaries for one PR iteration
//!
//! Fetches the change list for a pull request iteration from Azure
//! DevOps, retrieves each changed file's content at the target and
//! source branches, and prints a single JSON report of hunk boundaries
//! and line counts to stdout.
//!
//! Exit code 0 after printing the report; 1 on any fatal failure, with
//! a one-line message on stderr and no JSON emitted.

mod cli;
mod mapper;
mod report;

use ado_client::{BasicCredential, RepoCoordinates, RestAdoClient};
use anyhow::Result;
use clap::Parser;
use cli::Args;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    args.validate()?;

    let credential = match &args.auth_basic {
        Some(token) => BasicCredential::from_token(token.as_str()),
        None => BasicCredential::from_env()?,
    };
    let client = RestAdoClient::new(credential)?;
    let coords = RepoCoordinates::new(&args.org_enc, &args.project_enc, &args.repo_enc);

    let report = mapper::map_pr_diff_lines(
        &client,
        &coords,
        args.pull_request_id.trim(),
        args.iteration_id.trim(),
    )
    .await?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
