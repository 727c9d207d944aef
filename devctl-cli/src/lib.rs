mod client;
mod commands;
mod config;
mod environment;
mod output;
mod types;

use std::process;

pub use output::{OutputArgs, OutputFormat, print_output};
pub use types::{
    ClusterArgs, ContextOperation, DevCli, DevCommands, GetOperation,
};

pub async fn run(cli: DevCli) {
    match &cli.command {
        DevCommands::Get { opt } => {
            let result = match opt {
                GetOperation::BranchPattern { cluster, output } => {
                    commands::handle_branch_pattern_command(cluster, output)
                        .await
                }
                GetOperation::Environments { cluster, output } => {
                    commands::handle_environments_command(cluster, output)
                        .await
                }
            };
            if let Err(e) = result {
                eprintln!("Get command failed: {}", e);
                process::exit(1);
            }
        }
        DevCommands::Context { opt } => {
            if let Err(e) = commands::handle_context_command(opt).await {
                eprintln!("Context command failed: {}", e);
                process::exit(1);
            }
        }
    }
}
