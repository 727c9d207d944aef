use anyhow::Result;
use devctl_api::PatternDefaults;

use crate::client::ClusterClient;
use crate::config::ContextManager;
use crate::environment;
use crate::output::{OutputArgs, OutputFormat, Table, print_output};
use crate::types::ClusterArgs;

/// Display the git branch patterns configured for the current team
pub async fn handle_branch_pattern_command(
    cluster: &ClusterArgs,
    output: &OutputArgs,
) -> Result<()> {
    let manager = ContextManager::new().await?;
    let context = manager.active_context();

    let client = ClusterClient::connect(&context, cluster).await?;
    let patterns = environment::team_branch_patterns(
        &client,
        client.namespace(),
        &PatternDefaults::default(),
    )
    .await?;

    match output.output {
        OutputFormat::Table => {
            let mut table = Table::new(["BRANCH PATTERNS"]);
            table.add_row([patterns.default_branch_pattern.as_str()]);
            table.print();
        }
        _ => print_output(&serde_json::to_value(&patterns)?, &output.output)?,
    }
    Ok(())
}
