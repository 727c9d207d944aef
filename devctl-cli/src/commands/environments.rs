use anyhow::Result;
use kube::ResourceExt;
use serde::Serialize;

use crate::client::ClusterClient;
use crate::config::ContextManager;
use crate::environment::{self, EnvironmentSource};
use crate::output::{OutputArgs, OutputFormat, Table, print_output};
use crate::types::ClusterArgs;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvironmentRow {
    name: String,
    label: String,
    namespace: String,
    order: Option<i32>,
}

/// List the development environments of the team namespace
pub async fn handle_environments_command(
    cluster: &ClusterArgs,
    output: &OutputArgs,
) -> Result<()> {
    let manager = ContextManager::new().await?;
    let context = manager.active_context();

    let client = ClusterClient::connect(&context, cluster).await?;
    let envs = environment::sorted_environments(
        client.list_environments(client.namespace()).await?,
    );

    let rows: Vec<EnvironmentRow> = envs
        .iter()
        .map(|env| EnvironmentRow {
            name: env.name_any(),
            label: env.spec.label.clone().unwrap_or_default(),
            namespace: env
                .spec
                .namespace
                .clone()
                .or_else(|| env.namespace())
                .unwrap_or_default(),
            order: env.spec.order,
        })
        .collect();

    match output.output {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No environments found");
                return Ok(());
            }
            let mut table = Table::new(["NAME", "LABEL", "NAMESPACE", "ORDER"]);
            for row in &rows {
                table.add_row([
                    row.name.clone(),
                    row.label.clone(),
                    row.namespace.clone(),
                    row.order.map(|o| o.to_string()).unwrap_or_default(),
                ]);
            }
            table.print();
        }
        _ => print_output(&serde_json::to_value(&rows)?, &output.output)?,
    }
    Ok(())
}
