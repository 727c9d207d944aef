use crate::config::ContextManager;
use crate::types::ContextOperation;
use anyhow::Result;

/// Handle context management commands
pub async fn handle_context_command(
    operation: &ContextOperation,
) -> Result<()> {
    let mut manager = ContextManager::new().await?;
    handle_context_command_with_manager(operation, &mut manager).await
}

/// Handle context management commands with a specific ContextManager
/// (useful for testing)
pub async fn handle_context_command_with_manager(
    operation: &ContextOperation,
    manager: &mut ContextManager,
) -> Result<()> {
    match operation {
        ContextOperation::Set {
            name,
            kube_context,
            namespace,
        } => {
            handle_context_set(
                name.clone(),
                kube_context.clone(),
                namespace.clone(),
                manager,
            )
            .await
        }
        ContextOperation::Get => handle_context_get(manager),
        ContextOperation::Select { name } => {
            handle_context_select(name.clone(), manager).await
        }
    }
}

/// Handle context set command
async fn handle_context_set(
    name: Option<String>,
    kube_context: Option<String>,
    namespace: Option<String>,
    manager: &mut ContextManager,
) -> Result<()> {
    manager
        .set_context(name.clone(), kube_context, namespace)
        .await?;

    let context_name =
        name.unwrap_or_else(|| manager.config().current_context.clone());
    println!("ctx:'{}' updated successfully", context_name);

    // Show current configuration
    if let Some(context) = manager.config().get_context(&context_name) {
        println!("Configuration:");
        if let Some(kube_context) = &context.kube_context {
            println!("  kubeContext: '{}'", kube_context);
        }
        if let Some(namespace) = &context.namespace {
            println!("  namespace: '{}'", namespace);
        }
    }

    Ok(())
}

/// Handle context get command
fn handle_context_get(manager: &ContextManager) -> Result<()> {
    // Pretty print the entire configuration
    let config_json = serde_json::to_string_pretty(manager.config())?;
    println!("{}", config_json);

    Ok(())
}

/// Handle context select command
async fn handle_context_select(
    name: String,
    manager: &mut ContextManager,
) -> Result<()> {
    // Check if context exists
    if manager.config().get_context(&name).is_none() {
        return Err(anyhow::anyhow!("Context '{}' does not exist", name));
    }

    manager.select_context(name.clone()).await?;
    println!("Switched to context '{}'", name);

    Ok(())
}
