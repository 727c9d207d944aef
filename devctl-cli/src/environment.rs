use async_trait::async_trait;
use devctl_api::{BranchPatterns, DevEnvironment, PatternDefaults};
use kube::ResourceExt;
use kube::api::{Api, ListParams};

use crate::client::{ClientError, ClusterClient};

/// Well-known name of the team development environment resource.
pub const DEV_ENVIRONMENT_NAME: &str = "dev";

/// Read access to development environment resources.
#[async_trait]
pub trait EnvironmentSource {
    /// Fetch the `dev` environment of a namespace, `None` when absent.
    async fn dev_environment(
        &self,
        namespace: &str,
    ) -> Result<Option<DevEnvironment>, ClientError>;

    /// List all environments of a namespace.
    async fn list_environments(
        &self,
        namespace: &str,
    ) -> Result<Vec<DevEnvironment>, ClientError>;
}

#[async_trait]
impl EnvironmentSource for ClusterClient {
    async fn dev_environment(
        &self,
        namespace: &str,
    ) -> Result<Option<DevEnvironment>, ClientError> {
        let api: Api<DevEnvironment> =
            Api::namespaced(self.client(), namespace);
        Ok(api.get_opt(DEV_ENVIRONMENT_NAME).await?)
    }

    async fn list_environments(
        &self,
        namespace: &str,
    ) -> Result<Vec<DevEnvironment>, ClientError> {
        let api: Api<DevEnvironment> =
            Api::namespaced(self.client(), namespace);
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items)
    }
}

/// Resolve the branch patterns configured for a team namespace. A single
/// synchronous read: fetch the `dev` environment, fail when it is absent,
/// substitute `defaults` for unset pattern fields.
pub async fn team_branch_patterns<S: EnvironmentSource>(
    source: &S,
    namespace: &str,
    defaults: &PatternDefaults,
) -> Result<BranchPatterns, ClientError> {
    let env = source
        .dev_environment(namespace)
        .await?
        .ok_or_else(|| ClientError::environment_not_found(namespace))?;
    Ok(env.spec.team_settings.resolve_patterns(defaults))
}

/// Environments in display order: by `order`, then name. Environments
/// without an order sort last.
pub fn sorted_environments(
    mut envs: Vec<DevEnvironment>,
) -> Vec<DevEnvironment> {
    envs.sort_by(|a, b| {
        let oa = a.spec.order.unwrap_or(i32::MAX);
        let ob = b.spec.order.unwrap_or(i32::MAX);
        oa.cmp(&ob).then_with(|| a.name_any().cmp(&b.name_any()))
    });
    envs
}
