mod error;

pub use error::*;

use kube::config::KubeConfigOptions;
use kube::{Client, Config};
use tracing::debug;

use crate::config::ContextConfig;
use crate::types::ClusterArgs;

/// Connected cluster client plus the namespace commands operate in.
pub struct ClusterClient {
    client: Client,
    namespace: String,
}

impl ClusterClient {
    /// Connect to the cluster, honoring CLI flags first, then the active
    /// context, then whatever the environment provides (in-cluster config
    /// or the default kubeconfig).
    pub async fn connect(
        context: &ContextConfig,
        args: &ClusterArgs,
    ) -> Result<Self, ClientError> {
        let kube_context = args
            .kube_context
            .clone()
            .or_else(|| context.kube_context.clone());

        let config = match &kube_context {
            Some(name) => {
                debug!(context = %name, "loading kubeconfig context");
                let options = KubeConfigOptions {
                    context: Some(name.clone()),
                    ..Default::default()
                };
                Config::from_kubeconfig(&options).await?
            }
            None => Config::infer().await?,
        };

        let namespace = args
            .namespace
            .clone()
            .or_else(|| context.namespace.clone())
            .unwrap_or_else(|| config.default_namespace.clone());
        debug!(%namespace, "resolved target namespace");

        let client = Client::try_from(config)?;
        Ok(Self { client, namespace })
    }

    /// Handle to the underlying Kubernetes client
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Namespace this client was resolved for
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
