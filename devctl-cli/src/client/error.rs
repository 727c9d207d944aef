use thiserror::Error;

/// Client-related errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    #[error("failed to infer cluster configuration: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),

    #[error("cluster request failed: {0}")]
    Request(#[from] kube::Error),

    #[error("no development environment found for namespace {namespace}")]
    EnvironmentNotFound { namespace: String },
}

impl ClientError {
    pub fn environment_not_found(namespace: impl Into<String>) -> Self {
        Self::EnvironmentNotFound {
            namespace: namespace.into(),
        }
    }
}
