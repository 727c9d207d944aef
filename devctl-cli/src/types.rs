pub use crate::output::{OutputArgs, OutputFormat};

/// Main CLI structure
#[derive(clap::Parser, Clone, Debug)]
#[clap(version, about = "Team tooling for Kubernetes development environments", long_about = None)]
pub struct DevCli {
    #[command(subcommand)]
    pub command: DevCommands,
}

/// Available CLI commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum DevCommands {
    /// Display one or more team resources
    #[clap(aliases = &["g"])]
    Get {
        #[command(subcommand)]
        opt: GetOperation,
    },
    /// Context management operations
    #[clap(aliases = &["ctx"])]
    Context {
        #[command(subcommand)]
        opt: ContextOperation,
    },
}

/// Resources that can be displayed
#[derive(clap::Subcommand, Clone, Debug)]
pub enum GetOperation {
    /// Display the git branch patterns used when creating and importing
    /// projects
    #[clap(aliases = &["branchpattern", "bp"])]
    BranchPattern {
        #[clap(flatten)]
        cluster: ClusterArgs,
        #[clap(flatten)]
        output: OutputArgs,
    },
    /// List the development environments of the team namespace
    #[clap(aliases = &["environment", "envs", "env"])]
    Environments {
        #[clap(flatten)]
        cluster: ClusterArgs,
        #[clap(flatten)]
        output: OutputArgs,
    },
}

/// Context operation commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum ContextOperation {
    /// Configure connection settings
    #[clap(aliases = &["s", "update"])]
    Set {
        /// Context name (defaults to current)
        name: Option<String>,
        /// Kubeconfig context to connect with
        #[arg(long)]
        kube_context: Option<String>,
        /// Team namespace commands operate in
        #[arg(short, long)]
        namespace: Option<String>,
    },
    /// Display current configuration
    #[clap(aliases = &["g"])]
    Get,
    /// Switch between contexts
    Select {
        /// Context name to switch to
        name: String,
    },
}

/// Cluster connection parameters
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ClusterArgs {
    /// Kubeconfig context to connect with instead of the configured one
    #[arg(long)]
    pub kube_context: Option<String>,
    /// Namespace to read from instead of the configured one
    #[arg(short, long)]
    pub namespace: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_get_branch_pattern_with_aliases() {
        for name in ["branch-pattern", "branchpattern", "bp"] {
            let cli = DevCli::parse_from(["devctl", "get", name]);
            match cli.command {
                DevCommands::Get {
                    opt: GetOperation::BranchPattern { .. },
                } => {}
                other => panic!("unexpected parse for {}: {:?}", name, other),
            }
        }
    }

    #[test]
    fn parses_namespace_and_output_flags() {
        let cli = DevCli::parse_from([
            "devctl",
            "get",
            "branch-pattern",
            "-n",
            "team-a",
            "-o",
            "json",
        ]);
        match cli.command {
            DevCommands::Get {
                opt: GetOperation::BranchPattern { cluster, output },
            } => {
                assert_eq!(cluster.namespace.as_deref(), Some("team-a"));
                assert!(matches!(output.output, OutputFormat::Json));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn context_operation_variants_construct() {
        let _get = ContextOperation::Get;
        let _set = ContextOperation::Set {
            name: Some("test".to_string()),
            kube_context: Some("kind-test".to_string()),
            namespace: Some("team-test".to_string()),
        };
        let _select = ContextOperation::Select {
            name: "test".to_string(),
        };
    }
}
