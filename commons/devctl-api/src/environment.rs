use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, JsonSchema)]
#[kube(
    group = "devctl.io",
    version = "v1alpha1",
    kind = "DevEnvironment",
    plural = "devenvironments",
    namespaced
)]
pub struct DevEnvironmentSpec {
    /// Human readable label shown when listing environments
    pub label: Option<String>,
    /// Namespace the environment deploys into; its own when omitted
    pub namespace: Option<String>,
    /// Relative position when listing environments
    pub order: Option<i32>,
    /// Team-wide settings shared by every project in the environment
    #[serde(default)]
    pub team_settings: TeamSettings,
}

/// Settings applied across a team's projects.
#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default)]
pub struct TeamSettings {
    /// Git branch name patterns that trigger CI builds; empty means the
    /// stock defaults apply
    pub branch_patterns: Option<String>,
    /// Branch name patterns applied to forked repositories
    pub fork_branch_patterns: Option<String>,
    /// Whether the team promotes via GitOps pull requests
    pub use_git_ops: Option<bool>,
    /// Prompt for confirmation when importing projects
    pub prompt_on_import: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_deserializes_with_missing_team_settings() {
        let spec: DevEnvironmentSpec = serde_yaml::from_str(
            r#"
label: Development
order: 0
"#,
        )
        .unwrap();

        assert_eq!(spec.label.as_deref(), Some("Development"));
        assert_eq!(spec.order, Some(0));
        assert_eq!(spec.team_settings.branch_patterns, None);
        assert_eq!(spec.team_settings.fork_branch_patterns, None);
    }

    #[test]
    fn team_settings_round_trip() {
        let spec: DevEnvironmentSpec = serde_yaml::from_str(
            r#"
label: Development
team_settings:
  branch_patterns: "release/.*"
  use_git_ops: true
"#,
        )
        .unwrap();

        assert_eq!(
            spec.team_settings.branch_patterns.as_deref(),
            Some("release/.*")
        );
        assert_eq!(spec.team_settings.use_git_ops, Some(true));

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["team_settings"]["branch_patterns"], "release/.*");
    }
}
