use serde::{Deserialize, Serialize};

use crate::environment::TeamSettings;

/// Stock pattern applied when a team has not configured one: build on
/// master, pull requests and feature branches.
pub const DEFAULT_BRANCH_PATTERNS: &str = "master|PR-.*|feature.*";
/// Forked repositories build nothing unless the team opts in.
pub const DEFAULT_FORK_BRANCH_PATTERNS: &str = "";

/// Resolved branch pattern pair for a team.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BranchPatterns {
    pub default_branch_pattern: String,
    pub fork_branch_pattern: String,
}

/// Substitution values used when the environment leaves a pattern unset.
/// Callers construct and pass these explicitly instead of the accessor
/// reading a process-wide constant.
#[derive(Clone, Debug)]
pub struct PatternDefaults {
    pub branch_patterns: String,
    pub fork_branch_patterns: String,
}

impl Default for PatternDefaults {
    fn default() -> Self {
        Self {
            branch_patterns: DEFAULT_BRANCH_PATTERNS.to_string(),
            fork_branch_patterns: DEFAULT_FORK_BRANCH_PATTERNS.to_string(),
        }
    }
}

impl TeamSettings {
    /// Resolve the configured branch patterns, substituting `defaults`
    /// where a field is unset or empty.
    pub fn resolve_patterns(&self, defaults: &PatternDefaults) -> BranchPatterns {
        BranchPatterns {
            default_branch_pattern: resolve(
                self.branch_patterns.as_deref(),
                &defaults.branch_patterns,
            ),
            fork_branch_pattern: resolve(
                self.fork_branch_patterns.as_deref(),
                &defaults.fork_branch_patterns,
            ),
        }
    }
}

fn resolve(configured: Option<&str>, default: &str) -> String {
    match configured {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(branch: Option<&str>, fork: Option<&str>) -> TeamSettings {
        TeamSettings {
            branch_patterns: branch.map(Into::into),
            fork_branch_patterns: fork.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn empty_pattern_falls_back_to_default() {
        let resolved =
            settings(Some(""), None).resolve_patterns(&PatternDefaults::default());

        assert_eq!(resolved.default_branch_pattern, "master|PR-.*|feature.*");
        assert_eq!(resolved.fork_branch_pattern, "");
    }

    #[test]
    fn configured_pattern_is_returned_verbatim() {
        let resolved = settings(Some("release/.*"), Some("fork/.*"))
            .resolve_patterns(&PatternDefaults::default());

        assert_eq!(resolved.default_branch_pattern, "release/.*");
        assert_eq!(resolved.fork_branch_pattern, "fork/.*");
    }

    #[test]
    fn missing_pattern_falls_back_to_default() {
        let resolved =
            settings(None, None).resolve_patterns(&PatternDefaults::default());

        assert_eq!(resolved.default_branch_pattern, "master|PR-.*|feature.*");
        assert_eq!(resolved.fork_branch_pattern, "");
    }

    #[test]
    fn custom_defaults_are_injected() {
        let defaults = PatternDefaults {
            branch_patterns: "main".to_string(),
            fork_branch_patterns: "fork-main".to_string(),
        };
        let resolved = settings(None, Some("")).resolve_patterns(&defaults);

        assert_eq!(resolved.default_branch_pattern, "main");
        assert_eq!(resolved.fork_branch_pattern, "fork-main");
    }

    #[test]
    fn patterns_serialize_camel_case() {
        let resolved = settings(Some("release/.*"), None)
            .resolve_patterns(&PatternDefaults::default());
        let value = serde_json::to_value(&resolved).unwrap();

        assert_eq!(value["defaultBranchPattern"], "release/.*");
        assert_eq!(value["forkBranchPattern"], "");
    }
}
