pub mod environment;
pub mod patterns;

pub use environment::{DevEnvironment, DevEnvironmentSpec, TeamSettings};
pub use patterns::{
    BranchPatterns, PatternDefaults, DEFAULT_BRANCH_PATTERNS,
    DEFAULT_FORK_BRANCH_PATTERNS,
};
