//! Continuous integration systems.
//!
//! CI vendors do not overlap, so the canonical partition is the single
//! `ALL_CI` group.

use std::sync::LazyLock;

use super::catalog_traits;
use crate::group::Group;
use crate::traits::{Trait, TraitKind};

// ============================================================================
// Traits
// ============================================================================

catalog_traits! { TraitKind::Ci =>
    APPVEYOR => ("appveyor", "AppVeyor", "🏗️", "https://appveyor.com"),
    AZURE_PIPELINES => ("azure_pipelines", "Azure Pipelines", "═", "https://azure.microsoft.com/products/devops/pipelines"),
    BAMBOO => ("bamboo", "Bamboo", "🎍", "https://atlassian.com/software/bamboo"),
    BITBUCKET_PIPELINES => ("bitbucket_pipelines", "Bitbucket Pipelines", "🪣", "https://bitbucket.org/product/features/pipelines"),
    BUILDKITE => ("buildkite", "Buildkite", "🪁", "https://buildkite.com"),
    CIRCLE_CI => ("circle_ci", "CircleCI", "⪾", "https://circleci.com"),
    CIRRUS_CI => ("cirrus_ci", "Cirrus CI", "≋", "https://cirrus-ci.org"),
    CODEBUILD => ("codebuild", "AWS CodeBuild", "🧱", "https://aws.amazon.com/codebuild"),
    DRONE => ("drone", "Drone", "🛸", "https://drone.io"),
    GITHUB_ACTIONS => ("github_actions", "GitHub Actions", "🐙", "https://github.com/features/actions"),
    GITLAB_CI => ("gitlab_ci", "GitLab CI", "🦊", "https://docs.gitlab.com/ee/ci"),
    HEROKU_CI => ("heroku_ci", "Heroku CI", "⬢", "https://heroku.com/continuous-integration"),
    JENKINS => ("jenkins", "Jenkins", "🤵", "https://jenkins.io"),
    TEAMCITY => ("teamcity", "TeamCity", "🏙️", "https://jetbrains.com/teamcity"),
    TRAVIS_CI => ("travis_ci", "Travis CI", "👷", "https://travis-ci.com"),
}

/// All CI traits, in id order.
pub fn traits() -> Vec<&'static Trait> {
    vec![
        &*APPVEYOR,
        &*AZURE_PIPELINES,
        &*BAMBOO,
        &*BITBUCKET_PIPELINES,
        &*BUILDKITE,
        &*CIRCLE_CI,
        &*CIRRUS_CI,
        &*CODEBUILD,
        &*DRONE,
        &*GITHUB_ACTIONS,
        &*GITLAB_CI,
        &*HEROKU_CI,
        &*JENKINS,
        &*TEAMCITY,
        &*TRAVIS_CI,
    ]
}

// ============================================================================
// Groups
// ============================================================================

/// Every known CI system (the canonical partition for the kind).
pub static ALL_CI: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical("all_ci", "All CI systems", "♺", traits())
        .expect("catalog group definition is valid")
});

/// All CI groups.
pub fn groups() -> Vec<&'static Group> {
    vec![&*ALL_CI]
}
