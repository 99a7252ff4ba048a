#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod collector;
pub mod config;
pub mod output;
pub mod platform;
pub mod runner;
pub mod scoring;
pub mod search;
pub mod summary;
pub mod verification;

pub use client::{ApiError, GitHubApi, OctocrabApi, GITHUB_MEDIA_TYPE};
pub use collector::{collect_trending, CollectionOutcome};
pub use config::{FetchConfig, API_URL_ENV_VAR, DEFAULT_OUTPUT_DIR, TOKEN_ENV_VAR};
pub use output::{
    document_path, format_timestamp, read_document, write_document, OutputError, OwnerSummary,
    PlatformResultDocument, VerifiedEntry,
};
pub use platform::{Platform, PlatformProfile};
pub use runner::{Runner, RunnerError};
pub use scoring::{rank_candidates, score_repository, ScoredCandidate};
pub use search::{
    build_search_query, freshness_cutoff, parse_candidates, CandidateRepository, RepositoryOwner,
    SearchPage,
};
pub use summary::{PlatformOutcome, RunSummary};
pub use verification::{
    check_releases, find_stable_release, is_installer_asset, verify_installer, InstallerCheck,
    Release, ReleaseAsset,
};
