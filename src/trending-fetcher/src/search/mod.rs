//! Repository search: query construction and search-result payloads.

mod candidate;
mod query;

pub use candidate::{parse_candidates, CandidateRepository, RepositoryOwner, SearchPage};
pub use query::{build_search_query, freshness_cutoff};
