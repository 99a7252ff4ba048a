//! Relevance scoring for search candidates.

use crate::platform::PlatformProfile;
use crate::search::CandidateRepository;

/// Score every candidate starts with.
pub const BASE_SCORE: u32 = 5;

/// Bonus for a platform keyword present in the topic list.
pub const TOPIC_KEYWORD_BONUS: u32 = 10;

/// Bonus for a platform keyword found in the description.
pub const DESCRIPTION_KEYWORD_BONUS: u32 = 3;

/// Bonus for a primary language in [`NATIVE_LANGUAGES`].
pub const NATIVE_LANGUAGE_BONUS: u32 = 5;

/// Bonus for a topic in [`CROSS_PLATFORM_TOPICS`].
pub const CROSS_PLATFORM_BONUS: u32 = 8;

/// Lowercase names of languages that usually produce native installers.
pub const NATIVE_LANGUAGES: &[&str] = &["kotlin", "c++", "rust", "c#", "swift", "dart", "java"];

/// Topics that mark a project as targeting several platforms.
pub const CROSS_PLATFORM_TOPICS: &[&str] = &["cross-platform", "multiplatform"];

/// A candidate paired with its relevance score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub repository: CandidateRepository,
    pub score: u32,
}

/// Computes how relevant a repository is to a platform.
///
/// All bonuses are additive and independent. Topic, description and
/// language comparisons are case-insensitive.
#[must_use]
pub fn score_repository(repository: &CandidateRepository, profile: &PlatformProfile) -> u32 {
    let topics: Vec<String> = repository
        .topics()
        .iter()
        .map(|t| t.to_lowercase())
        .collect();
    let description = repository
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let language = repository
        .language
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let mut score = BASE_SCORE;

    for &keyword in profile.score_keywords {
        if topics.iter().any(|t| t == keyword) {
            score += TOPIC_KEYWORD_BONUS;
        }
        if description.contains(keyword) {
            score += DESCRIPTION_KEYWORD_BONUS;
        }
    }

    if NATIVE_LANGUAGES.contains(&language.as_str()) {
        score += NATIVE_LANGUAGE_BONUS;
    }

    if topics
        .iter()
        .any(|t| CROSS_PLATFORM_TOPICS.contains(&t.as_str()))
    {
        score += CROSS_PLATFORM_BONUS;
    }

    score
}

/// Scores candidates, orders them best first and keeps at most `limit`.
///
/// The sort is stable, so equal scores keep the API's star ordering.
#[must_use]
pub fn rank_candidates(
    candidates: Vec<CandidateRepository>,
    profile: &PlatformProfile,
    limit: usize,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|repository| {
            let score = score_repository(&repository, profile);
            ScoredCandidate { repository, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
