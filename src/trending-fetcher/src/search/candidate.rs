//! Search-result payload types.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// One page of `/search/repositories` results.
///
/// Items stay raw so that a single malformed record can be skipped
/// without discarding the rest of the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Total number of matches reported by the API.
    #[serde(default)]
    pub total_count: u64,

    /// Raw repository records on this page.
    #[serde(default)]
    pub items: Vec<Value>,
}

/// Owner of a candidate repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
    pub avatar_url: String,
}

/// A repository returned by the search API, not yet verified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CandidateRepository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: RepositoryOwner,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    pub releases_url: String,
    pub updated_at: String,
}

impl CandidateRepository {
    /// Topics as a slice, empty when the API omitted them.
    #[must_use]
    pub fn topics(&self) -> &[String] {
        self.topics.as_deref().unwrap_or_default()
    }
}

/// Converts raw search items into candidates.
///
/// Items that do not match the expected schema are logged and skipped.
/// Returns the parsed candidates together with the number skipped.
pub fn parse_candidates(items: Vec<Value>) -> (Vec<CandidateRepository>, usize) {
    let mut candidates = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for item in items {
        let label = item
            .get("full_name")
            .and_then(Value::as_str)
            .unwrap_or("<unknown>")
            .to_string();

        match serde_json::from_value::<CandidateRepository>(item) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => {
                warn!(repo = %label, error = %e, "Skipping malformed search result");
                skipped += 1;
            }
        }
    }

    (candidates, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(full_name: &str) -> Value {
        let (owner, name) = full_name.split_once('/').unwrap();
        json!({
            "id": 1,
            "name": name,
            "full_name": full_name,
            "owner": { "login": owner, "avatar_url": "https://avatars.example/u" },
            "description": null,
            "html_url": format!("https://github.com/{full_name}"),
            "stargazers_count": 900,
            "forks_count": 12,
            "language": "Rust",
            "topics": ["linux"],
            "releases_url": format!("https://api.github.com/repos/{full_name}/releases{{/id}}"),
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn parses_well_formed_items() {
        let (candidates, skipped) = parse_candidates(vec![item("a/one"), item("b/two")]);

        assert_eq!(skipped, 0);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].owner.login, "a");
        assert_eq!(candidates[1].name, "two");
        assert_eq!(candidates[0].description, None);
        assert_eq!(candidates[0].default_branch, None);
    }

    #[test]
    fn skips_item_without_owner() {
        let mut broken = item("c/three");
        broken.as_object_mut().unwrap().remove("owner");

        let (candidates, skipped) = parse_candidates(vec![item("a/one"), broken]);

        assert_eq!(skipped, 1);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].full_name, "a/one");
    }

    #[test]
    fn missing_topics_read_as_empty() {
        let mut no_topics = item("a/one");
        no_topics.as_object_mut().unwrap().remove("topics");

        let (candidates, _) = parse_candidates(vec![no_topics]);
        assert!(candidates[0].topics().is_empty());
    }

    #[test]
    fn search_page_without_items_is_empty() {
        let page: SearchPage = serde_json::from_str(r#"{"message":"odd"}"#).unwrap();
        assert!(page.items.is_empty());
    }
}
