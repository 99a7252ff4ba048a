//! Paginated collection of verified trending repositories.

mod outcome;

pub use outcome::CollectionOutcome;

use crate::client::GitHubApi;
use crate::config::FetchConfig;
use crate::output::VerifiedEntry;
use crate::platform::Platform;
use crate::scoring::rank_candidates;
use crate::search::{build_search_query, parse_candidates};
use crate::verification::verify_installer;
use chrono::Utc;
use tracing::{debug, info, info_span, warn, Instrument};

/// Collects up to `desired_count` repositories with installers for a platform.
///
/// Search pages are requested in star order. Each page is scored, the top
/// candidates are checked for an installer, and pagination stops once enough
/// entries are verified, the page limit is reached, a page comes back empty,
/// or a search request fails. A failed search request ends pagination but
/// keeps everything gathered so far.
pub async fn collect_trending<A: GitHubApi + ?Sized>(
    api: &A,
    platform: Platform,
    config: &FetchConfig,
) -> CollectionOutcome {
    let span = info_span!("collect", platform = %platform);

    async {
        let profile = platform.profile();
        let query = build_search_query(profile, config, Utc::now());
        info!(query = %query, "Fetching trending repositories");

        let desired = config.desired_count();
        let mut outcome = CollectionOutcome::default();
        let mut page = 1;

        while outcome.entries.len() < desired && page <= config.max_pages() {
            debug!(page, "Fetching search page");

            let items = match api
                .search_repositories(&query, page, config.per_page())
                .await
            {
                Ok(search_page) => {
                    debug!(page, total = search_page.total_count, "Search matched repositories");
                    search_page.items
                }
                Err(e) => {
                    warn!(page, error = %e, "Search request failed, stopping pagination");
                    outcome.page_error = Some(e.to_string());
                    break;
                }
            };

            info!(page, count = items.len(), "Got repositories from API");
            if items.is_empty() {
                break;
            }
            outcome.pages_fetched += 1;

            let (candidates, skipped) = parse_candidates(items);
            outcome.malformed_skipped += skipped;

            let ranked = rank_candidates(candidates, profile, config.candidates_per_page());
            info!(count = ranked.len(), "Checking candidates for installers");

            for scored in ranked {
                if outcome.entries.len() >= desired {
                    break;
                }

                let repo = &scored.repository;
                let check = verify_installer(
                    api,
                    &repo.owner.login,
                    &repo.name,
                    profile,
                    config.releases_per_check(),
                )
                .await;
                outcome.candidates_checked += 1;

                if check.is_found() {
                    outcome.entries.push(VerifiedEntry::from(repo));
                    info!(
                        repo = %repo.full_name,
                        score = scored.score,
                        found = outcome.entries.len(),
                        desired,
                        "Installer found"
                    );
                } else {
                    debug!(repo = %repo.full_name, result = %check, "No installers");
                }

                tokio::time::sleep(config.candidate_delay()).await;
            }

            page += 1;
        }

        info!(total = outcome.entries.len(), "Collection complete");
        outcome
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiError;
    use crate::search::SearchPage;
    use crate::verification::{Release, ReleaseAsset};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory GitHub with scripted pages and release listings.
    #[derive(Default)]
    struct FakeGitHub {
        pages: Vec<Result<Vec<Value>, ()>>,
        releases: HashMap<String, Vec<Release>>,
        searched_pages: Mutex<Vec<u32>>,
        release_checks: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl GitHubApi for FakeGitHub {
        async fn search_repositories(
            &self,
            _query: &str,
            page: u32,
            _per_page: u8,
        ) -> Result<SearchPage, ApiError> {
            self.searched_pages.lock().unwrap().push(page);
            match self.pages.get(page as usize - 1) {
                Some(Ok(items)) => Ok(SearchPage {
                    total_count: items.len() as u64,
                    items: items.clone(),
                }),
                Some(Err(())) => Err(ApiError::Timeout {
                    operation: "repository search",
                    after: Duration::from_secs(30),
                }),
                None => Ok(SearchPage::default()),
            }
        }

        async fn list_releases(
            &self,
            owner: &str,
            repo: &str,
            _per_page: u8,
        ) -> Result<Vec<Release>, ApiError> {
            let full_name = format!("{owner}/{repo}");
            self.release_checks.lock().unwrap().push(full_name.clone());
            Ok(self.releases.get(&full_name).cloned().unwrap_or_default())
        }
    }

    fn item(id: u64, name: &str, topics: &[&str], description: Option<&str>) -> Value {
        json!({
            "id": id,
            "name": name,
            "full_name": format!("dev/{name}"),
            "owner": { "login": "dev", "avatar_url": "https://avatars.example/dev" },
            "description": description,
            "default_branch": "main",
            "html_url": format!("https://github.com/dev/{name}"),
            "stargazers_count": 1000 - id,
            "forks_count": 5,
            "language": null,
            "topics": topics,
            "releases_url": format!("https://api.github.com/repos/dev/{name}/releases{{/id}}"),
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    fn stable(assets: &[&str]) -> Vec<Release> {
        vec![Release {
            tag_name: Some("v1.0.0".to_string()),
            draft: false,
            prerelease: false,
            assets: assets
                .iter()
                .map(|name| ReleaseAsset {
                    name: name.to_string(),
                })
                .collect(),
        }]
    }

    fn fast_config() -> FetchConfig {
        FetchConfig::default().with_delays(Duration::ZERO, Duration::ZERO)
    }

    #[tokio::test]
    async fn linux_page_keeps_only_repository_with_installer() {
        let mut api = FakeGitHub::default();
        api.pages.push(Ok(vec![
            item(1, "plain", &[], Some("nothing relevant")),
            item(2, "tool", &["linux"], Some("a linux app")),
        ]));
        api.releases.insert("dev/tool".to_string(), stable(&["tool.deb"]));

        let outcome = collect_trending(&api, Platform::Linux, &fast_config()).await;

        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].full_name, "dev/tool");
        assert_eq!(outcome.candidates_checked, 2);
        // Higher-scored candidate is checked first.
        assert_eq!(
            *api.release_checks.lock().unwrap(),
            vec!["dev/tool".to_string(), "dev/plain".to_string()]
        );
        // The second page is empty and ends pagination.
        assert_eq!(*api.searched_pages.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn stops_mid_page_once_desired_count_reached() {
        let mut api = FakeGitHub::default();
        let items = (1..=5)
            .map(|i| item(i, &format!("app{i}"), &["android"], None))
            .collect();
        api.pages.push(Ok(items));
        api.pages.push(Ok(vec![item(9, "later", &["android"], None)]));
        for i in 1..=5 {
            api.releases
                .insert(format!("dev/app{i}"), stable(&["app-release.apk"]));
        }

        let config = fast_config().with_desired_count(2);
        let outcome = collect_trending(&api, Platform::Android, &config).await;

        assert_eq!(outcome.entries.len(), 2);
        assert_eq!(outcome.candidates_checked, 2);
        assert_eq!(*api.searched_pages.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn respects_page_limit() {
        let mut api = FakeGitHub::default();
        for i in 0..10 {
            api.pages.push(Ok(vec![item(i, &format!("r{i}"), &[], None)]));
        }

        let outcome = collect_trending(&api, Platform::Macos, &fast_config()).await;

        assert!(outcome.entries.is_empty());
        assert_eq!(outcome.pages_fetched, 5);
        assert_eq!(*api.searched_pages.lock().unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn search_failure_keeps_earlier_results() {
        let mut api = FakeGitHub::default();
        api.pages.push(Ok(vec![item(1, "one", &["desktop"], None)]));
        api.pages.push(Err(()));
        api.pages.push(Ok(vec![item(3, "three", &["desktop"], None)]));
        api.releases.insert("dev/one".to_string(), stable(&["Setup.EXE"]));
        api.releases.insert("dev/three".to_string(), stable(&["setup.msi"]));

        let outcome = collect_trending(&api, Platform::Windows, &fast_config()).await;

        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].name, "one");
        assert!(outcome.page_error.is_some());
        assert_eq!(*api.searched_pages.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn malformed_items_are_skipped() {
        let mut api = FakeGitHub::default();
        let mut broken = item(2, "broken", &["linux"], None);
        broken.as_object_mut().unwrap().remove("owner");
        api.pages
            .push(Ok(vec![broken, item(1, "fine", &["linux"], None)]));
        api.releases
            .insert("dev/fine".to_string(), stable(&["fine.AppImage"]));

        let outcome = collect_trending(&api, Platform::Linux, &fast_config()).await;

        assert_eq!(outcome.malformed_skipped, 1);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].name, "fine");
    }

    #[tokio::test]
    async fn only_top_candidates_per_page_are_checked() {
        let mut api = FakeGitHub::default();
        let items = (0..60)
            .map(|i| item(i, &format!("r{i}"), &[], None))
            .collect();
        api.pages.push(Ok(items));

        let config = fast_config().with_max_pages(1);
        let outcome = collect_trending(&api, Platform::Linux, &config).await;

        assert_eq!(outcome.candidates_checked, 50);
        assert!(outcome.entries.len() <= outcome.candidates_checked);
    }
}
