//! Client for the Horizon data service.

use anyhow::Context as _;
use dioxus_logger::tracing::info;
use reqwest::Url;
use serde::Deserialize;

/// Base URL of the remote data service.
pub const API_BASE: &str = "https://api-op3o.onrender.com";

/// Account that publishes the hosted Horizon app; project links point there.
pub const PORTAL_OWNER: &str = "nearhorizon.near";

/// Listing request for the given search term. Sort order is fixed to newest
/// first; the search term always travels as `q`, even when empty.
pub fn projects_url(search: &str) -> Url {
    Url::parse_with_params(
        &format!("{API_BASE}/data/projects"),
        &[("sort", "timedesc"), ("q", search)],
    )
    .expect("listing endpoint URL is well-formed")
}

/// Fetch the ordered list of project account ids matching `search`.
pub async fn fetch_projects(search: &str) -> anyhow::Result<Vec<String>> {
    let url = projects_url(search);
    info!("fetching project listing from {url}");
    let ids = reqwest::get(url)
        .await
        .context("project listing request failed")?
        .error_for_status()
        .context("project listing request was rejected")?
        .json::<Vec<String>>()
        .await
        .context("project listing was not a JSON array of account ids")?;
    Ok(ids)
}

/// Public profile fields of a single project, as served by the data service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProjectProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
}

/// Fetch one project's profile by account id.
pub async fn fetch_project(account_id: &str) -> anyhow::Result<ProjectProfile> {
    let url = Url::parse(&format!("{API_BASE}/data/projects/{account_id}"))
        .context("project account id does not form a valid URL")?;
    let profile = reqwest::get(url)
        .await
        .context("project profile request failed")?
        .error_for_status()
        .context("project profile request was rejected")?
        .json::<ProjectProfile>()
        .await
        .context("project profile was not valid JSON")?;
    Ok(profile)
}
