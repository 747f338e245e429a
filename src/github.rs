use crate::error::{ContributorsError, Result};
use crate::types::{Contributor, Repository};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Every listing is a single request for one page of this size.
pub const PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!("org-contributors/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    client: Client,
    api_url: Url,
}

impl GitHubClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let api_url = Url::parse(api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(ContributorsError::InvalidUrl(format!(
                "API URL cannot be used as a base: {}",
                api_url
            )));
        }

        Ok(GitHubClient { client, api_url })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Join path segments onto the API root, escaping each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ContributorsError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn with_page_size(mut url: Url) -> Url {
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string());
        url
    }

    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        match response.status() {
            // A 204 from an empty repository has no body and fails to parse here
            status if status.is_success() => {
                let body = response.bytes().await?;
                Ok(serde_json::from_slice(&body)?)
            }
            StatusCode::NOT_FOUND => Err(ContributorsError::NotFound(url.to_string())),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(ContributorsError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    /// List the first page of an organization's repositories.
    pub async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        let url = Self::with_page_size(self.endpoint(&["orgs", org, "repos"])?);
        self.get_list(url).await
    }

    /// Fetch the first page of contributors from a repository's `contributors_url`.
    pub async fn fetch_contributors(&self, contributors_url: &str) -> Result<Vec<Contributor>> {
        let url = Self::with_page_size(Url::parse(contributors_url)?);
        self.get_list(url).await
    }

    /// Contributors endpoint for a repository named directly rather than listed.
    pub fn repo_contributors_url(&self, owner: &str, repo: &str) -> Result<String> {
        Ok(self
            .endpoint(&["repos", owner, repo, "contributors"])?
            .to_string())
    }
}
