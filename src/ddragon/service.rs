//! Data Dragon service
//!
//! Fetches the champion feed and enriches it. Every call re-resolves the
//! latest feed version; there is no caching, no retry and no backoff, so
//! a new upstream release is visible immediately and every failure is
//! terminal for its request.

use thiserror::Error;

use super::model::{
    ChampionDetailResponse, ChampionListResponse, EnrichedChampion, EnrichedChampionDetail,
};

/// Errors from the champion feed
///
/// A champion missing from an otherwise healthy response is kept apart
/// from transport/decoding failures; the HTTP layer may collapse them
/// into one status, but the cause stays visible for logging and tests.
#[derive(Error, Debug)]
pub enum DdragonError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned no published versions")]
    NoVersions,

    #[error("champion {0} not present in upstream response")]
    ChampionNotFound(String),
}

/// Client for the Data Dragon feed
pub struct DataDragonService {
    client: reqwest::Client,
    base_url: String,
    default_lang: String,
}

impl DataDragonService {
    /// Create a new service against the given feed base URL
    pub fn new(base_url: String, default_lang: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            default_lang,
        }
    }

    /// Language used when the client does not send one
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// Resolve the newest published feed version
    pub async fn latest_version(&self) -> Result<String, DdragonError> {
        let url = format!("{}/api/versions.json", self.base_url);
        let versions: Vec<String> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        versions.into_iter().next().ok_or(DdragonError::NoVersions)
    }

    /// Fetch the full roster for a language, enriched with image URLs
    pub async fn champions(&self, lang: &str) -> Result<Vec<EnrichedChampion>, DdragonError> {
        let version = self.latest_version().await?;
        let url = format!(
            "{}/cdn/{}/data/{}/champion.json",
            self.base_url, version, lang
        );
        let roster: ChampionListResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(roster
            .data
            .into_values()
            .map(|record| EnrichedChampion::new(record, &self.base_url, &version))
            .collect())
    }

    /// Fetch one champion's detail, enriched with images and normalized skins
    pub async fn champion(
        &self,
        name: &str,
        lang: &str,
    ) -> Result<EnrichedChampionDetail, DdragonError> {
        let version = self.latest_version().await?;
        let url = format!(
            "{}/cdn/{}/data/{}/champion/{}.json",
            self.base_url, version, lang, name
        );
        let mut detail: ChampionDetailResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let record = detail
            .data
            .remove(name)
            .ok_or_else(|| DdragonError::ChampionNotFound(name.to_string()))?;

        Ok(EnrichedChampionDetail::new(record, &self.base_url, &version))
    }
}
