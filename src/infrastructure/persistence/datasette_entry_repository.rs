//! Datasette-backed entry repository.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::EntryRef;
use crate::domain::repositories::{EntryRepository, LookupError};

/// SQL sent to the data API to pick one entry.
pub const RANDOM_ENTRY_SQL: &str = "SELECT topic, slug FROM til ORDER BY RANDOM() LIMIT 1";

/// Errors raised while building a [`DatasetteEntryRepository`].
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid data API URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Entry repository that queries the `til` table through Datasette's JSON API.
///
/// Each lookup is a single `GET {base}/{database}.json?sql=...&_shape=array`
/// with no authentication, body or custom headers. No timeout or retry is
/// applied beyond the HTTP client defaults.
pub struct DatasetteEntryRepository {
    client: Client,
    query_url: Url,
    health_url: Url,
}

impl DatasetteEntryRepository {
    /// Builds the repository for a Datasette instance.
    ///
    /// # Arguments
    ///
    /// - `base_url` - Root of the Datasette instance (e.g., `"https://til.example.com/"`)
    /// - `database` - Database name in the API path (e.g., `"til"`)
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Url`] if the URL cannot be parsed or joined, and
    /// [`SetupError::Client`] if the HTTP client cannot be initialized.
    pub fn new(base_url: &str, database: &str) -> Result<Self, SetupError> {
        let client = Client::builder().build()?;
        Self::with_client(client, base_url, database)
    }

    /// Same as [`Self::new`] with a caller-provided HTTP client.
    pub fn with_client(client: Client, base_url: &str, database: &str) -> Result<Self, SetupError> {
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        let mut query_url = base.join(&format!("{database}.json"))?;
        query_url
            .query_pairs_mut()
            .append_pair("sql", RANDOM_ENTRY_SQL)
            .append_pair("_shape", "array");

        let health_url = base.join("-/versions.json")?;

        Ok(Self {
            client,
            query_url,
            health_url,
        })
    }

    /// Returns the full query URL sent on each lookup.
    pub fn query_url(&self) -> &Url {
        &self.query_url
    }
}

#[async_trait]
impl EntryRepository for DatasetteEntryRepository {
    async fn random_entry(&self) -> Result<Option<EntryRef>, LookupError> {
        debug!("Querying data API: {}", self.query_url);

        let response = self.client.get(self.query_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let rows: Vec<EntryRef> = serde_json::from_slice(&body)?;

        Ok(rows.into_iter().next())
    }

    async fn health_check(&self) -> bool {
        match self.client.get(self.health_url.clone()).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("Data API health check returned {}", response.status());
                false
            }
            Err(e) => {
                warn!("Data API health check failed: {}", e);
                false
            }
        }
    }
}
