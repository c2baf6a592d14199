//! Remote dictionary client (`GET <base>?word=<w>` with an API key header)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use wordgrid_domain::LengthCategory;

use crate::infrastructure::ports::{WordCheck, WordValidator};

/// Default client timeout for dictionary lookups.
pub const DEFAULT_DICTIONARY_TIMEOUT_SECS: u64 = 30;

/// Header the dictionary service reads the API key from.
const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, Deserialize)]
struct DictionaryResponse {
    #[serde(default)]
    word: String,
    #[serde(default)]
    valid: bool,
    #[serde(default, alias = "Definition")]
    definition: String,
}

/// Validates words against a dictionary web service.
#[derive(Clone)]
pub struct DictionaryApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DictionaryApiClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_timeout(base_url, api_key, DEFAULT_DICTIONARY_TIMEOUT_SECS)
    }

    /// Create client with custom timeout (for testing).
    pub fn with_timeout(base_url: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn lookup(&self, word: &str) -> Result<DictionaryResponse, reqwest::Error> {
        self.client
            .get(&self.base_url)
            .query(&[("word", word)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

fn interpret(response: DictionaryResponse) -> WordCheck {
    if response.valid {
        WordCheck::valid(response.definition)
    } else {
        WordCheck::invalid()
    }
}

#[async_trait]
impl WordValidator for DictionaryApiClient {
    async fn check(&self, word: &str, category: LengthCategory) -> WordCheck {
        match self.lookup(word).await {
            Ok(response) => {
                tracing::debug!(
                    word = %response.word,
                    category = %category,
                    valid = response.valid,
                    "Dictionary lookup"
                );
                interpret(response)
            }
            Err(e) => {
                tracing::warn!(word = %word, error = %e, "Dictionary lookup failed, rejecting word");
                WordCheck::invalid()
            }
        }
    }
}
