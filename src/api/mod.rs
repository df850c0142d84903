mod billing;
mod phrase;

pub use billing::*;
pub use phrase::*;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use crate::config::ApiConfig;

/// The server endpoints the dashboard talks to, behind a seam so handlers
/// can be exercised without a network.
#[async_trait]
pub trait SupportApi: Send + Sync {
    /// Never fails: any problem collapses into the fixed fallback phrase.
    async fn supportive_phrase(&self) -> SupportivePhrase;

    async fn start_checkout(&self, plan: CheckoutPlan) -> anyhow::Result<CheckoutOutcome>;
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("couldn't build the HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        self.base_url.join(path)
            .with_context(|| format!("invalid endpoint path: {path}"))
    }

    async fn fetch_text(&self, path: &str) -> anyhow::Result<String> {
        let url = self.endpoint(path)?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl SupportApi for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn supportive_phrase(&self) -> SupportivePhrase {
        match self.fetch_text(PHRASE_ENDPOINT).await {
            Ok(body) => phrase::parse_phrase_response(&body),
            Err(err) => {
                log::warn!("couldn't fetch a supportive phrase: {err:#}");
                FALLBACK_PHRASE.clone()
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn start_checkout(&self, plan: CheckoutPlan) -> anyhow::Result<CheckoutOutcome> {
        let body = self.fetch_text(plan.endpoint()).await?;
        Ok(billing::parse_checkout_response(&body))
    }
}
