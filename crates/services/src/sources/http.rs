use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use roadmap_core::model::ProblemsDocument;

use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::sources::ProblemsSource;

/// Fetches the document with a single `GET`.
#[derive(Clone)]
pub struct HttpProblemsSource {
    client: Client,
    url: Url,
}

impl HttpProblemsSource {
    #[must_use]
    pub fn new(config: &SourceConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: &SourceConfig) -> Self {
        Self {
            client,
            url: config.document_url().clone(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ProblemsSource for HttpProblemsSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<ProblemsDocument, SourceError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        Ok(ProblemsDocument::from_json_slice(&body)?)
    }
}
