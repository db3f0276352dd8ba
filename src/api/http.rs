use super::PersonApi;
use crate::core::{ApiError, NewPerson, Person, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://localhost:7125";

const PERSONS_PATH: &str = "Persons";

/// [`PersonApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpPersonApi {
    client: Client,
    base_url: String,
}

impl HttpPersonApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, false)
    }

    /// `accept_invalid_certs` lets the client talk to a server running on a
    /// self-signed development certificate.
    pub fn with_options(base_url: &str, accept_invalid_certs: bool) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, PERSONS_PATH)
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{}/{}", self.base_url, PERSONS_PATH, id)
    }
}

#[async_trait]
impl PersonApi for HttpPersonApi {
    async fn list(&self) -> Result<Vec<Person>> {
        let url = self.collection_url();
        let response = self.client.get(&url).send().await?;
        decode(ensure_success(response, &url)?, &url).await
    }

    async fn create(&self, person: &NewPerson) -> Result<Option<Person>> {
        let url = self.collection_url();
        let response = self.client.post(&url).json(person).send().await?;
        let body = ensure_success(response, &url)?.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        match serde_json::from_slice(&body) {
            Ok(created) => Ok(Some(created)),
            Err(err) => {
                warn!(url = %url, error = %err, "create accepted with an unreadable body");
                Ok(None)
            }
        }
    }

    async fn delete(&self, id: u32) -> Result<()> {
        let url = self.item_url(id);
        let response = self.client.delete(&url).send().await?;
        ensure_success(response, &url)?;
        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !has_scheme || trimmed.split("://").nth(1).is_none_or(str::is_empty) {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

fn ensure_success(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
