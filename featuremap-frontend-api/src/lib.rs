use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod features;

pub use self::features::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] featuremap_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = ensure_ok(response).await?;
    Ok(response.json().await?)
}

/// Fails for every status outside of `200..=299`.
///
/// The body of a successful response is left untouched.
pub async fn ensure_ok(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(status_error(status, &text))
}

fn status_error(status: u16, body: &str) -> Error {
    serde_json::from_str::<featuremap_boundary::Error>(body)
        .map(Error::Api)
        .unwrap_or_else(|_| Error::Fetch(format!("Unexpected HTTP status {status}")))
}
