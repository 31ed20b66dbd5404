use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphQlError {
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("request failed with status code {status}: {body}")]
    RequestFailed { status: u16, body: String },
}

// One GET per call, query document passed as the `query` URL parameter.
// Anything other than 200 is surfaced verbatim; there is no retry.
pub async fn fetch(endpoint: &str, query: &str, bearer: &str) -> Result<Value, GraphQlError> {
    let client = Client::new();
    let response = client
        .get(endpoint)
        .query(&[("query", query)])
        .header(AUTHORIZATION, format!("Bearer {bearer}"))
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await?;
        return Err(GraphQlError::RequestFailed {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json().await?)
}
