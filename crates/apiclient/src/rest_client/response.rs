use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::errors::{ClientError, ErrorResponse};

/// Decodes a successful JSON body, or maps a non-success status to
/// `ClientError::Api` with the body's `error` field when the service sent one.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        return Err(api_error(status, response).await);
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| ClientError::Decode(err.to_string()))
}

/// Like `parse_json` but for endpoints whose body we do not care about,
/// e.g. `DELETE /api/products/:id`.
pub(crate) async fn expect_success(response: Response) -> Result<(), ClientError> {
    let status = response.status();

    if !status.is_success() {
        return Err(api_error(status, response).await);
    }

    Ok(())
}

async fn api_error(status: StatusCode, response: Response) -> ClientError {
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => status.to_string(),
    };

    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}
