//! Response decoding.
//!
//! Maps a transport outcome (status code plus raw body) into a typed
//! [`Result`]. Success statuses decode the expected shape; failure statuses
//! decode the platform's error body into an ordered [`ErrorDetail`] sequence,
//! falling back to a catch-all detail when the body is not decodable.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ErrorCode, ErrorDetail, Result, SdkError};

/// Error body shape returned by the platform on non-success statuses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// Decodes a full response into the expected type.
pub(crate) async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await?;
    decode_body(status, &body)
}

/// Decodes `(status, raw body)` into a typed result.
///
/// Any 2xx status with a body matching `T` is a success; malformed JSON on a
/// 2xx is [`SdkError::DecodingFailed`]. Any other status is
/// [`SdkError::ServerError`]: a decodable API error body contributes its
/// detail sequence verbatim, a body with only a top-level message contributes
/// that message, and anything else contributes a single catch-all detail
/// naming the status.
pub(crate) fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status.is_success() {
        return serde_json::from_slice(body).map_err(SdkError::DecodingFailed);
    }

    let errors = match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors,
        Ok(parsed) if !parsed.message.is_empty() => {
            vec![ErrorDetail::new(ErrorCode::General, parsed.message)]
        }
        _ => vec![ErrorDetail::general(format!(
            "server returned status {} with no decodable error body",
            status.as_u16()
        ))],
    };

    Err(SdkError::ServerError { status: status.as_u16(), errors })
}
