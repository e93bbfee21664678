//! The `{"ok": .., "result": ..}` wrapper around every Bot API response.

use serde::Deserialize;
use serde_json::Value;

use crate::{errors::Error, transport::RawResponse, Result};

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    pub result: Option<Value>,
    pub description: Option<String>,
    pub error_code: Option<u16>,
    pub parameters: Option<ResponseParameters>,
}

/// Extra hints attached to some failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseParameters {
    pub migrate_to_chat_id: Option<i64>,
    pub retry_after: Option<u64>,
}

/// Unwrap `result` from a raw response, or map the failure to an [`Error`].
pub fn parse(raw: &RawResponse) -> Result<Value> {
    let envelope: ApiResponse = match serde_json::from_slice(&raw.body) {
        Ok(e) => e,
        Err(e) => {
            if raw.is_success() {
                return Err(Error::InvalidResponse(format!("undecodable body: {e}")));
            }
            let text = String::from_utf8_lossy(&raw.body);
            let text = text.trim();
            let description = if text.is_empty() {
                format!("HTTP {}", raw.status)
            } else {
                text.chars().take(200).collect()
            };
            return Err(from_status(raw.status, description));
        }
    };

    if envelope.ok {
        return envelope
            .result
            .ok_or_else(|| Error::InvalidResponse("missing result".to_string()));
    }

    if let Some(params) = &envelope.parameters {
        if let Some(new_chat_id) = params.migrate_to_chat_id {
            return Err(Error::ChatMigrated { new_chat_id });
        }
        if let Some(seconds) = params.retry_after {
            return Err(Error::RetryAfter { seconds });
        }
    }

    let code = envelope.error_code.unwrap_or(raw.status);
    let description = envelope
        .description
        .unwrap_or_else(|| "Unknown error".to_string());
    Err(from_status(code, description))
}

fn from_status(code: u16, description: String) -> Error {
    match code {
        401 | 403 => Error::Unauthorized(description),
        400 => Error::BadRequest(description),
        404 => Error::InvalidToken,
        409 => Error::Conflict(description),
        502 => Error::Network("Bad Gateway".to_string()),
        _ => Error::Api { code, description },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: u16, body: Value) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string().into_bytes(),
        }
    }

    #[test]
    fn ok_yields_result() {
        let v = parse(&raw(200, json!({"ok": true, "result": true}))).unwrap();
        assert_eq!(v, json!(true));
    }

    #[test]
    fn parameters_take_precedence() {
        let err = parse(&raw(
            429,
            json!({
                "ok": false,
                "error_code": 429,
                "description": "Too Many Requests: retry after 7",
                "parameters": {"retry_after": 7}
            }),
        ))
        .unwrap_err();
        assert!(matches!(err, Error::RetryAfter { seconds: 7 }));

        let err = parse(&raw(
            400,
            json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: group chat was upgraded to a supergroup chat",
                "parameters": {"migrate_to_chat_id": -1001234}
            }),
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            Error::ChatMigrated {
                new_chat_id: -1001234
            }
        ));
    }

    #[test]
    fn error_codes_map_to_variants() {
        let err = parse(&raw(
            400,
            json!({"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}),
        ))
        .unwrap_err();
        match err {
            Error::BadRequest(d) => assert_eq!(d, "Bad Request: chat not found"),
            other => panic!("unexpected {other:?}"),
        }

        let err = parse(&raw(403, json!({"ok": false, "error_code": 403}))).unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));

        let err = parse(&raw(404, json!({"ok": false, "error_code": 404}))).unwrap_err();
        assert!(matches!(err, Error::InvalidToken));

        let err = parse(&raw(409, json!({"ok": false, "error_code": 409}))).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        let err = parse(&raw(
            500,
            json!({"ok": false, "error_code": 500, "description": "Internal"}),
        ))
        .unwrap_err();
        assert!(matches!(err, Error::Api { code: 500, .. }));
    }

    #[test]
    fn non_json_bodies() {
        let bad_gateway = RawResponse {
            status: 502,
            body: b"<html>Bad Gateway</html>".to_vec(),
        };
        assert!(matches!(parse(&bad_gateway), Err(Error::Network(_))));

        let garbage = RawResponse {
            status: 200,
            body: b"not json".to_vec(),
        };
        assert!(matches!(parse(&garbage), Err(Error::InvalidResponse(_))));
    }
}
