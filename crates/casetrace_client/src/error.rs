use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_detail() {
        let err = ClientError::Api {
            status: 500,
            detail: "External API error".to_string(),
        };
        assert_eq!(err.to_string(), "api error 500: External API error");
    }

    #[test]
    fn decode_error_wraps_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ClientError::from(serde_err);
        assert!(err.to_string().starts_with("invalid response payload"));
    }
}
