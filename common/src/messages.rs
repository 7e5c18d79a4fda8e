use serde::{Deserialize, Serialize};

// Body the remote service sends alongside a non-success status
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    // Falls back to None for bodies that are empty or not JSON, e.g. a proxy's
    // HTML error page
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"message":"Card not in stock."}"#;
        assert_eq!(
            ErrorResponse::parse(body),
            Some(ErrorResponse {
                message: "Card not in stock.".to_string()
            })
        );
        assert_eq!(ErrorResponse::parse("<html>502</html>"), None);
        assert_eq!(ErrorResponse::parse(""), None);
    }
}
