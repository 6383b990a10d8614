//! Access token returned by the accounts service.

// Use 3rd party
use serde::{Deserialize, Serialize};

open_enum! {
    pub enum TokenType {
        Bearer => "bearer" | "Bearer",
    }
}

//Token example:
//{
    //"access_token": "BQDJ...8Xa",
    //"token_type": "Bearer",
    //"expires_in": 3600
//}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: TokenType,
    /// Lifetime of the token in seconds.
    pub expires_in: u64,
    /// Space separated list of granted scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl AccessToken {
    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        match self.token_type {
            TokenType::Bearer => format!("Bearer {}", self.access_token),
            ref other => format!("{} {}", other, self.access_token),
        }
    }

    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_deref()
            .map(|scope| scope.split_whitespace().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_credentials_token() {
        let token: AccessToken = serde_json::from_str(
            r#"{"access_token": "NgCXRKc", "token_type": "Bearer", "expires_in": 3600}"#,
        )
        .unwrap();
        assert_eq!(token.token_type, TokenType::Bearer);
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.authorization_header(), "Bearer NgCXRKc");
        assert!(token.scopes().is_empty());
    }

    #[test]
    fn authorization_code_token() {
        let token: AccessToken = serde_json::from_str(
            r#"{
                "access_token": "NgA6ZcYI",
                "token_type": "bearer",
                "scope": "user-read-private user-read-email",
                "expires_in": 3600,
                "refresh_token": "NgAagA"
            }"#,
        )
        .unwrap();
        assert_eq!(token.scopes(), vec!["user-read-private", "user-read-email"]);
        assert_eq!(token.refresh_token.as_deref(), Some("NgAagA"));
        assert_eq!(
            serde_json::to_value(&token).unwrap()["token_type"],
            serde_json::json!("bearer")
        );
    }
}
