//! Login and current-user endpoints.

use serde::{Deserialize, Serialize};
use tally_core::entities::User;

use crate::{ApiClient, error::ApiError};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Successful login: a bearer token and the account it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl ApiClient {
    /// Exchange credentials for a token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for bad credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", &LoginRequest { email, password })
            .await
    }

    /// Look up the user the current token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] if the token is missing or stale.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("/auth/me").await
    }
}

#[cfg(test)]
mod tests {
    use tally_core::enums::Role;

    use super::*;

    #[test]
    fn parse_login_response() {
        let data: LoginResponse = serde_json::from_str(
            r#"{
                "token": "jwt-abc",
                "user": { "id": "u1", "name": "Ana", "email": "ana@example.com", "role": "SUPER_ADMIN" }
            }"#,
        )
        .unwrap();
        assert_eq!(data.token, "jwt-abc");
        assert_eq!(data.user.role, Role::SuperAdmin);
    }

    #[test]
    fn login_request_shape() {
        let body = serde_json::to_value(LoginRequest {
            email: "ana@example.com",
            password: "hunter22",
        })
        .unwrap();
        assert_eq!(body["email"], "ana@example.com");
        assert_eq!(body["password"], "hunter22");
    }
}
