//! User administration endpoints.

use tally_core::entities::User;
use tally_core::payloads::{NewUser, UserUpdate, Validate};

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an invalid payload.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        user.validate()?;
        self.post_json("/users", user).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an empty or invalid update.
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<User, ApiError> {
        update.validate()?;
        self.put_json(&format!("/users/{}", segment(id)), update)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", segment(id))).await
    }
}

#[cfg(test)]
mod tests {
    use tally_core::enums::Role;

    use super::*;

    #[test]
    fn parse_user_listing() {
        let users: Vec<User> = serde_json::from_str(
            r#"[
                { "id": "u1", "name": "Ana", "email": "ana@example.com", "role": "ADMIN", "createdAt": "2025-01-02T03:04:05Z" },
                { "id": "u2", "name": "Bo", "email": "bo@example.com", "role": "USER" }
            ]"#,
        )
        .unwrap();
        assert_eq!(users[0].role, Role::Admin);
        assert!(users[0].created_at.is_some());
        assert!(users[1].created_at.is_none());
    }
}
