//! Project permission endpoints.

use tally_core::entities::Permission;
use tally_core::payloads::{NewPermission, Validate};

use crate::{ApiClient, error::ApiError, segment, with_query};

impl ApiClient {
    /// List grants, optionally for one user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_permissions(&self, user_id: Option<&str>) -> Result<Vec<Permission>, ApiError> {
        self.get_json(&with_query("/permissions", &[("userId", user_id)]))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an invalid payload.
    pub async fn grant_permission(&self, grant: &NewPermission) -> Result<Permission, ApiError> {
        grant.validate()?;
        self.post_json("/permissions", grant).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn revoke_permission(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/permissions/{}", segment(id))).await
    }
}

#[cfg(test)]
mod tests {
    use tally_core::enums::PermissionLevel;

    use super::*;

    #[test]
    fn parse_permission() {
        let permission: Permission = serde_json::from_str(
            r#"{ "id": "perm1", "userId": "u1", "projectId": "p1", "level": "MANAGE" }"#,
        )
        .unwrap();
        assert_eq!(permission.level, PermissionLevel::Manage);
    }
}
