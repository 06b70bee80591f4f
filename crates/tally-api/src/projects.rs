//! Project endpoints.

use tally_core::entities::Project;
use tally_core::payloads::{NewProject, ProjectUpdate, Validate};

use crate::{ApiClient, error::ApiError, segment, with_query};

impl ApiClient {
    /// List projects, optionally only those of one brand.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_projects(&self, brand_id: Option<&str>) -> Result<Vec<Project>, ApiError> {
        self.get_json(&with_query("/projects", &[("brandId", brand_id)]))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an invalid payload.
    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        project.validate()?;
        self.post_json("/projects", project).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an empty or invalid update.
    pub async fn update_project(
        &self,
        id: &str,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        update.validate()?;
        self.put_json(&format!("/projects/{}", segment(id)), update)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/projects/{}", segment(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_project_with_brand() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": "p1",
                "name": "Spring campaign",
                "brandId": "b1",
                "brand": { "id": "b1", "name": "Northwind" },
                "_count": { "tasks": 7 }
            }"#,
        )
        .unwrap();
        assert_eq!(project.brand_id, "b1");
        assert_eq!(project.brand.map(|brand| brand.name).as_deref(), Some("Northwind"));
        assert_eq!(project.count.tasks, 7);
    }
}
