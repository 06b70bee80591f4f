//! Brand endpoints.

use tally_core::entities::Brand;
use tally_core::payloads::{BrandUpdate, NewBrand, Validate};

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.get_json("/brands").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an invalid payload.
    pub async fn create_brand(&self, brand: &NewBrand) -> Result<Brand, ApiError> {
        brand.validate()?;
        self.post_json("/brands", brand).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an empty or invalid update.
    pub async fn update_brand(&self, id: &str, update: &BrandUpdate) -> Result<Brand, ApiError> {
        update.validate()?;
        self.put_json(&format!("/brands/{}", segment(id)), update)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_brand(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/brands/{}", segment(id))).await
    }
}
