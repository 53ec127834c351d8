// Product business rules
// Ownership is evaluated against the stored record before any mutation runs

use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::products::error::ProductError;
use crate::products::models::{Product, ProductRequest};
use crate::products::repository::ProductRepository;
use crate::products::tags;

const UPDATE_DENIED: &str = "You are not authorized to update this product";
const DELETE_DENIED: &str = "You are not authorized to delete this product";

/// Result of an ownership check on a stored record
#[derive(Debug, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied(&'static str),
}

/// Decide whether `user_id` may mutate `product`
/// Records without an owner cannot be mutated by anyone
fn check_owner(product: &Product, user_id: i32, denial: &'static str) -> Access {
    if product.user_id == Some(user_id) {
        Access::Allowed
    } else {
        Access::Denied(denial)
    }
}

fn parse_id(raw: &str) -> Result<Uuid, ProductError> {
    Uuid::parse_str(raw).map_err(|_| ProductError::NotFound)
}

/// Product service coordinating validation, normalization and persistence
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    /// Create a new ProductService
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    /// List products, newest first
    ///
    /// The raw `_limit` value is parsed leniently: anything that is not a
    /// non-negative integer is ignored and no bound is applied.
    pub async fn list(&self, limit_raw: Option<String>) -> Result<Vec<Product>, ProductError> {
        let limit = limit_raw
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|n| *n >= 0);

        self.repo.list(limit).await
    }

    /// Fetch one product; a malformed id reads the same as an absent one
    pub async fn get(&self, id_raw: &str) -> Result<Product, ProductError> {
        let id = parse_id(id_raw)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Create a product owned by the authenticated user
    pub async fn create(
        &self,
        owner_id: i32,
        request: ProductRequest,
    ) -> Result<Product, ProductError> {
        request
            .validate()
            .map_err(|_| ProductError::MissingFields)?;

        let tags = tags::normalize(request.tags);
        let product = self
            .repo
            .insert(
                owner_id,
                request.title.trim(),
                &request.description,
                request.summary.trim(),
                &tags,
            )
            .await?;

        info!("User {} created product {}", owner_id, product.id);
        Ok(product)
    }

    /// Replace a product's fields; only the owner may update
    pub async fn update(
        &self,
        id_raw: &str,
        user_id: i32,
        request: ProductRequest,
    ) -> Result<Product, ProductError> {
        let id = parse_id(id_raw)?;

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)?;

        request
            .validate()
            .map_err(|_| ProductError::MissingFields)?;

        if let Access::Denied(reason) = check_owner(&existing, user_id, UPDATE_DENIED) {
            return Err(ProductError::Forbidden(reason));
        }

        let tags = tags::normalize(request.tags);
        let product = self
            .repo
            .update(
                id,
                request.title.trim(),
                &request.description,
                request.summary.trim(),
                &tags,
            )
            .await?;

        debug!("User {} updated product {}", user_id, id);
        Ok(product)
    }

    /// Delete a product
    /// The ownership guard runs strictly before the delete statement, so a
    /// non-owner's 403 leaves the record in place
    pub async fn delete(&self, id_raw: &str, user_id: i32) -> Result<(), ProductError> {
        let id = parse_id(id_raw)?;

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)?;

        if let Access::Denied(reason) = check_owner(&existing, user_id, DELETE_DENIED) {
            return Err(ProductError::Forbidden(reason));
        }

        let removed = self.repo.delete(id).await?;
        if removed == 0 {
            // lost a race with a concurrent delete
            return Err(ProductError::NotFound);
        }

        info!("User {} deleted product {}", user_id, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product_owned_by(user_id: Option<i32>) -> Product {
        Product {
            id: Uuid::new_v4(),
            user_id,
            title: "T".to_string(),
            description: "D".to_string(),
            summary: "S".to_string(),
            tags: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn owner_is_allowed() {
        let product = product_owned_by(Some(7));
        assert_eq!(check_owner(&product, 7, DELETE_DENIED), Access::Allowed);
    }

    #[test]
    fn non_owner_is_denied_with_reason() {
        let product = product_owned_by(Some(7));
        assert_eq!(
            check_owner(&product, 8, DELETE_DENIED),
            Access::Denied(DELETE_DENIED)
        );
    }

    #[test]
    fn ownerless_record_denies_everyone() {
        let product = product_owned_by(None);
        assert_eq!(
            check_owner(&product, 7, UPDATE_DENIED),
            Access::Denied(UPDATE_DENIED)
        );
    }

    #[test]
    fn malformed_id_reads_as_not_found() {
        assert!(matches!(
            parse_id("not-a-uuid"),
            Err(ProductError::NotFound)
        ));
        assert!(parse_id("1f6f5cda-98a1-4a3c-9a1f-0e6a3d1c2b4a").is_ok());
    }
}
