use crate::error::AppError;
use crate::model::requests::CategoryRequest;
use crate::presentation::category::Category;
use async_trait::async_trait;

/// Interface for the category endpoints
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Lists categories
    async fn get_all(&self) -> Result<Vec<Category>, AppError>;

    /// Creates a category
    async fn create(&self, data: &CategoryRequest) -> Result<Category, AppError>;

    /// Replaces a category
    async fn update(&self, id: u64, data: &CategoryRequest) -> Result<Category, AppError>;

    /// Deletes a category
    async fn delete(&self, id: u64) -> Result<(), AppError>;
}
