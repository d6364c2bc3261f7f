use crate::application::client::TaskApiClient;
use crate::application::interfaces::category::CategoryService;
use crate::error::AppError;
use crate::model::requests::CategoryRequest;
use crate::model::responses::Listing;
use crate::presentation::category::Category;
use async_trait::async_trait;
use tracing::{debug, info};

const CATEGORIES_PATH: &str = "/categories/";

fn category_path(id: u64) -> String {
    format!("/categories/{id}/")
}

/// Implementation of the category service
#[derive(Debug, Clone)]
pub struct CategoryServiceImpl {
    client: TaskApiClient,
}

impl CategoryServiceImpl {
    /// Creates the service on top of `client`
    pub fn new(client: TaskApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let listing: Listing<Category> = self.client.get(CATEGORIES_PATH).await?;
        let categories = listing.into_items();
        debug!("Categories obtained: {}", categories.len());
        Ok(categories)
    }

    async fn create(&self, data: &CategoryRequest) -> Result<Category, AppError> {
        info!("Creating category {}", data.name);
        self.client.post(CATEGORIES_PATH, data).await
    }

    async fn update(&self, id: u64, data: &CategoryRequest) -> Result<Category, AppError> {
        info!("Updating category {}", id);
        self.client.put(&category_path(id), data).await
    }

    async fn delete(&self, id: u64) -> Result<(), AppError> {
        info!("Deleting category {}", id);
        self.client.delete(&category_path(id)).await
    }
}
