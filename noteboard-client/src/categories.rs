//! Category endpoints
//!
//! - `POST /api/category/getCategories` — paginated (or full) category list
//! - `POST /api/category/create` — create a category
//! - `DELETE /api/category/:id` — delete a category

use crate::error::ClientResult;
use crate::http::ApiClient;
use noteboard_shared::models::Category;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for the category list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoriesRequest {
    /// 1-based page number
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// When set, the server returns the full list and ignores paging
    ///
    /// Used by the search page to populate its category dropdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_paginate: Option<bool>,
}

impl GetCategoriesRequest {
    /// A plain paginated request
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            no_paginate: None,
        }
    }

    /// A request for the full, unpaginated list
    pub fn all() -> Self {
        Self {
            page: 1,
            per_page: 1,
            no_paginate: Some(true),
        }
    }
}

/// One page of categories
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    /// Categories on this page
    pub categories: Vec<Category>,

    /// Total categories across all pages
    pub total_items: u64,

    /// Whether another page follows
    pub has_next: bool,
}

/// Request body for creating a category
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCategoryRequest {
    /// Category title
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
}

/// Response wrapping a single category
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryResponse {
    /// The created category
    pub category: Category,
}

/// Response for delete operations, a bare server message
#[derive(Debug, Clone, Deserialize)]
pub struct DeletedResponse {
    /// Confirmation message, if the server sends one
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// Fetches a page of categories
    pub async fn get_categories(
        &self,
        request: &GetCategoriesRequest,
    ) -> ClientResult<CategoriesResponse> {
        self.send(self.post("/api/category/getCategories").json(request))
            .await
    }

    /// Creates a category
    pub async fn create_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> ClientResult<CategoryResponse> {
        self.send(self.post("/api/category/create").json(request))
            .await
    }

    /// Deletes a category by id
    pub async fn delete_category(&self, category_id: &str) -> ClientResult<DeletedResponse> {
        self.send(self.delete(&format!("/api/category/{category_id}")))
            .await
    }
}
