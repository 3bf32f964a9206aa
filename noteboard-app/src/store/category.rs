//! Category slice
//!
//! Owns the paginated category list and the last created category. Reducer
//! methods are pure state transitions; the async side lives on
//! [`crate::store::Store`].

use crate::store::Paginated;
use noteboard_client::categories::{CategoriesResponse, CategoryResponse};
use noteboard_shared::error::ErrorBody;
use noteboard_shared::models::Category;

/// Category slice state
#[derive(Debug, Clone, Default)]
pub struct CategoryState {
    /// Paginated category list
    pub categories: Paginated<Category>,

    /// Most recently created category
    pub category: Option<Category>,

    /// Whether a request is in flight
    pub is_loading: bool,

    /// Last error body, cleared by any fulfilled request
    pub error: Option<ErrorBody>,

    /// Request generation, bumped by every dispatch
    generation: u64,
}

impl CategoryState {
    /// Marks a request pending and returns its generation
    pub(crate) fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.generation
    }

    /// True while no later dispatch has superseded this generation
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Moves the page pointer; the caller re-dispatches the fetch
    pub fn change_page(&mut self, page: u32) {
        self.categories.current_page = page;
    }

    /// Fulfilled category fetch: replaces the list wholesale
    ///
    /// Never touches `current_page`; the pointer belongs to
    /// [`CategoryState::change_page`].
    pub(crate) fn categories_fetched(&mut self, response: CategoriesResponse) {
        self.categories.data = response.categories;
        self.categories.total_items = response.total_items;
        self.categories.has_next = response.has_next;
        self.is_loading = false;
        self.error = None;
    }

    /// Fulfilled create: records the category and resets the list to page 1
    pub(crate) fn category_added(&mut self, response: CategoryResponse) {
        self.category = Some(response.category);
        self.categories.current_page = 1;
        self.is_loading = false;
        self.error = None;
    }

    /// Fulfilled delete
    pub(crate) fn category_deleted(&mut self) {
        self.is_loading = false;
        self.error = None;
    }

    /// Rejected request: stale data stays in place
    pub(crate) fn request_failed(&mut self, error: Option<ErrorBody>) {
        self.is_loading = false;
        if let Some(body) = error {
            self.error = Some(body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(id: &str) -> Category {
        Category {
            id: id.to_string(),
            title: format!("Category {id}"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn page_response(ids: &[&str]) -> CategoriesResponse {
        CategoriesResponse {
            categories: ids.iter().map(|id| category(id)).collect(),
            total_items: ids.len() as u64,
            has_next: false,
        }
    }

    #[test]
    fn test_fetch_replaces_list_but_keeps_page_pointer() {
        let mut state = CategoryState::default();
        state.change_page(3);

        let generation = state.begin_request();
        assert!(state.is_loading);

        assert!(state.is_current(generation));
        state.categories_fetched(page_response(&["cat-1", "cat-2"]));

        assert_eq!(state.categories.data.len(), 2);
        assert_eq!(state.categories.current_page, 3);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_add_resets_to_page_one() {
        let mut state = CategoryState::default();
        state.change_page(4);

        state.begin_request();
        state.category_added(CategoryResponse {
            category: category("cat-9"),
        });

        assert_eq!(state.categories.current_page, 1);
        assert_eq!(state.category.as_ref().unwrap().id, "cat-9");
    }

    #[test]
    fn test_rejection_keeps_stale_data() {
        let mut state = CategoryState::default();
        state.begin_request();
        state.categories_fetched(page_response(&["cat-1"]));

        state.begin_request();
        state.request_failed(Some(ErrorBody::from_message("boom")));

        assert_eq!(state.categories.data.len(), 1);
        assert_eq!(state.error.as_ref().unwrap().message, "boom");
        assert!(!state.is_loading);
    }

    #[test]
    fn test_rejection_without_body_keeps_previous_error_state() {
        let mut state = CategoryState::default();
        state.begin_request();
        state.request_failed(None);

        assert!(state.error.is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_generation_supersedes_older_dispatch() {
        let mut state = CategoryState::default();
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }
}
