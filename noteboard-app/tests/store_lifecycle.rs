//! Store lifecycle tests against a mock API server
//!
//! Each test drives real thunks over HTTP and asserts on the state
//! transitions: page pointers, forced logout on session expiry, navigation
//! after mutations, and stale-response suppression.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use noteboard_app::router::Route;
use noteboard_app::store::Store;
use noteboard_client::categories::{CreateCategoryRequest, GetCategoriesRequest};
use noteboard_client::notes::{GetNotesRequest, SearchNotesRequest};
use noteboard_client::users::LoginRequest;
use noteboard_client::{ApiClient, MemorySessionStore, SessionStore};
use noteboard_shared::filters::{NoteSort, SearchFilters};
use noteboard_shared::models::Session;
use serde_json::json;

const PER_PAGE: u32 = 5;

fn store_for(server: &MockServer) -> (Store, Arc<MemorySessionStore>) {
    let session = Arc::new(MemorySessionStore::new());
    let client = ApiClient::new(server.base_url(), session.clone());
    (Store::new(client), session)
}

fn logged_in_store(server: &MockServer) -> (Store, Arc<MemorySessionStore>) {
    let (store, session) = store_for(server);
    session.save(&Session::new("tok-1", "user-1")).unwrap();
    store.bootstrap();
    (store, session)
}

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "firstName": "Ada",
        "lastname": "Lovelace",
        "username": "ada",
        "email": "ada@example.com"
    })
}

fn category_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

fn note_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "description": "body",
        "category": category_json("cat-1", "Work"),
        "creator": [user_json("user-1")],
        "isPrivate": false,
        "assignedTo": []
    })
}

fn notes_request(page: u32) -> GetNotesRequest {
    GetNotesRequest {
        page,
        per_page: PER_PAGE,
        sort: NoteSort::default(),
    }
}

#[tokio::test]
async fn test_fulfilled_fetch_keeps_page_pointer() {
    let server = MockServer::start_async().await;
    let (store, _session) = logged_in_store(&server);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/note/getNotes")
                .json_body_partial(r#"{ "page": 2 }"#);
            then.status(200).json_body(json!({
                "notes": [note_json("note-6", "Sixth")],
                "totalItems": 6,
                "hasNext": false
            }));
        })
        .await;

    store.change_notes_page(2);
    assert!(store.fetch_notes(&notes_request(2)).await);

    mock.assert_async().await;
    let state = store.state();
    assert_eq!(state.note.notes.current_page, 2);
    assert_eq!(state.note.notes.data.len(), 1);
    assert_eq!(state.note.notes.total_items, 6);
    assert!(!state.note.is_loading);
}

#[tokio::test]
async fn test_expired_token_clears_session_and_routes_to_login() {
    let server = MockServer::start_async().await;
    let (store, session) = logged_in_store(&server);
    store.navigate(Route::Home);

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/note/getNotes");
            then.status(500).json_body(json!({ "message": "jwt expired" }));
        })
        .await;

    assert!(!store.fetch_notes(&notes_request(1)).await);

    assert!(session.load().unwrap().is_none());
    let state = store.state();
    assert!(!state.user.logged_in);
    assert_eq!(state.route, Route::Login);
    // No error body is recorded for a forced logout
    assert!(state.note.error.is_none());
}

#[tokio::test]
async fn test_expiry_on_login_route_leaves_storage_alone() {
    let server = MockServer::start_async().await;
    let (store, session) = store_for(&server);
    session.save(&Session::new("tok-stale", "user-1")).unwrap();
    store.navigate(Route::Login);

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user/getUsers");
            then.status(401)
                .json_body(json!({ "message": "Not authenticated." }));
        })
        .await;

    assert!(!store.fetch_users().await);

    // Already on /login, so the forced logout is skipped entirely
    assert!(session.load().unwrap().is_some());
    assert_eq!(store.state().route, Route::Login);
}

#[tokio::test]
async fn test_add_category_resets_list_to_page_one() {
    let server = MockServer::start_async().await;
    let (store, _session) = logged_in_store(&server);

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/category/create");
            then.status(201)
                .json_body(json!({ "category": category_json("cat-9", "Errands") }));
        })
        .await;

    store.change_categories_page(3);
    let request = CreateCategoryRequest {
        title: "Errands".to_string(),
    };
    assert!(store.add_category(&request).await);

    let state = store.state();
    assert_eq!(state.category.categories.current_page, 1);
    assert_eq!(state.category.category.as_ref().unwrap().id, "cat-9");
}

#[tokio::test]
async fn test_text_only_search_sends_no_filters_key() {
    let server = MockServer::start_async().await;
    let (store, _session) = logged_in_store(&server);

    // Exact body match: a `filters` key would fail this matcher
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/note/search").json_body(json!({
                "page": 1,
                "perPage": PER_PAGE,
                "searchText": "milk"
            }));
            then.status(200).json_body(json!({
                "notes": [note_json("note-1", "Buy milk")],
                "totalItems": 1,
                "hasNext": false
            }));
        })
        .await;

    let request = SearchNotesRequest::new(1, PER_PAGE, "milk", SearchFilters::default());
    assert!(store.search_notes(&request).await);

    mock.assert_async().await;
    let state = store.state();
    assert_eq!(state.note.searched.data.len(), 1);
    assert!(state.note.searched.users_with_matched_filter.is_empty());
}

#[tokio::test]
async fn test_search_attaches_only_populated_dimensions() {
    let server = MockServer::start_async().await;
    let (store, _session) = logged_in_store(&server);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/note/search").json_body(json!({
                "page": 1,
                "perPage": PER_PAGE,
                "searchText": "milk",
                "filters": { "categories": ["cat-1"] }
            }));
            then.status(200).json_body(json!({
                "notes": [],
                "totalItems": 0,
                "hasNext": false
            }));
        })
        .await;

    let filters = SearchFilters {
        categories: Some(vec!["cat-1".to_string()]),
        ..Default::default()
    };
    assert!(store
        .search_notes(&SearchNotesRequest::new(1, PER_PAGE, "milk", filters))
        .await);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_note_routes_home_on_success() {
    let server = MockServer::start_async().await;
    let (store, _session) = logged_in_store(&server);
    store.navigate(Route::Note("note-1".to_string()));

    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/note/note-1");
            then.status(200).json_body(json!({ "message": "Deleted." }));
        })
        .await;

    assert!(store.delete_note("note-1").await);
    assert_eq!(store.state().route, Route::Home);
}

#[tokio::test]
async fn test_delete_note_failure_stays_put_with_error() {
    let server = MockServer::start_async().await;
    let (store, _session) = logged_in_store(&server);
    store.navigate(Route::Note("note-1".to_string()));

    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/note/note-1");
            then.status(403)
                .json_body(json!({ "message": "Not authorized." }));
        })
        .await;

    assert!(!store.delete_note("note-1").await);

    let state = store.state();
    assert_eq!(state.route, Route::Note("note-1".to_string()));
    assert_eq!(state.note.error.as_ref().unwrap().message, "Not authorized.");
}

#[tokio::test]
async fn test_login_persists_session_and_gates_guest_routes() {
    let server = MockServer::start_async().await;
    let (store, session) = store_for(&server);
    store.navigate(Route::Login);

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/user/login");
            then.status(200)
                .json_body(json!({ "token": "tok-fresh", "userId": "user-1" }));
        })
        .await;

    let request = LoginRequest {
        email: "ada@example.com".to_string(),
        password: "hunter22".to_string(),
    };
    assert!(store.login(&request).await);

    let stored = session.load().unwrap().unwrap();
    assert_eq!(stored.token, "tok-fresh");

    let state = store.state();
    assert!(state.user.logged_in);
    assert_eq!(state.route, Route::Home);

    // The guest-only gate now redirects home
    assert_eq!(store.navigate(Route::Login), Route::Home);
}

#[tokio::test]
async fn test_failed_login_leaves_storage_untouched() {
    let server = MockServer::start_async().await;
    let (store, session) = store_for(&server);

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/user/login");
            then.status(401)
                .json_body(json!({ "message": "Wrong password." }));
        })
        .await;

    let request = LoginRequest {
        email: "ada@example.com".to_string(),
        password: "wrong".to_string(),
    };
    assert!(!store.login(&request).await);

    assert!(session.load().unwrap().is_none());
    let state = store.state();
    assert!(!state.user.logged_in);
    assert_eq!(state.user.error.as_ref().unwrap().message, "Wrong password.");
}

#[tokio::test]
async fn test_stale_response_cannot_clobber_newer_fetch() {
    let server = MockServer::start_async().await;
    let (store, _session) = logged_in_store(&server);

    // Page 1 answers slowly, page 2 immediately; the page-1 response
    // arrives after page 2 has already been reduced and must be dropped.
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/note/getNotes")
                .json_body_partial(r#"{ "page": 1 }"#);
            then.status(200)
                .delay(Duration::from_millis(300))
                .json_body(json!({
                    "notes": [note_json("note-1", "First page")],
                    "totalItems": 6,
                    "hasNext": true
                }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/note/getNotes")
                .json_body_partial(r#"{ "page": 2 }"#);
            then.status(200).json_body(json!({
                "notes": [note_json("note-6", "Second page")],
                "totalItems": 6,
                "hasNext": false
            }));
        })
        .await;

    let page1 = notes_request(1);
    let page2 = notes_request(2);
    let (stale, fresh) = tokio::join!(
        store.fetch_notes(&page1),
        store.fetch_notes(&page2),
    );

    assert!(!stale);
    assert!(fresh);

    let state = store.state();
    assert_eq!(state.note.notes.data[0].id, "note-6");
    assert!(!state.note.notes.has_next);
    assert!(!state.note.is_loading);
}
