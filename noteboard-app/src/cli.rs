//! Command-line front end
//!
//! One subcommand per page action of the client. Each command navigates the
//! store to the corresponding route, validates its form payload, dispatches
//! the thunk, and renders the resulting slice state.

use crate::config::Config;
use crate::router::Route;
use crate::store::Store;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use noteboard_client::categories::{CreateCategoryRequest, GetCategoriesRequest};
use noteboard_client::notes::{GetNotesRequest, NoteDraft, SearchNotesRequest};
use noteboard_client::users::{LoginRequest, SignupRequest};
use noteboard_shared::error::ErrorBody;
use noteboard_shared::filters::{
    CreatorFilter, DateRange, NoteSort, SearchFilters, SortField, SortOrder,
};
use noteboard_shared::models::Note;
use validator::Validate;

/// Command-line client for the Noteboard API
#[derive(Parser)]
#[command(name = "noteboard", version, about = "Command-line client for the Noteboard API")]
pub struct Cli {
    /// Override the API base URL from the environment
    #[arg(long)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Sort field for the note list
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    CreatedAt,
    UpdatedAt,
    Category,
    Title,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::CreatedAt => SortField::CreatedAt,
            SortArg::UpdatedAt => SortField::UpdatedAt,
            SortArg::Category => SortField::Category,
            SortArg::Title => SortField::Title,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Register a new account
    Register {
        #[arg(long)]
        firstname: String,
        #[arg(long)]
        lastname: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Log out and clear the stored session
    Logout,

    /// List notes (the home page)
    Notes {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, value_enum, default_value_t = SortArg::CreatedAt)]
        sort: SortArg,
        /// Sort ascending instead of the default descending
        #[arg(long)]
        ascending: bool,
    },

    /// Show a single note
    Note { note_id: String },

    /// Create a note
    NewNote {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Category id
        #[arg(long)]
        category: String,
        /// Mark the note private
        #[arg(long)]
        private: bool,
        /// User id to assign the note to (repeatable)
        #[arg(long = "assign")]
        assigned_to: Vec<String>,
    },

    /// Edit a note; omitted fields keep their current value
    EditNote {
        note_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        private: Option<bool>,
        /// Replacement assignee list (repeatable); omit to keep current
        #[arg(long = "assign")]
        assigned_to: Option<Vec<String>>,
    },

    /// Delete a note
    DeleteNote { note_id: String },

    /// List categories
    Categories {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Add a category
    AddCategory { title: String },

    /// Delete a category
    DeleteCategory { category_id: String },

    /// Search notes by text, with optional filters
    Search {
        /// Free-text query
        text: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Creation-range start (RFC 3339, e.g. 2024-01-01T00:00:00Z)
        #[arg(long)]
        created_from: Option<DateTime<Utc>>,
        /// Creation-range end
        #[arg(long)]
        created_to: Option<DateTime<Utc>>,
        /// Update-range start
        #[arg(long)]
        updated_from: Option<DateTime<Utc>>,
        /// Update-range end
        #[arg(long)]
        updated_to: Option<DateTime<Utc>>,
        /// Category id to filter by (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Creator id to filter by (repeatable)
        #[arg(long = "creator")]
        creators: Vec<String>,
        /// Select all creators
        #[arg(long)]
        all_creators: bool,
    },

    /// List users
    Users,
}

/// Executes one command against the store
pub async fn run(store: &Store, config: &Config, command: Command) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            if store.navigate(Route::Login) != Route::Login {
                println!("Already logged in.");
                return Ok(());
            }

            let request = LoginRequest { email, password };
            validate(&request)?;

            if store.login(&request).await {
                let state = store.state();
                println!(
                    "Logged in as {}.",
                    state.user.user_id.as_deref().unwrap_or("unknown")
                );
                Ok(())
            } else {
                Err(slice_failure(&store.state().user.error, "login failed"))
            }
        }

        Command::Register {
            firstname,
            lastname,
            username,
            email,
            password,
            confirm_password,
        } => {
            if store.navigate(Route::Register) != Route::Register {
                println!("Already logged in.");
                return Ok(());
            }

            let request = SignupRequest {
                firstname,
                lastname,
                username,
                email,
                password,
                confirm_password,
            };
            validate(&request)?;

            if store.signup(&request).await {
                println!("Account created. You can now log in.");
                Ok(())
            } else {
                Err(slice_failure(&store.state().user.error, "signup failed"))
            }
        }

        Command::Logout => {
            store.logout();
            println!("Logged out.");
            Ok(())
        }

        Command::Notes {
            page,
            sort,
            ascending,
        } => {
            store.navigate(Route::Home);
            store.change_notes_page(page);

            let request = GetNotesRequest {
                page,
                per_page: config.per_page,
                sort: NoteSort {
                    name: sort.into(),
                    order: if ascending {
                        SortOrder::Ascending
                    } else {
                        SortOrder::Descending
                    },
                },
            };

            if store.fetch_notes(&request).await {
                let state = store.state();
                print_notes(&state.note.notes.data);
                println!(
                    "Page {} of {} notes{}",
                    state.note.notes.current_page,
                    state.note.notes.total_items,
                    if state.note.notes.has_next { " (more available)" } else { "" }
                );
                Ok(())
            } else {
                Err(slice_failure(&store.state().note.error, "could not fetch notes"))
            }
        }

        Command::Note { note_id } => {
            store.navigate(Route::Note(note_id.clone()));

            if store.fetch_note(&note_id).await {
                let state = store.state();
                if let Some(note) = &state.note.note {
                    print_note_detail(note);
                }
                Ok(())
            } else {
                Err(slice_failure(&store.state().note.error, "could not fetch note"))
            }
        }

        Command::NewNote {
            title,
            description,
            category,
            private,
            assigned_to,
        } => {
            store.navigate(Route::NewNote);

            let draft = NoteDraft {
                title,
                description,
                category,
                is_private: private,
                assigned_to,
            };
            validate(&draft)?;

            if store.create_note(&draft).await {
                println!("Note created.");
                Ok(())
            } else {
                Err(slice_failure(&store.state().note.error, "could not create note"))
            }
        }

        Command::EditNote {
            note_id,
            title,
            description,
            category,
            private,
            assigned_to,
        } => {
            store.navigate(Route::EditNote(note_id.clone()));

            // Pre-fill from the current note, like the edit form does
            if !store.fetch_note(&note_id).await {
                return Err(slice_failure(&store.state().note.error, "could not load note"));
            }
            let state = store.state();
            let current = state
                .note
                .note
                .as_ref()
                .context("note not found")?;

            let draft = NoteDraft {
                title: title.unwrap_or_else(|| current.title.clone()),
                description: description.unwrap_or_else(|| current.description.clone()),
                category: category.unwrap_or_else(|| current.category.id.clone()),
                is_private: private.unwrap_or(current.is_private),
                assigned_to: assigned_to.unwrap_or_else(|| {
                    current
                        .assigned_to
                        .iter()
                        .map(|assignee| assignee.id().to_string())
                        .collect()
                }),
            };
            validate(&draft)?;

            if store.edit_note(&note_id, &draft).await {
                println!("Note updated.");
                Ok(())
            } else {
                Err(slice_failure(&store.state().note.error, "could not update note"))
            }
        }

        Command::DeleteNote { note_id } => {
            if store.delete_note(&note_id).await {
                println!("Note deleted.");
                Ok(())
            } else {
                Err(slice_failure(&store.state().note.error, "could not delete note"))
            }
        }

        Command::Categories { page } => {
            store.navigate(Route::Categories);
            store.change_categories_page(page);

            let request = GetCategoriesRequest::page(page, config.per_page);
            if store.fetch_categories(&request).await {
                let state = store.state();
                for category in &state.category.categories.data {
                    println!("{}  {}", category.id, category.title);
                }
                println!(
                    "Page {} of {} categories",
                    state.category.categories.current_page, state.category.categories.total_items
                );
                Ok(())
            } else {
                Err(slice_failure(
                    &store.state().category.error,
                    "could not fetch categories",
                ))
            }
        }

        Command::AddCategory { title } => {
            store.navigate(Route::Categories);

            let request = CreateCategoryRequest { title };
            validate(&request)?;

            if store.add_category(&request).await {
                println!("Category added; list reset to page 1.");
                Ok(())
            } else {
                Err(slice_failure(
                    &store.state().category.error,
                    "could not add category",
                ))
            }
        }

        Command::DeleteCategory { category_id } => {
            if store.delete_category(&category_id).await {
                println!("Category deleted.");
                Ok(())
            } else {
                Err(slice_failure(
                    &store.state().category.error,
                    "could not delete category",
                ))
            }
        }

        Command::Search {
            text,
            page,
            created_from,
            created_to,
            updated_from,
            updated_to,
            categories,
            creators,
            all_creators,
        } => {
            store.navigate(Route::NotesSearch);

            if text.is_empty() {
                bail!("search text must not be empty");
            }

            // The search page loads its dropdown data up front
            store.fetch_categories(&GetCategoriesRequest::all()).await;
            store.fetch_users().await;

            let filters = SearchFilters {
                created_at: date_range("created", created_from, created_to)?,
                updated_at: date_range("updated", updated_from, updated_to)?,
                categories: if categories.is_empty() {
                    None
                } else {
                    Some(categories)
                },
                creators: if creators.is_empty() && !all_creators {
                    None
                } else {
                    Some(CreatorFilter {
                        selected: creators,
                        select_all: all_creators,
                    })
                },
            };

            store.change_search_page(page);
            let request = SearchNotesRequest::new(page, config.per_page, text, filters);

            if store.search_notes(&request).await {
                let state = store.state();
                print_notes(&state.note.searched.data);
                println!(
                    "Page {} of {} matches",
                    state.note.searched.current_page, state.note.searched.total_items
                );

                for user_match in &state.note.searched.users_with_matched_filter {
                    if !user_match.matched_filter {
                        println!("(no matches for creator {})", user_match.user.display_name());
                    }
                }
                Ok(())
            } else {
                Err(slice_failure(&store.state().note.error, "search failed"))
            }
        }

        Command::Users => {
            if store.fetch_users().await {
                let state = store.state();
                for user in &state.user.users {
                    println!("{}  {} ({})", user.id, user.display_name(), user.username);
                }
                Ok(())
            } else {
                Err(slice_failure(&store.state().user.error, "could not fetch users"))
            }
        }
    }
}

/// Runs client-side form validation, flattening issues into one error
fn validate(payload: &impl Validate) -> Result<()> {
    payload.validate().map_err(|errors| {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect();
        anyhow::anyhow!("validation failed: {}", messages.join("; "))
    })
}

/// Builds a date range, requiring both ends or neither
fn date_range(
    kind: &str,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<Option<DateRange>> {
    match (from, to) {
        (Some(from), Some(to)) => Ok(Some(DateRange { from, to })),
        (None, None) => Ok(None),
        _ => bail!("both --{kind}-from and --{kind}-to are required"),
    }
}

/// Turns a recorded slice error into the command's failure
fn slice_failure(error: &Option<ErrorBody>, what: &str) -> anyhow::Error {
    match error {
        Some(body) => {
            let mut message = format!("{what}: {}", body.message);
            for issue in &body.data {
                if let Some(msg) = &issue.msg {
                    message.push_str(&format!("\n  - {msg}"));
                }
            }
            anyhow::anyhow!(message)
        }
        None => anyhow::anyhow!("{what}: no server response (or session expired)"),
    }
}

fn print_notes(notes: &[Note]) {
    for note in notes {
        let creator = note
            .creator
            .first()
            .map(|user| user.display_name())
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "{}  {}{}  [{}]  by {}",
            note.id,
            note.title,
            if note.is_private { " (private)" } else { "" },
            note.category.title,
            creator
        );
    }
}

fn print_note_detail(note: &Note) {
    println!("{}", note.title);
    println!("Category: {}", note.category.title);
    if note.is_private {
        println!("Private");
    }
    if !note.assigned_to.is_empty() {
        let ids: Vec<&str> = note.assigned_to.iter().map(|assignee| assignee.id()).collect();
        println!("Assigned to: {}", ids.join(", "));
    }
    println!();
    println!("{}", note.description);
}
