use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, error, info, warn};

use crate::books::dto::{Book, FormField};
use crate::books::repository::BookRepository;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::{ADD_FAILED, CatalogState, Confirmation, DELETE_FAILED, DELETE_PROMPT,
                             LOAD_FAILED, SEARCH_FAILED};
use crate::catalog::view::{CatalogView, render, RenderOptions};
use crate::core::command::Command;
use crate::core::library::LibraryResult;

// CatalogController owns the catalog state and turns user actions into
// backend calls. State is only touched between awaits, never across one.
pub(crate) struct CatalogController {
    list_cmd: ListBooksCommand,
    search_cmd: SearchBooksCommand,
    add_cmd: AddBookCommand,
    remove_cmd: RemoveBookCommand,
    options: RenderOptions,
    state: Mutex<CatalogState>,
}

// Clears `loading` when the latest list/search request finishes, whether it
// succeeded, failed or was dropped mid-flight.
struct InFlight<'a> {
    controller: &'a CatalogController,
    seq: u64,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let seq = self.seq;
        self.controller.with_state(|state| {
            if state.is_latest(seq) {
                state.loading = false;
            }
        });
    }
}

impl CatalogController {
    pub(crate) fn new(book_repository: Arc<dyn BookRepository>, options: RenderOptions) -> Self {
        Self {
            list_cmd: ListBooksCommand::new(book_repository.clone()),
            search_cmd: SearchBooksCommand::new(book_repository.clone()),
            add_cmd: AddBookCommand::new(book_repository.clone()),
            remove_cmd: RemoveBookCommand::new(book_repository),
            options,
            state: Mutex::new(CatalogState::new()),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub(crate) fn snapshot(&self) -> CatalogState {
        self.with_state(|state| state.clone())
    }

    pub(crate) fn render(&self) -> CatalogView {
        self.with_state(|state| render(state, &self.options))
    }

    pub(crate) fn set_search_query(&self, query: &str) {
        self.with_state(|state| state.search_query = query.to_string());
    }

    pub(crate) fn set_add_form_visible(&self, visible: bool) {
        self.with_state(|state| {
            if visible {
                state.open_add_form();
            } else {
                state.close_add_form();
            }
        });
    }

    pub(crate) fn update_form_field(&self, field: FormField, value: &str) {
        self.with_state(|state| state.add_form.set(field, value));
    }

    // full reload of the collection
    pub(crate) async fn load_books(&self) {
        let seq = self.with_state(|state| state.begin_request());
        let _in_flight = InFlight { controller: self, seq };
        let res = self.list_cmd.execute(ListBooksCommandRequest::new()).await
            .map(|res| res.books);
        self.apply_books(seq, res, LOAD_FAILED);
    }

    // searches for the current query; a blank query reloads everything
    pub(crate) async fn search(&self) {
        let query = self.with_state(|state| state.search_query.clone());
        self.search_for(query.as_str()).await;
    }

    pub(crate) async fn search_for(&self, query: &str) {
        if query.trim().is_empty() {
            return self.load_books().await;
        }
        let seq = self.with_state(|state| state.begin_request());
        let _in_flight = InFlight { controller: self, seq };
        let res = self.search_cmd.execute(SearchBooksCommandRequest::new(query)).await
            .map(|res| res.books);
        self.apply_books(seq, res, SEARCH_FAILED);
    }

    fn apply_books(&self, seq: u64, res: LibraryResult<Vec<Book>>, failure: &str) {
        self.with_state(|state| {
            if !state.is_latest(seq) {
                debug!("dropping stale response {} (latest {})", seq, state.latest_request);
                return;
            }
            match res {
                Ok(books) => {
                    debug!("loaded {} books", books.len());
                    state.books = books;
                }
                Err(err) => {
                    error!("{}: {}", failure, err);
                    state.error = Some(failure.to_string());
                }
            }
        });
    }

    // submits the staged form; on success the form closes and the list is
    // reloaded, on failure the form stays open with its values
    pub(crate) async fn submit_add_form(&self) -> bool {
        let form = self.with_state(|state| {
            if state.show_add_form { Some(state.add_form.clone()) } else { None }
        });
        let Some(form) = form else {
            warn!("add form is not open, nothing to submit");
            return false;
        };
        match self.add_cmd.execute(AddBookCommandRequest::new(form)).await {
            Ok(res) => {
                info!("added book {} {:?}", res.book.id, res.book.title);
                self.with_state(|state| state.close_add_form());
                self.load_books().await;
                true
            }
            Err(err) => {
                error!("{}: {}", ADD_FAILED, err);
                self.with_state(|state| state.error = Some(ADD_FAILED.to_string()));
                false
            }
        }
    }

    // deletes after the user confirms; declining leaves everything untouched
    pub(crate) async fn delete_book(&self, id: &str, confirmation: &dyn Confirmation) -> bool {
        if !confirmation.confirm(DELETE_PROMPT) {
            debug!("delete of {} declined", id);
            return false;
        }
        match self.remove_cmd.execute(RemoveBookCommandRequest::new(id)).await {
            Ok(_) => {
                info!("deleted book {}", id);
                self.load_books().await;
                true
            }
            Err(err) => {
                error!("{}: {}", DELETE_FAILED, err);
                self.with_state(|state| state.error = Some(DELETE_FAILED.to_string()));
                false
            }
        }
    }
}
