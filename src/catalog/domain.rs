use serde::Serialize;
use crate::books::dto::{Book, BookFormData};

pub const LOAD_FAILED: &str = "Failed to load books. Make sure the backend server is running.";
pub const SEARCH_FAILED: &str = "Failed to search books";
pub const ADD_FAILED: &str = "Failed to add book";
pub const DELETE_FAILED: &str = "Failed to delete book";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this book?";

// Confirmation gates destructive actions behind a blocking user prompt
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirmation for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

// CatalogState is everything the catalog view renders from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogState {
    // last successful list or search response, as returned
    pub books: Vec<Book>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_add_form: bool,
    pub search_query: String,
    pub add_form: BookFormData,
    // sequence number of the latest list/search dispatch
    #[serde(skip)]
    pub(crate) latest_request: u64,
}

impl CatalogState {
    // loading starts out true: nothing has been fetched before the first load
    pub fn new() -> Self {
        Self {
            books: vec![],
            loading: true,
            error: None,
            show_add_form: false,
            search_query: String::new(),
            add_form: BookFormData::default(),
            latest_request: 0,
        }
    }

    pub(crate) fn begin_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        self.latest_request
    }

    pub(crate) fn is_latest(&self, seq: u64) -> bool {
        self.latest_request == seq
    }

    pub(crate) fn open_add_form(&mut self) {
        self.show_add_form = true;
        self.add_form = BookFormData::default();
    }

    pub(crate) fn close_add_form(&mut self) {
        self.show_add_form = false;
        self.add_form = BookFormData::default();
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::new()
    }
}
