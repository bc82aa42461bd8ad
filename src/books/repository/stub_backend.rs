// In-process REST backend for tests, serving the book endpoints on an
// ephemeral port over the in-memory repository.
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get};
use axum::Router;
use serde_json::{json, Value};

use crate::books::dto::{Book, NewBookRequest};
use crate::books::repository::memory_book_repository::InMemoryBookRepository;
use crate::core::library::LibraryError;

#[derive(Debug, Default)]
struct Recorded {
    creates: Vec<Value>,
    searches: Vec<String>,
}

#[derive(Clone, Default)]
struct BackendState {
    repo: Arc<InMemoryBookRepository>,
    recorded: Arc<Mutex<Recorded>>,
}

pub(crate) struct StubBackend {
    base_url: String,
    state: BackendState,
}

type HandlerError = (StatusCode, Json<Value>);

fn to_handler_error(err: LibraryError) -> HandlerError {
    let status = err.status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"error": err.to_string()})))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "book-library-api"}))
}

async fn list_books(State(state): State<BackendState>) -> Json<Vec<Book>> {
    Json(state.repo.find(""))
}

async fn search_books(State(state): State<BackendState>,
                      Query(params): Query<HashMap<String, String>>) -> Json<Vec<Book>> {
    let query = params.get("q").cloned().unwrap_or_default();
    state.recorded.lock().expect("recorded lock").searches.push(query.clone());
    Json(state.repo.find(query.as_str()))
}

async fn add_book(State(state): State<BackendState>,
                  Json(body): Json<Value>) -> Result<(StatusCode, Json<Book>), HandlerError> {
    state.recorded.lock().expect("recorded lock").creates.push(body.clone());
    let req: NewBookRequest = serde_json::from_value(body)
        .map_err(|err| to_handler_error(LibraryError::validation(err.to_string().as_str())))?;
    let book = state.repo.insert(&req).map_err(to_handler_error)?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn delete_book(State(state): State<BackendState>,
                     Path(book_id): Path<String>) -> Result<Json<Value>, HandlerError> {
    state.repo.remove(book_id.as_str()).map_err(to_handler_error)?;
    Ok(Json(json!({"message": "Book deleted successfully"})))
}

async fn fail() -> HandlerError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "database unavailable"})))
}

impl StubBackend {
    pub(crate) async fn start() -> StubBackend {
        let state = BackendState::default();
        let app = Router::new()
            .route("/api/health", get(health))
            .route("/api/books", get(list_books).post(add_book))
            .route("/api/books/search", get(search_books))
            .route("/api/books/:id", delete(delete_book))
            .with_state(state.clone());
        Self::serve(app, state)
    }

    // every endpoint answers 500, as a backend that lost its database would
    pub(crate) async fn start_failing() -> StubBackend {
        let state = BackendState::default();
        let app = Router::new()
            .route("/api/health", get(fail))
            .route("/api/books", get(fail).post(fail))
            .route("/api/books/search", get(fail))
            .route("/api/books/:id", delete(fail));
        Self::serve(app, state)
    }

    fn serve(app: Router, state: BackendState) -> StubBackend {
        let listener = TcpListener::bind("127.0.0.1:0").expect("should bind stub backend");
        listener.set_nonblocking(true).expect("should set nonblocking");
        let addr = listener.local_addr().expect("should have local addr");
        let server = axum::Server::from_tcp(listener).expect("should build server")
            .serve(app.into_make_service());
        tokio::spawn(async move {
            let _ = server.await;
        });
        StubBackend {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    // a base url nothing listens on
    pub(crate) fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("should bind");
        let addr = listener.local_addr().expect("should have local addr");
        drop(listener);
        format!("http://{}/api", addr)
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub(crate) fn repository(&self) -> Arc<InMemoryBookRepository> {
        self.state.repo.clone()
    }

    pub(crate) fn create_requests(&self) -> Vec<Value> {
        self.state.recorded.lock().expect("recorded lock").creates.clone()
    }

    pub(crate) fn search_queries(&self) -> Vec<String> {
        self.state.recorded.lock().expect("recorded lock").searches.clone()
    }
}
