use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::books::dto::{Book, BookFormData, HealthStatus, NewBookRequest};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Clone)]
pub struct HttpBookRepository {
    client: Client,
    base_url: String,
}

impl HttpBookRepository {
    // base_url must be absolute; a trailing slash is ignored
    pub(crate) fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn build(base_url: &str) -> LibraryResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::new(client, base_url))
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/books/search?q={}", self.base_url, urlencoding::encode(query))
    }

    fn book_url(&self, id: &str) -> String {
        format!("{}/books/{}", self.base_url, urlencoding::encode(id))
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> LibraryResult<T> {
        debug!("GET {}", url);
        let res = self.client.get(url).send().await?;
        parse_json(ensure_success(res, "GET", url)?).await
    }
}

// any non-success status fails the call; the body is not inspected
fn ensure_success(res: Response, method: &str, url: &str) -> LibraryResult<Response> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        Err(LibraryError::request(
            format!("{} {} returned {}", method, url, status).as_str(), Some(status.as_u16())))
    }
}

async fn parse_json<T: DeserializeOwned>(res: Response) -> LibraryResult<T> {
    let status = res.status().as_u16();
    res.json::<T>().await.map_err(|err| LibraryError::request(
        format!("malformed response body {:?}", err).as_str(), Some(status)))
}

#[async_trait]
impl BookRepository for HttpBookRepository {
    async fn list_books(&self) -> LibraryResult<Vec<Book>> {
        self.fetch_json(self.books_url().as_str()).await
    }

    async fn search_books(&self, query: &str) -> LibraryResult<Vec<Book>> {
        self.fetch_json(self.search_url(query).as_str()).await
    }

    async fn create_book(&self, form: &BookFormData) -> LibraryResult<Book> {
        let url = self.books_url();
        debug!("POST {}", url);
        let res = self.client
            .post(url.as_str())
            .json(&NewBookRequest::from(form))
            .send()
            .await?;
        parse_json(ensure_success(res, "POST", url.as_str())?).await
    }

    async fn delete_book(&self, id: &str) -> LibraryResult<()> {
        let url = self.book_url(id);
        debug!("DELETE {}", url);
        let res = self.client.delete(url.as_str()).send().await?;
        ensure_success(res, "DELETE", url.as_str()).map(|_| ())
    }

    async fn health(&self) -> LibraryResult<HealthStatus> {
        self.fetch_json(self.health_url().as_str()).await
    }
}
