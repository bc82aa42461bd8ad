use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

pub const DEFAULT_API_URL: &str = "/api";
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";
pub const DEFAULT_DESCRIPTION_PREVIEW: usize = 150;

// Identifiable defines common traits that can be shared by server-owned records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the library client
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub api_url: String,
    pub origin: String,
    pub store: RepositoryStore,
    pub log_level: String,
    pub log_json: bool,
    pub description_preview: usize,
}

impl Configuration {
    pub fn new(api_url: &str, store: RepositoryStore) -> Self {
        Configuration {
            api_url: api_url.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            store,
            log_level: "info".to_string(),
            log_json: false,
            description_preview: DEFAULT_DESCRIPTION_PREVIEW,
        }
    }

    // loads `.env` when present, then reads the process environment
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(DEFAULT_API_URL, RepositoryStore::Http);
        if let Some(api_url) = lookup("BOOK_LIBRARY_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_url = api_url.trim().to_string();
        }
        if let Some(origin) = lookup("BOOK_LIBRARY_ORIGIN").filter(|v| !v.trim().is_empty()) {
            config.origin = origin.trim().to_string();
        }
        if let Some(store) = lookup("BOOK_LIBRARY_STORE") {
            match RepositoryStore::parse(store.as_str()) {
                Some(store) => config.store = store,
                None => warn!("unknown BOOK_LIBRARY_STORE {:?}, using {}", store, config.store),
            }
        }
        if let Some(level) = lookup("BOOK_LIBRARY_LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            config.log_level = level.trim().to_lowercase();
        }
        if let Some(json) = lookup("BOOK_LIBRARY_LOG_JSON") {
            config.log_json = matches!(json.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(preview) = lookup("BOOK_LIBRARY_DESCRIPTION_PREVIEW") {
            match preview.trim().parse::<usize>() {
                Ok(chars) if chars > 0 => config.description_preview = chars,
                _ => warn!("invalid BOOK_LIBRARY_DESCRIPTION_PREVIEW {:?}, using {}",
                           preview, config.description_preview),
            }
        }
        config
    }

    // absolute base url without a trailing slash; a relative api url is
    // resolved against the origin
    pub fn base_url(&self) -> LibraryResult<String> {
        let resolved = match reqwest::Url::parse(self.api_url.as_str()) {
            Ok(url) => url,
            Err(_) => {
                let origin = reqwest::Url::parse(self.origin.as_str()).map_err(|err|
                    LibraryError::configuration(format!("invalid origin {:?} {:?}", self.origin, err).as_str()))?;
                origin.join(self.api_url.as_str()).map_err(|err|
                    LibraryError::configuration(format!("invalid api url {:?} {:?}", self.api_url, err).as_str()))?
            }
        };
        if resolved.cannot_be_a_base() || !matches!(resolved.scheme(), "http" | "https") {
            return Err(LibraryError::configuration(
                format!("api url must be http(s) {:?}", resolved.as_str()).as_str()));
        }
        Ok(resolved.as_str().trim_end_matches('/').to_string())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_API_URL, RepositoryStore::Http)
    }
}
