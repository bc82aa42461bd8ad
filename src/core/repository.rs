use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    // REST backend reached over HTTP
    Http,
    // process-local store with the backend's semantics, for offline runs
    InMemory,
}

impl RepositoryStore {
    pub fn parse(s: &str) -> Option<RepositoryStore> {
        match s.trim().to_lowercase().as_str() {
            "http" => Some(RepositoryStore::Http),
            "memory" | "in-memory" | "inmemory" => Some(RepositoryStore::InMemory),
            _ => None,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::Http => write!(f, "http"),
            RepositoryStore::InMemory => write!(f, "memory"),
        }
    }
}
