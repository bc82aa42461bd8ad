use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Book is the server-owned catalog record; timestamps are opaque to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(with = "crate::utils::json::string_or_number")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default, with = "crate::utils::json::null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default, with = "crate::utils::json::null_as_empty")]
    pub created_at: String,
    #[serde(default, with = "crate::utils::json::null_as_empty")]
    pub updated_at: String,
}

impl Identifiable for Book {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

// BookFormData stages a not-yet-created book as raw text inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookFormData {
    pub title: String,
    pub author: String,
    pub description: String,
    pub publication_year: String,
    pub isbn: String,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FormField {
    Title,
    Author,
    Description,
    PublicationYear,
    Isbn,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Author,
        FormField::Description,
        FormField::PublicationYear,
        FormField::Isbn,
    ];

    pub fn parse(s: &str) -> Option<FormField> {
        match s.trim().to_lowercase().as_str() {
            "title" => Some(FormField::Title),
            "author" => Some(FormField::Author),
            "description" => Some(FormField::Description),
            "year" | "publication_year" => Some(FormField::PublicationYear),
            "isbn" => Some(FormField::Isbn),
            _ => None,
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FormField::Title => write!(f, "title"),
            FormField::Author => write!(f, "author"),
            FormField::Description => write!(f, "description"),
            FormField::PublicationYear => write!(f, "year"),
            FormField::Isbn => write!(f, "isbn"),
        }
    }
}

impl BookFormData {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => self.title.as_str(),
            FormField::Author => self.author.as_str(),
            FormField::Description => self.description.as_str(),
            FormField::PublicationYear => self.publication_year.as_str(),
            FormField::Isbn => self.isbn.as_str(),
        }
    }

    pub fn set(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Description => &mut self.description,
            FormField::PublicationYear => &mut self.publication_year,
            FormField::Isbn => &mut self.isbn,
        };
        *slot = value.to_string();
    }
}

// NewBookRequest is the JSON body sent to create a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub isbn: Option<String>,
}

impl From<&BookFormData> for NewBookRequest {
    fn from(form: &BookFormData) -> Self {
        Self {
            title: form.title.to_string(),
            author: form.author.to_string(),
            description: form.description.to_string(),
            publication_year: parse_year(form.publication_year.as_str()),
            isbn: Some(form.isbn.to_string()),
        }
    }
}

// empty or unparseable year text means "no year", never zero
pub fn parse_year(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

// HealthStatus is returned by the backend health probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
}
