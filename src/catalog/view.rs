use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::dto::{Book, BookFormData, FormField};
use crate::catalog::domain::CatalogState;
use crate::core::domain::{DEFAULT_DESCRIPTION_PREVIEW, Identifiable};
use crate::utils::text::{pluralize, truncate};

pub const HEADING: &str = "Book Library";
pub const LOADING_TEXT: &str = "Loading books...";
pub const NO_MATCHES_TEXT: &str = "No books found matching your search";
pub const EMPTY_LIBRARY_TEXT: &str = "No books in the library yet";
pub const EMPTY_LIBRARY_HINT: &str = "Add your first book to get started!";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub description_preview: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { description_preview: DEFAULT_DESCRIPTION_PREVIEW }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub byline: String,
    pub description: Option<String>,
    pub year: Option<String>,
    pub isbn: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogBody {
    Loading {
        text: String,
    },
    Empty {
        message: String,
        hint: Option<String>,
    },
    Books {
        summary: String,
        cards: Vec<BookCard>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub heading: String,
    pub search_query: String,
    pub add_form: Option<BookFormData>,
    pub error_banner: Option<String>,
    pub body: CatalogBody,
}

impl CatalogView {
    pub fn cards(&self) -> &[BookCard] {
        match &self.body {
            CatalogBody::Books { cards, .. } => cards.as_slice(),
            _ => &[],
        }
    }
}

pub fn render_card(book: &Book, options: &RenderOptions) -> BookCard {
    BookCard {
        id: book.id(),
        title: book.title.to_string(),
        byline: format!("by {}", book.author),
        description: Some(book.description.as_str())
            .filter(|d| !d.trim().is_empty())
            .map(|d| truncate(d, options.description_preview)),
        year: book.publication_year.map(|y| format!("Year: {}", y)),
        isbn: book.isbn.as_deref()
            .filter(|isbn| !isbn.trim().is_empty())
            .map(|isbn| format!("ISBN: {}", isbn)),
    }
}

// render is a pure function of the catalog state
pub fn render(state: &CatalogState, options: &RenderOptions) -> CatalogView {
    let body = if state.loading {
        CatalogBody::Loading { text: LOADING_TEXT.to_string() }
    } else if state.books.is_empty() {
        if state.search_query.is_empty() {
            CatalogBody::Empty {
                message: EMPTY_LIBRARY_TEXT.to_string(),
                hint: Some(EMPTY_LIBRARY_HINT.to_string()),
            }
        } else {
            CatalogBody::Empty { message: NO_MATCHES_TEXT.to_string(), hint: None }
        }
    } else {
        CatalogBody::Books {
            summary: format!("Found {}", pluralize(state.books.len(), "book", "books")),
            cards: state.books.iter().map(|b| render_card(b, options)).collect(),
        }
    };
    CatalogView {
        heading: HEADING.to_string(),
        search_query: state.search_query.to_string(),
        add_form: if state.show_add_form { Some(state.add_form.clone()) } else { None },
        error_banner: state.error.clone(),
        body,
    }
}

impl Display for BookCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}", self.title)?;
        writeln!(f, "  {}", self.byline)?;
        if let Some(description) = &self.description {
            writeln!(f, "  {}", description)?;
        }
        let details: Vec<&str> = [self.year.as_deref(), self.isbn.as_deref()]
            .into_iter().flatten().collect();
        if !details.is_empty() {
            writeln!(f, "  {}", details.join("    "))?;
        }
        writeln!(f, "  [delete {}]", self.id)
    }
}

impl Display for CatalogView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.heading)?;
        writeln!(f, "Search: {}", self.search_query)?;
        if let Some(form) = &self.add_form {
            writeln!(f, "-- Add New Book --")?;
            for field in FormField::ALL {
                writeln!(f, "  {:<12} {}", field.to_string(), form.get(field))?;
            }
        }
        if let Some(error) = &self.error_banner {
            writeln!(f, "!! {}", error)?;
        }
        match &self.body {
            CatalogBody::Loading { text } => writeln!(f, "{}", text),
            CatalogBody::Empty { message, hint } => {
                writeln!(f, "{}", message)?;
                if let Some(hint) = hint {
                    writeln!(f, "{}", hint)?;
                }
                Ok(())
            }
            CatalogBody::Books { summary, cards } => {
                writeln!(f, "{}", summary)?;
                for card in cards {
                    writeln!(f)?;
                    write!(f, "{}", card)?;
                }
                Ok(())
            }
        }
    }
}
