//! # Free-Text Search
//!
//! A query matches a record when, ignoring case, it occurs as a substring
//! of any configured text field. Records expose their text fields through
//! [`Searchable`]; each record kind names its fields with a small enum.

use serde::{Deserialize, Serialize};

use jobboard_core::{BlogPost, JobPosting};

use crate::criteria::Criteria;

/// A text field selector with a default search set.
pub trait SearchField: Copy + PartialEq + 'static {
    /// Fields searched when the caller does not choose.
    fn defaults() -> &'static [Self];
}

/// A record whose text fields can be searched.
pub trait Searchable {
    /// Field selector for this record kind.
    type Field: SearchField;

    /// Text of `field`. A missing field reads as the empty string.
    fn field_text(&self, field: Self::Field) -> &str;
}

/// Searchable text fields of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    /// `title`
    Title,
    /// `company`
    Company,
    /// `description`
    Description,
}

impl SearchField for JobField {
    fn defaults() -> &'static [Self] {
        &[Self::Title, Self::Company, Self::Description]
    }
}

impl Searchable for JobPosting {
    type Field = JobField;

    fn field_text(&self, field: JobField) -> &str {
        match field {
            JobField::Title => &self.title,
            JobField::Company => &self.company,
            JobField::Description => &self.description,
        }
    }
}

/// Searchable text fields of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostField {
    /// `title`
    Title,
    /// `excerpt`
    Excerpt,
    /// `category`
    Category,
    /// `content`
    Content,
}

impl SearchField for PostField {
    fn defaults() -> &'static [Self] {
        &[Self::Title, Self::Excerpt, Self::Category]
    }
}

impl Searchable for BlogPost {
    type Field = PostField;

    fn field_text(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Excerpt => &self.excerpt,
            PostField::Category => self.category.as_str(),
            PostField::Content => &self.content,
        }
    }
}

/// Case-insensitive substring search over a set of fields.
///
/// The query is used verbatim, surrounding whitespace included. Only the
/// empty query is inactive; a lone space still has to occur in some field.
/// Serialized as the bare query string, searching the default fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TextSearch<F: SearchField> {
    query: String,
    needle: String,
    fields: Vec<F>,
}

impl<F: SearchField> TextSearch<F> {
    /// Search `query` in the default fields.
    pub fn new(query: impl Into<String>) -> Self {
        Self::in_fields(query, F::defaults().iter().copied())
    }

    /// Search `query` in the given fields only.
    pub fn in_fields(query: impl Into<String>, fields: impl IntoIterator<Item = F>) -> Self {
        let query = query.into();
        let needle = query.to_lowercase();
        Self {
            query,
            needle,
            fields: fields.into_iter().collect(),
        }
    }

    /// The query as entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The fields searched.
    pub fn fields(&self) -> &[F] {
        &self.fields
    }
}

impl<F: SearchField> Default for TextSearch<F> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<F: SearchField> From<String> for TextSearch<F> {
    fn from(query: String) -> Self {
        Self::new(query)
    }
}

impl<F: SearchField> From<&str> for TextSearch<F> {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl<F: SearchField> From<TextSearch<F>> for String {
    fn from(search: TextSearch<F>) -> Self {
        search.query
    }
}

impl<T: Searchable> Criteria<T> for TextSearch<T::Field> {
    fn matches(&self, record: &T) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        self.fields
            .iter()
            .any(|f| record.field_text(*f).to_lowercase().contains(&self.needle))
    }

    fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }
}
