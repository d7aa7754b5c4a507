//! Content items and their sortable fields.

use std::{cmp::Ordering, collections::HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content record that can be listed on index pages.
///
/// The paginator only reads items: it asks whether an item is hidden and
/// looks up sortable values by field name.
pub trait Item {
    /// Whether this item is excluded from listings.
    fn is_hidden(&self) -> bool;

    /// Look up a sortable value by field name.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Pin weight; larger values are listed first.
    fn sticky(&self) -> i64 {
        self.field("sticky")
            .and_then(|v| v.as_i64())
            .unwrap_or_default()
    }
}

impl<T: Item + ?Sized> Item for &T {
    fn is_hidden(&self) -> bool {
        (**self).is_hidden()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        (**self).field(name)
    }

    fn sticky(&self) -> i64 {
        (**self).sticky()
    }
}

/// A sortable scalar value.
///
/// Integers and floats compare numerically with each other. Values of
/// different kinds order as bool < number < date < text.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Date(DateTime<Utc>),
    Text(String),
}

impl FieldValue {
    /// Convert a front-matter value. Sequences, mappings and nulls have no
    /// sortable value.
    pub fn from_yaml(value: &serde_yaml::Value) -> Option<Self> {
        match value {
            serde_yaml::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_yaml::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float)),
            serde_yaml::Value::String(s) => Some(Self::Text(s.clone())),
            serde_yaml::Value::Tagged(tagged) => Self::from_yaml(&tagged.value),
            _ => None,
        }
    }

    /// Integer view of a numeric value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) if f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) | Self::Float(_) => 1,
            Self::Date(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue {}

/// A post as handed over by the content store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Source path relative to the content directory.
    #[serde(default)]
    pub source: String,

    /// URL slug.
    #[serde(default)]
    pub slug: String,

    /// Post title.
    #[serde(default)]
    pub title: String,

    /// Publication date.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// Last updated date.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// Hidden posts are published but never listed.
    #[serde(default)]
    pub hidden: bool,

    /// Pin weight for index listings.
    #[serde(default)]
    pub sticky: i64,

    /// Remaining front-matter keys.
    #[serde(default, flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a post with the given source path and slug.
    pub fn new(source: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }

    /// Set the publication date.
    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Mark the post as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Set an extra front-matter value.
    #[must_use]
    pub fn with_extra(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_yaml::Value>,
    ) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl Item for Post {
    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "source" => Some(FieldValue::Text(self.source.clone())),
            "slug" => Some(FieldValue::Text(self.slug.clone())),
            "title" => Some(FieldValue::Text(self.title.clone())),
            "date" => self.date.map(FieldValue::Date),
            "updated" => self.updated.map(FieldValue::Date),
            "hidden" => Some(FieldValue::Bool(self.hidden)),
            "sticky" => Some(FieldValue::Int(self.sticky)),
            _ => self.extra.get(name).and_then(FieldValue::from_yaml),
        }
    }

    fn sticky(&self) -> i64 {
        self.sticky
    }
}
