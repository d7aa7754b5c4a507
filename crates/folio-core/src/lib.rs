//! Folio Core Library
//!
//! Content items, collection views, ordering keys, configuration, and error
//! handling shared by the Folio index generator.

pub mod collection;
pub mod config;
pub mod content;
pub mod error;
pub mod order;

pub use collection::Collection;
pub use crate::config::{Config, IndexGeneratorConfig, IndexSettings};
pub use content::{FieldValue, Item, Post};
pub use error::{CoreError, Result};
pub use order::{Direction, OrderBy};
