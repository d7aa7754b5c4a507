//! Folio Generator Library
//!
//! Index pagination for Folio.
//!
//! # Modules
//!
//! - [`paginator`] - Splits visible posts into index pages
//! - [`page`] - Page descriptors handed to the renderer

pub mod page;
pub mod paginator;

pub use page::{Page, PageData};
pub use paginator::{IndexGenerator, paginate};
