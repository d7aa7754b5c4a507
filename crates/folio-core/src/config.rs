//! Index generator configuration.
//!
//! Settings come from two levels: the site-wide table and the
//! `[index_generator]` table. A value set on the generator wins over the
//! site-wide one, which wins over the built-in default. [`Config::index_settings`]
//! flattens both levels into an immutable [`IndexSettings`] value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    order::OrderBy,
};

/// Site-wide configuration as read from `folio.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path prefix for non-first pages of every paginated listing.
    #[serde(default)]
    pub pagination_dir: Option<String>,

    /// Index generator settings.
    #[serde(default)]
    pub index_generator: IndexGeneratorConfig,
}

/// Generator-local overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexGeneratorConfig {
    /// Posts per page; 0 disables pagination.
    #[serde(default)]
    pub per_page: Option<i64>,

    /// Sort key such as `-date`.
    #[serde(default)]
    pub order_by: Option<String>,

    /// Overrides the site-wide `pagination_dir`.
    #[serde(default)]
    pub pagination_dir: Option<String>,

    /// Layouts tried by the renderer, in order.
    #[serde(default)]
    pub layout: Option<Vec<String>>,
}

/// Fully resolved settings for one pagination run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSettings {
    pub per_page: usize,
    pub order_by: OrderBy,
    pub pagination_dir: String,
    pub layout: Vec<String>,
}

// Default value functions
fn default_per_page() -> usize {
    10
}

fn default_pagination_dir() -> String {
    "page".to_string()
}

fn default_layout() -> Vec<String> {
    vec!["index".to_string(), "archive".to_string()]
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            order_by: OrderBy::default(),
            pagination_dir: default_pagination_dir(),
            layout: default_layout(),
        }
    }
}

impl IndexSettings {
    /// Set the page size.
    #[must_use]
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the sort key.
    #[must_use]
    pub fn with_order_by(mut self, order_by: &str) -> Self {
        self.order_by = OrderBy::parse(order_by);
        self
    }

    /// Set the pagination directory.
    #[must_use]
    pub fn with_pagination_dir(mut self, dir: impl Into<String>) -> Self {
        self.pagination_dir = dir.into();
        self
    }

    /// Set the layout list.
    #[must_use]
    pub fn with_layout<I, S>(mut self, layout: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout = layout.into_iter().map(Into::into).collect();
        self
    }
}

/// First present value of `local`, then `global`, then `default`.
pub fn resolve<T>(local: Option<T>, global: Option<T>, default: T) -> T {
    local.or(global).unwrap_or(default)
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}

/// Clamp a configured page size into range. Negative sizes disable pagination.
fn clamp_per_page(raw: i64) -> usize {
    if raw < 0 {
        tracing::warn!(per_page = raw, "negative per_page, pagination disabled");
        return 0;
    }
    usize::try_from(raw).unwrap_or(usize::MAX)
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `FOLIO__*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self
            .index_generator
            .layout
            .as_ref()
            .is_some_and(|layout| layout.is_empty())
        {
            tracing::warn!("index_generator.layout is empty, renderer gets no layout to try");
        }

        let dirs = [
            self.pagination_dir.as_deref(),
            self.index_generator.pagination_dir.as_deref(),
        ];
        for dir in dirs.into_iter().flatten() {
            if dir.starts_with('/') || dir.ends_with('/') {
                tracing::warn!(dir, "pagination_dir should not start or end with a slash");
            }
        }

        Ok(())
    }

    /// Resolve the settings for the index generator.
    pub fn index_settings(&self) -> IndexSettings {
        let local = &self.index_generator;

        IndexSettings {
            per_page: local
                .per_page
                .map(clamp_per_page)
                .unwrap_or_else(default_per_page),
            order_by: non_empty(local.order_by.as_ref())
                .map(|spec| OrderBy::parse(&spec))
                .unwrap_or_default(),
            pagination_dir: resolve(
                non_empty(local.pagination_dir.as_ref()),
                non_empty(self.pagination_dir.as_ref()),
                default_pagination_dir(),
            ),
            layout: local.layout.clone().unwrap_or_else(default_layout),
        }
    }
}
