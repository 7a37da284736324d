//! Application state container
//!
//! This module defines the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::db::{Catalog, UserStore};
use crate::services::{AccountService, BookService};

/// Shared application state
///
/// Owns the catalog and user store for the lifetime of the service.
/// Cheaply cloneable; every clone sees the same stores.
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Catalog lookups
    pub books: BookService,

    /// User registration
    pub accounts: AccountService,

    /// Application start time (for uptime calculation)
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    ///
    /// Loads the catalog from `settings.catalog_path` when set, otherwise
    /// uses the built-in seed.
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let catalog = match &settings.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading catalog from file");
                Catalog::load(path)
                    .with_context(|| format!("Failed to load catalog from {}", path.display()))?
            }
            None => {
                tracing::debug!("Using built-in seed catalog");
                Catalog::seed()
            }
        };

        let state = Self::with_catalog(settings, catalog);

        tracing::info!(
            books = state.books.count(),
            "Application state initialized successfully"
        );

        Ok(state)
    }

    /// Create state around an explicit catalog and an empty user store
    pub fn with_catalog(settings: Settings, catalog: Catalog) -> Self {
        Self {
            settings: Arc::new(settings),
            books: BookService::new(Arc::new(catalog)),
            accounts: AccountService::new(Arc::new(UserStore::new())),
            start_time: Instant::now(),
        }
    }

    /// Get the application uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
