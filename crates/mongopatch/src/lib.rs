// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thin convenience layer over the MongoDB driver.
//!
//! [`Mongo`] bundles three things an application keeps reaching for:
//!
//! - a memoized client (`connect` / `close`),
//! - duplicate key detection on driver errors (`is_duplicate_key_error`),
//! - patch flattening and diffing (`flatten`, `diff`, ...), used to turn a
//!   nested partial update into a `$set` document and to report which
//!   fields it actually changes.
//!
//! ```no_run
//! use bson::doc;
//! use mongopatch::Mongo;
//!
//! # async fn run() -> Result<(), mongopatch::MongoPatchError> {
//! let mongo = Mongo::from_uri("mongodb://localhost:27017");
//! let client = mongo.connect().await?;
//!
//! let current = doc! { "cycle": { "length": 28 }, "name": "a" };
//! let patch = doc! { "cycle": { "length": 25 } };
//! for change in mongo.diff(&current, &patch) {
//!     println!("{}: {:?} -> {}", change.field, change.from, change.to);
//! }
//! let update = mongo.flatten(&patch).to_set_update();
//! # let _ = (client, update);
//!
//! mongo.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod telemetry;

use std::error::Error;

use bson::{Bson, Document};

pub use mongopatch_config::{LoggingConfig, MongoConfig, MongoPatchConfig};
pub use mongopatch_core::{
    DocumentStore, DriverError, ErrorCode, HealthStatus, KnownErrors, MongoPatchError,
    PluginAdapter, codes,
};
pub use mongopatch_patch::{Change, FlattenedPatch, ValueShape};
pub use mongodb::Client;
pub use mongopatch_store::MongoStore;
pub use telemetry::init_tracing;

/// Entry point bundling a document store with the patch and error helpers.
///
/// Construct one per application and pass it by reference; the store it
/// owns holds the only client.
pub struct Mongo<S = MongoStore> {
    store: S,
}

impl Mongo<MongoStore> {
    /// A facade over a [`MongoStore`] bound to `config`.
    pub fn new(config: MongoConfig) -> Self {
        Self::with_store(MongoStore::new(config))
    }

    /// A facade over a [`MongoStore`] with default options bound to `connection_uri`.
    pub fn from_uri(connection_uri: impl Into<String>) -> Self {
        Self::new(MongoConfig::with_uri(connection_uri))
    }

    /// A facade built from the `[mongo]` section of a loaded configuration.
    pub fn from_config(config: &MongoPatchConfig) -> Self {
        Self::new(config.mongo.clone())
    }
}

impl<S: DocumentStore> Mongo<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The memoized connection handle, connected and ready to use.
    pub async fn connect(&self) -> Result<S::Handle, MongoPatchError> {
        self.store.connect().await
    }

    /// Release the connection handle. A no-op when none is open.
    pub async fn close(&self) -> Result<(), MongoPatchError> {
        self.store.close().await
    }

    /// The well-known server error codes.
    pub fn errors(&self) -> KnownErrors {
        KnownErrors::default()
    }

    /// Whether `error` is a driver error carrying `code` (numeric or textual).
    pub fn is_error(&self, error: &(dyn Error + 'static), code: impl Into<ErrorCode>) -> bool {
        mongopatch_store::is_error(error, code)
    }

    /// Whether `error` is a driver error reporting a unique index violation.
    pub fn is_duplicate_key_error(&self, error: &(dyn Error + 'static)) -> bool {
        mongopatch_store::is_duplicate_key_error(error)
    }

    /// Rewrite `patch` into dotted key paths.
    pub fn flatten(&self, patch: &Document) -> FlattenedPatch {
        mongopatch_patch::flatten(patch)
    }

    /// The value at dotted `path` in `doc`, or `None` when absent.
    pub fn resolve_path<'a>(&self, doc: &'a Document, path: &str) -> Option<&'a Bson> {
        mongopatch_patch::resolve_path(doc, path)
    }

    /// Whether `patch` changes the field at dotted path `field` of `doc`.
    pub fn field_is_changing(&self, doc: &Document, field: &str, patch: &Document) -> bool {
        mongopatch_patch::field_is_changing(doc, field, patch)
    }

    /// The field-level changes `patch` makes to `doc`.
    pub fn diff(&self, doc: &Document, patch: &Document) -> Vec<Change> {
        mongopatch_patch::diff(doc, patch)
    }
}
