//! Property sources that queries materialize against

use std::sync::Arc;
use ucdb_core::{CodePointSet, Predicate, Result};
use ucdb_engine::Database;

/// Anything that can list the code points matching a predicate
///
/// Implemented for [`Database`], which prepares itself on first use.
pub trait PropertySource {
    /// All code points matching the predicate
    fn codepoints_of(&self, predicate: Predicate) -> Result<CodePointSet>;
}

impl PropertySource for Database {
    fn codepoints_of(&self, predicate: Predicate) -> Result<CodePointSet> {
        self.materialize(predicate)
    }
}

impl<S: PropertySource + ?Sized> PropertySource for Arc<S> {
    fn codepoints_of(&self, predicate: Predicate) -> Result<CodePointSet> {
        (**self).codepoints_of(predicate)
    }
}

impl<S: PropertySource + ?Sized> PropertySource for &S {
    fn codepoints_of(&self, predicate: Predicate) -> Result<CodePointSet> {
        (**self).codepoints_of(predicate)
    }
}
