//! End-to-end tests: mirror, ingestion, lookups, queries and segmentation
//! through the public `ucdb` API, against an offline fixture mirror.

mod common;

mod lookups;
mod queries;
mod segmentation;
