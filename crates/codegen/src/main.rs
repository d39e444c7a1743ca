//! ucdb-codegen: regenerate the property value tables of `ucdb-core`
//!
//! ```text
//! ucdb-codegen [MIRROR_ROOT] [OUTPUT]
//! ```
//!
//! `MIRROR_ROOT` defaults to the per-user cache directory, `OUTPUT` to
//! `crates/core/src/property/generated.rs`. Run from the workspace root.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Log level (default: info)

use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};
use ucdb_codegen::{generate, GENERATED_PATH};
use ucdb_mirror::{default_root, HttpTransport, Mirror, MirrorConfig};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut args = env::args_os().skip(1);
    let root = args.next().map(PathBuf::from).unwrap_or_else(default_root);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(GENERATED_PATH));

    let result = Mirror::setup(MirrorConfig::new(root), Arc::new(HttpTransport::new()))
        .and_then(|mut mirror| generate(&mut mirror, &output));
    if let Err(e) = result {
        eprintln!("ucdb-codegen: {e}");
        process::exit(1);
    }
}
