//! Re-exports of the crates that appear in this crate's public API, so that
//! dependants (such as the console) build against the same versions.

pub use {
    anyhow,
    arcstr,
    indexmap,
    log,
    pretty_env_logger,
    serde,
    serde_json,
};
