//! Version details baked in by `build.rs`.

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short git commit hash, or `unknown` outside a checkout.
pub const BUILD_HASH: &str = env!("BUILD_HASH");

const BUILD_DIRTY: &str = env!("BUILD_DIRTY");

/// Whether the binary was built from uncommitted changes.
#[must_use]
pub fn is_dirty() -> bool {
    BUILD_DIRTY == "true"
}

fn hash_suffix() -> &'static str {
    if is_dirty() { "*" } else { "" }
}

/// Version with commit, e.g. `0.1.0 (abc1234)` or `0.1.0 (abc1234*)`.
/// Logged at startup.
#[must_use]
pub fn version_string() -> String {
    format!("{VERSION} ({BUILD_HASH}{})", hash_suffix())
}

/// Compact form for the dashboard footer, e.g. `build abc1234`.
#[must_use]
pub fn short_version() -> String {
    format!("build {BUILD_HASH}{}", hash_suffix())
}
