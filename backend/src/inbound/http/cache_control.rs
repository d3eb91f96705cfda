//! Cache policy for per-user responses.

/// Match lists and profiles are caller-specific and change on every edit.
pub const PRIVATE_NO_CACHE: &str = "private, no-cache, must-revalidate";

/// Header tuple for [`PRIVATE_NO_CACHE`].
pub const fn private_no_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", PRIVATE_NO_CACHE)
}
