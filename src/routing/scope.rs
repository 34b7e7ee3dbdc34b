/// Prefix for files served by the asset service; never intercepted
pub const INTERNAL_ASSET_PREFIX: &str = "/_assets";

/// Decides which requests the access-control middleware looks at.
///
/// Static files (any path containing a `.`) and the internal asset prefix are
/// skipped. The root path and API/RPC prefixes are always intercepted, dotted
/// or not.
#[derive(Debug, Clone)]
pub struct InterceptScope {
    internal_prefix: String,
    always: Vec<String>,
}

impl InterceptScope {
    pub fn new(internal_prefix: impl Into<String>, always: Vec<String>) -> Self {
        Self {
            internal_prefix: internal_prefix.into(),
            always,
        }
    }

    pub fn intercepts(&self, path: &str) -> bool {
        if path == "/" || self.always.iter().any(|prefix| path.starts_with(prefix.as_str())) {
            return true;
        }

        !path.contains('.') && !path.starts_with(self.internal_prefix.as_str())
    }
}

impl Default for InterceptScope {
    fn default() -> Self {
        Self::new(
            INTERNAL_ASSET_PREFIX,
            vec!["/api".to_string(), "/trpc".to_string()],
        )
    }
}
