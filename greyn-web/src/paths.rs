//! Deployment base path, taken from `PUBLIC_URL` at compile time
//! (e.g. `/eco` when the app is hosted under a subdirectory).

fn configured_base() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// Base path for the router, or `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(configured_base())
}

/// Prefix an app-absolute path such as `/cart` with the base path.
#[must_use]
pub fn public_href(path: &str) -> String {
    join_base(configured_base(), path)
}

fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

fn join_base(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    match normalize_base(base) {
        Some(base) => format!("{base}/{path}"),
        None => format!("/{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_deployments_have_no_base() {
        assert_eq!(router_base(), None);
        assert_eq!(public_href("/marketplace"), "/marketplace");
        assert_eq!(normalize_base(" / "), None);
    }

    #[test]
    fn subdirectory_deployments_prefix_links() {
        assert_eq!(normalize_base("/eco/"), Some("/eco".to_string()));
        assert_eq!(join_base("/eco/", "/corporate/emissions"), "/eco/corporate/emissions");
        assert_eq!(join_base("/eco", "cart"), "/eco/cart");
    }
}
