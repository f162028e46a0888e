//! Environment-driven settings helpers

/// Read an environment variable, treating an empty or whitespace-only value
/// as unset.
pub fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Return the first non-empty value among `names`, in order.
pub fn env_first(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env_non_empty(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_is_none() {
        assert_eq!(env_non_empty("STOCK_UTILS_TEST_SURELY_UNSET_VAR"), None);
    }

    #[test]
    fn test_env_first_skips_missing_names() {
        // PATH is set in any sane test environment
        let found = env_first(&["STOCK_UTILS_TEST_SURELY_UNSET_VAR", "PATH"]);
        assert_eq!(found, env_non_empty("PATH"));
    }

    #[test]
    fn test_env_first_with_no_names() {
        assert_eq!(env_first(&[]), None);
    }
}
