//! Environment variable helpers and `${VAR}` reference expansion.
//!
//! Expansion supports `${NAME}` and `${NAME|default}` forms, with whitespace
//! tolerated around the name and default. An unset variable with a default
//! expands to the default; an unset variable without one leaves the
//! placeholder verbatim.

use regex::Regex;

/// Read an environment variable, treating non-Unicode values as absent.
pub fn get(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read an environment variable, falling back to a default.
pub fn get_or(key: &str, default: &str) -> String {
    get(key).unwrap_or_else(|| default.to_string())
}

/// Interpret an environment variable as a boolean.
/// `1`, `true`, `on`, and `yes` (case-insensitive) are true; anything else,
/// including an unset variable, is false.
pub fn get_bool(key: &str) -> bool {
    match get(key) {
        Some(value) => matches!(
            value.to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        ),
        None => false,
    }
}

/// Expand `${NAME}` / `${NAME|default}` references against the process
/// environment.
pub fn parse_env_value(input: &str) -> String {
    with_lookup(input, get)
}

/// Expand `${NAME}` / `${NAME|default}` references against a caller-supplied
/// lookup. Keeps the expander testable without touching the real environment.
pub fn with_lookup<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !input.contains("${") {
        return input.to_string();
    }

    let Ok(re) = Regex::new(r"\$\{([^|}]+)(?:\|([^}]*))?\}") else {
        return input.to_string();
    };

    re.replace_all(input, |caps: &regex::Captures| {
        let name = caps[1].trim();
        match lookup(name) {
            Some(value) => value,
            None => match caps.get(2) {
                Some(default) => default.as_str().trim().to_string(),
                // no default: keep the placeholder verbatim
                None => caps[0].to_string(),
            },
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn expands_simple_reference() {
        let vars = [("HOME", "/home/dev")];
        assert_eq!(with_lookup("cd ${HOME}", lookup(&vars)), "cd /home/dev");
    }

    #[test]
    fn expands_multiple_references() {
        let vars = [("A", "1"), ("B", "2")];
        assert_eq!(with_lookup("${A}-${B}", lookup(&vars)), "1-2");
    }

    #[test]
    fn unset_with_default_uses_default() {
        assert_eq!(
            with_lookup("port=${PORT|8080}", lookup(&[])),
            "port=8080"
        );
    }

    #[test]
    fn set_variable_wins_over_default() {
        let vars = [("PORT", "9000")];
        assert_eq!(
            with_lookup("port=${PORT|8080}", lookup(&vars)),
            "port=9000"
        );
    }

    #[test]
    fn unset_without_default_left_verbatim() {
        assert_eq!(
            with_lookup("echo ${MISSING}", lookup(&[])),
            "echo ${MISSING}"
        );
    }

    #[test]
    fn whitespace_around_name_and_default_tolerated() {
        let vars = [("NAME", "x")];
        assert_eq!(with_lookup("${ NAME }", lookup(&vars)), "x");
        assert_eq!(with_lookup("${ GONE | fallback }", lookup(&[])), "fallback");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(with_lookup("no refs here", lookup(&[])), "no refs here");
    }

    #[test]
    fn get_or_falls_back() {
        assert_eq!(get_or("UTILKIT_ENV_TEST_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn get_bool_accepts_truthy_spellings() {
        for value in ["1", "true", "TRUE", "on", "Yes"] {
            std::env::set_var("UTILKIT_ENV_TEST_BOOL", value);
            assert!(get_bool("UTILKIT_ENV_TEST_BOOL"), "value: {}", value);
        }
        std::env::set_var("UTILKIT_ENV_TEST_BOOL", "0");
        assert!(!get_bool("UTILKIT_ENV_TEST_BOOL"));
        assert!(!get_bool("UTILKIT_ENV_TEST_BOOL_UNSET"));
    }
}
