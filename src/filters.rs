use log::warn;
use minijinja::Environment;
use regex::Regex;

// Re-export all the case conversion and string manipulation functions
pub use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        table::to_table_case, train::to_train_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
    suffix::foreign_key::to_foreign_key,
};

/// Custom regex filter for template processing.
///
/// Tests if a string matches a given regular expression pattern.
///
/// # Arguments
/// * `val` - The string to test
/// * `re` - The regular expression pattern
///
/// # Returns
/// * `bool` - True if the string matches the pattern, false otherwise
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}

/// Registers the full filter pack on a template environment. Every master
/// environment gets these, so layouts and the content grafted onto them can
/// rely on the same filter set.
pub fn apply(env: &mut Environment<'_>) {
    env.add_filter("camel_case", to_camel_case);
    env.add_filter("kebab_case", to_kebab_case);
    env.add_filter("pascal_case", to_pascal_case);
    env.add_filter("screaming_snake_case", to_screaming_snake_case);
    env.add_filter("snake_case", to_snake_case);
    env.add_filter("table_case", to_table_case);
    env.add_filter("train_case", to_train_case);
    env.add_filter("plural", to_plural);
    env.add_filter("singular", to_singular);
    env.add_filter("foreign_key", to_foreign_key);
    env.add_filter("regex", regex_filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_filter_matches() {
        assert!(regex_filter("hello123", r"hello\d+"));
    }

    #[test]
    fn test_regex_filter_no_match() {
        assert!(!regex_filter("hello", r"\d+"));
    }

    #[test]
    fn test_regex_filter_invalid_regex() {
        assert!(!regex_filter("anything", r"([unclosed"));
    }

    #[test]
    fn test_filters_available_in_environment() {
        let mut env = Environment::new();
        apply(&mut env);
        env.add_template("t", "{{ 'hello world' | pascal_case }}").unwrap();
        let rendered = env.get_template("t").unwrap().render(()).unwrap();
        assert_eq!(rendered, "HelloWorld");
    }
}
