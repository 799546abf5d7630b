use super::error::ConfigError;

/// Resolves `${VAR_NAME}` references in a string from environment variables.
/// Returns `ConfigError::UndefinedVariable` if a referenced variable is not set.
pub fn resolve_variables(input: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' || chars.peek() != Some(&'{') {
            result.push(ch);
            continue;
        }
        chars.next(); // consume '{'
        let mut var_name = String::new();
        let mut found_close = false;
        for c in chars.by_ref() {
            if c == '}' {
                found_close = true;
                break;
            }
            var_name.push(c);
        }
        if !found_close || var_name.is_empty() {
            // Malformed interpolation -- keep it literally
            result.push_str("${");
            result.push_str(&var_name);
            if found_close {
                result.push('}');
            }
            continue;
        }
        let value = std::env::var(&var_name)
            .map_err(|_| ConfigError::UndefinedVariable { name: var_name })?;
        result.push_str(&value);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_without_variables_unchanged() {
        assert_eq!(resolve_variables("plain/path.txt").unwrap(), "plain/path.txt");
        assert_eq!(resolve_variables("$5 off").unwrap(), "$5 off");
    }

    #[test]
    fn malformed_references_kept_literally() {
        assert_eq!(resolve_variables("${}").unwrap(), "${}");
        assert_eq!(resolve_variables("${OPEN").unwrap(), "${OPEN");
    }

    #[test]
    fn undefined_variable_reported_by_name() {
        let err = resolve_variables("${WORDSCREEN_TEST_SURELY_UNSET}/x").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UndefinedVariable { ref name } if name == "WORDSCREEN_TEST_SURELY_UNSET"
        ));
    }

    #[test]
    fn defined_variable_substituted() {
        // PATH is set in any environment the tests run in.
        let path = std::env::var("PATH").unwrap();
        assert_eq!(resolve_variables("${PATH}:extra").unwrap(), format!("{path}:extra"));
    }
}
