// User-input parsing shared by the CLI and the TUI.
//
// Every rejection here happens before any network traffic: a value that
// fails to parse never produces a request.

use crate::error::Error;

/// Trim a greet name. Returns `None` for empty or whitespace-only input,
/// which callers treat as "do not submit".
pub fn normalize_name(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Parse a fibonacci index: a non-negative integer.
pub fn parse_index(input: &str) -> Result<u32, Error> {
    let trimmed = input.trim();
    let n: i64 = trimmed.parse().map_err(|_| Error::InvalidInput {
        field: "n".into(),
        reason: format!("'{trimmed}' is not an integer"),
    })?;

    u32::try_from(n).map_err(|_| Error::InvalidInput {
        field: "n".into(),
        reason: format!("{n} is out of range (must be a non-negative integer)"),
    })
}

/// Parse a comma-separated list of numbers: split on commas, trim each
/// token, drop empty tokens, parse the rest as f64. Rejects on the first
/// bad token, and rejects an empty result.
pub fn parse_number_list(input: &str) -> Result<Vec<f64>, Error> {
    let mut values = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| Error::InvalidInput {
            field: "numbers".into(),
            reason: format!("'{token}' is not a number"),
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(Error::InvalidInput {
            field: "numbers".into(),
            reason: "expected at least one number".into(),
        });
    }

    Ok(values)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(normalize_name("  Ada  "), Some("Ada"));
    }

    #[test]
    fn empty_and_whitespace_names_are_rejected() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("   \t "), None);
    }

    #[test]
    fn index_parses_with_surrounding_whitespace() {
        assert_eq!(parse_index(" 10 ").unwrap(), 10);
        assert_eq!(parse_index("0").unwrap(), 0);
    }

    #[test]
    fn negative_index_is_rejected() {
        let err = parse_index("-3").unwrap_err();
        assert!(err.is_invalid_input(), "got {err:?}");
    }

    #[test]
    fn non_numeric_index_is_rejected() {
        assert!(parse_index("ten").unwrap_err().is_invalid_input());
        assert!(parse_index("").unwrap_err().is_invalid_input());
        assert!(parse_index("3.5").unwrap_err().is_invalid_input());
    }

    #[test]
    fn number_list_trims_and_drops_empty_tokens() {
        let values = parse_number_list("1, 2, 3, 4, 5, 5").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 5.0]);

        let values = parse_number_list("1,,2, ,3,").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn number_list_rejects_bad_token() {
        let err = parse_number_list("1,x,3").unwrap_err();
        assert!(err.is_invalid_input(), "got {err:?}");
        assert!(err.to_string().contains('x'));
    }

    #[test]
    fn number_list_rejects_empty_input() {
        assert!(parse_number_list("").unwrap_err().is_invalid_input());
        assert!(parse_number_list(" , , ").unwrap_err().is_invalid_input());
    }
}
