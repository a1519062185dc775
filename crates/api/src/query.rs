//! Shared query parameter types for API handlers.

use serde::{Deserialize, Deserializer};

/// Query parameters for read endpoints that can opt into soft-deleted rows.
///
/// Any value other than a recognised truthy flag reads as `false`, so a
/// stray value never turns a read into an error.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeDeletedParams {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub include_deleted: bool,
}

/// Parse `1/true/yes/on` and `0/false/no/off`, case-insensitively.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_bool(&raw).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use super::*;

    fn parse(uri: &str) -> IncludeDeletedParams {
        let uri: Uri = uri.parse().unwrap();
        Query::<IncludeDeletedParams>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn missing_flag_is_false() {
        assert!(!parse("/movies").include_deleted);
    }

    #[test]
    fn truthy_spellings_are_accepted() {
        for value in ["true", "1", "yes", "ON"] {
            assert!(parse(&format!("/movies?include_deleted={value}")).include_deleted);
        }
    }

    #[test]
    fn unknown_values_read_as_false() {
        assert!(!parse("/movies?include_deleted=maybe").include_deleted);
        assert!(!parse("/movies?include_deleted=").include_deleted);
    }
}
