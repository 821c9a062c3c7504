//! Path expressions over nested listing records.

use serde_json::Value;

/// Extract the first value reachable at `path` within `document`.
///
/// Paths use dot notation with an optional `$.` root prefix
/// (`$.address.street`). Numeric segments index into arrays. Returns
/// `None` when any segment has no match; absence is not an error.
pub fn extract<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path
        .strip_prefix("$.")
        .or_else(|| path.strip_prefix('$'))
        .unwrap_or(path);

    if path.is_empty() {
        return Some(document);
    }

    let mut current = document;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_top_level_field() {
        let document = json!({"mls_name": "Example MLS"});
        assert_eq!(
            extract(&document, "$.mls_name"),
            Some(&json!("Example MLS"))
        );
    }

    #[test]
    fn extracts_nested_field() {
        let document = json!({"address": {"street": "123 Main St"}});
        assert_eq!(
            extract(&document, "$.address.street"),
            Some(&json!("123 Main St"))
        );
    }

    #[test]
    fn accepts_paths_without_root_prefix() {
        let document = json!({"price": {"listPrice": 550000}});
        assert_eq!(extract(&document, "price.listPrice"), Some(&json!(550000)));
    }

    #[test]
    fn indexes_into_arrays_with_numeric_segments() {
        let document = json!({"photos": [{"url": "a.jpg"}, {"url": "b.jpg"}]});
        assert_eq!(extract(&document, "$.photos.1.url"), Some(&json!("b.jpg")));
    }

    #[test]
    fn missing_segment_is_absent_not_an_error() {
        let document = json!({"address": {"street": "123 Main St"}});
        assert_eq!(extract(&document, "$.address.zipCode"), None);
        assert_eq!(extract(&document, "$.listing.date"), None);
    }

    #[test]
    fn traversal_through_scalar_is_absent() {
        let document = json!({"city": "Beverly Hills"});
        assert_eq!(extract(&document, "$.city.name"), None);
    }

    #[test]
    fn bare_root_returns_whole_document() {
        let document = json!({"a": 1});
        assert_eq!(extract(&document, "$"), Some(&document));
    }
}
