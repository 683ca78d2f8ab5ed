//! Query parameter merging and encoding.

use url::form_urlencoded;

/// Merge default query parameters with caller overrides.
///
/// Defaults keep their declaration order; an override for an existing key
/// replaces its value in place, and novel override keys are appended in
/// caller order. The result is deterministic so identical logical requests
/// produce identical endpoint strings (and share a cache key).
pub fn merge_params(
    defaults: &[(&str, &str)], overrides: &[(&str, &str)],
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .iter()
        .map(|(key, value)| {
            let value = overrides
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map_or(*value, |(_, v)| *v);
            ((*key).to_string(), value.to_string())
        })
        .collect();

    for (key, value) in overrides {
        if !defaults.iter().any(|(k, _)| k == key) {
            merged.push(((*key).to_string(), (*value).to_string()));
        }
    }

    merged
}

/// Encode parameters as an application/x-www-form-urlencoded query string.
pub fn encode(params: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new()).extend_pairs(params).finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults_only() {
        let merged = merge_params(&[("populate", "*")], &[]);
        assert_eq!(merged, vec![("populate".to_string(), "*".to_string())]);
    }

    #[test]
    fn test_merge_override_wins() {
        let merged = merge_params(&[("populate", "*"), ("sort", "publishedAt:desc")], &[("sort", "order:asc")]);
        assert_eq!(
            merged,
            vec![
                ("populate".to_string(), "*".to_string()),
                ("sort".to_string(), "order:asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_merge_appends_novel_keys() {
        let merged = merge_params(&[("populate", "*")], &[("filters[slug][$eq]", "hero")]);
        assert_eq!(merged[0].0, "populate");
        assert_eq!(merged[1], ("filters[slug][$eq]".to_string(), "hero".to_string()));
    }

    #[test]
    fn test_merge_is_deterministic() {
        let a = merge_params(&[("populate", "*")], &[("sort", "order:asc")]);
        let b = merge_params(&[("populate", "*")], &[("sort", "order:asc")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_basic() {
        let params =
            vec![("populate".to_string(), "*".to_string()), ("sort".to_string(), "publishedAt:desc".to_string())];
        let encoded = encode(&params);
        assert!(encoded.starts_with("populate="));
        assert!(encoded.contains('&'));
        assert!(encoded.contains("sort=publishedAt%3Adesc"));
    }

    #[test]
    fn test_encode_escapes_spaces() {
        let params = vec![("q".to_string(), "two words".to_string())];
        assert_eq!(encode(&params), "q=two+words");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }
}
