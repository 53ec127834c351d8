// Tag normalization
// One function serves both the create and update paths, whatever shape the
// client sends

use serde::Deserialize;
use utoipa::ToSchema;

/// Tags as clients may send them: either a comma-delimited string
/// ("a, b, c") or a sequence (["a", "b", "c"])
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Csv(String),
}

/// Normalize a tag list: trim each entry, collapse internal whitespace runs
/// to a single underscore, and drop entries that end up empty
///
/// Normalization is idempotent - a normalized list passes through unchanged.
pub fn normalize(input: Option<TagsInput>) -> Vec<String> {
    let raw: Vec<String> = match input {
        None => return Vec::new(),
        Some(TagsInput::List(tags)) => tags,
        Some(TagsInput::Csv(csv)) => csv.split(',').map(str::to_string).collect(),
    };

    raw.iter()
        .map(|tag| tag.split_whitespace().collect::<Vec<_>>().join("_"))
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn csv_input_is_split_and_trimmed() {
        let tags = normalize(Some(TagsInput::Csv("a, b,  c".to_string())));
        assert_eq!(tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn list_input_gets_the_same_treatment_as_csv() {
        let tags = normalize(Some(TagsInput::List(vec![
            "rust lang".to_string(),
            " web ".to_string(),
        ])));
        assert_eq!(tags, vec!["rust_lang", "web"]);
    }

    #[test]
    fn internal_whitespace_collapses_to_one_underscore() {
        let tags = normalize(Some(TagsInput::Csv("machine   learning".to_string())));
        assert_eq!(tags, vec!["machine_learning"]);
    }

    #[test]
    fn empty_entries_are_dropped() {
        let tags = normalize(Some(TagsInput::Csv("a,,  ,b".to_string())));
        assert_eq!(tags, vec!["a", "b"]);

        let tags = normalize(Some(TagsInput::List(vec![
            "".to_string(),
            "   ".to_string(),
        ])));
        assert!(tags.is_empty());
    }

    #[test]
    fn no_input_means_no_tags() {
        assert!(normalize(None).is_empty());
    }

    #[test]
    fn both_wire_shapes_deserialize() {
        let from_csv: TagsInput = serde_json::from_str(r#""a, b""#).unwrap();
        assert!(matches!(from_csv, TagsInput::Csv(_)));

        let from_list: TagsInput = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert!(matches!(from_list, TagsInput::List(_)));
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize(Some(TagsInput::Csv("a, b c,  d ".to_string())));
        let twice = normalize(Some(TagsInput::List(once.clone())));
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn prop_normalization_is_idempotent(raw in proptest::collection::vec("[ a-z_]{0,12}", 0..8)) {
            let once = normalize(Some(TagsInput::List(raw)));
            let twice = normalize(Some(TagsInput::List(once.clone())));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_normalized_tags_carry_no_whitespace(csv in "[ a-z,]{0,40}") {
            for tag in normalize(Some(TagsInput::Csv(csv))) {
                prop_assert!(!tag.is_empty());
                prop_assert!(!tag.contains(char::is_whitespace));
            }
        }
    }
}
