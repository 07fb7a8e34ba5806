//! The quote-split URL-list representation shared by both pipelines.
//!
//! The harvester serializes each row's links as a bracketed, single-quoted
//! list: `['http://a.example', 'http://b.example']`. The scorer recovers the
//! URLs by splitting the raw cell on the single-quote character and dropping
//! short fragments; the brackets and `, ` separators all fall under the
//! length cutoff. This is a heuristic over a printed list, not a URL parse:
//! no normalization (scheme, case, trailing slash) is applied, so only
//! textually identical URLs ever match.

/// Split a raw URL-list cell into its constituent URLs.
/// Fragments shorter than `min_fragment_len` bytes are discarded.
pub fn parse_url_list(cell: &str, min_fragment_len: usize) -> Vec<String> {
    cell.split('\'')
        .filter(|fragment| fragment.len() >= min_fragment_len)
        .map(str::to_string)
        .collect()
}

/// Serialize a link list into the form `parse_url_list` consumes.
pub fn serialize_url_list(urls: &[String]) -> String {
    let quoted: Vec<String> = urls.iter().map(|url| format!("'{}'", url)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_urls() {
        let parsed = parse_url_list("'http://a.com' 'http://b.com'", 5);
        assert_eq!(parsed, vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn test_parse_serialized_list_form() {
        let parsed = parse_url_list("['http://a.example', 'http://b.example']", 5);
        assert_eq!(parsed, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn test_short_fragments_dropped() {
        // A cell of only short fragments parses to an empty list
        let parsed = parse_url_list("'a' 'bb'", 5);
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_no_fragment_below_cutoff_survives() {
        let parsed = parse_url_list("['x', 'http://long.example', 'ab']", 5);
        assert!(parsed.iter().all(|fragment| fragment.len() >= 5));
        assert_eq!(parsed, vec!["http://long.example"]);
    }

    #[test]
    fn test_empty_cell() {
        assert!(parse_url_list("", 5).is_empty());
        assert!(parse_url_list("[]", 5).is_empty());
    }

    #[test]
    fn test_nan_cell_filtered() {
        // pandas renders missing cells as "nan"; 3 bytes falls to the cutoff
        assert!(parse_url_list("nan", 5).is_empty());
    }

    #[test]
    fn test_serialize_round_trips_through_parser() {
        let urls = vec![
            "http://a.example".to_string(),
            "https://b.example/path".to_string(),
        ];
        let cell = serialize_url_list(&urls);
        assert_eq!(cell, "['http://a.example', 'https://b.example/path']");
        assert_eq!(parse_url_list(&cell, 5), urls);
    }

    #[test]
    fn test_serialize_empty_list() {
        assert_eq!(serialize_url_list(&[]), "[]");
    }

    #[test]
    fn test_custom_min_fragment_len() {
        let parsed = parse_url_list("'abc' 'abcdef'", 4);
        assert_eq!(parsed, vec!["abcdef"]);
    }
}
