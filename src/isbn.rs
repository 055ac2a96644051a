use regex::Regex;
use std::sync::LazyLock;

/// ISBN-shaped substrings: an optional `ISBN`/`ISBN-10`/`ISBN-13` prefix
/// (any case, optional colon), then either a 13-digit group starting with
/// 978/979 or a 10-character group ending in a digit or X. Hyphens or single
/// spaces may separate the digit groups. The 13-digit branch intentionally
/// does not pin the group widths to exactly thirteen digits; real-world
/// hyphenation varies too much for that to be safe.
static ISBN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:(?i:isbn)(?:-1[03])?:?\s*)?((?:97[89][-\s]?[0-9]{1,5}[-\s]?[0-9]+[-\s]?[0-9]+[-\s]?[0-9])|(?:[0-9]{1,5}[-\s]?[0-9]+[-\s]?[0-9]+[-\s]?[0-9Xx]))\b",
    )
    .expect("ISBN pattern is valid")
});

/// Find the first ISBN-shaped substring in `text` and return it normalized:
/// separators stripped, check character uppercased. Shape alone decides —
/// no checksum verification is attempted.
pub fn find_isbn(text: &str) -> Option<String> {
    ISBN_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|group| normalize(group.as_str()))
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || c.eq_ignore_ascii_case(&'x'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_hyphenated_isbn13() {
        let text = "Copyright 2017. ISBN 978-0-13-468599-1. All rights reserved.";
        assert_eq!(find_isbn(text), Some("9780134685991".to_string()));
    }

    #[test]
    fn finds_bare_isbn13() {
        assert_eq!(
            find_isbn("catalog id 9780134685991 applies"),
            Some("9780134685991".to_string())
        );
    }

    #[test]
    fn finds_isbn10_with_prefix_and_colon() {
        assert_eq!(
            find_isbn("ISBN: 0-13-468599-1"),
            Some("0134685991".to_string())
        );
    }

    #[test]
    fn prefix_is_case_insensitive() {
        assert_eq!(
            find_isbn("isbn-13: 978-1-23456-789-7"),
            Some("9781234567897".to_string())
        );
    }

    #[test]
    fn check_character_is_uppercased() {
        assert_eq!(
            find_isbn("ISBN 0-8044-2957-x"),
            Some("080442957X".to_string())
        );
    }

    #[test]
    fn space_separated_groups_match() {
        assert_eq!(
            find_isbn("978 0 13 468599 1"),
            Some("9780134685991".to_string())
        );
    }

    #[test]
    fn first_match_wins() {
        let text = "ISBN 978-0-13-468599-1 and also ISBN 0-306-40615-2";
        assert_eq!(find_isbn(text), Some("9780134685991".to_string()));
    }

    #[test]
    fn no_match_on_plain_prose() {
        assert_eq!(find_isbn("no identifiers in this sentence"), None);
        assert_eq!(find_isbn(""), None);
    }
}
