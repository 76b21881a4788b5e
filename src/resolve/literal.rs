use once_cell::sync::Lazy;
use regex::Regex;

// Text between two double quotes. No escape handling: `"a\"b"` yields `a\`.
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Every quoted literal in an allowed-values expression, quotes stripped,
/// in order of appearance.
pub fn extract_quoted(text: &str) -> Vec<String> {
    QUOTED
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

/// Quoted literals across several allowed-values texts, in document order.
pub fn extract_all<'a, I>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    texts.into_iter().flat_map(|t| extract_quoted(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_quotes_and_keeps_order() {
        assert_eq!(extract_quoted(r#""Active" "Inactive""#), vec!["Active", "Inactive"]);
        assert_eq!(extract_quoted(r#""Gold","Silver", "Bronze""#), vec!["Gold", "Silver", "Bronze"]);
    }

    #[test]
    fn unquoted_text_yields_nothing() {
        assert!(extract_quoted("[1..10]").is_empty());
        assert!(extract_quoted("").is_empty());
        assert!(extract_quoted(r#"dangling "quote"#).is_empty());
    }

    #[test]
    fn literals_are_verbatim() {
        assert_eq!(extract_quoted(r#"" spaced  ", "", "a\"b""#), vec![" spaced  ", "", r"a\"]);
    }
}
