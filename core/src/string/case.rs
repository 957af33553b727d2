use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LOWER_UPPER: Regex = Regex::new(r"(\p{Ll})(\p{Lu})").unwrap();
    static ref UPPER_UPPER_LOWER: Regex = Regex::new(r"(\p{Lu})(\p{Lu}\p{Ll})").unwrap();
    static ref LETTER_DIGIT: Regex = Regex::new(r"(\p{L})(\p{N})").unwrap();
    static ref DIGIT_LETTER: Regex = Regex::new(r"(\p{N})(\p{L})").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
}

/// Split on separators, case changes and letter/digit boundaries.
///
/// `"HTTPServer_v2"` → `["HTTP", "Server", "v", "2"]`
pub fn words(s: &str) -> Vec<String> {
    let s = LOWER_UPPER.replace_all(s, "$1 $2");
    let s = UPPER_UPPER_LOWER.replace_all(&s, "$1 $2");
    let s = LETTER_DIGIT.replace_all(&s, "$1 $2");
    let s = DIGIT_LETTER.replace_all(&s, "$1 $2");
    SEPARATORS
        .split(&s)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

pub fn pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

pub fn camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
        .collect()
}

pub fn snake_case(s: &str) -> String {
    join_lower(s, "_")
}

pub fn kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

fn join_lower(s: &str, sep: &str) -> String {
    words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_words() {
        assert_eq!(words("helloWorld"), vec!["hello", "World"]);
        assert_eq!(words("HTTPServer_v2"), vec!["HTTP", "Server", "v", "2"]);
        assert_eq!(words("  foo--bar "), vec!["foo", "bar"]);
        assert_eq!(words("Int8Value"), vec!["Int", "8", "Value"]);
        assert!(words("").is_empty());
        assert!(words("__").is_empty());
    }

    #[test]
    fn capitalizes() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn case_conversions() {
        assert_eq!(pascal_case("hello_world"), "HelloWorld");
        assert_eq!(pascal_case("HTTPServer"), "HttpServer");
        assert_eq!(camel_case("Hello world-again"), "helloWorldAgain");
        assert_eq!(snake_case("someHTTPValue2"), "some_http_value_2");
        assert_eq!(kebab_case("Some Title Here"), "some-title-here");
        assert_eq!(snake_case(""), "");
    }
}
