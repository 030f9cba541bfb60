use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // real line breaks, plus an escaped "\n" left in the text
    static ref NEWLINE: Regex = Regex::new(r"(\r\n|\n|\\n|\r)").expect("static regex");
}

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn compare_case_insensitive(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn has_upper_case(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
}

/// All cased characters are upper case, and there is at least one.
pub fn is_upper_case(s: &str) -> bool {
    s == s.to_uppercase() && s != s.to_lowercase()
}

/// Text between the first `start` and the next `end` after it, or `""`.
pub fn string_between<'a>(s: &'a str, start: &str, end: &str) -> &'a str {
    let Some(from) = s.find(start).map(|i| i + start.len()) else {
        return "";
    };
    match s[from..].find(end) {
        Some(len) => &s[from..from + len],
        None => "",
    }
}

/// Text between the last `start` and the next `end` after it, or `""`. When `start` and
/// `end` are the same delimiter, this is the text between its last two occurrences.
pub fn last_string_between<'a>(s: &'a str, start: &str, end: &str) -> &'a str {
    if start == end {
        let Some(to) = s.rfind(end) else {
            return "";
        };
        return match s[..to].rfind(start) {
            Some(from) => &s[from + start.len()..to],
            None => "",
        };
    }

    let Some(from) = s.rfind(start).map(|i| i + start.len()) else {
        return "";
    };
    match s[from..].find(end) {
        Some(len) => &s[from..from + len],
        None => "",
    }
}

/// Replace line breaks with `<br>`.
pub fn nl2br(text: &str) -> String {
    NEWLINE.replace_all(text, "<br>").into_owned()
}

/// `"true"` and `"false"`, in any case.
pub fn to_boolean(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
