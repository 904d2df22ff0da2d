//! Case converter implementations

use super::types::CaseStyle;
use regex::Regex;
use std::sync::LazyLock;

/// One separator and the word character it capitalizes: `user_name` → `userName`
static SEPARATOR_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_-]([A-Za-z0-9_])").unwrap());

/// Anything outside the ASCII word class
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

/// Any run of characters that is not a letter or digit
static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Every uppercase letter starts a new word: `userID` → `user_I_D`
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z])").unwrap());

/// Convert `name` into the given style
pub fn convert(name: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Camel => to_camel_case(name),
        CaseStyle::Pascal => to_pascal_case(name),
        CaseStyle::Snake => to_snake_case(name),
        CaseStyle::Kebab => to_kebab_case(name),
        CaseStyle::UpperSnake => to_upper_snake_case(name),
    }
}

/// `user_name` / `user-name` → `userName`
pub fn to_camel_case(name: &str) -> String {
    let joined = join_words(name);
    map_first_char(&joined, char::to_ascii_lowercase)
}

/// `user_name` / `user-name` → `UserName`
pub fn to_pascal_case(name: &str) -> String {
    let joined = join_words(name);
    map_first_char(&joined, char::to_ascii_uppercase)
}

/// `userName` → `user_name`
pub fn to_snake_case(name: &str) -> String {
    split_words(name, '_').to_ascii_lowercase()
}

/// `userName` → `user-name`
pub fn to_kebab_case(name: &str) -> String {
    split_words(name, '-').to_ascii_lowercase()
}

/// `userName` → `USER_NAME`
pub fn to_upper_snake_case(name: &str) -> String {
    split_words(name, '_').to_ascii_uppercase()
}

/// Collapse separators into capitals and drop every remaining non-word character
fn join_words(name: &str) -> String {
    let collapsed = SEPARATOR_WORD.replace_all(name, |caps: &regex::Captures<'_>| {
        caps[1].to_ascii_uppercase()
    });
    NON_WORD.replace_all(&collapsed, "").into_owned()
}

/// Put `separator` before every uppercase letter and between words
fn split_words(name: &str, separator: char) -> String {
    let marked = UPPERCASE.replace_all(name, "_${1}");
    let mut sep = [0u8; 4];
    let sep = separator.encode_utf8(&mut sep);
    let replaced = NON_ALNUM.replace_all(&marked, &*sep);
    replaced.trim_matches(separator).to_string()
}

fn map_first_char(s: &str, f: impl Fn(&char) -> char) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(f(&first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
