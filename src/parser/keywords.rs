//! Reserved words of the supported header grammar.

/// Keywords that can never be used as identifiers.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "package",
    "import",
    "static",
    "class",
    "interface",
    "enum",
    "extends",
    "implements",
    "public",
    "abstract",
    "final",
];

/// Check if a word is a reserved keyword
pub fn is_reserved_keyword(word: &str) -> bool {
    RESERVED_KEYWORDS.contains(&word)
}

/// Characters allowed at the start of an identifier segment.
pub fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || unicode_ident::is_xid_start(c)
}

/// Characters allowed inside an identifier segment.
pub fn is_identifier_char(c: char) -> bool {
    c == '$' || unicode_ident::is_xid_continue(c)
}

/// Check that `text` is a valid single identifier segment.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(is_identifier_start)
        && chars.all(is_identifier_char)
        && !is_reserved_keyword(text)
}
