//! Token kinds produced by the lexer.
//!
//! Only the tokens needed to recognise a file header get their own kind;
//! everything else lexes as punctuation or `ERROR` and is only a problem if it
//! shows up before the type declaration.

/// All token kinds in a Java-like source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (never part of the grammar)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,  // Foo, $bar, _1, Ünïcödé
    STRING, // "hello"
    CHAR,   // 'c'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_PAREN,   // (
    R_PAREN,   // )
    L_BRACKET, // [
    R_BRACKET, // ]
    LT,        // <
    GT,        // >
    SEMICOLON, // ;
    DOT,       // .
    COMMA,     // ,
    STAR,      // *
    AT,        // @
    EQ,        // =

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    PACKAGE_KW,
    IMPORT_KW,
    STATIC_KW,
    CLASS_KW,
    INTERFACE_KW,
    ENUM_KW,
    AT_INTERFACE_KW, // @interface
    EXTENDS_KW,
    IMPLEMENTS_KW,
    PUBLIC_KW,
    ABSTRACT_KW,
    FINAL_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
    EOF,
}

impl SyntaxKind {
    /// Check if this is trivia (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Literals whose contents must never be mistaken for structure.
    pub fn is_literal(self) -> bool {
        matches!(self, Self::STRING | Self::CHAR)
    }

    /// Check if this is a reserved keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::PACKAGE_KW as u16) && (self as u16) <= (Self::FINAL_KW as u16)
    }

    /// Keywords that introduce a type declaration.
    pub fn is_type_kind(self) -> bool {
        matches!(
            self,
            Self::CLASS_KW | Self::INTERFACE_KW | Self::ENUM_KW | Self::AT_INTERFACE_KW
        )
    }

    /// Keywords allowed before the type-kind keyword.
    pub fn is_modifier(self) -> bool {
        matches!(self, Self::PUBLIC_KW | Self::ABSTRACT_KW | Self::FINAL_KW)
    }

    /// Human-readable description for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::LINE_COMMENT | Self::BLOCK_COMMENT => "comment",
            Self::IDENT => "identifier",
            Self::STRING => "string literal",
            Self::CHAR => "character literal",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::LT => "'<'",
            Self::GT => "'>'",
            Self::SEMICOLON => "';'",
            Self::DOT => "'.'",
            Self::COMMA => "','",
            Self::STAR => "'*'",
            Self::AT => "'@'",
            Self::EQ => "'='",
            Self::PACKAGE_KW => "'package'",
            Self::IMPORT_KW => "'import'",
            Self::STATIC_KW => "'static'",
            Self::CLASS_KW => "'class'",
            Self::INTERFACE_KW => "'interface'",
            Self::ENUM_KW => "'enum'",
            Self::AT_INTERFACE_KW => "'@interface'",
            Self::EXTENDS_KW => "'extends'",
            Self::IMPLEMENTS_KW => "'implements'",
            Self::PUBLIC_KW => "'public'",
            Self::ABSTRACT_KW => "'abstract'",
            Self::FINAL_KW => "'final'",
            Self::ERROR => "unrecognised input",
            Self::EOF => "end of file",
        }
    }
}
