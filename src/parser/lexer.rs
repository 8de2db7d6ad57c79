//! Logos-based lexer for Java-like sources
//!
//! Produces a lossless token stream: trivia, literals and unknown characters
//! are all kept so the header filter can decide what to ignore.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    /// True for trivia that ends a source line (used to bound annotations).
    pub fn ends_line(&self) -> bool {
        self.kind.is_trivia() && self.text.contains('\n')
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f\x{FEFF}]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[$\p{XID_Continue}]+")]
    Ident,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    Char,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("*")]
    Star,
    #[token("@")]
    At,
    #[token("=")]
    Eq,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("package")]
    PackageKw,
    #[token("import")]
    ImportKw,
    #[token("static")]
    StaticKw,
    #[token("class")]
    ClassKw,
    #[token("interface")]
    InterfaceKw,
    #[token("enum")]
    EnumKw,
    #[token("@interface")]
    AtInterfaceKw,
    #[token("extends")]
    ExtendsKw,
    #[token("implements")]
    ImplementsKw,
    #[token("public")]
    PublicKw,
    #[token("abstract")]
    AbstractKw,
    #[token("final")]
    FinalKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            String => SyntaxKind::STRING,
            Char => SyntaxKind::CHAR,

            // Punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Semicolon => SyntaxKind::SEMICOLON,
            Dot => SyntaxKind::DOT,
            Comma => SyntaxKind::COMMA,
            Star => SyntaxKind::STAR,
            At => SyntaxKind::AT,
            Eq => SyntaxKind::EQ,

            // Keywords
            PackageKw => SyntaxKind::PACKAGE_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            StaticKw => SyntaxKind::STATIC_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            AtInterfaceKw => SyntaxKind::AT_INTERFACE_KW,
            ExtendsKw => SyntaxKind::EXTENDS_KW,
            ImplementsKw => SyntaxKind::IMPLEMENTS_KW,
            PublicKw => SyntaxKind::PUBLIC_KW,
            AbstractKw => SyntaxKind::ABSTRACT_KW,
            FinalKw => SyntaxKind::FINAL_KW,
        }
    }
}
