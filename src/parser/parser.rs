//! Recursive descent parser for file headers
//!
//! Matches `package? import* modifier* kind Name extends? implements?`
//! against the significant tokens of one file. The header ends with the last
//! matched clause; whatever follows (normally the type body) is never looked
//! at. Type parameters and type arguments are skipped as balanced `<...>`
//! groups.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::keywords::is_identifier;
use super::lexer::{Token, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::base::IdentPath;
use crate::syntax::{ImportSpec, Modifier, Modifiers, StructuralFact, TypeKind};

/// Extracts a [`StructuralFact`] from source text.
///
/// Construct once and share by reference; parsing keeps no state between files,
/// so a single `HeaderParser` can be used from several threads.
#[derive(Debug, Clone)]
pub struct HeaderParser {
    default_package: IdentPath,
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderParser {
    pub fn new() -> Self {
        Self {
            default_package: IdentPath::default_package(),
        }
    }

    /// Use `package` for files that have no `package` clause.
    pub fn with_default_package(package: IdentPath) -> Self {
        Self {
            default_package: package,
        }
    }

    pub fn default_package(&self) -> &IdentPath {
        &self.default_package
    }

    /// Parse one file's header.
    pub fn parse(&self, text: &str) -> Result<StructuralFact, ParseError> {
        let tokens = significant_tokens(text);
        let mut parser = Parser::new(&tokens, TextSize::of(text));
        parser.parse_header(&self.default_package)
    }
}

/// Parse a header with the default settings.
pub fn parse_header(text: &str) -> Result<StructuralFact, ParseError> {
    HeaderParser::new().parse(text)
}

/// Tokens that take part in the grammar.
///
/// Drops trivia, string/char literals and annotation usages (`@Name ...` up to
/// the end of the line). `@ interface` written with a gap is fused into the
/// annotation-type keyword.
pub fn significant_tokens(text: &str) -> Vec<Token<'_>> {
    let tokens = tokenize(text);
    let mut significant = Vec::with_capacity(tokens.len() / 2);
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        match token.kind {
            kind if kind.is_trivia() || kind.is_literal() => i += 1,
            SyntaxKind::AT => {
                let next = next_non_trivia(&tokens, i + 1);
                match next {
                    Some(j) if tokens[j].kind == SyntaxKind::INTERFACE_KW => {
                        let range = TextRange::new(token.offset, tokens[j].range().end());
                        significant.push(Token {
                            kind: SyntaxKind::AT_INTERFACE_KW,
                            text: &text[range],
                            offset: token.offset,
                        });
                        i = j + 1;
                    }
                    _ => i = skip_line(&tokens, i + 1),
                }
            }
            // `@interfaceFoo` is a usage of an annotation named `interfaceFoo`
            SyntaxKind::AT_INTERFACE_KW
                if tokens.get(i + 1).map(|t| t.kind) == Some(SyntaxKind::IDENT) =>
            {
                i = skip_line(&tokens, i + 1);
            }
            _ => {
                significant.push(token.clone());
                i += 1;
            }
        }
    }

    significant
}

fn next_non_trivia(tokens: &[Token<'_>], from: usize) -> Option<usize> {
    tokens[from..]
        .iter()
        .position(|t| !t.kind.is_trivia())
        .map(|offset| from + offset)
}

/// Index of the first token that ends the current line, or the end of input.
fn skip_line(tokens: &[Token<'_>], from: usize) -> usize {
    tokens[from..]
        .iter()
        .position(Token::ends_line)
        .map_or(tokens.len(), |offset| from + offset)
}

/// The parser state
struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    eof: TextSize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], eof: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            eof,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::EOF)
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map(Token::range)
            .unwrap_or_else(|| TextRange::empty(self.eof))
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<&'t Token<'a>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.current_range())
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        self.error(ParseErrorKind::UnexpectedToken {
            expected,
            found: self.current_kind().display_name(),
        })
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_header(&mut self, default_package: &IdentPath) -> Result<StructuralFact, ParseError> {
        let package = if self.eat(SyntaxKind::PACKAGE_KW) {
            let package = self.parse_path()?;
            self.expect(SyntaxKind::SEMICOLON)?;
            package
        } else {
            default_package.clone()
        };

        let mut imports = Vec::new();
        while self.at(SyntaxKind::IMPORT_KW) {
            if let Some(import) = self.parse_import()? {
                imports.push(import);
            }
        }

        let modifiers = self.parse_modifiers();
        let kind = self.parse_type_kind()?;
        let name = self.parse_ident()?;
        self.skip_type_arguments()?;

        let extends = self.parse_extends(kind)?;
        let implements = self.parse_implements(kind)?;

        Ok(StructuralFact {
            package,
            imports,
            kind,
            modifiers,
            name,
            extends,
            implements,
        })
    }

    fn parse_ident(&mut self) -> Result<SmolStr, ParseError> {
        match self.current() {
            Some(token) if token.kind == SyntaxKind::IDENT => {
                if !is_identifier(token.text) {
                    return Err(self.error(ParseErrorKind::InvalidIdentifier(SmolStr::new(
                        token.text,
                    ))));
                }
                self.pos += 1;
                Ok(SmolStr::new(token.text))
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// `Ident ('.' Ident)*`
    fn parse_path(&mut self) -> Result<IdentPath, ParseError> {
        let mut segments = vec![self.parse_ident()?];
        while self.eat(SyntaxKind::DOT) {
            segments.push(self.parse_ident()?);
        }
        Ok(IdentPath::new(segments))
    }

    /// A supertype path. Type arguments are dropped: `List<String>` is `List`.
    fn parse_type_ref(&mut self) -> Result<IdentPath, ParseError> {
        let path = self.parse_path()?;
        self.skip_type_arguments()?;
        Ok(path)
    }

    /// Skip a balanced `<...>` group if one starts here.
    ///
    /// A `{` or the end of input before the group closes is an error.
    fn skip_type_arguments(&mut self) -> Result<(), ParseError> {
        if !self.at(SyntaxKind::LT) {
            return Ok(());
        }
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                SyntaxKind::LT => depth += 1,
                SyntaxKind::GT => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += 1;
                        return Ok(());
                    }
                }
                SyntaxKind::L_BRACE | SyntaxKind::EOF => return Err(self.unexpected("'>'")),
                _ => {}
            }
            self.pos += 1;
        }
    }

    /// `import static? path ('.' '*')? ';'`
    ///
    /// Static imports bring members, not types, into scope and yield `None`.
    fn parse_import(&mut self) -> Result<Option<ImportSpec>, ParseError> {
        self.bump();
        let is_static = self.eat(SyntaxKind::STATIC_KW);

        let mut segments = vec![self.parse_ident()?];
        let mut on_demand = false;
        while self.eat(SyntaxKind::DOT) {
            if self.eat(SyntaxKind::STAR) {
                on_demand = true;
                break;
            }
            segments.push(self.parse_ident()?);
        }
        self.expect(SyntaxKind::SEMICOLON)?;

        let path = IdentPath::new(segments);
        if is_static {
            trace!("ignoring static import {}", path);
            return Ok(None);
        }
        Ok(Some(if on_demand {
            ImportSpec::OnDemand(path)
        } else {
            ImportSpec::Single(path)
        }))
    }

    fn parse_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::new();
        loop {
            let modifier = match self.current_kind() {
                SyntaxKind::PUBLIC_KW => Modifier::Public,
                SyntaxKind::ABSTRACT_KW => Modifier::Abstract,
                SyntaxKind::FINAL_KW => Modifier::Final,
                _ => return modifiers,
            };
            self.pos += 1;
            modifiers.insert(modifier);
        }
    }

    fn parse_type_kind(&mut self) -> Result<TypeKind, ParseError> {
        let kind = match self.current_kind() {
            SyntaxKind::CLASS_KW => TypeKind::Class,
            SyntaxKind::INTERFACE_KW => TypeKind::Interface,
            SyntaxKind::ENUM_KW => TypeKind::Enum,
            SyntaxKind::AT_INTERFACE_KW => TypeKind::AnnotationType,
            SyntaxKind::EOF => {
                return Err(self.error(ParseErrorKind::MissingTypeDeclaration));
            }
            _ => return Err(self.unexpected("type declaration")),
        };
        self.pos += 1;
        Ok(kind)
    }

    fn parse_extends(&mut self, kind: TypeKind) -> Result<Vec<IdentPath>, ParseError> {
        if !self.at(SyntaxKind::EXTENDS_KW) {
            return Ok(Vec::new());
        }
        if !kind.allows_extends() {
            return Err(self.error(ParseErrorKind::InvalidClause {
                kind,
                clause: "extends",
            }));
        }
        self.bump();

        let mut extends = vec![self.parse_type_ref()?];
        while self.at(SyntaxKind::COMMA) {
            if !kind.allows_multiple_extends() {
                return Err(self.error(ParseErrorKind::MultipleSuperclasses));
            }
            self.bump();
            extends.push(self.parse_type_ref()?);
        }
        Ok(extends)
    }

    fn parse_implements(&mut self, kind: TypeKind) -> Result<Vec<IdentPath>, ParseError> {
        if !self.at(SyntaxKind::IMPLEMENTS_KW) {
            return Ok(Vec::new());
        }
        if !kind.allows_implements() {
            return Err(self.error(ParseErrorKind::InvalidClause {
                kind,
                clause: "implements",
            }));
        }
        self.bump();

        let mut implements = vec![self.parse_type_ref()?];
        while self.eat(SyntaxKind::COMMA) {
            implements.push(self.parse_type_ref()?);
        }
        Ok(implements)
    }
}
