//! Parser state - declaration and type parsing methods.

use crate::ast::{
    AliasDecl, Declaration, EnumDecl, HeritageRef, ImportDecl, InterfaceDecl, KeywordType,
    LiteralValue, PropertyName, PropertySig, SourceFile, Statement, TypeNode, TypeNodeKind,
};
use astspec_common::diagnostics::diagnostic_codes;
use astspec_common::limits;
use astspec_common::{Diagnostic, Span};
use astspec_scanner::{Scanner, SyntaxKind};
use std::sync::Arc;

pub struct ParserState {
    scanner: Scanner,
    file_name: String,
    current_token: SyntaxKind,
    prev_token_end: u32,
    parse_diagnostics: Vec<Diagnostic>,
    recursion_depth: usize,
}

impl ParserState {
    pub fn new(file_name: impl Into<String>, source_text: impl Into<Arc<str>>) -> Self {
        Self {
            scanner: Scanner::new(source_text),
            file_name: file_name.into(),
            current_token: SyntaxKind::Unknown,
            prev_token_end: 0,
            parse_diagnostics: Vec::new(),
            recursion_depth: 0,
        }
    }

    // =========================================================================
    // Token plumbing
    // =========================================================================

    fn next_token(&mut self) {
        self.prev_token_end = self.scanner.token_end();
        self.current_token = self.scanner.scan();
    }

    fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    fn is_identifier_or_keyword(&self) -> bool {
        self.is_token(SyntaxKind::Identifier) || self.current_token.is_keyword()
    }

    fn token_pos(&self) -> u32 {
        self.scanner.token_pos()
    }

    fn token_end(&self) -> u32 {
        self.scanner.token_end()
    }

    fn finish_span(&self, start: u32) -> Span {
        Span::new(start, self.prev_token_end)
    }

    fn parse_error_at_current_token(&mut self, message: impl Into<String>, code: u32) {
        let diagnostic = Diagnostic::error(
            self.file_name.as_str(),
            self.token_pos(),
            self.token_end().saturating_sub(self.token_pos()),
            message,
            code,
        );
        self.parse_diagnostics.push(diagnostic);
    }

    /// Consume `kind` or report a 1005 and leave the token in place.
    fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            return true;
        }
        let text = kind.text().unwrap_or("token");
        self.parse_error_at_current_token(
            format!("'{text}' expected."),
            diagnostic_codes::TOKEN_EXPECTED,
        );
        false
    }

    /// Accepts identifiers and keywords, mirroring `parseIdentifierName`:
    /// property and member positions allow reserved words.
    fn parse_identifier_name(&mut self) -> String {
        if self.is_identifier_or_keyword() {
            let name = self.scanner.token_value().to_string();
            self.next_token();
            return name;
        }
        self.parse_error_at_current_token(
            "Identifier expected.",
            diagnostic_codes::IDENTIFIER_EXPECTED,
        );
        String::new()
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Parse the whole file. Scanner diagnostics are merged into the parse
    /// diagnostics, sorted by position.
    pub fn parse_source_file(mut self) -> (SourceFile, Vec<Diagnostic>) {
        self.next_token();

        let mut statements = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            let pos_before = self.token_pos();
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            // Hard progress guarantee for malformed input.
            if self.token_pos() == pos_before && !self.is_token(SyntaxKind::EndOfFileToken) {
                self.next_token();
            }
        }

        for diag in self.scanner.diagnostics() {
            self.parse_diagnostics.push(Diagnostic::error(
                self.file_name.as_str(),
                diag.pos as u32,
                diag.length as u32,
                diag.message,
                diag.code,
            ));
        }
        self.parse_diagnostics.sort_by_key(|d| d.start);

        tracing::debug!(
            statements = statements.len(),
            errors = self.parse_diagnostics.len(),
            "source file parsed"
        );

        let file = SourceFile {
            file_name: self.file_name,
            text: self.scanner.source_text_arc(),
            statements,
        };
        (file, self.parse_diagnostics)
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        if self.is_token(SyntaxKind::ImportKeyword) {
            return Some(Statement::Import(self.parse_import_declaration()));
        }

        while matches!(
            self.current_token,
            SyntaxKind::ExportKeyword | SyntaxKind::DeclareKeyword
        ) {
            self.next_token();
        }
        // `declare const enum`
        if self.is_token(SyntaxKind::ConstKeyword) {
            self.next_token();
        }

        let declaration = match self.current_token {
            SyntaxKind::InterfaceKeyword => {
                Declaration::Interface(self.parse_interface_declaration())
            }
            SyntaxKind::EnumKeyword => Declaration::Enum(self.parse_enum_declaration()),
            SyntaxKind::TypeKeyword => Declaration::TypeAlias(self.parse_type_alias_declaration()),
            _ => {
                self.parse_error_at_current_token(
                    "Declaration or statement expected.",
                    diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                );
                self.resync_to_statement_start();
                return None;
            }
        };
        Some(Statement::Declaration(declaration))
    }

    /// Skip ahead to something that can start a top-level statement.
    fn resync_to_statement_start(&mut self) {
        let mut brace_depth = 0usize;
        self.next_token();
        loop {
            match self.current_token {
                SyntaxKind::EndOfFileToken => return,
                SyntaxKind::OpenBraceToken => brace_depth += 1,
                SyntaxKind::CloseBraceToken => brace_depth = brace_depth.saturating_sub(1),
                SyntaxKind::ExportKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::ImportKeyword
                | SyntaxKind::InterfaceKeyword
                | SyntaxKind::EnumKeyword
                | SyntaxKind::TypeKeyword
                    if brace_depth == 0 =>
                {
                    return;
                }
                _ => {}
            }
            self.next_token();
        }
    }

    /// Imports never contribute declarations; consume through the semicolon.
    fn parse_import_declaration(&mut self) -> ImportDecl {
        let start = self.token_pos();
        while !self.is_token(SyntaxKind::SemicolonToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            self.next_token();
        }
        if self.is_token(SyntaxKind::SemicolonToken) {
            self.next_token();
        }
        ImportDecl {
            span: self.finish_span(start),
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn parse_interface_declaration(&mut self) -> InterfaceDecl {
        let start = self.token_pos();
        self.next_token(); // interface
        let name = self.parse_identifier_name();
        let type_params = self.parse_type_parameters();

        let mut heritage = Vec::new();
        if self.is_token(SyntaxKind::ExtendsKeyword) {
            self.next_token();
            loop {
                heritage.push(self.parse_heritage_ref());
                if self.is_token(SyntaxKind::CommaToken) {
                    self.next_token();
                } else {
                    break;
                }
            }
        }

        self.parse_expected(SyntaxKind::OpenBraceToken);
        let members = self.parse_type_members();
        self.parse_expected(SyntaxKind::CloseBraceToken);

        InterfaceDecl {
            name,
            type_params,
            heritage,
            members,
            span: self.finish_span(start),
        }
    }

    fn parse_heritage_ref(&mut self) -> HeritageRef {
        let start = self.token_pos();
        let name = self.parse_identifier_name();
        let type_args = if self.is_token(SyntaxKind::LessThanToken) {
            self.parse_type_arguments()
        } else {
            Vec::new()
        };
        HeritageRef {
            name,
            type_args,
            span: self.finish_span(start),
        }
    }

    fn parse_enum_declaration(&mut self) -> EnumDecl {
        let start = self.token_pos();
        self.next_token(); // enum
        let name = self.parse_identifier_name();
        self.parse_expected(SyntaxKind::OpenBraceToken);

        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            if self.is_identifier_or_keyword() || self.is_token(SyntaxKind::StringLiteral) {
                members.push(self.scanner.token_value().to_string());
                self.next_token();
                self.skip_enum_initializer();
            } else {
                self.parse_error_at_current_token(
                    "Identifier expected.",
                    diagnostic_codes::IDENTIFIER_EXPECTED,
                );
                self.next_token();
                continue;
            }
            if self.is_token(SyntaxKind::CommaToken) {
                self.next_token();
            } else {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);

        EnumDecl {
            name,
            members,
            span: self.finish_span(start),
        }
    }

    /// Enum initializers are ignored downstream; accept the simple literal
    /// forms the generated files use.
    fn skip_enum_initializer(&mut self) {
        if !self.is_token(SyntaxKind::EqualsToken) {
            return;
        }
        self.next_token();
        if self.is_token(SyntaxKind::MinusToken) {
            self.next_token();
        }
        match self.current_token {
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => self.next_token(),
            _ if self.is_identifier_or_keyword() => self.next_token(),
            _ => self.parse_error_at_current_token(
                "Expression expected.",
                diagnostic_codes::EXPRESSION_EXPECTED,
            ),
        }
    }

    fn parse_type_alias_declaration(&mut self) -> AliasDecl {
        let start = self.token_pos();
        self.next_token(); // type
        let name = self.parse_identifier_name();
        let type_params = self.parse_type_parameters();
        self.parse_expected(SyntaxKind::EqualsToken);
        let type_node = self.parse_type();
        if self.is_token(SyntaxKind::SemicolonToken) {
            self.next_token();
        }
        AliasDecl {
            name,
            type_params,
            type_node,
            span: self.finish_span(start),
        }
    }

    /// Only the parameter names survive; constraints and defaults are parsed
    /// and dropped (nothing downstream instantiates generics).
    fn parse_type_parameters(&mut self) -> Vec<String> {
        if !self.is_token(SyntaxKind::LessThanToken) {
            return Vec::new();
        }
        self.next_token();
        let mut params = Vec::new();
        while !self.is_token(SyntaxKind::GreaterThanToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            params.push(self.parse_identifier_name());
            if self.is_token(SyntaxKind::ExtendsKeyword) {
                self.next_token();
                self.parse_type();
            }
            if self.is_token(SyntaxKind::EqualsToken) {
                self.next_token();
                self.parse_type();
            }
            if self.is_token(SyntaxKind::CommaToken) {
                self.next_token();
            } else {
                break;
            }
        }
        self.parse_expected(SyntaxKind::GreaterThanToken);
        params
    }

    // =========================================================================
    // Object members
    // =========================================================================

    fn parse_type_members(&mut self) -> Vec<PropertySig> {
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let pos_before = self.token_pos();
            if let Some(member) = self.parse_property_signature() {
                members.push(member);
            }
            if self.token_pos() == pos_before && !self.is_token(SyntaxKind::CloseBraceToken) {
                self.next_token();
            }
        }
        members
    }

    fn parse_property_signature(&mut self) -> Option<PropertySig> {
        let start = self.token_pos();

        let mut readonly = false;
        if self.is_token(SyntaxKind::ReadonlyKeyword) {
            // `readonly` can itself be a property name; peek past it.
            let snapshot = self.scanner.save_state();
            let current = self.current_token;
            self.next_token();
            if self.is_token(SyntaxKind::ColonToken) || self.is_token(SyntaxKind::QuestionToken) {
                self.scanner.restore_state(snapshot);
                self.current_token = current;
            } else {
                readonly = true;
            }
        }

        let name = if self.is_token(SyntaxKind::OpenBracketToken) {
            self.parse_computed_property_name()?
        } else if self.is_token(SyntaxKind::StringLiteral) || self.is_identifier_or_keyword() {
            let name = PropertyName::Named(self.scanner.token_value().to_string());
            self.next_token();
            name
        } else {
            self.parse_error_at_current_token(
                "Property or signature expected.",
                diagnostic_codes::PROPERTY_OR_SIGNATURE_EXPECTED,
            );
            self.resync_member();
            return None;
        };

        let optional = if self.is_token(SyntaxKind::QuestionToken) {
            self.next_token();
            true
        } else {
            false
        };

        // Method and call signatures are not properties.
        if self.is_token(SyntaxKind::OpenParenToken) || self.is_token(SyntaxKind::LessThanToken) {
            self.parse_error_at_current_token(
                "Property or signature expected.",
                diagnostic_codes::PROPERTY_OR_SIGNATURE_EXPECTED,
            );
            self.resync_member();
            return None;
        }

        if !self.parse_expected(SyntaxKind::ColonToken) {
            self.resync_member();
            return None;
        }
        let type_node = self.parse_type();

        match self.current_token {
            SyntaxKind::SemicolonToken | SyntaxKind::CommaToken => self.next_token(),
            SyntaxKind::CloseBraceToken => {}
            _ => {
                self.parse_error_at_current_token(
                    "';' expected.",
                    diagnostic_codes::TOKEN_EXPECTED,
                );
                self.resync_member();
            }
        }

        Some(PropertySig {
            name,
            type_node,
            optional,
            readonly,
            span: self.finish_span(start),
        })
    }

    /// The single supported computed form is `[SyntaxKind.Member]`. Index
    /// signatures and any other computed name are rejected here, before the
    /// translator ever sees them.
    fn parse_computed_property_name(&mut self) -> Option<PropertyName> {
        self.next_token(); // [
        let supported = self.is_token(SyntaxKind::Identifier)
            && self.scanner.token_value() == "SyntaxKind";
        if !supported {
            self.parse_error_at_current_token(
                "Unsupported computed property name.",
                diagnostic_codes::PROPERTY_OR_SIGNATURE_EXPECTED,
            );
            self.resync_member();
            return None;
        }
        self.next_token();
        if !self.parse_expected(SyntaxKind::DotToken) {
            self.resync_member();
            return None;
        }
        let member = self.parse_identifier_name();
        self.parse_expected(SyntaxKind::CloseBracketToken);
        Some(PropertyName::KindKeyed(member))
    }

    fn resync_member(&mut self) {
        while !matches!(
            self.current_token,
            SyntaxKind::SemicolonToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken
        ) {
            self.next_token();
        }
        if self.is_token(SyntaxKind::SemicolonToken) {
            self.next_token();
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub(crate) fn parse_type(&mut self) -> TypeNode {
        self.recursion_depth += 1;
        if self.recursion_depth > limits::MAX_PARSE_TYPE_DEPTH {
            self.parse_error_at_current_token("Type expected.", diagnostic_codes::TYPE_EXPECTED);
            self.recursion_depth -= 1;
            return self.error_type_node();
        }
        let node = self.parse_union_type();
        self.recursion_depth -= 1;
        node
    }

    /// Placeholder node for recovery when type parsing fails. The diagnostic
    /// that accompanies it makes the parse fatal at the driver level.
    fn error_type_node(&mut self) -> TypeNode {
        TypeNode {
            span: Span::new(self.token_pos(), self.token_pos()),
            kind: TypeNodeKind::Keyword(KeywordType::Any),
        }
    }

    fn parse_union_type(&mut self) -> TypeNode {
        // Multi-line unions in generated files lead with a bar.
        if self.is_token(SyntaxKind::BarToken) {
            self.next_token();
        }
        let first = self.parse_postfix_type();
        if !self.is_token(SyntaxKind::BarToken) {
            return first;
        }

        let start = first.span.start;
        let mut members = vec![first];
        while self.is_token(SyntaxKind::BarToken) {
            self.next_token();
            members.push(self.parse_postfix_type());
        }
        TypeNode {
            span: self.finish_span(start),
            kind: TypeNodeKind::Union(members),
        }
    }

    /// Postfix `[]` (array) and `[T]` (indexed access) bind tighter than
    /// unions.
    fn parse_postfix_type(&mut self) -> TypeNode {
        let mut node = self.parse_primary_type();
        while self.is_token(SyntaxKind::OpenBracketToken) {
            let start = node.span.start;
            self.next_token();
            if self.is_token(SyntaxKind::CloseBracketToken) {
                self.next_token();
                node = TypeNode {
                    span: self.finish_span(start),
                    kind: TypeNodeKind::Array(Box::new(node)),
                };
            } else {
                let index = self.parse_type();
                self.parse_expected(SyntaxKind::CloseBracketToken);
                node = TypeNode {
                    span: self.finish_span(start),
                    kind: TypeNodeKind::IndexedAccess {
                        object: Box::new(node),
                        index: Box::new(index),
                    },
                };
            }
        }
        node
    }

    fn parse_primary_type(&mut self) -> TypeNode {
        let start = self.token_pos();
        match self.current_token {
            SyntaxKind::StringLiteral => {
                let value = self.scanner.token_value().to_string();
                self.next_token();
                self.literal_node(start, LiteralValue::Str(value))
            }
            SyntaxKind::NumericLiteral => {
                let text = self.scanner.token_value().to_string();
                self.next_token();
                self.literal_node(start, LiteralValue::Num(text))
            }
            SyntaxKind::MinusToken => {
                self.next_token();
                if self.is_token(SyntaxKind::NumericLiteral) {
                    let text = format!("-{}", self.scanner.token_value());
                    self.next_token();
                    self.literal_node(start, LiteralValue::Num(text))
                } else {
                    self.parse_error_at_current_token(
                        "Type expected.",
                        diagnostic_codes::TYPE_EXPECTED,
                    );
                    self.error_type_node()
                }
            }
            SyntaxKind::TrueKeyword => {
                self.next_token();
                self.literal_node(start, LiteralValue::True)
            }
            SyntaxKind::FalseKeyword => {
                self.next_token();
                self.literal_node(start, LiteralValue::False)
            }
            SyntaxKind::NullKeyword => {
                self.next_token();
                self.literal_node(start, LiteralValue::Null)
            }
            SyntaxKind::KeyofKeyword => {
                self.next_token();
                let operand = self.parse_postfix_type();
                TypeNode {
                    span: self.finish_span(start),
                    kind: TypeNodeKind::Keyof(Box::new(operand)),
                }
            }
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let inner = self.parse_type();
                self.parse_expected(SyntaxKind::CloseParenToken);
                TypeNode {
                    span: self.finish_span(start),
                    kind: TypeNodeKind::Parenthesized(Box::new(inner)),
                }
            }
            SyntaxKind::OpenBraceToken => {
                self.next_token();
                let members = self.parse_type_members();
                self.parse_expected(SyntaxKind::CloseBraceToken);
                TypeNode {
                    span: self.finish_span(start),
                    kind: TypeNodeKind::TypeLiteral(members),
                }
            }
            SyntaxKind::OpenBracketToken => self.parse_tuple_type(),
            SyntaxKind::StringKeyword => self.keyword_node(KeywordType::String),
            SyntaxKind::NumberKeyword => self.keyword_node(KeywordType::Number),
            SyntaxKind::BooleanKeyword => self.keyword_node(KeywordType::Boolean),
            SyntaxKind::BigIntKeyword => self.keyword_node(KeywordType::BigInt),
            SyntaxKind::AnyKeyword => self.keyword_node(KeywordType::Any),
            SyntaxKind::UnknownKeyword => self.keyword_node(KeywordType::Unknown),
            SyntaxKind::NeverKeyword => self.keyword_node(KeywordType::Never),
            SyntaxKind::UndefinedKeyword => self.keyword_node(KeywordType::Undefined),
            SyntaxKind::ObjectKeyword => self.keyword_node(KeywordType::Object),
            SyntaxKind::SymbolKeyword => self.keyword_node(KeywordType::Symbol),
            SyntaxKind::VoidKeyword => self.keyword_node(KeywordType::Void),
            SyntaxKind::Identifier => self.parse_type_reference(),
            _ => {
                self.parse_error_at_current_token(
                    "Type expected.",
                    diagnostic_codes::TYPE_EXPECTED,
                );
                self.error_type_node()
            }
        }
    }

    fn literal_node(&self, start: u32, value: LiteralValue) -> TypeNode {
        TypeNode {
            span: self.finish_span(start),
            kind: TypeNodeKind::Literal(value),
        }
    }

    fn keyword_node(&mut self, keyword: KeywordType) -> TypeNode {
        let start = self.token_pos();
        self.next_token();
        TypeNode {
            span: self.finish_span(start),
            kind: TypeNodeKind::Keyword(keyword),
        }
    }

    fn parse_tuple_type(&mut self) -> TypeNode {
        let start = self.token_pos();
        self.next_token(); // [
        let mut elements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBracketToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            elements.push(self.parse_type());
            if self.is_token(SyntaxKind::CommaToken) {
                self.next_token();
            } else {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken);
        TypeNode {
            span: self.finish_span(start),
            kind: TypeNodeKind::Tuple(elements),
        }
    }

    fn parse_type_reference(&mut self) -> TypeNode {
        let start = self.token_pos();
        let name = self.scanner.token_value().to_string();
        self.next_token();

        if self.is_token(SyntaxKind::DotToken) {
            self.next_token();
            let member = self.parse_identifier_name();
            return TypeNode {
                span: self.finish_span(start),
                kind: TypeNodeKind::QualifiedRef {
                    namespace: name,
                    member,
                },
            };
        }

        let type_args = if self.is_token(SyntaxKind::LessThanToken) {
            self.parse_type_arguments()
        } else {
            Vec::new()
        };
        TypeNode {
            span: self.finish_span(start),
            kind: TypeNodeKind::TypeRef { name, type_args },
        }
    }

    fn parse_type_arguments(&mut self) -> Vec<TypeNode> {
        self.next_token(); // <
        let mut args = Vec::new();
        while !self.is_token(SyntaxKind::GreaterThanToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            args.push(self.parse_type());
            if self.is_token(SyntaxKind::CommaToken) {
                self.next_token();
            } else {
                break;
            }
        }
        self.parse_expected(SyntaxKind::GreaterThanToken);
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source_file;

    fn parse_clean(source: &str) -> SourceFile {
        let (file, diagnostics) = parse_source_file("test.d.ts", source);
        assert!(diagnostics.is_empty(), "unexpected errors: {diagnostics:?}");
        file
    }

    fn only_declaration(file: &SourceFile) -> &Declaration {
        let declarations: Vec<_> = file
            .statements
            .iter()
            .filter_map(|s| match s {
                Statement::Declaration(d) => Some(d),
                _ => None,
            })
            .collect();
        assert_eq!(declarations.len(), 1);
        declarations[0]
    }

    #[test]
    fn parses_interface_with_heritage_and_modifiers() {
        let file = parse_clean(
            "export declare interface Foo extends BaseNode, Other<T> {\n  kind: string;\n  name?: Identifier;\n  readonly flag: boolean;\n}\n",
        );
        let Declaration::Interface(decl) = only_declaration(&file) else {
            panic!("expected interface");
        };
        assert_eq!(decl.name, "Foo");
        assert_eq!(decl.heritage.len(), 2);
        assert_eq!(decl.heritage[0].name, "BaseNode");
        assert!(decl.heritage[0].type_args.is_empty());
        assert_eq!(decl.heritage[1].name, "Other");
        assert_eq!(decl.heritage[1].type_args.len(), 1);
        assert_eq!(decl.members.len(), 3);
        assert_eq!(decl.members[0].name.text(), "kind");
        assert!(!decl.members[0].optional);
        assert!(decl.members[1].optional);
        assert!(decl.members[2].readonly);
    }

    #[test]
    fn readonly_as_property_name() {
        let file = parse_clean("interface X { readonly: boolean; }");
        let Declaration::Interface(decl) = only_declaration(&file) else {
            panic!("expected interface");
        };
        assert_eq!(decl.members.len(), 1);
        assert_eq!(decl.members[0].name, PropertyName::Named("readonly".into()));
        assert!(!decl.members[0].readonly);
    }

    #[test]
    fn parses_kind_keyed_computed_name() {
        let file = parse_clean("interface PunctuatorTokenToText { [SyntaxKind.AmpersandToken]: \"&\"; }");
        let Declaration::Interface(decl) = only_declaration(&file) else {
            panic!("expected interface");
        };
        assert_eq!(
            decl.members[0].name,
            PropertyName::KindKeyed("AmpersandToken".into())
        );
        assert_eq!(
            decl.members[0].type_node.kind,
            TypeNodeKind::Literal(LiteralValue::Str("&".into()))
        );
    }

    #[test]
    fn rejects_other_computed_names() {
        let (_, diagnostics) = parse_source_file("test.d.ts", "interface X { [Symbol.iterator]: string; }");
        assert!(diagnostics.iter().any(|d| d.code == 1131));
    }

    #[test]
    fn rejects_index_signatures() {
        let (_, diagnostics) =
            parse_source_file("test.d.ts", "interface X { [key: string]: string; }");
        assert!(diagnostics.iter().any(|d| d.code == 1131));
    }

    #[test]
    fn rejects_method_members() {
        let (_, diagnostics) = parse_source_file("test.d.ts", "interface X { frob(): void; }");
        assert!(diagnostics.iter().any(|d| d.code == 1131));
    }

    #[test]
    fn property_without_type_is_an_error() {
        let (_, diagnostics) = parse_source_file("test.d.ts", "interface X { a; b: string; }");
        assert!(diagnostics.iter().any(|d| d.code == 1005));
    }

    #[test]
    fn parses_enum_with_string_initializers() {
        let file = parse_clean(
            "declare enum AST_NODE_TYPES {\n  ArrayExpression = \"ArrayExpression\",\n  Program = \"Program\",\n}\n",
        );
        let Declaration::Enum(decl) = only_declaration(&file) else {
            panic!("expected enum");
        };
        assert_eq!(decl.name, "AST_NODE_TYPES");
        assert_eq!(decl.members, vec!["ArrayExpression", "Program"]);
    }

    #[test]
    fn parses_alias_with_leading_bar_union() {
        let file = parse_clean("type Expression =\n  | ArrayExpression\n  | Literal;\n");
        let Declaration::TypeAlias(decl) = only_declaration(&file) else {
            panic!("expected alias");
        };
        let TypeNodeKind::Union(members) = &decl.type_node.kind else {
            panic!("expected union");
        };
        assert_eq!(members.len(), 2);
    }

    #[test]
    fn single_member_union_collapses() {
        let file = parse_clean("type T = | Literal;");
        let Declaration::TypeAlias(decl) = only_declaration(&file) else {
            panic!("expected alias");
        };
        assert!(matches!(decl.type_node.kind, TypeNodeKind::TypeRef { .. }));
    }

    #[test]
    fn parses_array_of_parenthesized_union() {
        let file = parse_clean("type Elements = (Expression | null)[];");
        let Declaration::TypeAlias(decl) = only_declaration(&file) else {
            panic!("expected alias");
        };
        let TypeNodeKind::Array(element) = &decl.type_node.kind else {
            panic!("expected array");
        };
        let TypeNodeKind::Parenthesized(inner) = &element.kind else {
            panic!("expected parenthesized element");
        };
        assert!(matches!(inner.kind, TypeNodeKind::Union(_)));
    }

    #[test]
    fn parses_qualified_reference() {
        let file = parse_clean("interface N { type: AST_NODE_TYPES.Program; }");
        let Declaration::Interface(decl) = only_declaration(&file) else {
            panic!("expected interface");
        };
        assert_eq!(
            decl.members[0].type_node.kind,
            TypeNodeKind::QualifiedRef {
                namespace: "AST_NODE_TYPES".into(),
                member: "Program".into(),
            }
        );
    }

    #[test]
    fn parses_value_of_helper_alias() {
        let file = parse_clean("type ValueOf<T> = T[keyof T];");
        let Declaration::TypeAlias(decl) = only_declaration(&file) else {
            panic!("expected alias");
        };
        assert_eq!(decl.type_params, vec!["T"]);
        let TypeNodeKind::IndexedAccess { object, index } = &decl.type_node.kind else {
            panic!("expected indexed access");
        };
        assert!(matches!(object.kind, TypeNodeKind::TypeRef { .. }));
        assert!(matches!(index.kind, TypeNodeKind::Keyof(_)));
    }

    #[test]
    fn parses_tuple_type() {
        let file = parse_clean("type Range = [number, number];");
        let Declaration::TypeAlias(decl) = only_declaration(&file) else {
            panic!("expected alias");
        };
        let TypeNodeKind::Tuple(elements) = &decl.type_node.kind else {
            panic!("expected tuple");
        };
        assert_eq!(elements.len(), 2);
        assert_eq!(decl.type_node.text(&file.text), "[number, number]");
    }

    #[test]
    fn imports_are_skipped_statements() {
        let file = parse_clean("import type { SyntaxKind } from 'typescript';\ninterface X { a: string; }");
        assert_eq!(file.statements.len(), 2);
        assert!(matches!(file.statements[0], Statement::Import(_)));
    }

    #[test]
    fn unknown_statement_reports_and_recovers() {
        let (file, diagnostics) =
            parse_source_file("test.d.ts", "const x = 1;\ninterface Y { a: string; }");
        assert!(diagnostics.iter().any(|d| d.code == 1128));
        assert!(
            file.statements
                .iter()
                .any(|s| matches!(s, Statement::Declaration(Declaration::Interface(i)) if i.name == "Y"))
        );
    }

    #[test]
    fn literal_types_keep_raw_numeric_text() {
        let file = parse_clean("interface L { a: \"Identifier\"; b: 42; c: -1; d: true; e: null; }");
        let Declaration::Interface(decl) = only_declaration(&file) else {
            panic!("expected interface");
        };
        let kinds: Vec<_> = decl
            .members
            .iter()
            .map(|m| match &m.type_node.kind {
                TypeNodeKind::Literal(v) => v.clone(),
                other => panic!("expected literal, got {}", other.name()),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                LiteralValue::Str("Identifier".into()),
                LiteralValue::Num("42".into()),
                LiteralValue::Num("-1".into()),
                LiteralValue::True,
                LiteralValue::Null,
            ]
        );
    }
}
