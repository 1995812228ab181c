//! Abstract syntax tree for the declaration-file subset.
//!
//! Declarations are immutable once parsed; the emitter indexes them by name
//! and only ever reads them.

use astspec_common::Span;
use std::sync::Arc;

/// A parsed declaration file: the statement list plus the original text,
/// which stays available for raw-text slices in diagnostics and fallbacks.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub file_name: String,
    pub text: Arc<str>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration(Declaration),
    Import(ImportDecl),
}

/// A named top-level type definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Interface(InterfaceDecl),
    Enum(EnumDecl),
    TypeAlias(AliasDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Interface(decl) => &decl.name,
            Declaration::Enum(decl) => &decl.name,
            Declaration::TypeAlias(decl) => &decl.name,
        }
    }
}

/// An import statement. Only its extent is kept; imports never contribute
/// declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub name: String,
    pub type_params: Vec<String>,
    pub heritage: Vec<HeritageRef>,
    pub members: Vec<PropertySig>,
    pub span: Span,
}

/// One entry of an interface's extends list.
#[derive(Debug, Clone, PartialEq)]
pub struct HeritageRef {
    pub name: String,
    pub type_args: Vec<TypeNode>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    /// Member names in declaration order. Initializer values are ignored.
    pub members: Vec<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AliasDecl {
    pub name: String,
    pub type_params: Vec<String>,
    pub type_node: TypeNode,
    pub span: Span,
}

/// One property signature of an interface body or inline type literal.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySig {
    pub name: PropertyName,
    pub type_node: TypeNode,
    pub optional: bool,
    pub readonly: bool,
    pub span: Span,
}

/// Property names are tagged at parse time: a plain name, or the member of
/// the one supported computed form `[SyntaxKind.Member]`. Other computed
/// names are rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyName {
    Named(String),
    KindKeyed(String),
}

impl PropertyName {
    /// The name the property contributes to an object schema.
    pub fn text(&self) -> &str {
        match self {
            PropertyName::Named(name) => name,
            PropertyName::KindKeyed(member) => member,
        }
    }
}

/// One type expression.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeNode {
    pub span: Span,
    pub kind: TypeNodeKind,
}

impl TypeNode {
    /// Raw source text covered by this node.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeNodeKind {
    Array(Box<TypeNode>),
    Union(Vec<TypeNode>),
    Tuple(Vec<TypeNode>),
    Literal(LiteralValue),
    TypeRef {
        name: String,
        type_args: Vec<TypeNode>,
    },
    /// Namespaced constant reference, e.g. `AST_NODE_TYPES.Program`.
    QualifiedRef {
        namespace: String,
        member: String,
    },
    TypeLiteral(Vec<PropertySig>),
    Parenthesized(Box<TypeNode>),
    Keyword(KeywordType),
    IndexedAccess {
        object: Box<TypeNode>,
        index: Box<TypeNode>,
    },
    Keyof(Box<TypeNode>),
}

impl TypeNodeKind {
    /// Stable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TypeNodeKind::Array(_) => "ArrayType",
            TypeNodeKind::Union(_) => "UnionType",
            TypeNodeKind::Tuple(_) => "TupleType",
            TypeNodeKind::Literal(_) => "LiteralType",
            TypeNodeKind::TypeRef { .. } => "TypeReference",
            TypeNodeKind::QualifiedRef { .. } => "QualifiedReference",
            TypeNodeKind::TypeLiteral(_) => "TypeLiteral",
            TypeNodeKind::Parenthesized(_) => "ParenthesizedType",
            TypeNodeKind::Keyword(_) => "KeywordType",
            TypeNodeKind::IndexedAccess { .. } => "IndexedAccessType",
            TypeNodeKind::Keyof(_) => "KeyofType",
        }
    }
}

/// The payload of a literal type. Numeric literals keep their raw text; the
/// schema output carries that text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    Str(String),
    Num(String),
    True,
    False,
    Null,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeywordType {
    String,
    Number,
    Boolean,
    BigInt,
    Any,
    Unknown,
    Null,
    Undefined,
    Never,
    Object,
    Symbol,
    Void,
}
