//! Recursive type-node-to-schema-fragment translation.
//!
//! Case order mirrors precedence: special forms are recognised before the
//! generic reference case turns a name into a requested `$ref`.

use crate::error::EmitError;
use crate::resolver::Resolver;
use astspec_common::Span;
use astspec_common::limits;
use astspec_parser::{
    Declaration, HeritageRef, InterfaceDecl, KeywordType, LiteralValue, PropertySig, TypeNode,
    TypeNodeKind,
};
use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use serde_json::{Map, Value, json};

/// Reference names dropped from union alternatives: value kinds that have no
/// JSON representation.
const EXCLUDED_UNION_REFS: &[&str] = &["RegExp", "RegExpLiteral", "BigIntLiteral"];

/// Base shapes whose fields are already part of every node/token schema;
/// they must not be re-emitted through inheritance flattening.
const STRUCTURAL_MARKER_BASES: &[&str] = &["NodeOrTokenData", "BaseNode", "BaseToken"];

/// The two namespaces a qualified constant reference may use.
const NODE_KIND_NAMESPACE: &str = "AST_NODE_TYPES";
const TOKEN_KIND_NAMESPACE: &str = "AST_TOKEN_TYPES";

fn is_excluded_union_member(node: &TypeNode) -> bool {
    match &node.kind {
        TypeNodeKind::TypeRef { name, type_args } => {
            type_args.is_empty() && EXCLUDED_UNION_REFS.contains(&name.as_str())
        }
        _ => false,
    }
}

impl<'a> Resolver<'a> {
    /// Translate an interface declaration, flattening its heritage clause.
    pub(crate) fn interface_to_schema(
        &mut self,
        scope: &str,
        decl: &InterfaceDecl,
        depth: usize,
    ) -> Result<Value, EmitError> {
        let own = self.members_to_object(scope, &decl.members, depth)?;

        let mut fragments = Vec::new();
        for heritage in &decl.heritage {
            if STRUCTURAL_MARKER_BASES.contains(&heritage.name.as_str()) {
                continue;
            }
            fragments.push(self.heritage_to_schema(scope, heritage));
        }
        if fragments.is_empty() {
            return Ok(own);
        }
        fragments.push(own);
        Ok(json!({ "allOf": fragments }))
    }

    /// A bare heritage entry is an ordinary reference; one with type
    /// arguments has no schema shape and falls back to a raw-text reference.
    fn heritage_to_schema(&mut self, scope: &str, heritage: &HeritageRef) -> Value {
        if heritage.type_args.is_empty() {
            self.request(&heritage.name, scope)
        } else {
            self.fallback_ref(scope, heritage.span, "HeritageReference")
        }
    }

    pub(crate) fn type_to_schema(
        &mut self,
        scope: &str,
        node: &TypeNode,
        depth: usize,
    ) -> Result<Value, EmitError> {
        if depth > limits::MAX_TRANSLATE_DEPTH {
            return Err(EmitError::TranslationTooDeep {
                scope: scope.to_string(),
                limit: limits::MAX_TRANSLATE_DEPTH,
            });
        }

        match &node.kind {
            TypeNodeKind::Array(element) => Ok(json!({
                "type": "array",
                "items": self.type_to_schema(scope, element, depth + 1)?,
            })),

            TypeNodeKind::Union(members) => {
                let mut alternatives = Vec::new();
                for member in members {
                    if is_excluded_union_member(member) {
                        continue;
                    }
                    alternatives.push(self.type_to_schema(scope, member, depth + 1)?);
                }
                match alternatives.len() {
                    // Every alternative was excluded. An empty `oneOf`
                    // matches nothing, which cannot be what the declaration
                    // meant, so the fragment degrades to unconstrained.
                    0 => {
                        tracing::warn!(
                            scope,
                            text = node.text(self.source),
                            "all union alternatives excluded; emitting unconstrained fragment"
                        );
                        self.fallbacks.push(node.text(self.source).to_string());
                        Ok(json!({ "type": "any" }))
                    }
                    1 => Ok(alternatives.swap_remove(0)),
                    _ => Ok(json!({ "oneOf": alternatives })),
                }
            }

            TypeNodeKind::Literal(value) => Ok(match value {
                LiteralValue::Null => json!({ "type": "null" }),
                LiteralValue::True => json!({ "type": "boolean", "enum": [true] }),
                LiteralValue::False => json!({ "type": "boolean", "enum": [false] }),
                LiteralValue::Str(text) => json!({ "type": "string", "enum": [text] }),
                // The raw numeric text is carried verbatim, as the original
                // generator does.
                LiteralValue::Num(text) => json!({ "type": "number", "enum": [text] }),
            }),

            TypeNodeKind::QualifiedRef { namespace, member } => {
                if namespace != NODE_KIND_NAMESPACE && namespace != TOKEN_KIND_NAMESPACE {
                    return Err(EmitError::UnknownNamespace {
                        scope: scope.to_string(),
                        namespace: namespace.clone(),
                        member: member.clone(),
                    });
                }
                Ok(json!({ "type": "string", "enum": [member] }))
            }

            TypeNodeKind::TypeRef { name, type_args } => {
                if name == "ValueOf" {
                    return self.value_of_schema(scope, type_args);
                }
                if type_args.is_empty() {
                    return Ok(self.request(name, scope));
                }
                // Generic references other than ValueOf have no schema shape.
                Ok(self.fallback_ref(scope, node.span, node.kind.name()))
            }

            TypeNodeKind::TypeLiteral(members) => self.members_to_object(scope, members, depth),

            TypeNodeKind::Parenthesized(inner) => self.type_to_schema(scope, inner, depth + 1),

            TypeNodeKind::Keyword(keyword) => match keyword {
                KeywordType::String => Ok(json!({ "type": "string" })),
                KeywordType::Number | KeywordType::BigInt => Ok(json!({ "type": "number" })),
                KeywordType::Boolean => Ok(json!({ "type": "boolean" })),
                KeywordType::Any | KeywordType::Unknown => Ok(json!({ "type": "any" })),
                KeywordType::Null | KeywordType::Undefined => Ok(json!({ "type": "null" })),
                KeywordType::Never | KeywordType::Object | KeywordType::Symbol
                | KeywordType::Void => Ok(self.fallback_ref(scope, node.span, node.kind.name())),
            },

            TypeNodeKind::Tuple(_)
            | TypeNodeKind::IndexedAccess { .. }
            | TypeNodeKind::Keyof(_) => Ok(self.fallback_ref(scope, node.span, node.kind.name())),
        }
    }

    /// Build the object-schema for an ordered list of property signatures.
    fn members_to_object(
        &mut self,
        scope: &str,
        members: &[PropertySig],
        depth: usize,
    ) -> Result<Value, EmitError> {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for member in members {
            let name = member.name.text().to_string();
            let fragment = self.type_to_schema(scope, &member.type_node, depth + 1)?;
            if !member.optional {
                required.push(Value::String(name.clone()));
            }
            properties.insert(name, fragment);
        }
        Ok(json!({
            "type": "object",
            "properties": properties,
            "required": required,
        }))
    }

    /// `ValueOf<T>`: the closed set of string-literal values assigned across
    /// the interface `T` and every interface it extends.
    fn value_of_schema(
        &mut self,
        scope: &str,
        type_args: &[TypeNode],
    ) -> Result<Value, EmitError> {
        let [argument] = type_args else {
            return Err(EmitError::ValueOfArity {
                scope: scope.to_string(),
            });
        };

        let argument_name = match &argument.kind {
            TypeNodeKind::TypeRef { name, type_args } if type_args.is_empty() => name.as_str(),
            _ => argument.text(self.source),
        };
        match self.table.lookup(argument_name) {
            Some(Declaration::Interface(decl)) => {
                let values = self.string_literal_values(decl);
                Ok(json!({ "type": "string", "enum": values }))
            }
            Some(_) => Err(EmitError::ValueOfNotInterface {
                argument: argument_name.to_string(),
            }),
            None => Err(EmitError::ValueOfUnknownArgument {
                argument: argument_name.to_string(),
            }),
        }
    }

    /// Collect string-literal property values, bases first, in discovery
    /// order with duplicates removed.
    fn string_literal_values(&self, decl: &InterfaceDecl) -> Vec<String> {
        let mut values = IndexSet::new();
        let mut seen = FxHashSet::default();
        self.collect_literal_values(decl, &mut seen, &mut values);
        values.into_iter().collect()
    }

    fn collect_literal_values(
        &self,
        decl: &InterfaceDecl,
        seen: &mut FxHashSet<String>,
        values: &mut IndexSet<String>,
    ) {
        // The seen set breaks heritage cycles.
        if !seen.insert(decl.name.clone()) {
            return;
        }
        for heritage in &decl.heritage {
            if let Some(Declaration::Interface(base)) = self.table.lookup(&heritage.name) {
                self.collect_literal_values(base, seen, values);
            }
        }
        for member in &decl.members {
            if let TypeNodeKind::Literal(LiteralValue::Str(text)) = &member.type_node.kind {
                values.insert(text.clone());
            }
        }
    }

    /// Best-effort placeholder for uncovered type forms: report it and emit a
    /// reference keyed by the node's raw source text, so translation of
    /// everything else completes.
    fn fallback_ref(&mut self, scope: &str, span: Span, kind: &'static str) -> Value {
        let text = span.text(self.source).to_string();
        tracing::warn!(
            scope,
            kind,
            text = text.as_str(),
            "no schema translation for type; emitting reference by source text"
        );
        let reference = json!({ "$ref": format!("#/definitions/{text}") });
        self.fallbacks.push(text);
        reference
    }
}
