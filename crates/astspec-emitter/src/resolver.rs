//! Demand-driven resolution worklist.
//!
//! The resolver owns all mutable state of the emit phase: the pending name
//! stack, the set of names ever requested, and the growing definitions map.
//! Translation (`translate.rs`) only mutates through it, so each name is
//! translated at most once and cycles resolve as named references.

use crate::declarations::DeclarationTable;
use crate::error::EmitError;
use astspec_parser::Declaration;
use rustc_hash::FxHashSet;
use serde_json::{Map, Value, json};

/// Names requested unconditionally at startup. These seed the reachability
/// closure over the declaration graph.
pub const ROOT_TYPES: &[&str] = &["Program", "BaseNode", "BaseToken", "PunctuatorTokenToText"];

/// The distinguished root definition, merged into the envelope by the
/// assembler rather than emitted under `definitions`.
pub const ROOT_TYPE: &str = "Program";

pub struct Resolver<'a> {
    pub(crate) table: &'a DeclarationTable<'a>,
    pub(crate) source: &'a str,
    pending: Vec<String>,
    requested: FxHashSet<String>,
    definitions: Map<String, Value>,
    pub(crate) missing: Vec<String>,
    pub(crate) fallbacks: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a DeclarationTable<'a>, source: &'a str) -> Self {
        Self::with_roots(table, source, ROOT_TYPES)
    }

    pub fn with_roots(table: &'a DeclarationTable<'a>, source: &'a str, roots: &[&str]) -> Self {
        let mut resolver = Self {
            table,
            source,
            pending: Vec::new(),
            requested: FxHashSet::default(),
            definitions: Map::new(),
            missing: Vec::new(),
            fallbacks: Vec::new(),
        };
        for root in roots {
            resolver.request(root, "(root)");
        }
        resolver
    }

    /// Queue `name` for resolution unless it was ever requested before, and
    /// return the reference fragment either way. Callers never need to know
    /// whether the request was new.
    pub fn request(&mut self, name: &str, requester: &str) -> Value {
        if self.requested.insert(name.to_string()) {
            tracing::trace!(name, requester, "type requested");
            self.pending.push(name.to_string());
        }
        json!({ "$ref": format!("#/definitions/{name}") })
    }

    /// Drain the worklist. Pop order is last-in-first-out; it only affects
    /// the order of reports, since emission is sorted later.
    pub fn run(&mut self) -> Result<(), EmitError> {
        while let Some(name) = self.pending.pop() {
            let Some(decl) = self.table.lookup(&name) else {
                tracing::warn!(name = name.as_str(), "missing declaration for requested type");
                self.missing.push(name);
                continue;
            };

            let fragment = match decl {
                Declaration::Interface(decl) => self.interface_to_schema(&name, decl, 0)?,
                Declaration::TypeAlias(decl) => {
                    self.type_to_schema(&name, &decl.type_node, 0)?
                }
                Declaration::Enum(decl) => json!({ "type": "string", "enum": &decl.members }),
            };
            self.definitions.insert(name, fragment);
        }
        Ok(())
    }

    pub fn definitions(&self) -> &Map<String, Value> {
        &self.definitions
    }

    /// Consume the resolver once the worklist has drained.
    pub fn into_parts(self) -> (Map<String, Value>, Vec<String>, Vec<String>) {
        (self.definitions, self.missing, self.fallbacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astspec_parser::parse_source_file;

    #[test]
    fn request_is_idempotent() {
        let (file, _) = parse_source_file("test.d.ts", "interface A { a: string; }");
        let table = DeclarationTable::build(&file);
        let mut resolver = Resolver::with_roots(&table, &file.text, &[]);

        let first = resolver.request("A", "here");
        let again = resolver.request("A", "elsewhere");
        assert_eq!(first, again);
        assert_eq!(first["$ref"], "#/definitions/A");
        assert_eq!(resolver.pending, vec!["A"]);
    }

    #[test]
    fn resolved_names_are_never_requeued() {
        let (file, _) = parse_source_file("test.d.ts", "interface A { a: string; }");
        let table = DeclarationTable::build(&file);
        let mut resolver = Resolver::with_roots(&table, &file.text, &["A"]);
        resolver.run().unwrap();
        assert!(resolver.definitions().contains_key("A"));

        resolver.request("A", "late caller");
        assert!(resolver.pending.is_empty());
    }

    #[test]
    fn missing_declaration_is_reported_once() {
        let (file, _) = parse_source_file("test.d.ts", "interface A { x: Ghost; y: Ghost; }");
        let table = DeclarationTable::build(&file);
        let mut resolver = Resolver::with_roots(&table, &file.text, &["A"]);
        resolver.run().unwrap();
        assert_eq!(resolver.missing, vec!["Ghost"]);
        assert!(!resolver.definitions().contains_key("Ghost"));
    }

    #[test]
    fn default_roots_seed_the_closure() {
        let (file, _) = parse_source_file("test.d.ts", "");
        let table = DeclarationTable::build(&file);
        let mut resolver = Resolver::new(&table, &file.text);
        resolver.run().unwrap();
        let mut missing = resolver.missing.clone();
        missing.sort();
        assert_eq!(
            missing,
            vec!["BaseNode", "BaseToken", "Program", "PunctuatorTokenToText"]
        );
    }
}
