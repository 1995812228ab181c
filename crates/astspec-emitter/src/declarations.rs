//! Declaration table: name -> top-level declaration.

use astspec_parser::{Declaration, SourceFile, Statement};
use rustc_hash::FxHashMap;

/// Pure lookup structure over a parsed file's declarations.
///
/// Statements that are not interface/enum/alias declarations are skipped.
/// On a name collision the last declaration wins, matching source order.
pub struct DeclarationTable<'a> {
    map: FxHashMap<&'a str, &'a Declaration>,
}

impl<'a> DeclarationTable<'a> {
    pub fn build(file: &'a SourceFile) -> Self {
        let mut map = FxHashMap::default();
        for statement in &file.statements {
            if let Statement::Declaration(decl) = statement {
                map.insert(decl.name(), decl);
            }
        }
        tracing::debug!(declarations = map.len(), "declaration table built");
        Self { map }
    }

    pub fn lookup(&self, name: &str) -> Option<&'a Declaration> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astspec_parser::parse_source_file;

    #[test]
    fn indexes_declarations_and_skips_imports() {
        let (file, _) = parse_source_file(
            "test.d.ts",
            "import { X } from 'y';\ninterface A { a: string; }\nenum E { M }\ntype T = A;",
        );
        let table = DeclarationTable::build(&file);
        assert_eq!(table.len(), 3);
        assert!(matches!(table.lookup("A"), Some(Declaration::Interface(_))));
        assert!(matches!(table.lookup("E"), Some(Declaration::Enum(_))));
        assert!(matches!(table.lookup("T"), Some(Declaration::TypeAlias(_))));
        assert!(table.lookup("X").is_none());
    }

    #[test]
    fn last_declaration_wins_on_collision() {
        let (file, _) = parse_source_file(
            "test.d.ts",
            "interface A { a: string; }\ninterface A { b: number; }",
        );
        let table = DeclarationTable::build(&file);
        assert_eq!(table.len(), 1);
        let Some(Declaration::Interface(decl)) = table.lookup("A") else {
            panic!("expected interface");
        };
        assert_eq!(decl.members[0].name.text(), "b");
    }
}
