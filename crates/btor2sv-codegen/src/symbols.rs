//! Generated names for translated nodes.

use crate::error::{Result, TranslateError};
use indexmap::IndexMap;

/// Role of a named node in the emitted module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Input,
    Output,
    State,
    Wire,
    WriteShadow,
}

#[derive(Debug, Clone)]
struct Symbol {
    name: String,
    kind: SymbolKind,
}

/// Single-assignment map from node id to generated name.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: IndexMap<u64, Symbol>,
}

impl SymbolTable {
    /// Bind a fresh name to an id. Ids are bound exactly once; a rebind
    /// indicates a malformed input stream.
    pub fn bind(&mut self, id: u64, name: String, kind: SymbolKind) -> Result<()> {
        if self.symbols.contains_key(&id) {
            return Err(TranslateError::DuplicateBinding(id));
        }
        self.symbols.insert(id, Symbol { name, kind });
        Ok(())
    }

    /// The expression text for a node reference, complemented when the
    /// referencing argument id was negative.
    pub fn resolve(&self, id: u64, negated: bool) -> Result<String> {
        let sym = self
            .symbols
            .get(&id)
            .ok_or(TranslateError::UnboundReference(id))?;
        if negated {
            Ok(format!("~{}", sym.name))
        } else {
            Ok(sym.name.clone())
        }
    }

    pub fn name_of(&self, id: u64) -> Result<&str> {
        self.symbols
            .get(&id)
            .map(|s| s.name.as_str())
            .ok_or(TranslateError::UnboundReference(id))
    }

    pub fn kind_of(&self, id: u64) -> Result<SymbolKind> {
        self.symbols
            .get(&id)
            .map(|s| s.kind)
            .ok_or(TranslateError::UnboundReference(id))
    }
}
