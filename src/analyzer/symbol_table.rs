use thiserror::Error;

/// Fixed capacity of the symbol table.
pub const MAX_SYMBOLS: usize = 100;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("symbol table overflow: a program may use at most {MAX_SYMBOLS} variables")]
pub struct SymbolTableOverflow;

#[derive(Clone, Debug)]
struct Symbol {
    name: String,
    address: usize,
}

/// Flat name-to-address map, scoped to one compilation.
///
/// Storage addresses are handed out sequentially from 0 in order of first
/// appearance. Declaration is not enforced: resolving a name that was
/// never declared simply allocates its slot. Once assigned, an address
/// never changes.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the storage address for `name`, allocating the next
    /// sequential slot if the name has not been seen before.
    pub fn resolve(&mut self, name: &str) -> Result<usize, SymbolTableOverflow> {
        // linear scan; the table is small by construction
        if let Some(symbol) = self.symbols.iter().find(|s| s.name == name) {
            return Ok(symbol.address);
        }

        if self.symbols.len() >= MAX_SYMBOLS {
            return Err(SymbolTableOverflow);
        }

        let address = self.symbols.len();
        self.symbols.push(Symbol {
            name: name.to_string(),
            address,
        });
        Ok(address)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
