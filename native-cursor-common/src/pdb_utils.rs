use std::{fs::File, io::BufReader, path::Path};

use anyhow::anyhow;
use pdb::{AddressMap, FallibleIterator, SymbolTable, PDB};
use rustc_demangle::demangle;

pub struct LoadedPdb<'s> {
    _pdb: PDB<'s, BufReader<File>>,
    symbol_table: SymbolTable<'s>,
    address_map: AddressMap<'s>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Data,
}

pub fn load_pdb<'p>(path: &'p Path) -> anyhow::Result<LoadedPdb<'p>> {
    let file = BufReader::new(File::open(path)?);

    let mut pdb = pdb::PDB::open(file)?;

    let symbol_table = pdb.global_symbols()?;
    let address_map = pdb.address_map()?;

    Ok(LoadedPdb { _pdb: pdb, symbol_table, address_map })
}

/// RVA of the first public symbol of `kind` whose demangled name satisfies `predicate`.
pub fn find_offset<'s>(kind: SymbolKind, mut predicate: impl FnMut(&str) -> bool, pdb: &LoadedPdb<'s>) -> anyhow::Result<Option<isize>> {
    let mut symbols = pdb.symbol_table.iter();

    while let Some(symbol) = symbols.next()? {
        match symbol.parse() {
            Ok(pdb::SymbolData::Public(data)) if data.function == (kind == SymbolKind::Function) => {
                let name = demangle(&data.name.to_string()).to_string();

                if predicate(&name) {
                    return Ok(Some(data.offset.to_rva(&pdb.address_map).ok_or(anyhow!("could not compute offset of {name}"))?.0 as isize));
                }
            },
            _ => {},
        }
    }

    Ok(None)
}

/// Matches demangled names by their last path segments, ignoring any trailing `::h<hash>`.
pub fn symbol_matches(name: &str, symbol: &str) -> bool {
    let name = match name.rsplit_once("::h") {
        Some((path, hash)) if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) => path,
        _ => name,
    };

    name == symbol || name.ends_with(&format!("::{symbol}"))
}
