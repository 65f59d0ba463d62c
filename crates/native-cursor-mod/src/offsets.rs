use std::path::Path;

use anyhow::anyhow;
use native_cursor_common::pdb_utils::{find_offset, load_pdb, symbol_matches, LoadedPdb, SymbolKind};
use tracing::debug;

use crate::host::HostSymbols;

/// RVAs of everything the mod hooks or reads in the host executable.
#[derive(Debug, Clone, Copy)]
pub struct Offsets {
    pub draw_cursor: isize,
    pub draw_interface_cursor: isize,
    pub set_mouse_visible: isize,
    pub post_update_input: isize,
    pub return_to_main_menu: isize,
    pub cursor_override: isize,
    pub smart_cursor_active: isize,
}

pub fn find_offsets(pdb_path: impl AsRef<Path>, symbols: &HostSymbols) -> anyhow::Result<Offsets> {
    let pdb = load_pdb(pdb_path.as_ref())?;

    Ok(Offsets {
        draw_cursor: require(&pdb, SymbolKind::Function, &symbols.draw_cursor_symbol)?,
        draw_interface_cursor: require(&pdb, SymbolKind::Function, &symbols.draw_interface_cursor_symbol)?,
        set_mouse_visible: require(&pdb, SymbolKind::Function, &symbols.set_mouse_visible_symbol)?,
        post_update_input: require(&pdb, SymbolKind::Function, &symbols.post_update_input_symbol)?,
        return_to_main_menu: require(&pdb, SymbolKind::Function, &symbols.return_to_main_menu_symbol)?,
        cursor_override: require(&pdb, SymbolKind::Data, &symbols.cursor_override_symbol)?,
        smart_cursor_active: require(&pdb, SymbolKind::Data, &symbols.smart_cursor_active_symbol)?,
    })
}

fn require(pdb: &LoadedPdb<'_>, kind: SymbolKind, symbol: &str) -> anyhow::Result<isize> {
    let offset = find_offset(kind, |name| symbol_matches(name, symbol), pdb)?
        .ok_or(anyhow!("could not find offset: {symbol}"))?;

    debug!("{symbol}: {offset:#x}");

    Ok(offset)
}
