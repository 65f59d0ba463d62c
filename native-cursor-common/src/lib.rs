pub mod pdb_utils;

/// Where the launcher listens for the mod's log stream.
pub const LOG_RELAY_ADDRESS: &str = "127.0.0.1:8996";

/// Shell-quoted mod arguments, handed from the launcher to the injected library.
pub const ARGUMENTS_VAR: &str = "NATIVE_CURSOR_ARGUMENTS";

/// Path of the host's program database.
pub const PDB_VAR: &str = "NATIVE_CURSOR_PDB";

/// Base address of the host executable in the current process.
#[cfg(windows)]
pub fn host_base() -> anyhow::Result<isize> {
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;

    let module = unsafe { GetModuleHandleW(None)? };

    Ok(module.0 as isize)
}

pub fn host_address(base: isize, offset: isize) -> usize {
    base.wrapping_add(offset) as usize
}

/// # Safety
///
/// `offset` must be the RVA of a host function whose signature matches `F`.
#[cfg(windows)]
pub unsafe fn transmute_function<F: retour::Function>(base: isize, offset: isize) -> F {
    F::from_ptr(host_address(base, offset) as *const ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_base_plus_rva() {
        assert_eq!(host_address(0x7ff6_0000_0000, 0x1234), 0x7ff6_0000_1234);
    }
}
