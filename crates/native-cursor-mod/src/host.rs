use std::{
    ffi::c_void,
    ptr,
    sync::atomic::{AtomicUsize, Ordering},
};

use clap::Args;

/// Per-frame UI state read out of the host.
pub trait HostSignals {
    fn override_index(&self) -> i32;

    fn alternate_mode_active(&self) -> bool;
}

/// Keeps the host from drawing or hiding its own cursor while the mod is enabled.
pub trait CursorSuppressionHook {
    fn suppress(&mut self) -> anyhow::Result<()>;

    fn restore(&mut self) -> anyhow::Result<()>;
}

/// Demangled symbol names (matched as suffixes) of the host items the mod touches.
#[derive(Debug, Clone, Args)]
pub struct HostSymbols {
    #[arg(long, default_value = "draw_cursor")]
    pub draw_cursor_symbol: String,
    #[arg(long, default_value = "draw_interface_cursor")]
    pub draw_interface_cursor_symbol: String,
    #[arg(long, default_value = "set_mouse_visible")]
    pub set_mouse_visible_symbol: String,
    #[arg(long, default_value = "post_update_input")]
    pub post_update_input_symbol: String,
    #[arg(long, default_value = "return_to_main_menu")]
    pub return_to_main_menu_symbol: String,
    #[arg(long, default_value = "cursor_override")]
    pub cursor_override_symbol: String,
    #[arg(long, default_value = "smart_cursor_active")]
    pub smart_cursor_active_symbol: String,
}

/// Reads the host's cursor override and smart-cursor statics in place.
#[derive(Debug, Clone, Copy)]
pub struct HostMemory {
    cursor_override: usize,
    smart_cursor_active: usize,
}

impl HostMemory {
    /// # Safety
    ///
    /// Both addresses must point at live host statics (an `i32` and a one byte bool)
    /// for as long as this value is used.
    pub unsafe fn new(cursor_override: usize, smart_cursor_active: usize) -> Self {
        Self { cursor_override, smart_cursor_active }
    }
}

impl HostSignals for HostMemory {
    fn override_index(&self) -> i32 {
        unsafe { ptr::read_volatile(self.cursor_override as *const i32) }
    }

    fn alternate_mode_active(&self) -> bool {
        unsafe { ptr::read_volatile(self.smart_cursor_active as *const u8) != 0 }
    }
}

/// The host object the last hooked call was made on.
#[derive(Debug, Default)]
pub struct HostInstance(AtomicUsize);

impl HostInstance {
    pub const fn new() -> Self {
        Self(AtomicUsize::new(0))
    }

    pub fn remember(&self, host: *mut c_void) {
        self.0.store(host as usize, Ordering::Relaxed);
    }

    pub fn get(&self) -> Option<*mut c_void> {
        match self.0.load(Ordering::Relaxed) {
            0 => None,
            host => Some(host as *mut c_void),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_statics_in_place() {
        let cursor_override = Box::into_raw(Box::new(-1i32));
        let smart_cursor_active = Box::into_raw(Box::new(0u8));

        let memory = unsafe { HostMemory::new(cursor_override as usize, smart_cursor_active as usize) };

        assert_eq!(memory.override_index(), -1);
        assert!(!memory.alternate_mode_active());

        unsafe {
            *cursor_override = 7;
            *smart_cursor_active = 1;
        }

        assert_eq!(memory.override_index(), 7);
        assert!(memory.alternate_mode_active());

        unsafe {
            drop(Box::from_raw(cursor_override));
            drop(Box::from_raw(smart_cursor_active));
        }
    }

    #[test]
    fn host_instance_is_empty_until_seen() {
        let instance = HostInstance::new();
        let mut host = 0u64;

        assert_eq!(instance.get(), None);

        instance.remember(&mut host as *mut u64 as *mut c_void);
        assert_eq!(instance.get(), Some(&mut host as *mut u64 as *mut c_void));

        instance.remember(ptr::null_mut());
        assert_eq!(instance.get(), None);
    }
}
