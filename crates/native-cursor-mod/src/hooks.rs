use std::{env, ffi::c_void};

use anyhow::Context;
use native_cursor_common::{host_address, host_base, transmute_function, PDB_VAR};
use parking_lot::Mutex;
use retour::static_detour;
use tracing::info;

use crate::{
    config::{ConfigWatcher, CursorConfig},
    host::{CursorSuppressionHook, HostInstance, HostMemory},
    offsets::{find_offsets, Offsets},
    selector::CursorManager,
    session::CursorSession,
    win32::Win32Cursors,
    Arguments,
};

static SESSION: Mutex<Option<CursorSession<Win32Cursors, HostMemory>>> = Mutex::new(None);
static SUPPRESSION: Mutex<Option<DetourSuppression>> = Mutex::new(None);
static HOST: HostInstance = HostInstance::new();

static_detour! {
    static DrawCursor: extern "C" fn(*mut c_void);
    static DrawInterfaceCursor: extern "C" fn(*mut c_void);
    static SetMouseVisible: extern "C" fn(*mut c_void, bool);
    static PostUpdateInput: extern "C" fn(*mut c_void);
    static ReturnToMainMenu: extern "C" fn(*mut c_void);
}

fn skip_draw(_host: *mut c_void) {}

fn force_mouse_visible(host: *mut c_void, _visible: bool) {
    HOST.remember(host);
    SetMouseVisible.call(host, true);
}

fn post_update_input(host: *mut c_void) {
    PostUpdateInput.call(host);

    if let Some(session) = SESSION.lock().as_mut() {
        session.frame();
    }
}

fn return_to_main_menu(host: *mut c_void) {
    ReturnToMainMenu.call(host);

    if let Some(session) = SESSION.lock().as_mut() {
        session.leave_world();
    }
}

/// Swaps the host's cursor drawing for no-ops and pins its mouse visibility on.
///
/// Static detours can only be initialized once, so suppression is one-shot per process.
pub struct DetourSuppression {
    base: isize,
    offsets: Offsets,
}

impl CursorSuppressionHook for DetourSuppression {
    fn suppress(&mut self) -> anyhow::Result<()> {
        unsafe {
            DrawCursor
                .initialize(transmute_function(self.base, self.offsets.draw_cursor), skip_draw)?
                .enable()?;
            DrawInterfaceCursor
                .initialize(transmute_function(self.base, self.offsets.draw_interface_cursor), skip_draw)?
                .enable()?;
            SetMouseVisible
                .initialize(transmute_function(self.base, self.offsets.set_mouse_visible), force_mouse_visible)?
                .enable()?;
        }

        info!("Suppressed host cursor drawing");

        Ok(())
    }

    fn restore(&mut self) -> anyhow::Result<()> {
        unsafe {
            if DrawCursor.is_enabled() {
                DrawCursor.disable()?;
            }

            if DrawInterfaceCursor.is_enabled() {
                DrawInterfaceCursor.disable()?;
            }

            if SetMouseVisible.is_enabled() {
                SetMouseVisible.disable()?;
            }
        }

        // Hand the cursor back hidden, the way the host had it before suppression.
        if let Some(host) = HOST.get() {
            SetMouseVisible.call(host, false);
        }

        info!("Restored host cursor drawing");

        Ok(())
    }
}

pub fn enable(arguments: Arguments) -> anyhow::Result<()> {
    let pdb_path = env::var(PDB_VAR).with_context(|| format!("{PDB_VAR} is not set"))?;

    let offsets = find_offsets(&pdb_path, &arguments.symbols)?;
    let base = host_base()?;

    let config = CursorConfig::load(arguments.config.as_deref())?;
    let manager = CursorManager::initialize(Win32Cursors, &config)?;

    let signals = unsafe {
        HostMemory::new(host_address(base, offsets.cursor_override), host_address(base, offsets.smart_cursor_active))
    };

    let watcher = arguments.config.map(|path| ConfigWatcher::watch(path, config)).transpose()?;

    SESSION.lock().replace(CursorSession::new(manager, signals, config, watcher));

    SUPPRESSION.lock().insert(DetourSuppression { base, offsets }).suppress()?;

    unsafe {
        PostUpdateInput
            .initialize(transmute_function(base, offsets.post_update_input), post_update_input)?
            .enable()?;
        ReturnToMainMenu
            .initialize(transmute_function(base, offsets.return_to_main_menu), return_to_main_menu)?
            .enable()?;
    }

    info!("Native cursor enabled");

    Ok(())
}

pub fn disable() -> anyhow::Result<()> {
    unsafe {
        if PostUpdateInput.is_enabled() {
            PostUpdateInput.disable()?;
        }

        if ReturnToMainMenu.is_enabled() {
            ReturnToMainMenu.disable()?;
        }
    }

    if let Some(mut suppression) = SUPPRESSION.lock().take() {
        suppression.restore()?;
    }

    if let Some(mut session) = SESSION.lock().take() {
        session.release();
    }

    info!("Native cursor disabled");

    Ok(())
}
