use tracing::info;

use crate::{
    config::{ConfigWatcher, CursorConfig},
    host::HostSignals,
    native::NativeCursorApi,
    selector::CursorManager,
};

/// Everything the frame and menu hooks need between calls.
#[derive(Debug)]
pub struct CursorSession<A, S> {
    manager: CursorManager<A>,
    signals: S,
    config: CursorConfig,
    watcher: Option<ConfigWatcher>,
    applied_on_frame_thread: bool,
}

impl<A: NativeCursorApi, S: HostSignals> CursorSession<A, S> {
    pub fn new(manager: CursorManager<A>, signals: S, config: CursorConfig, watcher: Option<ConfigWatcher>) -> Self {
        Self { manager, signals, config, watcher, applied_on_frame_thread: false }
    }

    pub fn frame(&mut self) {
        if let Some(config) = self.watcher.as_mut().and_then(ConfigWatcher::poll) {
            info!("Rebuilding cursor slots");
            self.config = config;
            self.manager.rebuild(&self.config);
            self.applied_on_frame_thread = true;
        }

        // The OS cursor belongs to the thread that sets it, so the default goes on again from the frame thread.
        if !self.applied_on_frame_thread {
            self.manager.rebuild(&self.config);
            self.applied_on_frame_thread = true;
        }

        self.manager.select_frame(self.signals.override_index(), self.signals.alternate_mode_active());
    }

    pub fn leave_world(&mut self) {
        self.manager.reset();
    }

    pub fn release(&mut self) {
        self.manager.release();
    }

    pub fn manager(&self) -> &CursorManager<A> {
        &self.manager
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, fs, sync::mpsc};

    use tempfile::TempDir;

    use super::*;
    use crate::{graphic::CursorGraphic, native::testing::RecordingCursors, registry::slot};

    #[derive(Debug, Default)]
    struct FakeHost {
        override_index: Cell<i32>,
        smart: Cell<bool>,
    }

    impl HostSignals for &FakeHost {
        fn override_index(&self) -> i32 {
            self.override_index.get()
        }

        fn alternate_mode_active(&self) -> bool {
            self.smart.get()
        }
    }

    fn session(host: &FakeHost, watcher: Option<ConfigWatcher>) -> CursorSession<RecordingCursors, &FakeHost> {
        let config = watcher.as_ref().map(ConfigWatcher::applied).unwrap_or_default();
        let manager = CursorManager::initialize(RecordingCursors::default(), &config).unwrap();

        CursorSession::new(manager, host, config, watcher)
    }

    #[test]
    fn first_frame_reapplies_default() {
        let host = FakeHost::default();
        let mut session = session(&host, None);

        session.frame();
        session.frame();

        let arrow = session.manager().registry().get(CursorGraphic::Arrow);
        assert_eq!(session.manager().api().applied, vec![arrow, arrow]);
    }

    #[test]
    fn frames_follow_host_signals() {
        let host = FakeHost::default();
        let mut session = session(&host, None);

        session.frame();

        host.override_index.set(6);
        session.frame();
        assert_eq!(session.manager().active_slot(), slot::QUICK_TRASH);

        host.override_index.set(-1);
        host.smart.set(true);
        session.frame();
        assert_eq!(session.manager().active_slot(), slot::SMART);
    }

    #[test]
    fn leaving_world_clears_stuck_smart_cursor() {
        let host = FakeHost::default();
        let mut session = session(&host, None);

        host.smart.set(true);
        session.frame();

        session.leave_world();

        assert_eq!(session.manager().active_slot(), slot::DEFAULT);
    }

    #[test]
    fn config_change_rebuilds_slots() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cursors.toml");

        let host = FakeHost::default();
        let (tx, rx) = mpsc::channel();
        let watcher = ConfigWatcher::from_channel(&path, rx, CursorConfig::default());
        let mut session = session(&host, Some(watcher));

        session.frame();

        fs::write(&path, r#"default = "crosshair""#).unwrap();
        session.frame();

        let arrow = session.manager().registry().get(CursorGraphic::Arrow);
        assert_eq!(session.manager().slots().handle(slot::DEFAULT), arrow);

        tx.send(()).unwrap();
        session.frame();

        let crosshair = session.manager().registry().get(CursorGraphic::Crosshair);
        assert_eq!(session.manager().slots().handle(slot::DEFAULT), crosshair);
        assert_eq!(session.manager().api().applied.last().copied(), Some(crosshair));
    }
}
