use tracing::{debug, info};

use crate::{
    config::CursorConfig,
    graphic::CursorGraphic,
    native::NativeCursorApi,
    registry::{slot, CursorRegistry, SlotTable, SLOT_COUNT},
};

/// Maps the host's cursor override and smart-cursor flag to a slot index.
pub fn resolve_slot(override_index: i32, alternate_mode_active: bool) -> usize {
    let index = if override_index <= slot::SMART as i32 && alternate_mode_active {
        slot::SMART as i32
    } else {
        override_index
    };

    match usize::try_from(index) {
        Ok(index) if index < SLOT_COUNT => index,
        _ => slot::DEFAULT,
    }
}

/// Owns the native cursors and remembers which slot the OS is showing.
#[derive(Debug)]
pub struct CursorManager<A> {
    api: A,
    registry: CursorRegistry,
    slots: SlotTable,
    active_slot: usize,
}

impl<A: NativeCursorApi> CursorManager<A> {
    pub fn initialize(mut api: A, config: &CursorConfig) -> anyhow::Result<Self> {
        let registry = CursorRegistry::initialize(&mut api)?;
        let slots = SlotTable::assign(&registry, config);

        let mut manager = Self { api, registry, slots, active_slot: slot::DEFAULT };
        manager.apply(slot::DEFAULT);

        info!("Native cursors ready");

        Ok(manager)
    }

    /// Reassigns every slot from `config` and puts the default cursor back on screen.
    pub fn rebuild(&mut self, config: &CursorConfig) {
        self.slots = SlotTable::assign(&self.registry, config);
        self.apply(slot::DEFAULT);
    }

    pub fn select_frame(&mut self, override_index: i32, alternate_mode_active: bool) {
        let index = resolve_slot(override_index, alternate_mode_active);

        if index == self.active_slot {
            return;
        }

        self.apply(index);
    }

    /// Drops back to the default slot, whatever the host currently signals.
    pub fn reset(&mut self) {
        if self.active_slot != slot::DEFAULT {
            self.apply(slot::DEFAULT);
        }
    }

    pub fn release(&mut self) {
        self.api.set_active_cursor(self.registry.get(CursorGraphic::Arrow));
        self.active_slot = slot::DEFAULT;
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }

    pub fn registry(&self) -> &CursorRegistry {
        &self.registry
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn apply(&mut self, index: usize) {
        debug!("Cursor slot {} -> {index}", self.active_slot);

        self.active_slot = index;
        self.api.set_active_cursor(self.slots.handle(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::testing::RecordingCursors;

    fn manager() -> CursorManager<RecordingCursors> {
        CursorManager::initialize(RecordingCursors::default(), &CursorConfig::default()).unwrap()
    }

    #[test]
    fn out_of_range_resolves_to_default() {
        for index in [-100, -1, 11, 12, i32::MAX, i32::MIN] {
            assert_eq!(resolve_slot(index, false), slot::DEFAULT, "{index}");
        }

        for index in [11, 500, i32::MAX] {
            assert_eq!(resolve_slot(index, true), slot::DEFAULT, "{index}");
        }
    }

    #[test]
    fn alternate_mode_wins_at_or_below_smart() {
        for index in [i32::MIN, -1, 0, 1] {
            assert_eq!(resolve_slot(index, true), slot::SMART, "{index}");
        }
    }

    #[test]
    fn overrides_above_smart_beat_alternate_mode() {
        assert_eq!(resolve_slot(2, true), slot::CHAT_SHARE);
        assert_eq!(resolve_slot(10, true), slot::SELL);
    }

    #[test]
    fn reserved_slot_five_is_quick_trash() {
        let mut manager = manager();

        assert_eq!(resolve_slot(5, false), 5);

        manager.select_frame(5, false);

        assert_eq!(manager.active_slot(), 5);
        assert_eq!(manager.api().applied.last().copied(), Some(manager.registry().get(CursorGraphic::Trash)));
    }

    #[test]
    fn initialize_applies_default_once() {
        let manager = manager();

        assert_eq!(manager.active_slot(), slot::DEFAULT);
        assert_eq!(manager.api().applied, vec![manager.registry().get(CursorGraphic::Arrow)]);
    }

    #[test]
    fn repeated_frames_set_cursor_once() {
        let mut manager = manager();

        manager.select_frame(1, true);
        manager.select_frame(1, true);
        manager.select_frame(-1, true);

        assert_eq!(manager.api().applied.len(), 2);
        assert_eq!(manager.api().applied[1], manager.registry().get(CursorGraphic::Smart));
    }

    #[test]
    fn default_frames_never_touch_the_cursor() {
        let mut manager = manager();

        manager.select_frame(-1, false);
        manager.select_frame(0, false);
        manager.select_frame(42, false);

        assert_eq!(manager.active_slot(), slot::DEFAULT);
        assert_eq!(manager.api().applied.len(), 1);
    }

    #[test]
    fn reset_returns_to_default() {
        let mut manager = manager();

        manager.select_frame(0, true);
        assert_eq!(manager.active_slot(), slot::SMART);

        manager.reset();

        assert_eq!(manager.active_slot(), slot::DEFAULT);
        assert_eq!(manager.api().applied.last().copied(), Some(manager.registry().get(CursorGraphic::Arrow)));
        assert_eq!(manager.api().applied.len(), 3);
    }

    #[test]
    fn reset_at_default_is_silent() {
        let mut manager = manager();

        manager.reset();

        assert_eq!(manager.api().applied.len(), 1);
    }

    #[test]
    fn rebuild_reapplies_new_default() {
        let mut manager = manager();

        manager.select_frame(1, true);

        let config = CursorConfig { default: CursorGraphic::Crosshair, transfer: CursorGraphic::Sell, ..Default::default() };
        manager.rebuild(&config);

        let crosshair = manager.registry().get(CursorGraphic::Crosshair);

        assert_eq!(manager.active_slot(), slot::DEFAULT);
        assert_eq!(manager.slots().handle(slot::DEFAULT), crosshair);
        assert_eq!(manager.api().applied.last().copied(), Some(crosshair));
        assert_eq!(manager.slots().handle(slot::TRANSFER), manager.slots().handle(slot::TRANSFER_ALIAS));
    }

    #[test]
    fn release_shows_system_arrow() {
        let config = CursorConfig { default: CursorGraphic::Crosshair, ..Default::default() };
        let mut manager = CursorManager::initialize(RecordingCursors::default(), &config).unwrap();

        manager.select_frame(6, false);
        manager.release();

        assert_eq!(manager.active_slot(), slot::DEFAULT);
        assert_eq!(manager.api().applied.last().copied(), Some(manager.registry().get(CursorGraphic::Arrow)));
    }
}
