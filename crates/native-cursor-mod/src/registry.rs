use anyhow::Context;
use tracing::debug;

use crate::{
    config::CursorConfig,
    graphic::{CursorGraphic, CursorSource},
    native::{CursorHandle, NativeCursorApi},
};

pub const SLOT_COUNT: usize = 11;

pub mod slot {
    pub const DEFAULT: usize = 0;
    pub const SMART: usize = 1;
    pub const CHAT_SHARE: usize = 2;
    pub const FAVORITE: usize = 3;
    pub const RESERVED: usize = 4;
    /// Unused by the host, kept pointing at quick trash for add-ons that set it directly.
    pub const QUICK_TRASH_ALIAS: usize = 5;
    pub const QUICK_TRASH: usize = 6;
    pub const UNEQUIP: usize = 7;
    pub const TRANSFER: usize = 8;
    pub const TRANSFER_ALIAS: usize = 9;
    pub const SELL: usize = 10;
}

/// One native handle for every [`CursorGraphic`].
#[derive(Debug, Clone)]
pub struct CursorRegistry {
    handles: [CursorHandle; CursorGraphic::COUNT],
}

impl CursorRegistry {
    pub fn initialize(api: &mut impl NativeCursorApi) -> anyhow::Result<Self> {
        let mut handles = [CursorHandle::default(); CursorGraphic::COUNT];

        for graphic in CursorGraphic::ALL {
            let handle = match graphic.source() {
                CursorSource::System(shape) => api.create_system_cursor(shape),
                CursorSource::Image(image) => api.create_image_cursor(image),
            }
            .with_context(|| format!("could not create native cursor: {graphic}"))?;

            debug!("Created {graphic} cursor: {handle:?}");

            handles[graphic.index()] = handle;
        }

        Ok(Self { handles })
    }

    pub fn get(&self, graphic: CursorGraphic) -> CursorHandle {
        self.handles[graphic.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable([CursorHandle; SLOT_COUNT]);

impl SlotTable {
    pub fn assign(registry: &CursorRegistry, config: &CursorConfig) -> Self {
        let assignment = [
            config.default,
            config.smart,
            config.chat_share,
            config.favorite,
            config.default,
            config.quick_trash,
            config.quick_trash,
            config.unequip,
            config.transfer,
            config.transfer,
            config.sell,
        ];

        Self(assignment.map(|graphic| registry.get(graphic)))
    }

    pub fn handle(&self, index: usize) -> CursorHandle {
        self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{graphic::SystemShape, native::testing::RecordingCursors};

    #[test]
    fn initialize_creates_every_graphic_once() {
        let mut api = RecordingCursors::default();
        let registry = CursorRegistry::initialize(&mut api).unwrap();

        assert_eq!(api.system.len() + api.images.len(), CursorGraphic::COUNT);
        assert_eq!(api.images.len(), 5);
        assert_eq!(Some(registry.get(CursorGraphic::Arrow)), api.system_handle(SystemShape::Arrow));
        assert_eq!(Some(registry.get(CursorGraphic::Forbidden)), api.system_handle(SystemShape::No));
        assert!(api.applied.is_empty());
    }

    #[test]
    fn image_failure_is_fatal_and_names_graphic() {
        let mut api = RecordingCursors::failing_images();

        let err = CursorRegistry::initialize(&mut api).unwrap_err();

        assert!(format!("{err:#}").contains("smart"), "{err:#}");
    }

    #[test]
    fn default_slots_follow_assignment_table() {
        let mut api = RecordingCursors::default();
        let registry = CursorRegistry::initialize(&mut api).unwrap();
        let slots = SlotTable::assign(&registry, &CursorConfig::default());

        let expected = [
            CursorGraphic::Arrow,
            CursorGraphic::Smart,
            CursorGraphic::ChatShare,
            CursorGraphic::Favorite,
            CursorGraphic::Arrow,
            CursorGraphic::Trash,
            CursorGraphic::Trash,
            CursorGraphic::Hand,
            CursorGraphic::Hand,
            CursorGraphic::Hand,
            CursorGraphic::Sell,
        ]
        .map(|graphic| registry.get(graphic));

        assert_eq!(slots, SlotTable(expected));
    }

    #[test]
    fn aliases_share_handles() {
        let mut api = RecordingCursors::default();
        let registry = CursorRegistry::initialize(&mut api).unwrap();
        let config = CursorConfig { quick_trash: CursorGraphic::Forbidden, transfer: CursorGraphic::Move, ..Default::default() };
        let slots = SlotTable::assign(&registry, &config);

        assert_eq!(slots.handle(slot::TRANSFER), slots.handle(slot::TRANSFER_ALIAS));
        assert_eq!(slots.handle(slot::TRANSFER), registry.get(CursorGraphic::Move));
        assert_eq!(slots.handle(slot::QUICK_TRASH_ALIAS), registry.get(CursorGraphic::Forbidden));
        assert_eq!(slots.handle(slot::QUICK_TRASH), registry.get(CursorGraphic::Forbidden));
        assert_eq!(slots.handle(slot::RESERVED), slots.handle(slot::DEFAULT));
    }
}
