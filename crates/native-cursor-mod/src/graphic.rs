use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::bitmaps::{self, CursorImage};

/// Shapes the operating system ships a cursor for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemShape {
    Arrow,
    Hand,
    IBeam,
    No,
    Crosshair,
    SizeAll,
    SizeNs,
    SizeWe,
    SizeNwse,
    SizeNesw,
}

/// Where the pixels of a [`CursorGraphic`] come from.
#[derive(Debug, Clone, Copy)]
pub enum CursorSource {
    System(SystemShape),
    Image(&'static CursorImage),
}

/// Every cursor appearance the mod can put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorGraphic {
    Arrow,
    Hand,
    IBeam,
    Forbidden,
    Crosshair,
    Move,
    ResizeVertical,
    ResizeHorizontal,
    ResizeDiagonalNwse,
    ResizeDiagonalNesw,
    Smart,
    Trash,
    Favorite,
    ChatShare,
    Sell,
}

impl CursorGraphic {
    pub const COUNT: usize = 15;

    pub const ALL: [CursorGraphic; Self::COUNT] = [
        CursorGraphic::Arrow,
        CursorGraphic::Hand,
        CursorGraphic::IBeam,
        CursorGraphic::Forbidden,
        CursorGraphic::Crosshair,
        CursorGraphic::Move,
        CursorGraphic::ResizeVertical,
        CursorGraphic::ResizeHorizontal,
        CursorGraphic::ResizeDiagonalNwse,
        CursorGraphic::ResizeDiagonalNesw,
        CursorGraphic::Smart,
        CursorGraphic::Trash,
        CursorGraphic::Favorite,
        CursorGraphic::ChatShare,
        CursorGraphic::Sell,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn source(self) -> CursorSource {
        match self {
            CursorGraphic::Arrow => CursorSource::System(SystemShape::Arrow),
            CursorGraphic::Hand => CursorSource::System(SystemShape::Hand),
            CursorGraphic::IBeam => CursorSource::System(SystemShape::IBeam),
            CursorGraphic::Forbidden => CursorSource::System(SystemShape::No),
            CursorGraphic::Crosshair => CursorSource::System(SystemShape::Crosshair),
            CursorGraphic::Move => CursorSource::System(SystemShape::SizeAll),
            CursorGraphic::ResizeVertical => CursorSource::System(SystemShape::SizeNs),
            CursorGraphic::ResizeHorizontal => CursorSource::System(SystemShape::SizeWe),
            CursorGraphic::ResizeDiagonalNwse => CursorSource::System(SystemShape::SizeNwse),
            CursorGraphic::ResizeDiagonalNesw => CursorSource::System(SystemShape::SizeNesw),
            CursorGraphic::Smart => CursorSource::Image(&bitmaps::SMART),
            CursorGraphic::Trash => CursorSource::Image(&bitmaps::TRASH),
            CursorGraphic::Favorite => CursorSource::Image(&bitmaps::FAVORITE),
            CursorGraphic::ChatShare => CursorSource::Image(&bitmaps::CHAT_SHARE),
            CursorGraphic::Sell => CursorSource::Image(&bitmaps::SELL),
        }
    }

    pub fn is_custom(self) -> bool {
        matches!(self.source(), CursorSource::Image(_))
    }
}

impl fmt::Display for CursorGraphic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}
