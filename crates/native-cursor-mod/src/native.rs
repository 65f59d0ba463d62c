use crate::{bitmaps::CursorImage, graphic::SystemShape};

/// Opaque handle to a cursor the operating system has loaded.
///
/// Handles are created once and live until the process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CursorHandle(pub isize);

pub trait NativeCursorApi {
    fn create_system_cursor(&mut self, shape: SystemShape) -> anyhow::Result<CursorHandle>;

    fn create_image_cursor(&mut self, image: &CursorImage) -> anyhow::Result<CursorHandle>;

    fn set_active_cursor(&mut self, handle: CursorHandle);
}
