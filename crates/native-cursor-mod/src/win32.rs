use std::{ffi::c_void, mem, ptr};

use anyhow::anyhow;
use windows::Win32::{
    Foundation::FALSE,
    Graphics::Gdi::{CreateBitmap, CreateDIBSection, DeleteObject, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, DIB_RGB_COLORS},
    UI::{
        Input::KeyboardAndMouse::GetActiveWindow,
        WindowsAndMessaging::{
            CreateIconIndirect, LoadCursorW, SetClassLongPtrW, SetCursor, GCLP_HCURSOR, HCURSOR, ICONINFO, IDC_ARROW, IDC_CROSS, IDC_HAND, IDC_IBEAM, IDC_NO, IDC_SIZEALL, IDC_SIZENESW, IDC_SIZENS,
            IDC_SIZENWSE, IDC_SIZEWE,
        },
    },
};

use crate::{
    bitmaps::{CursorImage, CURSOR_SIZE},
    graphic::SystemShape,
    native::{CursorHandle, NativeCursorApi},
};

/// Cursors created and shown through user32.
#[derive(Debug, Default)]
pub struct Win32Cursors;

impl NativeCursorApi for Win32Cursors {
    fn create_system_cursor(&mut self, shape: SystemShape) -> anyhow::Result<CursorHandle> {
        let name = match shape {
            SystemShape::Arrow => IDC_ARROW,
            SystemShape::Hand => IDC_HAND,
            SystemShape::IBeam => IDC_IBEAM,
            SystemShape::No => IDC_NO,
            SystemShape::Crosshair => IDC_CROSS,
            SystemShape::SizeAll => IDC_SIZEALL,
            SystemShape::SizeNs => IDC_SIZENS,
            SystemShape::SizeWe => IDC_SIZEWE,
            SystemShape::SizeNwse => IDC_SIZENWSE,
            SystemShape::SizeNesw => IDC_SIZENESW,
        };

        let cursor = unsafe { LoadCursorW(None, name)? };

        Ok(CursorHandle(cursor.0 as isize))
    }

    fn create_image_cursor(&mut self, image: &CursorImage) -> anyhow::Result<CursorHandle> {
        let size = CURSOR_SIZE as i32;

        let header = BITMAPINFOHEADER {
            biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: size,
            biHeight: -size,
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        };

        let bitmap_info = BITMAPINFO { bmiHeader: header, bmiColors: [Default::default()] };

        unsafe {
            let mut bits: *mut c_void = ptr::null_mut();
            let color = CreateDIBSection(None, &bitmap_info, DIB_RGB_COLORS, &mut bits, None, 0)?;

            if bits.is_null() {
                let _ = DeleteObject(color);
                return Err(anyhow!("CreateDIBSection returned no pixel buffer"));
            }

            // DIB sections are BGRA.
            let target = std::slice::from_raw_parts_mut(bits as *mut u8, image.pixels.len());
            for (target, source) in target.chunks_exact_mut(4).zip(image.pixels.chunks_exact(4)) {
                target.copy_from_slice(&[source[2], source[1], source[0], source[3]]);
            }

            // An all-zero AND mask lets the alpha channel decide transparency.
            let mask_bits = [0u8; CURSOR_SIZE * CURSOR_SIZE / 8];
            let mask = CreateBitmap(size, size, 1, 1, Some(mask_bits.as_ptr() as *const c_void));

            let icon_info = ICONINFO {
                fIcon: FALSE,
                xHotspot: image.hotspot_x,
                yHotspot: image.hotspot_y,
                hbmMask: mask,
                hbmColor: color,
            };

            let icon = CreateIconIndirect(&icon_info);

            let _ = DeleteObject(color);
            let _ = DeleteObject(mask);

            Ok(CursorHandle(icon?.0 as isize))
        }
    }

    fn set_active_cursor(&mut self, handle: CursorHandle) {
        let cursor = HCURSOR(handle.0 as *mut c_void);

        unsafe {
            SetCursor(cursor);

            // Default WM_SETCURSOR handling restores the class cursor whenever the pointer moves.
            let window = GetActiveWindow();
            if !window.is_invalid() {
                SetClassLongPtrW(window, GCLP_HCURSOR, handle.0);
            }
        }
    }
}
