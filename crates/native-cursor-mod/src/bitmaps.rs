//! Pixel data for the custom cursors.
//!
//! Each cursor is drawn as 16x16 character art and doubled to the 32x32 RGBA
//! size native cursors are created at.

use once_cell::sync::Lazy;

pub const CURSOR_SIZE: usize = 32;

const ART_SIZE: usize = 16;
const SCALE: usize = CURSOR_SIZE / ART_SIZE;

/// A 32x32 RGBA8888 cursor image with its click point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorImage {
    pub pixels: Vec<u8>,
    pub hotspot_x: u32,
    pub hotspot_y: u32,
}

impl CursorImage {
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let start = (y * CURSOR_SIZE + x) * 4;

        [self.pixels[start], self.pixels[start + 1], self.pixels[start + 2], self.pixels[start + 3]]
    }
}

pub static SMART: Lazy<CursorImage> = Lazy::new(|| from_art(&SMART_ART, 0, 0));
pub static TRASH: Lazy<CursorImage> = Lazy::new(|| from_art(&TRASH_ART, 4, 2));
pub static FAVORITE: Lazy<CursorImage> = Lazy::new(|| from_art(&FAVORITE_ART, 0, 8));
pub static CHAT_SHARE: Lazy<CursorImage> = Lazy::new(|| from_art(&CHAT_SHARE_ART, 0, 2));
pub static SELL: Lazy<CursorImage> = Lazy::new(|| from_art(&SELL_ART, 2, 2));

fn palette(key: u8) -> [u8; 4] {
    match key {
        b'k' => [0, 0, 0, 255],
        b'w' => [255, 255, 255, 255],
        b'g' => [150, 150, 150, 255],
        b'd' => [96, 64, 40, 255],
        b'y' => [255, 215, 0, 255],
        b'o' => [230, 140, 20, 255],
        b'b' => [80, 140, 240, 255],
        b'p' => [170, 90, 230, 255],
        _ => [0, 0, 0, 0],
    }
}

fn from_art(art: &[&str; ART_SIZE], hotspot_x: u32, hotspot_y: u32) -> CursorImage {
    let mut pixels = vec![0; CURSOR_SIZE * CURSOR_SIZE * 4];

    for (row, line) in art.iter().enumerate() {
        for (column, key) in line.bytes().take(ART_SIZE).enumerate() {
            let color = palette(key);

            for dy in 0..SCALE {
                for dx in 0..SCALE {
                    let x = column * SCALE + dx;
                    let y = row * SCALE + dy;
                    let start = (y * CURSOR_SIZE + x) * 4;

                    pixels[start..start + 4].copy_from_slice(&color);
                }
            }
        }
    }

    CursorImage { pixels, hotspot_x, hotspot_y }
}

const SMART_ART: [&str; ART_SIZE] = [
    "kk..............",
    "kwk....y........",
    ".kwk..yyy.......",
    "..kpk..y........",
    "...kpk......y...",
    "....kdk.........",
    ".....kdk........",
    "......kdk.......",
    ".......kdk......",
    "........kdk.....",
    ".........kdk....",
    "..........kdk...",
    "...........kdk..",
    "............kdk.",
    ".............kk.",
    "................",
];

const TRASH_ART: [&str; ART_SIZE] = [
    "......kkkk......",
    ".....k....k.....",
    "..kkkkkkkkkkkk..",
    "..kwwwwwwwwwwk..",
    "..kkkkkkkkkkkk..",
    "...kgwgwgwgwk...",
    "...kgwgwgwgwk...",
    "...kgwgwgwgwk...",
    "...kgwgwgwgwk...",
    "...kgwgwgwgwk...",
    "...kgwgwgwgwk...",
    "...kgwgwgwgwk...",
    "...kgwgwgwgwk...",
    "...kggggggggk...",
    "....kkkkkkkk....",
    "................",
];

const FAVORITE_ART: [&str; ART_SIZE] = [
    ".......kk.......",
    "......kyyk......",
    "......kyyk......",
    ".....kyyyyk.....",
    "kkkkkkyyyykkkkkk",
    "kyyyyyyyyyyyyyyk",
    ".kyyyyyyyyyyyyk.",
    "..kyyyyyyyyyyk..",
    "...kyyyyyyyyk...",
    "...kyyyyyyyyk...",
    "..kyyyyyyyyyyk..",
    "..kyyyykkyyyyk..",
    ".kyyyk....kyyyk.",
    ".kyyk......kyyk.",
    "kkk..........kkk",
    "................",
];

const CHAT_SHARE_ART: [&str; ART_SIZE] = [
    "................",
    ".kkkkkkkkkkkkkk.",
    "kwwwwwwwwwwwwwwk",
    "kwwwwwwwwwwwwwwk",
    "kwwbbbbbbbbbbwwk",
    "kwwwwwwwwwwwwwwk",
    "kwwbbbbbbbbwwwwk",
    "kwwwwwwwwwwwwwwk",
    "kwwbbbbbbwwwwwwk",
    "kwwwwwwwwwwwwwwk",
    ".kkkwwkkkkkkkkk.",
    "...kwwk.........",
    "...kwk..........",
    "...kk...........",
    "................",
    "................",
];

const SELL_ART: [&str; ART_SIZE] = [
    "................",
    ".....kkkkkk.....",
    "...kkyyyyyykk...",
    "..kyyoooooyyyk..",
    "..kyoyyyyyyoyk..",
    ".kyoyyykkyyyoyk.",
    ".kyoyykyyyyyoyk.",
    ".kyoyyykkyyyoyk.",
    ".kyoyyyyykyyoyk.",
    ".kyoyykkkyyyoyk.",
    ".kyoyyyyyyyyoyk.",
    "..kyoyyyyyyoyk..",
    "..kyyoooooyyyk..",
    "...kkyyyyyykk...",
    ".....kkkkkk.....",
    "................",
];
