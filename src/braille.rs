//! Packs a binary pixel grid into Unicode Braille Patterns (U+2800..=U+28FF).
//!
//! Each glyph covers a 2-wide × 4-tall pixel block. The block maps onto the
//! standard Braille dot numbering, where dots 1,2,3,7 are the left column
//! top-to-bottom and dots 4,5,6,8 the right column:
//!
//! ```text
//!  1 4        bit 0 -> (0,0)   bit 4 -> (1,1)
//!  2 5        bit 1 -> (0,1)   bit 5 -> (1,2)
//!  3 6        bit 2 -> (0,2)   bit 6 -> (0,3)
//!  7 8        bit 3 -> (1,0)   bit 7 -> (1,3)
//! ```
//!
//! The code point is `0x2800 | mask`, so the glyph block doubles as a lookup
//! table indexed by the raw dot mask.

use crate::core::PixelGrid;

pub const BRAILLE_BASE: u32 = 0x2800;

/// Pixel offset within a block for each mask bit, LSB first.
const DOT_OFFSETS: [(u32, u32); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (0, 3),
    (1, 3),
];

/// Glyph for a raw 8-dot mask.
pub const fn glyph_for_mask(mask: u8) -> char {
    // 0x2800 + u8 stays inside the Braille block, so this cannot fail.
    match char::from_u32(BRAILLE_BASE + mask as u32) {
        Some(c) => c,
        None => ' ',
    }
}

fn block_mask(grid: &PixelGrid, bx: u32, by: u32) -> u8 {
    let mut mask = 0u8;
    for (bit, &(dx, dy)) in DOT_OFFSETS.iter().enumerate() {
        if grid.is_lit(bx + dx, by + dy) {
            mask |= 1 << bit;
        }
    }
    mask
}

/// Encode a whole grid as newline-joined rows of Braille glyphs.
///
/// One glyph per 2×4 block, row-major; offsets that fall outside the grid
/// read as background, so widths/heights that are not multiples of the block
/// size produce a well-defined partial edge. Pure: identical grids always
/// yield identical text. A zero-sized grid yields an empty string.
pub fn encode_frame(grid: &PixelGrid) -> String {
    if grid.width() == 0 || grid.height() == 0 {
        return String::new();
    }

    let cols = grid.width().div_ceil(2) as usize;
    let rows = grid.height().div_ceil(4) as usize;
    // Braille glyphs are 3 bytes in UTF-8, plus one newline per row.
    let mut text = String::with_capacity(rows * (cols * 3 + 1));

    for by in (0..grid.height()).step_by(4) {
        for bx in (0..grid.width()).step_by(2) {
            text.push(glyph_for_mask(block_mask(grid, bx, by)));
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_lit(width: u32, height: u32, lit: &[(u32, u32)]) -> PixelGrid {
        let mut bits = vec![false; width as usize * height as usize];
        for &(x, y) in lit {
            bits[y as usize * width as usize + x as usize] = true;
        }
        PixelGrid::from_bits(width, height, bits).unwrap()
    }

    #[test]
    fn blank_block_is_u2800() {
        let grid = grid_with_lit(2, 4, &[]);
        assert_eq!(encode_frame(&grid), "\u{2800}\n");
    }

    #[test]
    fn full_block_is_u28ff() {
        let lit: Vec<(u32, u32)> = (0..2).flat_map(|x| (0..4).map(move |y| (x, y))).collect();
        let grid = grid_with_lit(2, 4, &lit);
        assert_eq!(encode_frame(&grid), "\u{28FF}\n");
    }

    #[test]
    fn each_dot_maps_to_its_own_bit() {
        let expected: [((u32, u32), u32); 8] = [
            ((0, 0), 1 << 0),
            ((0, 1), 1 << 1),
            ((0, 2), 1 << 2),
            ((1, 0), 1 << 3),
            ((1, 1), 1 << 4),
            ((1, 2), 1 << 5),
            ((0, 3), 1 << 6),
            ((1, 3), 1 << 7),
        ];
        for (offset, bit) in expected {
            let grid = grid_with_lit(2, 4, &[offset]);
            let text = encode_frame(&grid);
            let glyph = text.chars().next().unwrap();
            assert_eq!(
                glyph as u32 - BRAILLE_BASE,
                bit,
                "offset {offset:?} should set bit value {bit:#04x}"
            );
        }
    }

    #[test]
    fn partial_edge_blocks_clip_to_background() {
        // Width 3: the second block only covers x == 2; its right column
        // (x == 3) is off-grid and must stay unset.
        let lit: Vec<(u32, u32)> = (0..4).map(|y| (2, y)).collect();
        let grid = grid_with_lit(3, 4, &lit);
        let text = encode_frame(&grid);

        let glyphs: Vec<char> = text.trim_end_matches('\n').chars().collect();
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0], '\u{2800}');
        // Left column fully lit: dots 1,2,3,7 = bits 0,1,2,6.
        assert_eq!(glyphs[1] as u32 - BRAILLE_BASE, 0b0100_0111);
    }

    #[test]
    fn line_and_glyph_counts_round_up() {
        let grid = grid_with_lit(5, 6, &[]);
        let text = encode_frame(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2); // ceil(6/4)
        for line in lines {
            assert_eq!(line.chars().count(), 3); // ceil(5/2)
        }
    }

    #[test]
    fn degenerate_grids_encode_to_empty_text() {
        for (w, h) in [(0, 0), (0, 8), (8, 0)] {
            let grid = PixelGrid::from_bits(w, h, Vec::new()).unwrap();
            assert_eq!(encode_frame(&grid), "", "{w}x{h}");
        }
    }

    #[test]
    fn encode_is_deterministic() {
        let lit = [(0, 0), (3, 2), (7, 7), (2, 5)];
        let grid = grid_with_lit(9, 10, &lit);
        assert_eq!(encode_frame(&grid), encode_frame(&grid));
    }
}
