// Ring geometry for the circular overall-progress indicator

/// Angular sweep for a completion percentage: `percentage / 100 * 360`
/// degrees. Rendering consumes this; the conversion itself is pure.
pub fn sweep_angle(percentage: u8) -> f64 {
    percentage as f64 / 100.0 * 360.0
}

/// Quarter-resolution ring glyph for terminal rendering
pub fn ring_glyph(percentage: u8) -> char {
    match percentage {
        0..=12 => '○',
        13..=37 => '◔',
        38..=62 => '◑',
        63..=87 => '◕',
        _ => '●',
    }
}
