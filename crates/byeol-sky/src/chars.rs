//! Character ramps for the sky animations.

/// Star glyphs, indexed by radius from smallest to largest.
pub const STAR_CHARS: &[char] = &['·', '.', '+', '*', '✦'];

/// Pointer link glyphs, indexed by link opacity.
pub const LINK_CHARS: &[char] = &['·', '∙', '•'];

/// Meteor trail glyphs for wide strokes, indexed by trail opacity.
pub const METEOR_BOLD_CHARS: &[char] = &['░', '▒', '▓', '█'];

/// Meteor trail glyphs for narrow strokes, indexed by trail opacity.
pub const METEOR_FAINT_CHARS: &[char] = &['·', '∙', '•', '●'];

/// Pick a glyph from a ramp by a value in [0, 1].
pub fn ramp(chars: &[char], value: f32) -> char {
    let idx = (value.clamp(0.0, 1.0) * chars.len() as f32) as usize;
    chars[idx.min(chars.len() - 1)]
}
