//! Floor glyphs for the viewer

use strum::{Display, EnumString};

/// Available glyph styles for floor cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GlyphMode {
    /// Plain ASCII dot
    #[default]
    Classic,
    /// Unicode middle dot
    Fancy,
}

impl GlyphMode {
    /// Character painted for a floor cell
    pub fn floor_char(self) -> char {
        match self {
            GlyphMode::Classic => '.',
            GlyphMode::Fancy => '·',
        }
    }
}
