pub(crate) mod glyph_space;
pub(crate) mod path;
