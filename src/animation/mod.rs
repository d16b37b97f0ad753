pub(crate) mod animator;
pub(crate) mod ease;
pub(crate) mod glyph;
pub(crate) mod scheduler;
pub(crate) mod state;
