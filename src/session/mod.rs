pub(crate) mod playback;
