pub mod library;
pub mod media;
pub mod playback;
pub mod storage;
pub mod ui;
