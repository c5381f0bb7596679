pub mod controller;
pub mod navigation;
pub mod playback_progress;
pub mod progress_timer;
