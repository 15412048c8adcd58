#![forbid(unsafe_code)]

pub mod braille;
pub mod config;
pub mod core;
pub mod error;
pub mod frames;
pub mod load;
pub mod pace;
pub mod playback;
pub mod term;

pub use braille::{encode_frame, glyph_for_mask};
pub use config::PlaybackOptions;
pub use core::{Fps, FrameIndex, PixelGrid, Resolution};
pub use error::{DotreelError, DotreelResult};
pub use frames::discover_frames;
pub use load::ImageLoader;
pub use pace::{Clock, FramePacer, FrameStart, MonotonicClock, POLL_INTERVAL};
pub use playback::{
    FrameLoader, FrameObserver, FrameReport, FrameSink, PlaybackStats, play_frames,
    play_frames_observed,
};
pub use term::AnsiTerminal;
