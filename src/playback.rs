use std::path::{Path, PathBuf};

use crate::{
    braille::encode_frame,
    config::PlaybackOptions,
    core::{FrameIndex, PixelGrid},
    error::DotreelResult,
    pace::{Clock, FramePacer},
};

/// Produces a binarized grid for one frame source. Implemented by
/// [`ImageLoader`](crate::ImageLoader); tests substitute synthetic loaders.
pub trait FrameLoader {
    fn load(&mut self, source: &Path) -> DotreelResult<PixelGrid>;
}

/// Receives each fully-encoded frame exactly once, in playback order.
pub trait FrameSink {
    fn present(&mut self, text: &str) -> DotreelResult<()>;
}

/// Counters for a completed playback session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    pub frames_emitted: u64,
}

/// Per-frame diagnostic snapshot handed to the observer after emission.
/// Informational only; observers must not be used to steer playback.
#[derive(Debug)]
pub struct FrameReport<'a> {
    pub index: FrameIndex,
    pub source: &'a Path,
    pub accumulator_secs: f64,
}

pub type FrameObserver<'a> = &'a mut dyn FnMut(&FrameReport<'_>);

/// Play an ordered sequence of frame sources at the configured rate.
///
/// Strictly sequential per frame: load → encode → wait out the frame budget →
/// present. A load or present failure halts playback and propagates; no frame
/// is retried, substituted, or skipped, so the output never desynchronizes
/// from the intended animation length. An empty sequence completes
/// immediately.
pub fn play_frames(
    sources: &[PathBuf],
    options: &PlaybackOptions,
    loader: &mut dyn FrameLoader,
    sink: &mut dyn FrameSink,
    clock: &dyn Clock,
) -> DotreelResult<PlaybackStats> {
    play_frames_observed(sources, options, loader, sink, clock, None)
}

/// [`play_frames`] that additionally reports per-frame diagnostics.
///
/// The observer is invoked after each emission, and only when
/// `options.debug` is set.
#[tracing::instrument(skip_all, fields(frames = sources.len()))]
pub fn play_frames_observed(
    sources: &[PathBuf],
    options: &PlaybackOptions,
    loader: &mut dyn FrameLoader,
    sink: &mut dyn FrameSink,
    clock: &dyn Clock,
    mut observer: Option<FrameObserver<'_>>,
) -> DotreelResult<PlaybackStats> {
    options.validate()?;

    let mut pacer = FramePacer::new(options.fps, clock);
    let mut stats = PlaybackStats::default();

    for (idx, source) in sources.iter().enumerate() {
        let start = pacer.begin();
        let grid = loader.load(source)?;
        let text = encode_frame(&grid);

        pacer.await_budget(start);
        sink.present(&text)?;
        let accumulator_secs = pacer.complete(start);
        stats.frames_emitted += 1;

        if options.debug
            && let Some(observer) = observer.as_deref_mut()
        {
            observer(&FrameReport {
                index: FrameIndex(idx as u64),
                source,
                accumulator_secs,
            });
        }
    }

    Ok(stats)
}
