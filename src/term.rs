use std::io::{Stdout, Write};

use anyhow::Context as _;

use crate::{error::DotreelResult, playback::FrameSink};

/// ANSI cursor-home + clear-screen prefix, so each frame overwrites the last
/// in place instead of scrolling.
pub const HOME_AND_CLEAR: &str = "\x1b[H\x1b[2J";

/// Frame sink that writes Braille text to a terminal-style writer.
///
/// Flushes after every frame; a frame is either written whole or the error is
/// propagated and playback stops.
pub struct AnsiTerminal<W: Write> {
    out: W,
}

impl AnsiTerminal<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> FrameSink for AnsiTerminal<W> {
    fn present(&mut self, text: &str) -> DotreelResult<()> {
        self.out
            .write_all(HOME_AND_CLEAR.as_bytes())
            .and_then(|()| self.out.write_all(text.as_bytes()))
            .and_then(|()| self.out.flush())
            .context("write frame to terminal")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_prefixes_home_and_clear() {
        let mut sink = AnsiTerminal::new(Vec::new());
        sink.present("\u{28FF}\n").unwrap();
        sink.present("\u{2800}\n").unwrap();

        let written = String::from_utf8(sink.out).unwrap();
        assert_eq!(
            written,
            format!("{HOME_AND_CLEAR}\u{28FF}\n{HOME_AND_CLEAR}\u{2800}\n")
        );
    }
}
