use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    core::{Fps, Resolution},
    error::{DotreelError, DotreelResult},
    load::DEFAULT_THRESHOLD,
};

/// Caller-facing playback configuration.
///
/// Defaults mirror the classic 30 fps, 160×120 setup. `debug` asks the driver
/// to hand per-frame diagnostics to the observer; it never changes timing or
/// control flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackOptions {
    pub fps: Fps,
    pub resolution: Resolution,
    pub threshold: u8,
    pub debug: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            resolution: Resolution {
                width: 160,
                height: 120,
            },
            threshold: DEFAULT_THRESHOLD,
            debug: false,
        }
    }
}

impl PlaybackOptions {
    /// Reject configurations that cannot drive a playback session. Called
    /// before the first frame is touched.
    pub fn validate(&self) -> DotreelResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(DotreelError::config("target fps must be positive"));
        }
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(DotreelError::config(
                "working resolution width/height must be non-zero",
            ));
        }
        Ok(())
    }

    /// Load options from a JSON file.
    pub fn from_path(path: &Path) -> DotreelResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open playback config '{}'", path.display()))?;
        let r = BufReader::new(f);
        let options: Self =
            serde_json::from_reader(r).with_context(|| "parse playback config JSON")?;
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_setup() {
        let options = PlaybackOptions::default();
        assert_eq!(options.fps, Fps { num: 30, den: 1 });
        assert_eq!((options.resolution.width, options.resolution.height), (160, 120));
        assert!(!options.debug);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_settings() {
        let mut options = PlaybackOptions::default();
        options.fps.num = 0;
        assert!(options.validate().is_err());

        let mut options = PlaybackOptions::default();
        options.resolution.width = 0;
        assert!(options.validate().is_err());
    }

    #[test]
    fn from_path_reads_partial_json() {
        let dir = std::path::PathBuf::from("target").join("config_json_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("options.json");
        std::fs::write(
            &path,
            r#"{ "fps": { "num": 24, "den": 1 }, "debug": true }"#,
        )
        .unwrap();

        let options = PlaybackOptions::from_path(&path).unwrap();
        assert_eq!(options.fps, Fps { num: 24, den: 1 });
        assert_eq!(options.resolution, PlaybackOptions::default().resolution);
        assert!(options.debug);
    }

    #[test]
    fn from_path_rejects_invalid_fps() {
        let dir = std::path::PathBuf::from("target").join("config_json_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        std::fs::write(&path, r#"{ "fps": { "num": 0, "den": 1 } }"#).unwrap();

        assert!(PlaybackOptions::from_path(&path).is_err());
    }
}
