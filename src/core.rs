use crate::error::{DotreelError, DotreelResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational playback rate. Being `u32/u32` keeps NaN/infinity unrepresentable;
/// the constructor rejects zero on either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> DotreelResult<Self> {
        if den == 0 {
            return Err(DotreelError::config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(DotreelError::config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// The ideal time budget per frame, in seconds (1 / fps).
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

/// Working pixel resolution frames are resampled to before encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> DotreelResult<Self> {
        if width == 0 || height == 0 {
            return Err(DotreelError::config("Resolution width/height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// A binarized frame: row-major foreground/background pixels, immutable once
/// built.
///
/// Queries outside the grid read as background rather than panicking, which is
/// what lets the encoder walk 2×4 blocks over a grid whose width or height is
/// not a multiple of the block size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl PixelGrid {
    pub fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> DotreelResult<Self> {
        let expected = width as usize * height as usize;
        if bits.len() != expected {
            return Err(DotreelError::config(format!(
                "PixelGrid expects {expected} pixels for {width}x{height}, got {}",
                bits.len()
            )));
        }
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is foreground. Out-of-range coordinates are
    /// background.
    pub fn is_lit(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }
}
