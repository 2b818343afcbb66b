use crate::{
    error::{MaskgenError, MaskgenResult},
    tile::{CHANNELS, Tile},
};

/// On-disk mask document: the JSON object consumed by the overlay renderer.
/// `data` is row-major and channel-interleaved, so pixel (x, y) channel c is
/// at `(y*w + x)*channels + c`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MaskDocument {
    pub w: u32,
    pub h: u32,
    pub channels: u32,
    pub data: Vec<f64>,
}

impl MaskDocument {
    /// Snapshot a tile into its serialized form. The tile buffer already has
    /// the on-disk layout, so this is a plain copy.
    pub fn from_tile(tile: &Tile) -> Self {
        Self {
            w: tile.width(),
            h: tile.height(),
            channels: CHANNELS as u32,
            data: tile.data().to_vec(),
        }
    }

    pub fn validate(&self) -> MaskgenResult<()> {
        if self.w == 0 || self.h == 0 {
            return Err(MaskgenError::invalid_argument(
                "mask width/height must be > 0",
            ));
        }
        if self.channels as usize != CHANNELS {
            return Err(MaskgenError::invalid_argument(format!(
                "mask must have exactly {CHANNELS} channels, got {}",
                self.channels
            )));
        }
        let expected = self.w as usize * self.h as usize * self.channels as usize;
        if self.data.len() != expected {
            return Err(MaskgenError::invalid_argument(format!(
                "mask data length {} does not match {}x{}x{}",
                self.data.len(),
                self.w,
                self.h,
                self.channels
            )));
        }
        Ok(())
    }
}

/// One mask variant: a name plus the generation knobs that produce it.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub amplitude: f64,
    pub seed: u64,
}

/// The three shipped variants, in generation order.
pub const PRESETS: [Preset; 3] = [
    Preset {
        name: "light",
        amplitude: 0.5,
        seed: 42,
    },
    Preset {
        name: "balanced",
        amplitude: 1.0,
        seed: 123,
    },
    Preset {
        name: "strong",
        amplitude: 2.0,
        seed: 777,
    },
];
