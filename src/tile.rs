use std::f64::consts::TAU;

use rand::{Rng as _, SeedableRng as _};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64Mcg;

use crate::error::{MaskgenError, MaskgenResult};

/// Channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

const BASE_NOISE_STD: f64 = 0.08;
const GAIN_NOISE_STD: f64 = 0.03;
const GREEN_GAIN: f64 = 0.9;
const BLUE_GAIN: f64 = 0.85;
/// Fraction of the requested amplitude the max-abs rescale targets.
const HEADROOM: f64 = 0.9;

/// A generated mask tile: `width * height * CHANNELS` floats, row-major,
/// channel-interleaved. Pixel (x, y) channel c lives at
/// `(y*width + x)*CHANNELS + c`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl Tile {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat pixel buffer in the on-disk layout.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Value of one channel of one pixel. Panics when x, y, or channel is
    /// out of range.
    pub fn get(&self, x: u32, y: u32, channel: usize) -> f64 {
        assert!(x < self.width && y < self.height && channel < CHANNELS);
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS + channel;
        self.data[i]
    }

    /// Largest absolute value across all cells and channels.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
    }
}

/// Generate a textured mask tile: a sum-of-sinusoids base pattern plus
/// Gaussian noise, rescaled so the largest magnitude sits at 90% of
/// `amplitude`, then split into three lightly jittered channels.
///
/// A given `seed` reproduces the tile exactly for the same rand/rand_distr
/// versions (the generator is a `Pcg64Mcg`, whose stream is stable, but the
/// Gaussian sampling algorithm belongs to `rand_distr`). `None` draws a fresh
/// seed from the thread RNG.
#[tracing::instrument]
pub fn generate(width: u32, height: u32, amplitude: f64, seed: Option<u64>) -> MaskgenResult<Tile> {
    if width == 0 || height == 0 {
        return Err(MaskgenError::invalid_argument(format!(
            "tile dimensions must be nonzero, got {width}x{height}"
        )));
    }
    if !amplitude.is_finite() || amplitude <= 0.0 {
        return Err(MaskgenError::invalid_argument(format!(
            "amplitude must be positive and finite, got {amplitude}"
        )));
    }

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg64Mcg::seed_from_u64(seed);

    let base_noise = Normal::new(0.0, BASE_NOISE_STD)
        .map_err(|e| MaskgenError::invalid_argument(format!("base noise distribution: {e}")))?;
    let gain_noise = Normal::new(0.0, GAIN_NOISE_STD)
        .map_err(|e| MaskgenError::invalid_argument(format!("gain noise distribution: {e}")))?;

    let xs = axis(width);
    let ys = axis(height);
    let len = width as usize * height as usize;

    let mut field = Vec::with_capacity(len);
    for &y in &ys {
        for &x in &xs {
            let base = ((3.0 * x).sin() + (2.0 * y).cos() + (1.5 * (x + y)).sin()) / 3.0;
            field.push((base + base_noise.sample(&mut rng)) * amplitude);
        }
    }

    // Two-stage bound: scale by amplitude first, then renormalize by the
    // observed max. The data-dependent factor is part of the output contract.
    let max_abs = field.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if max_abs > 0.0 {
        let scale = amplitude / max_abs * HEADROOM;
        for v in &mut field {
            *v *= scale;
        }
    }

    // Gain draw order is fixed for seeded reproducibility: one full pass of
    // green gains, then one of blue gains, both row-major.
    let green: Vec<f64> = (0..len)
        .map(|_| GREEN_GAIN + gain_noise.sample(&mut rng))
        .collect();
    let blue: Vec<f64> = (0..len)
        .map(|_| BLUE_GAIN + gain_noise.sample(&mut rng))
        .collect();

    let mut data = Vec::with_capacity(len * CHANNELS);
    for i in 0..len {
        let v = field[i];
        data.push(v);
        data.push(v * green[i]);
        data.push(v * blue[i]);
    }

    Ok(Tile {
        width,
        height,
        data,
    })
}

/// `n` coordinates linearly spaced over `[0, 2π]` inclusive. A length-1 axis
/// is the single coordinate 0.
fn axis(n: u32) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }
    let step = TAU / f64::from(n - 1);
    (0..n).map(|i| f64::from(i) * step).collect()
}
