//! Maskgen procedurally generates small RGB mask texture tiles and
//! serializes each as a flat-JSON document for an overlay renderer.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: `(width, height, amplitude, seed) -> Tile`, a
//!    sum-of-sinusoids base pattern plus seeded Gaussian noise, bounded by a
//!    max-abs rescale and split into three lightly jittered channels.
//! 2. **Write**: `Tile -> {w, h, channels, data}` JSON on disk, row-major
//!    and channel-interleaved.
//!
//! The CLI driver iterates three fixed [`PRESETS`] (light, balanced,
//! strong), each with its own amplitude and seed. Every generation owns a
//! locally scoped PRNG, so preset outputs do not depend on call order.
#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod tile;
pub mod writer;

pub use error::{MaskgenError, MaskgenResult};
pub use model::{MaskDocument, PRESETS, Preset};
pub use tile::{CHANNELS, Tile, generate};
pub use writer::{ensure_parent_dir, write_mask};
