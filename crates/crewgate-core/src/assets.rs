//! Decorative image decoding.
//!
//! Images are decoded once into bounded RGB frames, then re-fitted to the
//! terminal grid whenever the size changes. A grid has two pixel rows per
//! terminal row (rendered with half-block glyphs). Animated GIFs keep every
//! frame (up to `MAX_FRAMES`) together with its display delay.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use image::codecs::gif::GifDecoder;
use image::imageops::{self, FilterType};
use image::{AnimationDecoder, DynamicImage, ImageFormat};
pub use image::{Rgb, RgbImage};

/// Long-edge bound for decoded sources; terminals never need more.
const SOURCE_MAX_EDGE_PX: u32 = 480;

/// Frames kept from an animation; the rest are dropped.
pub const MAX_FRAMES: usize = 64;

/// Delays below this are treated as `DEFAULT_FRAME_DELAY`, as browsers do.
const MIN_FRAME_DELAY: Duration = Duration::from_millis(20);
const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// How a source is fitted into a target area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Fill the area, cropping the overflow (centered).
    Cover,
    /// Fit inside the area, preserving the whole image.
    Contain,
}

#[derive(Debug, Clone)]
struct SourceFrame {
    rgb: RgbImage,
    delay: Duration,
}

/// Decoded image ready to be fitted. Holds one frame, or several for GIFs.
#[derive(Debug, Clone)]
pub struct SourceImage {
    frames: Vec<SourceFrame>,
}

fn bounded_rgb(decoded: DynamicImage) -> RgbImage {
    if decoded.width().max(decoded.height()) > SOURCE_MAX_EDGE_PX {
        decoded.thumbnail(SOURCE_MAX_EDGE_PX, SOURCE_MAX_EDGE_PX).to_rgb8()
    } else {
        decoded.to_rgb8()
    }
}

fn normalize_delay(delay: Duration) -> Duration {
    if delay < MIN_FRAME_DELAY {
        DEFAULT_FRAME_DELAY
    } else {
        delay
    }
}

impl SourceImage {
    /// Decodes an image file. GIFs keep all their frames.
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be decoded.
    pub fn open(path: &Path) -> Result<Self> {
        if matches!(ImageFormat::from_path(path), Ok(ImageFormat::Gif)) {
            return Self::open_gif(path);
        }
        let decoded = image::open(path)
            .with_context(|| format!("Failed to decode image {}", path.display()))?;
        Ok(Self::from_rgb(bounded_rgb(decoded)))
    }

    fn open_gif(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open image {}", path.display()))?;
        let decoder = GifDecoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode image {}", path.display()))?;

        let mut frames = Vec::new();
        for frame in decoder.into_frames().take(MAX_FRAMES) {
            let frame =
                frame.with_context(|| format!("Failed to decode frame of {}", path.display()))?;
            let (numer, denom) = frame.delay().numer_denom_ms();
            let delay = Duration::from_millis(u64::from(numer) / u64::from(denom.max(1)));
            let rgb = bounded_rgb(DynamicImage::ImageRgba8(frame.into_buffer()));
            frames.push(SourceFrame {
                rgb,
                delay: normalize_delay(delay),
            });
        }

        if frames.is_empty() {
            anyhow::bail!("Image {} has no frames", path.display());
        }
        Ok(Self { frames })
    }

    pub fn from_rgb(rgb: RgbImage) -> Self {
        Self {
            frames: vec![SourceFrame {
                rgb,
                delay: Duration::ZERO,
            }],
        }
    }

    /// Builds an animation from `(frame, delay)` pairs.
    pub fn from_frames(frames: impl IntoIterator<Item = (RgbImage, Duration)>) -> Self {
        Self {
            frames: frames
                .into_iter()
                .take(MAX_FRAMES)
                .map(|(rgb, delay)| SourceFrame {
                    rgb,
                    delay: normalize_delay(delay),
                })
                .collect(),
        }
    }

    /// Dimensions of the first frame.
    pub fn dimensions(&self) -> (u32, u32) {
        self.frames.first().map_or((0, 0), |f| f.rgb.dimensions())
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    /// How long frame `index` stays on screen. Never zero for animations.
    pub fn frame_delay(&self, index: usize) -> Duration {
        self.frames
            .get(index)
            .map_or(DEFAULT_FRAME_DELAY, |f| f.delay)
    }

    /// Fits the first frame into `cols` x `rows` terminal cells.
    pub fn fit(&self, cols: u16, rows: u16, fit: Fit) -> PixelGrid {
        self.fit_frame(0, cols, rows, fit)
    }

    /// Fits every frame, in order.
    pub fn fit_all(&self, cols: u16, rows: u16, fit: Fit) -> Vec<PixelGrid> {
        (0..self.frames.len())
            .map(|index| self.fit_frame(index, cols, rows, fit))
            .collect()
    }

    /// Fits frame `index` into `cols` x `rows` terminal cells.
    pub fn fit_frame(&self, index: usize, cols: u16, rows: u16, fit: Fit) -> PixelGrid {
        let Some(frame) = self.frames.get(index) else {
            return PixelGrid::empty();
        };
        let target_w = u32::from(cols);
        let target_h = u32::from(rows) * 2;
        let (src_w, src_h) = frame.rgb.dimensions();
        if target_w == 0 || target_h == 0 || src_w == 0 || src_h == 0 {
            return PixelGrid::empty();
        }

        let scaled = match fit {
            Fit::Cover => {
                // Crop the source to the target aspect ratio, then scale exactly.
                let (crop_w, crop_h) = if u64::from(src_w) * u64::from(target_h)
                    > u64::from(src_h) * u64::from(target_w)
                {
                    let w = (u64::from(src_h) * u64::from(target_w) / u64::from(target_h)) as u32;
                    (w.max(1), src_h)
                } else {
                    let h = (u64::from(src_w) * u64::from(target_h) / u64::from(target_w)) as u32;
                    (src_w, h.max(1))
                };
                let x = (src_w - crop_w) / 2;
                let y = (src_h - crop_h) / 2;
                let cropped = imageops::crop_imm(&frame.rgb, x, y, crop_w, crop_h).to_image();
                imageops::resize(&cropped, target_w, target_h, FilterType::Triangle)
            }
            Fit::Contain => {
                let scale = f64::min(
                    f64::from(target_w) / f64::from(src_w),
                    f64::from(target_h) / f64::from(src_h),
                );
                let w = ((f64::from(src_w) * scale).round() as u32).clamp(1, target_w);
                let h = ((f64::from(src_h) * scale).round() as u32).clamp(1, target_h);
                imageops::resize(&frame.rgb, w, h, FilterType::Triangle)
            }
        };

        PixelGrid::from_rgb(&scaled)
    }
}

/// Row-major RGB pixels sized for half-block rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelGrid {
    width: u16,
    height: u16,
    pixels: Vec<[u8; 3]>,
}

impl PixelGrid {
    pub const EMPTY: Self = Self {
        width: 0,
        height: 0,
        pixels: Vec::new(),
    };

    pub fn empty() -> Self {
        Self::default()
    }

    fn from_rgb(rgb: &RgbImage) -> Self {
        let (w, h) = rgb.dimensions();
        Self {
            width: w as u16,
            height: h as u16,
            pixels: rgb.pixels().map(|p| p.0).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Width in pixels (= terminal columns).
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels (= 2 x terminal rows, rounded up).
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Height in terminal rows.
    pub fn rows(&self) -> u16 {
        self.height.div_ceil(2)
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(usize::from(y) * usize::from(self.width) + usize::from(x))
            .copied()
    }

    /// Multiplies every channel by `factor` (0.0 = black, 1.0 = unchanged).
    #[must_use]
    pub fn dimmed(mut self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        for px in &mut self.pixels {
            for channel in px.iter_mut() {
                *channel = (f32::from(*channel) * factor).round() as u8;
            }
        }
        self
    }
}
