//! Icon tinting.
//!
//! Catalog icons are recolored to match an arrow's configured color with a
//! plain multiply blend. The 3D model texture is never touched; only the 2D
//! icon buffer passed in here.

use thiserror::Error;

/// A single RGBA pixel with channels nominally in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Whether this pixel is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

/// Errors raised when building a [`TintableImage`] from raw data.
#[derive(Debug, Error, PartialEq)]
pub enum TintError {
    #[error("pixel buffer holds {actual} pixels but a {width}x{height} image needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// A 2D grid of RGBA pixels in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct TintableImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl TintableImage {
    /// Wrap an existing pixel buffer. The buffer must hold exactly
    /// `width * height` pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, TintError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TintError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image filled with a single pixel value.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Decode an 8-bit RGBA buffer (4 bytes per pixel).
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self, TintError> {
        let expected = width as usize * height as usize;
        if data.len() != expected * 4 {
            return Err(TintError::BufferSize {
                width,
                height,
                expected,
                actual: data.len() / 4,
            });
        }

        let pixels = data
            .chunks_exact(4)
            .map(|px| {
                Rgba::new(
                    px[0] as f32 / 255.0,
                    px[1] as f32 / 255.0,
                    px[2] as f32 / 255.0,
                    px[3] as f32 / 255.0,
                )
            })
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Encode to an 8-bit RGBA buffer. Channels are clamped to [0, 1] here,
    /// which is the only place out-of-range values get corrected.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            data.extend_from_slice(&[
                channel_to_u8(px.r),
                channel_to_u8(px.g),
                channel_to_u8(px.b),
                channel_to_u8(px.a),
            ]);
        }
        data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Tint applied to an icon: an RGB multiplier and a separate alpha scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TintColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha_scale: f32,
}

impl TintColor {
    pub const IDENTITY: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, alpha_scale: f32) -> Self {
        Self { r, g, b, alpha_scale }
    }
}

impl Default for TintColor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Multiply every non-transparent pixel by `tint`, in place.
///
/// Pixels with alpha exactly 0 are skipped. Every other pixel, including
/// partially transparent ones, gets its RGB multiplied by the tint color and
/// its alpha multiplied by `tint.alpha_scale`. Values are not validated or
/// clamped.
pub fn recolor_icon_in_place(image: &mut TintableImage, tint: TintColor) {
    for px in image.pixels_mut() {
        if px.is_transparent() {
            continue;
        }
        px.r *= tint.r;
        px.g *= tint.g;
        px.b *= tint.b;
        px.a *= tint.alpha_scale;
    }
}

/// Owned variant of [`recolor_icon_in_place`]; the source is left untouched.
pub fn recolor_icon(image: &TintableImage, tint: TintColor) -> TintableImage {
    let mut out = image.clone();
    recolor_icon_in_place(&mut out, tint);
    out
}
