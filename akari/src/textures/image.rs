use super::Texture;
use crate::math::Spectrum;

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Texture/Image_Texture

/// A texture sampled from a raw image buffer.
///
/// Decoding image files into the packed buffer is the caller's concern; the
/// renderer only ever sees the raw pixels.
pub struct ImageTexture {
    data: Vec<Spectrum>,
    width: usize,
    height: usize,
}

impl ImageTexture {
    /// Creates a new `ImageTexture` from `0x00RRGGBB` packed pixels in
    /// row-major order.
    ///
    /// Panics if `pixels` doesn't hold exactly `width * height` values.
    pub fn from_raw(width: usize, height: usize, pixels: &[u32]) -> Self {
        assert!(width > 0 && height > 0, "Image texture with a zero extent");
        assert!(
            pixels.len() == width * height,
            "Image texture data doesn't match its extents"
        );

        let data = pixels
            .iter()
            .map(|&p| {
                Spectrum::new(
                    (((p >> 16) & 0xFF) as f64) / (u8::MAX as f64),
                    (((p >> 8) & 0xFF) as f64) / (u8::MAX as f64),
                    ((p & 0xFF) as f64) / (u8::MAX as f64),
                )
            })
            .collect();

        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the width of the underlying image in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the underlying image in pixels.
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Texture for ImageTexture {
    fn color_at(&self, u: f64, v: f64) -> Spectrum {
        // Repeat
        let mut s = u.fract();
        if s < 0.0 {
            s += 1.0;
        }
        let mut t = v.fract();
        if t < 0.0 {
            t += 1.0;
        }

        // Flip y
        t = 1.0 - t;

        let x = ((s * (self.width as f64)) as usize).min(self.width - 1);
        let y = ((t * (self.height as f64)) as usize).min(self.height - 1);

        self.data[y * self.width + x]
    }
}
