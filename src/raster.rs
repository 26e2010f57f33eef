//! Rasterization of vector documents into PNG bytes
//!
//! The only backend is `resvg`, compiled in with the `raster` feature
//! (enabled by default). Without it [`new_rasterizer`] reports
//! [`Error::RasterizerUnavailable`] so callers can tell the user how to get
//! PNG output before anything is written.

#[cfg(not(feature = "raster"))]
use crate::Error;
use crate::Result;

/// A rasterized image ready to be written to disk.
#[derive(Debug, Clone)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Converts a vector document into a fixed-size PNG.
pub trait Rasterizer {
    /// Render `svg` scaled to exactly `width` x `height` pixels.
    fn rasterize(&self, svg: &str, width: u32, height: u32) -> Result<Raster>;
}

/// Create the rasterizer for the compiled-in backend.
#[cfg(feature = "raster")]
pub fn new_rasterizer() -> Result<Box<dyn Rasterizer>> {
    Ok(Box::new(resvg_backend::ResvgRasterizer::new()))
}

#[cfg(not(feature = "raster"))]
pub fn new_rasterizer() -> Result<Box<dyn Rasterizer>> {
    Err(Error::RasterizerUnavailable)
}

#[cfg(feature = "raster")]
pub use resvg_backend::ResvgRasterizer;

#[cfg(feature = "raster")]
mod resvg_backend {
    use resvg::{tiny_skia, usvg};

    use super::{Raster, Rasterizer};
    use crate::{Error, Result};

    /// Pure-Rust rasterizer built on `resvg`.
    #[derive(Default)]
    pub struct ResvgRasterizer {
        options: usvg::Options<'static>,
    }

    impl ResvgRasterizer {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Rasterizer for ResvgRasterizer {
        fn rasterize(&self, svg: &str, width: u32, height: u32) -> Result<Raster> {
            let tree = usvg::Tree::from_str(svg, &self.options)
                .map_err(|e| Error::RenderError(format!("invalid vector document: {}", e)))?;

            let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
                Error::RenderError(format!("cannot allocate a {}x{} image", width, height))
            })?;

            let size = tree.size();
            let transform = tiny_skia::Transform::from_scale(
                width as f32 / size.width(),
                height as f32 / size.height(),
            );
            resvg::render(&tree, transform, &mut pixmap.as_mut());

            let png_data = pixmap
                .encode_png()
                .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))?;

            log::debug!("rasterized {}x{} ({} bytes)", width, height, png_data.len());
            Ok(Raster {
                width,
                height,
                png_data,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "raster")]
    const SQUARE: &str = r##"<svg viewBox="0 0 10 10" xmlns="http://www.w3.org/2000/svg"><rect width="10" height="10" fill="#ff0000"/></svg>"##;

    #[cfg(feature = "raster")]
    #[test]
    fn rasterize_scales_to_requested_size() {
        let r = new_rasterizer().unwrap();
        let out = r.rasterize(SQUARE, 48, 48).unwrap();
        assert_eq!(out.width, 48);
        assert_eq!(out.height, 48);
        assert_eq!(&out.png_data[0..8], b"\x89PNG\r\n\x1a\n");

        let pixmap = resvg::tiny_skia::Pixmap::decode_png(&out.png_data).unwrap();
        assert_eq!(pixmap.width(), 48);
        let px = pixmap.pixel(24, 24).unwrap();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (255, 0, 0, 255));
    }

    #[cfg(feature = "raster")]
    #[test]
    fn zero_size_is_a_render_error() {
        let r = new_rasterizer().unwrap();
        assert!(matches!(
            r.rasterize(SQUARE, 0, 0),
            Err(crate::Error::RenderError(_))
        ));
    }

    #[cfg(not(feature = "raster"))]
    #[test]
    fn missing_backend_is_reported() {
        assert!(matches!(
            new_rasterizer(),
            Err(crate::Error::RasterizerUnavailable)
        ));
    }
}
