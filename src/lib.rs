//! The Cork logo generator
//!
//! Builds the "wine drop over a cork" logo as an SVG document at a requested
//! pixel size, and optionally rasterizes it to PNG.
//!
//! # Features
//!
//! - **Two levels of detail**: sizes up to 64px use a simplified three-dot
//!   cork so favicons stay legible; larger sizes get the eight-dot version
//! - **Variants**: `light`, `dark`, `wine` and `none` color presets
//! - **App icon composition**: optional rounded backdrop with the artwork
//!   scaled inside it
//! - **`raster` feature** (default): PNG output through `resvg`
//!
//! # Example
//!
//! ```no_run
//! use cork_logo::{RenderRequest, Variant};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = RenderRequest {
//!     size: 512,
//!     variant: Variant::Wine,
//!     with_background: true,
//!     output: "icon-512.png".into(),
//!     ..Default::default()
//! };
//!
//! let emitted = cork_logo::render(&request)?;
//! println!("{}", emitted);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod compose;
pub mod document;
pub mod output;
pub mod raster;
pub mod template;
pub mod variant;

pub use document::VectorDocument;
pub use output::{emit, Emitted};
pub use template::{DotRadii, Template};
pub use variant::{Backdrop, Palette, Variant};

/// Everything one invocation needs to produce a logo file.
///
/// The defaults match the command line defaults: a 180px PNG of the `none`
/// variant written to `logo.png`.
///
/// # Examples
///
/// ```
/// let req = cork_logo::RenderRequest::default();
/// assert_eq!(req.size, 180);
/// assert!(!req.svg_only);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Output width and height in pixels
    pub size: u32,
    /// Color preset
    pub variant: Variant,
    /// Compose the logo onto the variant's rounded backdrop
    pub with_background: bool,
    /// Write SVG text instead of rasterizing
    pub svg_only: bool,
    /// Destination path; its extension becomes `.svg` in SVG mode
    pub output: PathBuf,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            size: 180,
            variant: Variant::None,
            with_background: false,
            svg_only: false,
            output: PathBuf::from("logo.png"),
        }
    }
}

/// Build the logo document for `size` and `variant`.
///
/// With `with_background` the artwork is nested under the variant's backdrop
/// (no shape for [`Variant::None`]). The result is deterministic.
pub fn build_svg(size: u32, variant: Variant, with_background: bool) -> Result<VectorDocument> {
    let template = Template::for_size(size);
    log::debug!(
        "size {} -> {} grain dots, variant {}",
        size,
        template.grain_dots(),
        variant
    );

    let body = template.render(&variant.palette());
    let text = if with_background {
        compose::with_backdrop(&body, variant.backdrop())?
    } else {
        body
    };

    let document = VectorDocument::new(text);
    log::debug!("document sha256 {}", document.digest());
    Ok(document)
}

/// Build the document for `request` and write it out.
pub fn render(request: &RenderRequest) -> Result<Emitted> {
    let document = build_svg(request.size, request.variant, request.with_background)?;
    emit(&document, request)
}
