//! Writing the finished document to disk, as SVG text or as a PNG

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::raster::{new_rasterizer, Rasterizer};
use crate::{RenderRequest, Result, VectorDocument};

/// What was written, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    Svg { path: PathBuf },
    Png { path: PathBuf, width: u32, height: u32 },
}

impl Emitted {
    pub fn path(&self) -> &Path {
        match self {
            Emitted::Svg { path } | Emitted::Png { path, .. } => path.as_path(),
        }
    }
}

impl fmt::Display for Emitted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emitted::Svg { path } => write!(f, "SVG saved: {}", path.display()),
            Emitted::Png {
                path,
                width,
                height,
            } => write!(f, "PNG saved: {} ({}x{}px)", path.display(), width, height),
        }
    }
}

/// The path an SVG is written to: `output` with its extension set to `svg`.
pub fn svg_path_for(output: &Path) -> PathBuf {
    output.with_extension("svg")
}

/// Write `document` according to `request`.
///
/// In PNG mode the rasterizer is looked up first, so a build without the
/// `raster` feature fails with [`crate::Error::RasterizerUnavailable`] and
/// leaves the filesystem untouched.
pub fn emit(document: &VectorDocument, request: &RenderRequest) -> Result<Emitted> {
    if request.svg_only {
        return write_svg(document, &request.output);
    }
    let rasterizer = new_rasterizer()?;
    write_png(document, request, rasterizer.as_ref())
}

fn write_svg(document: &VectorDocument, output: &Path) -> Result<Emitted> {
    let path = svg_path_for(output);
    fs::write(&path, document.as_str())?;
    log::info!("wrote {} ({} bytes)", path.display(), document.as_str().len());
    Ok(Emitted::Svg { path })
}

/// Rasterize at `request.size` square and write the PNG to `request.output`.
pub fn write_png(
    document: &VectorDocument,
    request: &RenderRequest,
    rasterizer: &dyn Rasterizer,
) -> Result<Emitted> {
    let raster = rasterizer.rasterize(document.as_str(), request.size, request.size)?;
    fs::write(&request.output, &raster.png_data)?;
    log::info!(
        "wrote {} ({} bytes)",
        request.output.display(),
        raster.png_data.len()
    );
    Ok(Emitted::Png {
        path: request.output.clone(),
        width: raster.width,
        height: raster.height,
    })
}
