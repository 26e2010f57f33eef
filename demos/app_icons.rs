//! App icons example - writes the standard logo set into `./icons`
//!
//!     cargo run --example app_icons

use cork_logo::{RenderRequest, Variant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("icons")?;

    let set = [
        (32, Variant::None, false, "icons/favicon-32.png"),
        (180, Variant::None, false, "icons/logo-180.png"),
        (180, Variant::Dark, false, "icons/logo-dark-180.png"),
        (512, Variant::Wine, true, "icons/icon-512.png"),
    ];

    for (size, variant, with_background, output) in set {
        let request = RenderRequest {
            size,
            variant,
            with_background,
            // builds without a rasterizer still get the vector files
            svg_only: !cfg!(feature = "raster"),
            output: output.into(),
        };
        println!("{}", cork_logo::render(&request)?);
    }

    Ok(())
}
