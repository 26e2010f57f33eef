//! Color presets applied to the fixed logo artwork

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A named color/theme preset.
///
/// The same name also selects the backdrop used when the logo is composed
/// onto a rounded background (see [`Variant::backdrop`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Variant {
    Light,
    Dark,
    Wine,
    #[default]
    None,
}

/// Colors substituted into a logo template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Fill of the wine drop
    pub drop_fill: &'static str,
    /// Extra attribute fragment on the drop path, empty when unused
    pub drop_opacity: &'static str,
    /// Fill of the cork grain dots
    pub grain: &'static str,
}

/// Rounded background rectangle placed behind the logo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub fill: &'static str,
}

impl Backdrop {
    /// Corner radius in viewBox units
    pub const CORNER_RADIUS: &'static str = "22";
}

const BURGUNDY: &str = "#722f37";
const CREAM: &str = "#f5f0eb";
const ESPRESSO: &str = "#2c1810";
const GRAIN: &str = "#a8854a";
const GRAIN_DEEP: &str = "#8a6d3a";

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Light, Variant::Dark, Variant::Wine, Variant::None];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
            Variant::Wine => "wine",
            Variant::None => "none",
        }
    }

    /// Colors for the drop and the cork grain.
    pub fn palette(self) -> Palette {
        match self {
            Variant::Light | Variant::Dark | Variant::None => Palette {
                drop_fill: BURGUNDY,
                drop_opacity: "",
                grain: GRAIN,
            },
            Variant::Wine => Palette {
                drop_fill: CREAM,
                drop_opacity: r#"opacity="0.9""#,
                grain: GRAIN_DEEP,
            },
        }
    }

    /// Background shape for this variant; `None` draws no shape.
    pub fn backdrop(self) -> Option<Backdrop> {
        match self {
            Variant::Light => Some(Backdrop { fill: CREAM }),
            Variant::Dark => Some(Backdrop { fill: ESPRESSO }),
            Variant::Wine => Some(Backdrop { fill: BURGUNDY }),
            Variant::None => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}
