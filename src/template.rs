//! Logo templates: the wine drop over a cork, at two levels of detail

use crate::variant::Palette;

/// Sizes at or below this many pixels use the simplified template.
pub const SIMPLE_MAX_SIZE: u32 = 64;

/// Grain dot radii injected into the detailed template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotRadii {
    pub large: f32,
    pub medium: f32,
    pub small: f32,
}

impl Default for DotRadii {
    fn default() -> Self {
        Self {
            large: 1.4,
            medium: 1.2,
            small: 0.9,
        }
    }
}

/// One of the two fixed vector skeletons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Template {
    /// Eight grain dots; legible at app icon sizes
    Detailed(DotRadii),
    /// Three larger dots that survive downsampling to favicon sizes
    Simplified,
}

impl Template {
    /// Pick the template for a target pixel size. Any size is accepted.
    pub fn for_size(size: u32) -> Self {
        if size <= SIMPLE_MAX_SIZE {
            Template::Simplified
        } else {
            Template::Detailed(DotRadii::default())
        }
    }

    /// Number of grain dots drawn over the cork.
    pub fn grain_dots(&self) -> usize {
        match self {
            Template::Detailed(_) => 8,
            Template::Simplified => 3,
        }
    }

    /// Resolve every placeholder of the template against `palette`.
    pub fn render(&self, palette: &Palette) -> String {
        match self {
            Template::Detailed(radii) => detailed(palette, radii),
            Template::Simplified => simplified(palette),
        }
    }
}

// Both skeletons share the 100x100 viewBox, the drop path and the cork circle.
// An empty `drop_opacity` still leaves its separating space before `/>`.

fn detailed(p: &Palette, r: &DotRadii) -> String {
    format!(
        r##"<svg viewBox="0 0 100 100" fill="none" xmlns="http://www.w3.org/2000/svg">
  <path d="M50 8 C50 8 22 44 22 63 C22 78.5 34.5 91 50 91 C65.5 91 78 78.5 78 63 C78 44 50 8 50 8Z" fill="{drop_fill}" {drop_opacity}/>
  <circle cx="50" cy="60" r="18" fill="#c9a96e"/>
  <circle cx="44" cy="55" r="{dot_r}" fill="{grain}" opacity="0.6"/>
  <circle cx="53" cy="53" r="{dot_r_sm}" fill="{grain}" opacity="0.5"/>
  <circle cx="47" cy="62" r="{dot_r}" fill="{grain}" opacity="0.6"/>
  <circle cx="56" cy="58" r="{dot_r_sm}" fill="{grain}" opacity="0.5"/>
  <circle cx="43" cy="65" r="{dot_r_sm}" fill="{grain}" opacity="0.5"/>
  <circle cx="54" cy="66" r="{dot_r}" fill="{grain}" opacity="0.6"/>
  <circle cx="50" cy="57" r="{dot_r_xs}" fill="{grain}" opacity="0.4"/>
  <circle cx="58" cy="63" r="{dot_r_xs}" fill="{grain}" opacity="0.45"/>
</svg>"##,
        drop_fill = p.drop_fill,
        drop_opacity = p.drop_opacity,
        grain = p.grain,
        dot_r = r.large,
        dot_r_sm = r.medium,
        dot_r_xs = r.small,
    )
}

fn simplified(p: &Palette) -> String {
    format!(
        r##"<svg viewBox="0 0 100 100" fill="none" xmlns="http://www.w3.org/2000/svg">
  <path d="M50 8 C50 8 22 44 22 63 C22 78.5 34.5 91 50 91 C65.5 91 78 78.5 78 63 C78 44 50 8 50 8Z" fill="{drop_fill}" {drop_opacity}/>
  <circle cx="50" cy="60" r="18" fill="#c9a96e"/>
  <circle cx="45" cy="56" r="2.2" fill="{grain}" opacity="0.5"/>
  <circle cx="55" cy="59" r="1.8" fill="{grain}" opacity="0.5"/>
  <circle cx="49" cy="65" r="2.0" fill="{grain}" opacity="0.5"/>
</svg>"##,
        drop_fill = p.drop_fill,
        drop_opacity = p.drop_opacity,
        grain = p.grain,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    #[test]
    fn size_threshold_is_inclusive() {
        assert_eq!(Template::for_size(64), Template::Simplified);
        assert_eq!(Template::for_size(0), Template::Simplified);
        assert!(matches!(Template::for_size(65), Template::Detailed(_)));
    }

    #[test]
    fn detailed_injects_radii() {
        let svg = Template::for_size(180).render(&Variant::None.palette());
        assert!(svg.contains(r#"r="1.4""#));
        assert!(svg.contains(r#"r="1.2""#));
        assert!(svg.contains(r#"r="0.9""#));
    }

    #[test]
    fn empty_opacity_keeps_separator() {
        let svg = Template::Simplified.render(&Variant::Light.palette());
        assert!(svg.contains(r##"fill="#722f37" />"##));
        let svg = Template::Simplified.render(&Variant::Wine.palette());
        assert!(svg.contains(r##"fill="#f5f0eb" opacity="0.9"/>"##));
    }

    #[test]
    fn detailed_draws_eight_grain_dots() {
        let t = Template::for_size(180);
        assert_eq!(t.grain_dots(), 8);
        let svg = t.render(&Variant::None.palette());
        // grain plus the cork itself
        assert_eq!(svg.matches("<circle").count(), 9);
    }

    #[test]
    fn dot_counts_match_markup() {
        for t in [Template::Simplified, Template::for_size(512)] {
            let svg = t.render(&Variant::Dark.palette());
            // cork circle plus grain dots
            assert_eq!(svg.matches("<circle").count(), t.grain_dots() + 1);
        }
    }
}
