//! Properties of the generated vector documents

use cork_logo::{build_svg, Variant};

const SIZES: [u32; 2] = [32, 180];

fn grain_dots(svg: &str) -> usize {
    // every circle except the cork itself
    svg.matches("<circle").count() - 1
}

#[test]
fn no_placeholders_survive() {
    for size in SIZES {
        for variant in Variant::ALL {
            for bg in [false, true] {
                let doc = build_svg(size, variant, bg).unwrap();
                let text = doc.as_str();
                assert!(
                    !text.contains('{') && !text.contains('}'),
                    "unresolved placeholder for {size}/{variant}/{bg}: {text}"
                );
            }
        }
    }
}

#[test]
fn small_sizes_use_simplified_template() {
    let doc = build_svg(32, Variant::None, false).unwrap();
    let text = doc.as_str();
    assert_eq!(grain_dots(text), 3);
    assert_eq!(text.matches("<circle").count(), 4);
    assert_eq!(text.matches("<path").count(), 1);
    assert!(text.contains(r##"<circle cx="50" cy="60" r="18" fill="#c9a96e"/>"##));
    assert!(text.contains(r#"r="2.2""#));
}

#[test]
fn large_sizes_use_detailed_template() {
    let doc = build_svg(180, Variant::Dark, false).unwrap();
    let text = doc.as_str();
    assert_eq!(grain_dots(text), 8);
    assert_eq!(text.matches("<circle").count(), 9);
    assert!(text.contains(r##"fill="#722f37""##));
    assert_eq!(text.matches(r##"fill="#a8854a""##).count(), 8);
    // no backdrop without the flag, even for a variant that has one
    assert!(!text.contains("<rect"));
}

#[test]
fn wine_icon_with_background() {
    let doc = build_svg(512, Variant::Wine, true).unwrap();
    let text = doc.as_str();

    assert_eq!(
        text.matches(r##"<rect width="100" height="100" rx="22" fill="#722f37"/>"##)
            .count(),
        1
    );
    assert!(text.contains(r#"<g transform="translate(15,12) scale(0.7)">"#));
    assert!(text.contains(r##"fill="#f5f0eb" opacity="0.9"/>"##));
    assert_eq!(text.matches("<svg").count(), 1);
    assert_eq!(text.matches("</svg>").count(), 1);
    assert_eq!(grain_dots(text), 8);
    assert_eq!(text.matches("<circle").count(), 9);

    // artwork sits inside the group, after the backdrop
    let rect = text.find("<rect").unwrap();
    let group = text.find("<g ").unwrap();
    let drop = text.find("<path").unwrap();
    assert!(rect < group && group < drop);
}

#[test]
fn none_background_has_no_shape() {
    let doc = build_svg(180, Variant::None, true).unwrap();
    assert!(!doc.as_str().contains("<rect"));
    assert!(doc.as_str().contains("<g transform="));
}

#[test]
fn build_is_idempotent() {
    for bg in [false, true] {
        let a = build_svg(180, Variant::Light, bg).unwrap();
        let b = build_svg(180, Variant::Light, bg).unwrap();
        assert_eq!(a.as_str(), b.as_str());
        assert_eq!(a.digest(), b.digest());
    }
}

#[test]
fn every_combination_is_well_formed() {
    let mut checked = 0;
    for size in SIZES {
        for variant in Variant::ALL {
            for bg in [false, true] {
                let doc = build_svg(size, variant, bg).unwrap();
                doc.check_well_formed()
                    .unwrap_or_else(|e| panic!("{size}/{variant}/{bg}: {e}"));
                checked += 1;
            }
        }
    }
    assert_eq!(checked, 16);
}

#[test]
fn variant_names_resolve_before_building() {
    let variant: Variant = "dark".parse().unwrap();
    assert!(build_svg(180, variant, true).is_ok());
    assert!(matches!(
        "burgundy".parse::<Variant>(),
        Err(cork_logo::Error::UnknownVariant(_))
    ));
}
