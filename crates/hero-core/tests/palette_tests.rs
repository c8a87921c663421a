// Host-side tests for palette parsing.

use hero_core::palette::{Palette, PaletteError, Rgb};

#[test]
fn parses_hex_with_and_without_hash() {
    let a = Rgb::from_hex("#10b981").unwrap();
    let b = Rgb::from_hex("10b981").unwrap();
    assert_eq!(a, b);
    assert!((a.r - 16.0 / 255.0).abs() < 1e-6);
    assert!((a.g - 185.0 / 255.0).abs() < 1e-6);
    assert!((a.b - 129.0 / 255.0).abs() < 1e-6);
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["", "#", "#fff", "#12345", "#1234567", "#gggggg", "not-a-color"] {
        assert!(
            matches!(Rgb::from_hex(bad), Err(PaletteError::MalformedHex(_))),
            "expected rejection of {bad:?}"
        );
    }
}

#[test]
fn black_and_white_are_exact() {
    assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb::new(0.0, 0.0, 0.0));
    assert_eq!(Rgb::from_hex("#ffffff").unwrap(), Rgb::new(1.0, 1.0, 1.0));
}

#[test]
fn default_palette_matches_the_stock_hex_values() {
    let def = Palette::default();
    let parsed = Palette::from_hex("#10b981", "#0ea5a4", "#22c55e", "#34d399", "#0a0a0a").unwrap();
    for (a, b) in [
        (def.primary, parsed.primary),
        (def.secondary, parsed.secondary),
        (def.tertiary, parsed.tertiary),
        (def.accent, parsed.accent),
        (def.dark, parsed.dark),
    ] {
        assert!((a.r - b.r).abs() < 1.0 / 255.0);
        assert!((a.g - b.g).abs() < 1.0 / 255.0);
        assert!((a.b - b.b).abs() < 1.0 / 255.0);
    }
}

#[test]
fn vec4_form_pads_with_unit_alpha() {
    let c = Rgb::new(0.25, 0.5, 0.75);
    assert_eq!(c.to_vec4(), [0.25, 0.5, 0.75, 1.0]);
    assert_eq!(c.to_array(), [0.25, 0.5, 0.75]);
}

#[test]
fn palette_from_hex_propagates_the_first_error() {
    let res = Palette::from_hex("#10b981", "oops", "#22c55e", "#34d399", "#0a0a0a");
    assert_eq!(res, Err(PaletteError::MalformedHex("oops".to_string())));
}
