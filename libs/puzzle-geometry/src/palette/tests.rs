use super::*;

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn test_parse_full_line() {
    let palette = Palette::parse("#ff8000 PLA Orange").unwrap();
    let color = palette.get(0).unwrap();
    assert_eq!(color.channels, [255, 128, 0, 255]);
    assert_eq!(color.name, "PLA Orange");
}

#[test]
fn test_parse_without_hash_or_name() {
    let palette = Palette::parse("00ffff").unwrap();
    assert_eq!(palette.get(0).unwrap().channels, [0, 255, 255, 255]);
    assert_eq!(palette.get(0).unwrap().name, "");
}

#[test]
fn test_parse_with_alpha() {
    let palette = Palette::parse("#11223380 translucent").unwrap();
    assert_eq!(palette.get(0).unwrap().channels, [0x11, 0x22, 0x33, 0x80]);
}

#[test]
fn test_parse_short_form_reads_complete_pairs_only() {
    let palette = Palette::parse("#f0f").unwrap();
    assert_eq!(palette.get(0).unwrap().channels, [0xf0, 0, 0, 0xff]);
}

#[test]
fn test_parse_extra_digits_belong_to_name() {
    let palette = Palette::parse("#ffffffff00 spare").unwrap();
    let color = palette.get(0).unwrap();
    assert_eq!(color.channels, [255, 255, 255, 255]);
    assert_eq!(color.name, "00 spare");
}

#[test]
fn test_parse_skips_non_color_lines() {
    let source = "\n; filaments\n#ffffff White\nxyz\n#12 too short\n#000000 Black\n";
    let palette = Palette::parse(source).unwrap();
    assert_eq!(palette.len(), 2);
    assert_eq!(palette.get(1).unwrap().name, "Black");
}

#[test]
fn test_parse_handles_crlf() {
    let palette = Palette::parse("#ffffff White\r\n#000000 Black\r\n").unwrap();
    assert_eq!(palette.get(0).unwrap().name, "White");
    assert_eq!(palette.len(), 2);
}

#[test]
fn test_parse_empty_is_error() {
    assert!(matches!(Palette::parse(""), Err(GeometryError::EmptyPalette)));
    assert!(matches!(Palette::parse("no colors"), Err(GeometryError::EmptyPalette)));
}

#[test]
fn test_from_missing_file_is_io_error() {
    let err = Palette::from_file("/nonexistent/palette.txt").unwrap_err();
    assert!(matches!(err, GeometryError::Io(_)));
}

// =============================================================================
// COLORS
// =============================================================================

#[test]
fn test_hex_drops_alpha() {
    let color = PaletteColor {
        channels: [255, 128, 0, 255],
        name: String::new(),
    };
    assert_eq!(color.hex(), "#ff8000");

    let translucent = PaletteColor {
        channels: [1, 2, 3, 4],
        name: String::new(),
    };
    assert_eq!(translucent.hex(), "#010203");
}

#[test]
fn test_default_palette_is_cmyk_on_white() {
    let palette = Palette::default();
    let names: Vec<&str> = palette.colors().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["White", "Cyan", "Magenta", "Yellow", "Black"]);
    assert!(palette.colors().iter().all(|c| c.channels[3] == 255));
}

#[test]
fn test_serde_keeps_palette_non_empty() {
    let palette = Palette::default();
    let json = serde_json::to_string(&palette).unwrap();
    let back: Palette = serde_json::from_str(&json).unwrap();
    assert_eq!(back, palette);
    assert!(serde_json::from_str::<Palette>("[]").is_err());
}

#[test]
fn test_nearest_color() {
    let palette = Palette::default();
    assert_eq!(palette.nearest([250, 250, 250, 255]), 0);
    assert_eq!(palette.nearest([10, 240, 230, 255]), 1);
    assert_eq!(palette.nearest([20, 20, 20, 255]), 4);
}

#[test]
fn test_nearest_prefers_earlier_on_tie() {
    let palette = Palette::new(vec![
        PaletteColor::rgb(0, 0, 0, "a"),
        PaletteColor::rgb(0, 0, 0, "b"),
    ])
    .unwrap();
    assert_eq!(palette.nearest([0, 0, 0, 255]), 0);
}

// =============================================================================
// CONTRAST
// =============================================================================

#[test]
fn test_premultiply_scales_by_alpha() {
    assert_eq!(premultiply([255, 255, 255, 0]), [0, 0, 0, 0]);
    assert_eq!(premultiply([255, 128, 0, 255]), [255, 128, 0, 255]);
    assert_eq!(premultiply([255, 100, 51, 51]), [51, 20, 10, 51]);
}

#[test]
fn test_contrast_keeps_extremes() {
    assert_eq!(contrast([255, 255, 255, 255], 1.4), [255, 255, 255, 255]);
    assert_eq!(contrast([0, 0, 0, 255], 1.4), [0, 0, 0, 255]);
}

#[test]
fn test_contrast_darkens_mid_tones() {
    let [r, g, b, a] = contrast([128, 200, 64, 77], 1.4);
    assert!(r < 128);
    assert!(g < 200);
    assert!(b < 64);
    assert_eq!(a, 77);
}

#[test]
fn test_contrast_saturates_to_black() {
    // 40% of the way from white, stretched by 3, is past black.
    assert_eq!(contrast([153, 153, 153, 255], 3.0)[0], 0);
}

#[test]
fn test_contrast_negative_factor_saturates_to_white() {
    assert_eq!(contrast([100, 100, 100, 255], -1.0)[0], 255);
}

#[test]
fn test_unit_contrast_is_identity() {
    for value in [0u8, 1, 64, 128, 200, 254, 255] {
        assert_eq!(contrast([value, value, value, 255], 1.0)[0], value);
    }
}
