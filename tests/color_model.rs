use noodle_board::color::{Rgb, hex_to_rgb, hsl_to_hex};

/// Reference HSL conversion, computed in f64
fn expected_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}

#[test]
fn test_hsl_hex_round_trip_grid() {
    for hue in (0..360).step_by(7) {
        for s in 0..=10 {
            for l in 0..=10 {
                let (h, s, l) = (hue as f32, s as f32 / 10.0, l as f32 / 10.0);
                let hex = hsl_to_hex(h, s, l);
                let rgb = hex_to_rgb(&hex).unwrap_or_else(|| panic!("{hex} did not parse"));

                let expected = expected_rgb(h as f64, s as f64, l as f64);
                for (got, want) in [rgb.r, rgb.g, rgb.b].into_iter().zip(expected) {
                    assert!(
                        (got as f64 - want).abs() <= 1.0,
                        "hsl({h}, {s}, {l}) -> {hex}, channel {got} vs {want}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_primary_and_secondary_colors() {
    assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
    assert_eq!(hsl_to_hex(60.0, 1.0, 0.5), "#ffff00");
    assert_eq!(hsl_to_hex(120.0, 1.0, 0.5), "#00ff00");
    assert_eq!(hsl_to_hex(180.0, 1.0, 0.5), "#00ffff");
    assert_eq!(hsl_to_hex(240.0, 1.0, 0.5), "#0000ff");
    assert_eq!(hsl_to_hex(300.0, 1.0, 0.5), "#ff00ff");
}

#[test]
fn test_swatch_colors_parse() {
    assert_eq!(hex_to_rgb("#E21C1C"), Some(Rgb::new(226, 28, 28)));
    assert_eq!(hex_to_rgb("#FFEE00"), Some(Rgb::new(255, 238, 0)));
    assert_eq!(hex_to_rgb("#0062FF"), Some(Rgb::new(0, 98, 255)));
    assert_eq!(hex_to_rgb("0062FF"), None);
}
