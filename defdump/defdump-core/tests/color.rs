use defdump_core::{Hsl, rgb_to_hsl};

#[test]
fn black_takes_achromatic_branch() {
    assert_eq!(
        rgb_to_hsl(0x000000),
        Hsl {
            hue: 0,
            saturation: 0,
            lightness: 0,
            hue_multiplier: 1,
        }
    );
}

#[test]
fn white_takes_achromatic_branch() {
    // 255 / 256 on every channel: min == max exactly.
    let hsl = rgb_to_hsl(0xFFFFFF);
    assert_eq!(hsl.hue, 0);
    assert_eq!(hsl.saturation, 0);
    assert_eq!(hsl.lightness, 255);
    assert_eq!(hsl.hue_multiplier, 1);
}

#[test]
fn mid_grey_sits_on_the_lightness_boundary() {
    let hsl = rgb_to_hsl(0x808080);
    assert_eq!(hsl.lightness, 128);
    assert_eq!(hsl.saturation, 0);
    assert_eq!(hsl.hue_multiplier, 1);
}

#[test]
fn dark_blue_uses_blue_hue_sector() {
    // r = 0, g = 0.0625, b = 0.125; lightness 0.0625, saturation 1.0,
    // hue fraction (4 - 0.5) / 6.
    assert_eq!(
        rgb_to_hsl(0x001020),
        Hsl {
            hue: 19,
            saturation: 255,
            lightness: 16,
            hue_multiplier: 32,
        }
    );
}

#[test]
fn pure_red_and_green() {
    let red = rgb_to_hsl(0xFF0000);
    assert_eq!(red.hue, 0);
    assert_eq!(red.saturation, 255);
    assert_eq!(red.lightness, 128);
    assert_eq!(red.hue_multiplier, 255);

    let green = rgb_to_hsl(0x00FF00);
    assert_eq!(green.hue, 85);
    assert_eq!(green.hue_multiplier, 255);
}

#[test]
fn light_colors_use_upper_saturation_formula() {
    // r = 1.0 - 1/256, g = b = 0.5; lightness > 0.5.
    let hsl = rgb_to_hsl(0xFF8080);
    let max = 255.0 / 256.0;
    let min = 0.5;
    let lightness: f64 = (max + min) / 2.0;
    let saturation = (max - min) / (2.0 - max - min);
    assert_eq!(hsl.lightness, (lightness * 256.0).round() as i32);
    assert_eq!(hsl.saturation, (saturation * 256.0).round() as i32);
    assert_eq!(
        hsl.hue_multiplier,
        (saturation * (1.0 - lightness) * 512.0).round() as i32
    );
}

#[test]
fn conversion_is_deterministic() {
    for rgb in [0x123456, 0xABCDEF, 0x00FF7F, 0x7F7F00] {
        assert_eq!(rgb_to_hsl(rgb), rgb_to_hsl(rgb));
    }
}
