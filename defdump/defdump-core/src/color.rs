//! Packed RGB to the HSL components stored alongside floor colors.

/// HSL components derived from a packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsl {
    pub hue: i32,
    pub saturation: i32,
    pub lightness: i32,
    pub hue_multiplier: i32,
}

/// Convert a packed 24-bit RGB color.
///
/// Channels are normalised by `256.0`, not `255.0`. That divisor, the `0.5`
/// lightness boundary and the minimum multiplier of `1` are part of the
/// dumped format and must not change.
pub fn rgb_to_hsl(rgb: u32) -> Hsl {
    let r = f64::from((rgb >> 16) & 0xFF) / 256.0;
    let g = f64::from((rgb >> 8) & 0xFF) / 256.0;
    let b = f64::from(rgb & 0xFF) / 256.0;

    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let lightness = (max + min) / 2.0;

    let mut saturation = 0.0;
    let mut hue = 0.0;
    if min != max {
        let delta = max - min;
        saturation = if lightness < 0.5 {
            delta / (min + max)
        } else {
            delta / (2.0 - max - min)
        };
        hue = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
    }
    hue /= 6.0;

    let multiplier = if lightness > 0.5 {
        saturation * (1.0 - lightness) * 512.0
    } else {
        saturation * lightness * 512.0
    };
    let hue_multiplier = (multiplier.round() as i32).max(1);

    Hsl {
        hue: (f64::from(hue_multiplier) * hue).round() as i32,
        saturation: to_byte(saturation),
        lightness: to_byte(lightness),
        hue_multiplier,
    }
}

fn to_byte(fraction: f64) -> i32 {
    ((fraction * 256.0).round() as i32).clamp(0, 255)
}
