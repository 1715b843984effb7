use super::Rgb;

/// Convert a color temperature in Kelvin to an RGB color.
///
/// Approximates the chromaticity of a black-body/daylight source: a
/// piecewise cubic in `1/T` gives the CIE x coordinate (one polynomial per
/// Kelvin range), a fixed quadratic derives y from x, and the resulting
/// tristimulus value goes through an XYZ to RGB matrix. The output is
/// normalized so the brightest channel is 255.
///
/// Supports temperatures between 1000 K and 25000 K; inputs outside that
/// range are clamped. This is a deliberate approximation, not a
/// colorimetric standard, and it spends several floating divides per call.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn temperature_to_rgb(kelvin: u16) -> Rgb {
    let temp = (kelvin as f32).clamp(1000.0, 25000.0);

    // x chromaticity, cubic in 1000/T per range.
    let u = 1000.0 / temp;
    let x = if temp <= 4000.0 {
        ((-0.266_123_9 * u - 0.234_358_9) * u + 0.877_695_6) * u + 0.179_91
    } else if temp <= 7000.0 {
        ((-4.607 * u + 2.967_8) * u + 0.099_11) * u + 0.244_063
    } else {
        ((-2.006_4 * u + 1.901_8) * u + 0.247_48) * u + 0.237_04
    };
    let y = (-3.0 * x + 2.87) * x - 0.275;

    // Chromaticity to XYZ at unit luminance.
    let big_x = x / y;
    let big_z = (1.0 - x - y) / y;

    let red = 3.240_6 * big_x - 1.537_2 - 0.498_6 * big_z;
    let green = -0.968_9 * big_x + 1.875_8 + 0.041_5 * big_z;
    let blue = 0.055_7 * big_x - 0.204 + 1.057 * big_z;

    let red = red.max(0.0);
    let green = green.max(0.0);
    let blue = blue.max(0.0);

    let peak = red.max(green).max(blue);
    if peak <= 0.0 {
        return Rgb { r: 0, g: 0, b: 0 };
    }
    let scale = 255.0 / peak;

    Rgb {
        r: libm::roundf(red * scale) as u8,
        g: libm::roundf(green * scale) as u8,
        b: libm::roundf(blue * scale) as u8,
    }
}
