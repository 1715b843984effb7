mod temperature;

use smart_leds::RGB8;
pub use temperature::temperature_to_rgb;

pub type Rgb = RGB8;

/// Create an RGB color from a packed u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 (0xRRGGBB format)
///
/// The packed form is always R, G, B regardless of how the LED string is
/// wired.
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// 256-position color wheel.
///
/// The colors are a transition red - green - blue - back to red.
pub const fn wheel(pos: u8) -> Rgb {
    let pos = 255 - pos;
    if pos < 85 {
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    }
}
