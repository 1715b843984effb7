mod tests {
    use ws281x_grid::color::{Rgb, rgb_from_u32, rgb_to_u32, temperature_to_rgb, wheel};

    #[test]
    fn test_packed_roundtrip() {
        assert_eq!(
            rgb_from_u32(0x12_34_56),
            Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }
        );
        assert_eq!(rgb_to_u32(Rgb { r: 0x12, g: 0x34, b: 0x56 }), 0x12_34_56);
        assert_eq!(rgb_to_u32(rgb_from_u32(0xFF_00_FF)), 0xFF_00_FF);
    }

    #[test]
    fn test_wheel_passes_through_the_primaries() {
        assert_eq!(wheel(0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(85), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(170), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_daylight_white_is_near_neutral() {
        let white = temperature_to_rgb(6500);
        let max = white.r.max(white.g).max(white.b);
        let min = white.r.min(white.g).min(white.b);
        assert_eq!(max, 255);
        assert!(min >= 245, "6500 K should be nearly balanced, got {white:?}");
    }

    #[test]
    fn test_low_temperatures_are_warm() {
        let candle = temperature_to_rgb(2000);
        assert_eq!(candle.r, 255);
        assert!(candle.g < 100);
        assert!(candle.b < 30);
    }

    #[test]
    fn test_high_temperatures_are_cool() {
        let sky = temperature_to_rgb(10000);
        assert_eq!(sky.b, 255);
        assert!(sky.b > sky.r);
    }

    #[test]
    fn test_conversion_is_deterministic_and_clamped() {
        assert_eq!(temperature_to_rgb(6500), temperature_to_rgb(6500));
        assert_eq!(temperature_to_rgb(500), temperature_to_rgb(1000));
        assert_eq!(temperature_to_rgb(30000), temperature_to_rgb(25000));
    }
}
