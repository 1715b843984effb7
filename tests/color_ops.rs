mod tests {
    use ws281x_grid::{ChannelOrder, PixelBuffer, Rgb, Target};

    #[test]
    fn test_set_base_color_fills_every_pixel() {
        let color = Rgb { r: 11, g: 22, b: 33 };
        let mut buffer = PixelBuffer::new(8, ChannelOrder::GRB);
        buffer.set_base_color(Target::Primary, color);
        for i in 0..8 {
            assert_eq!(buffer.pixel(i), color);
        }
    }

    #[test]
    fn test_delta_wraps_per_channel() {
        let mut buffer = PixelBuffer::new(2, ChannelOrder::GRB);
        buffer.set_base_color(Target::Primary, Rgb { r: 250, g: 5, b: 128 });

        buffer.delta_color(Target::Primary, 10, -10, 0);
        let expected = Rgb { r: 4, g: 251, b: 128 };
        assert_eq!(buffer.pixel(0), expected);
        assert_eq!(buffer.pixel(1), expected);
    }

    #[test]
    fn test_delta_applied_256_times_restores() {
        let original = Rgb { r: 123, g: 45, b: 67 };
        let mut buffer = PixelBuffer::new(3, ChannelOrder::RGB);
        buffer.set_base_color(Target::Primary, original);

        for _ in 0..256 {
            buffer.delta_color(Target::Primary, 1, 0, 0);
        }
        for i in 0..3 {
            assert_eq!(buffer.pixel(i), original);
        }
    }

    #[test]
    fn test_delta_pixel_is_additive() {
        let mut buffer = PixelBuffer::new(4, ChannelOrder::BGR);
        buffer.set_pixel(1, Rgb { r: 100, g: 200, b: 0 });

        buffer.delta_pixel(1, 1, 100, -1);
        assert_eq!(buffer.pixel(1), Rgb { r: 101, g: 44, b: 255 });
        // Out of range is dropped, not an error.
        buffer.delta_pixel(9, 1, 1, 1);
        assert_eq!(buffer.pixel(0), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_multiply_saturates_at_255() {
        let mut buffer = PixelBuffer::new(2, ChannelOrder::RGB);
        buffer.set_base_color(Target::Primary, Rgb { r: 200, g: 100, b: 3 });

        buffer.multiply_color(Target::Primary, 2.0, 1.0, 0.5);
        assert_eq!(buffer.pixel(0), Rgb { r: 255, g: 100, b: 1 });

        buffer.multiply_color(Target::Primary, 1000.0, 1000.0, 1000.0);
        assert_eq!(buffer.pixel(1), Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_multiply_by_one_is_idempotent() {
        let color = Rgb { r: 255, g: 128, b: 1 };
        let mut buffer = PixelBuffer::new(2, ChannelOrder::GRB);
        buffer.set_base_color(Target::Primary, color);

        buffer.multiply_color(Target::Primary, 1.0, 1.0, 1.0);
        buffer.multiply_pixel(0, 1.0, 1.0, 1.0);
        assert_eq!(buffer.pixel(0), color);
        assert_eq!(buffer.pixel(1), color);
    }

    #[test]
    fn test_multiply_clamps_negative_factors_to_zero() {
        let mut buffer = PixelBuffer::new(1, ChannelOrder::RGB);
        buffer.set_pixel(0, Rgb { r: 10, g: 20, b: 30 });

        buffer.multiply_color(Target::Primary, -1.0, 0.0, -100.0);
        assert_eq!(buffer.pixel(0), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_whole_buffer_ops_can_target_the_store() {
        let mut buffer = PixelBuffer::new(2, ChannelOrder::GRB);
        buffer.set_base_color(Target::Primary, Rgb { r: 1, g: 1, b: 1 });

        // Without a store the targeted operation is a no-op.
        buffer.set_base_color(Target::Store, Rgb { r: 9, g: 9, b: 9 });
        assert_eq!(buffer.pixel(0), Rgb { r: 1, g: 1, b: 1 });

        buffer.allocate_store().unwrap();
        buffer.set_base_color(Target::Store, Rgb { r: 9, g: 9, b: 9 });
        assert_eq!(buffer.pixel(0), Rgb { r: 1, g: 1, b: 1 });

        buffer.copy_from_store();
        assert_eq!(buffer.pixel(0), Rgb { r: 9, g: 9, b: 9 });
        assert_eq!(buffer.pixel(1), Rgb { r: 9, g: 9, b: 9 });
    }
}
