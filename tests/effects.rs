mod tests {
    use ring_light_composer::color::{Rgb, shift_rgb};
    use ring_light_composer::effect::{
        Effect, FIRE_PALETTE, FireEffect, NightSkyEffect, PieChartEffect, PieSegment,
        RainbowEffect, RippleEffect,
    };
    use ring_light_composer::frame::{FrameBuffer, PixelSink};
    use ring_light_composer::registers::RegisterBank;
    use ring_light_composer::topology::{
        CENTER_PIXEL, INNER_RING, MIDDLE_RING, OUTER_RING, PIXEL_COUNT, Ring,
    };
    use ring_light_composer::OutputDriver;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    struct NullDriver;

    impl OutputDriver for NullDriver {
        fn write(&mut self, _colors: &[Rgb]) {}
    }

    fn render<E: Effect>(effect: &E, frame: u32, registers: &RegisterBank) -> [Rgb; PIXEL_COUNT] {
        let mut buffer = FrameBuffer::new(NullDriver);
        buffer.clear();
        effect.render(frame, registers, &mut buffer);
        *buffer.pixels()
    }

    fn at(pixels: &[Rgb; PIXEL_COUNT], index: u8) -> Rgb {
        pixels[usize::from(index)]
    }

    #[test]
    fn test_ripple_ring_sequence() {
        for frame in 0..13 {
            assert_eq!(RippleEffect::active_ring(frame), Ring::Center);
        }
        for frame in 13..26 {
            assert_eq!(RippleEffect::active_ring(frame), Ring::Inner);
        }
        for frame in 26..39 {
            assert_eq!(RippleEffect::active_ring(frame), Ring::Middle);
        }
        for frame in 39..52 {
            assert_eq!(RippleEffect::active_ring(frame), Ring::Outer);
        }
        for frame in 0..520 {
            assert_eq!(
                RippleEffect::active_ring(frame),
                RippleEffect::active_ring(frame + 52)
            );
        }
    }

    #[test]
    fn test_ripple_lights_only_active_ring() {
        let registers = RegisterBank::new();
        for frame in 0..104 {
            let pixels = render(&RippleEffect, frame, &registers);
            let ring = RippleEffect::active_ring(frame);
            for index in 0..PIXEL_COUNT as u8 {
                if !ring.contains(index) {
                    assert_eq!(at(&pixels, index), BLACK, "frame {frame} pixel {index}");
                }
            }
        }
    }

    #[test]
    fn test_ripple_peak_lights_whole_ring() {
        let registers = RegisterBank::new();
        for frame in [6, 19, 32, 45] {
            let pixels = render(&RippleEffect, frame, &registers);
            for &pixel in RippleEffect::active_ring(frame).pixels() {
                assert_ne!(at(&pixels, pixel), BLACK, "frame {frame} pixel {pixel}");
            }
        }
        let center = render(&RippleEffect, 6, &registers);
        assert_eq!(at(&center, CENTER_PIXEL), RED);
    }

    #[test]
    fn test_ripple_brightness_envelope() {
        // Center: no ring attenuation
        assert_eq!(RippleEffect::brightness(0, 255), 3);
        assert_eq!(RippleEffect::brightness(6, 255), 255);
        assert_eq!(RippleEffect::brightness(7, 255), 63);
        assert_eq!(RippleEffect::brightness(12, 255), 1);
        // Inner, middle, outer peaks
        assert_eq!(RippleEffect::brightness(19, 255), 127);
        assert_eq!(RippleEffect::brightness(32, 255), 63);
        assert_eq!(RippleEffect::brightness(45, 255), 31);
    }

    #[test]
    fn test_ripple_color_cycle() {
        assert_eq!(RippleEffect::color_index(0, 6), 0);
        assert_eq!(RippleEffect::color_index(51, 6), 0);
        assert_eq!(RippleEffect::color_index(52, 6), 1);
        assert_eq!(RippleEffect::color_index(52 * 6, 6), 0);
        assert_eq!(RippleEffect::color_index(104, 2), 0);
        assert_eq!(RippleEffect::color_index(104, 0), 0);
    }

    #[test]
    fn test_ripple_scratch_color_count() {
        let registers = RegisterBank::new();
        registers.write(2, 3);
        // Second of three colors: hue 21845 is green
        let pixels = render(&RippleEffect, 52 + 6, &registers);
        assert_eq!(at(&pixels, CENTER_PIXEL), GREEN);
    }

    #[test]
    fn test_fire_is_pure() {
        let registers = RegisterBank::new();
        for frame in [0, 1, 77, 9_999] {
            assert_eq!(
                render(&FireEffect, frame, &registers),
                render(&FireEffect, frame, &registers)
            );
        }
    }

    #[test]
    fn test_fire_walks_palette() {
        let registers = RegisterBank::new();
        for frame in 0..60u32 {
            let pixels = render(&FireEffect, frame, &registers);

            for (i, &pixel) in OUTER_RING.iter().enumerate() {
                let offset = (frame as usize + i) % OUTER_RING.len();
                let color = at(&pixels, pixel);
                match FIRE_PALETTE.get(offset) {
                    Some(&flame) => assert_eq!(color, flame),
                    None => assert!(
                        color == BLACK
                            || ((32..160).contains(&color.r)
                                && (32..160).contains(&color.g)
                                && color.b >= 128),
                        "unexpected spark {color:?}"
                    ),
                }
            }

            for (i, &pixel) in MIDDLE_RING.iter().enumerate() {
                let offset = (frame as usize + i) % MIDDLE_RING.len();
                if let Some(&flame) = FIRE_PALETTE.get(offset) {
                    assert_eq!(at(&pixels, pixel), shift_rgb(flame, 3));
                }
            }

            for (i, &pixel) in INNER_RING.iter().enumerate() {
                let offset = (frame as usize + i) % INNER_RING.len();
                assert_eq!(at(&pixels, pixel), shift_rgb(FIRE_PALETTE[offset], 6));
            }

            assert!(FIRE_PALETTE[..4].contains(&at(&pixels, CENTER_PIXEL)));
        }
    }

    #[test]
    fn test_pie_segments() {
        for position in 0..24 {
            let expected = if position < 12 { PieSegment::On } else { PieSegment::Off };
            assert_eq!(PieChartEffect::segment(position, 24, 0.5), expected);
        }

        let progress = PieChartEffect::progress(133);
        for position in 0..24 {
            let expected = match position {
                0..=11 => PieSegment::On,
                12 => PieSegment::Blend,
                _ => PieSegment::Off,
            };
            assert_eq!(PieChartEffect::segment(position, 24, progress), expected);
        }

        assert_eq!(PieChartEffect::segment(0, 24, 0.0), PieSegment::Off);
        assert_eq!(PieChartEffect::segment(23, 24, 1.0), PieSegment::On);
    }

    #[test]
    fn test_pie_center_thresholds() {
        assert_eq!(PieChartEffect::center_segment(0.0), PieSegment::Off);
        assert_eq!(PieChartEffect::center_segment(0.5), PieSegment::Blend);
        assert_eq!(PieChartEffect::center_segment(0.9), PieSegment::On);
    }

    #[test]
    fn test_pie_empty_and_full() {
        let registers = RegisterBank::new();
        let empty = render(&PieChartEffect, 0, &registers);
        assert!(empty.iter().all(|&color| color == RED));

        registers.write(2, 255);
        let full = render(&PieChartEffect, 0, &registers);
        assert!(full.iter().all(|&color| color == GREEN));
    }

    #[test]
    fn test_pie_full_blinks() {
        let registers = RegisterBank::new();
        registers.write(2, 255);

        for frame in 0..8 {
            assert!(!PieChartEffect::blink_dark(frame));
            let pixels = render(&PieChartEffect, frame, &registers);
            assert_eq!(at(&pixels, CENTER_PIXEL), GREEN);
        }
        for frame in 8..16 {
            assert!(PieChartEffect::blink_dark(frame));
            let pixels = render(&PieChartEffect, frame, &registers);
            assert!(pixels.iter().all(|&color| color == BLACK));
        }
    }

    #[test]
    fn test_pie_partial_does_not_blink() {
        let registers = RegisterBank::new();
        registers.write(2, 133);
        let pixels = render(&PieChartEffect, 8, &registers);

        let blend = Rgb { r: 127, g: 127, b: 0 };
        assert_eq!(at(&pixels, OUTER_RING[11]), GREEN);
        assert_eq!(at(&pixels, OUTER_RING[12]), blend);
        assert_eq!(at(&pixels, OUTER_RING[13]), RED);
        assert_eq!(at(&pixels, MIDDLE_RING[7]), GREEN);
        assert_eq!(at(&pixels, MIDDLE_RING[8]), RED);
        assert_eq!(at(&pixels, INNER_RING[2]), GREEN);
        assert_eq!(at(&pixels, INNER_RING[3]), RED);
        assert_eq!(at(&pixels, CENTER_PIXEL), blend);
    }

    #[test]
    fn test_rainbow_first_frames() {
        let registers = RegisterBank::new();
        let dim_red = Rgb { r: 8, g: 0, b: 0 };

        let first = render(&RainbowEffect, 0, &registers);
        assert_eq!(at(&first, OUTER_RING[0]), dim_red);
        assert_eq!(at(&first, MIDDLE_RING[0]), dim_red);
        assert_eq!(at(&first, INNER_RING[0]), Rgb { r: 16, g: 0, b: 0 });
        assert_eq!(at(&first, CENTER_PIXEL), Rgb { r: 32, g: 0, b: 0 });

        let second = render(&RainbowEffect, 1, &registers);
        assert_eq!(at(&second, OUTER_RING[23]), dim_red);
        assert_eq!(at(&second, MIDDLE_RING[15]), dim_red);
    }

    #[test]
    fn test_rainbow_rotates() {
        let registers = RegisterBank::new();
        registers.write(2, 64);
        let first = render(&RainbowEffect, 0, &registers);

        for frame in 0..48u32 {
            let pixels = render(&RainbowEffect, frame, &registers);
            let size = OUTER_RING.len();
            for i in 0..size {
                let moved = (i + size - frame as usize % size) % size;
                assert_eq!(at(&pixels, OUTER_RING[moved]), at(&first, OUTER_RING[i]));
            }
        }
    }

    #[test]
    fn test_rainbow_glow_hue() {
        assert_eq!(RainbowEffect::glow_hue(0), 0);
        assert_eq!(RainbowEffect::glow_hue(3), 384);
        assert_eq!(RainbowEffect::glow_hue(512), 0);
    }

    #[test]
    fn test_night_sky_stars() {
        let registers = RegisterBank::new();
        let mut stars = 0;

        for frame in 0..300 {
            let pixels = render(&NightSkyEffect, frame, &registers);
            assert_eq!(pixels, render(&NightSkyEffect, frame, &registers));

            for color in pixels.iter().filter(|&&color| color != BLACK) {
                assert_eq!(color.r, color.g);
                assert!(color.r <= 1);
                assert!((2..=5).contains(&color.b));
                stars += 1;
            }
        }

        // 14100 chances at 1/150 is about 94
        assert!((40..200).contains(&stars), "stars = {stars}");
    }

    #[test]
    fn test_night_sky_reaches_center() {
        let registers = RegisterBank::new();
        let lit = (0..3_000).any(|frame| {
            at(&render(&NightSkyEffect, frame, &registers), CENTER_PIXEL) != BLACK
        });
        assert!(lit);
    }
}
