use wave_wasm::config::{DEFAULT_IMAGE_PADDING, DEFAULT_PERIOD};
use wave_wasm::{ImageOptions, Orientation, Surface, WaveError, WaveOptions, WaveParams};

#[test]
fn wave_defaults_fill_every_field() {
    let config = WaveOptions::new((320u32, 200u32)).validate().unwrap();
    let p = config.params;
    assert_eq!(p.amplitude, 10.0);
    assert_eq!(p.wavelength, 32.0);
    assert_eq!(p.period, DEFAULT_PERIOD);
    assert_eq!(p.shading, 100.0);
    assert_eq!(p.squeeze, 0.0);
    assert_eq!(p.fps, 30.0);
    assert_eq!(p.orientation, Orientation::Horizontal);
    assert_eq!(config.surface, (320, 200));
}

#[test]
fn wavelength_defaults_to_tenth_of_width() {
    for width in [0u32, 1, 7, 150, 1024] {
        let config = WaveOptions::new(Surface::new(width, 3)).validate().unwrap();
        assert_eq!(config.params.wavelength, f64::from(width) / 10.0);
    }
}

#[test]
fn explicit_values_survive_validation() {
    let options = WaveOptions {
        amplitude: Some(0.0),
        wavelength: Some(-3.5),
        period: Some(0.0),
        fps: Some(60.0),
        orientation: Some(Orientation::Vertical),
        ..WaveOptions::new((10u32, 10u32))
    };
    let p = options.validate().unwrap().params;
    assert_eq!(p.amplitude, 0.0);
    assert_eq!(p.wavelength, -3.5);
    assert_eq!(p.period, 0.0);
    assert_eq!(p.fps, 60.0);
    assert_eq!(p.orientation, Orientation::Vertical);
}

#[test]
fn wave_validation_fails_only_without_surface() {
    let missing: WaveOptions<Surface> = WaveOptions {
        amplitude: Some(4.0),
        ..WaveOptions::default()
    };
    assert_eq!(missing.validate(), Err(WaveError::MissingOption("canvas")));
    assert!(WaveOptions::new((1u32, 1u32)).validate().is_ok());
}

#[test]
fn wave_validation_is_idempotent() {
    let samples = [
        WaveOptions::new((150u32, 130u32)),
        WaveOptions {
            squeeze: Some(0.25),
            shading: Some(-40.0),
            ..WaveOptions::new((64u32, 48u32))
        },
        WaveOptions {
            wavelength: Some(f64::INFINITY),
            orientation: Some(Orientation::Vertical),
            ..WaveOptions::new((3u32, 900u32))
        },
    ];
    for options in samples {
        let once = options.validate().unwrap();
        let twice = WaveOptions::from(once.clone()).validate().unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn image_options_require_src_and_target() {
    let no_src = ImageOptions {
        target_id: Some("x".into()),
        ..ImageOptions::default()
    };
    assert_eq!(no_src.validate(), Err(WaveError::MissingOption("image_src")));

    let no_target = ImageOptions {
        image_src: Some("flag.png".into()),
        ..ImageOptions::default()
    };
    assert_eq!(no_target.validate(), Err(WaveError::MissingOption("target_id")));
}

#[test]
fn missing_option_message_names_the_option() {
    let err = ImageOptions::default().validate().unwrap_err();
    assert_eq!(err.to_string(), "options.image_src has not been defined");
}

#[test]
fn image_padding_defaults_and_sizes_canvas() {
    let config = ImageOptions::new("flag.png", "c").validate().unwrap();
    assert_eq!(config.image_padding, DEFAULT_IMAGE_PADDING);
    assert_eq!(config.canvas_size(150, 100), (150, 130));
    assert_eq!(config.draw_offset(), 7.5);

    let tight = ImageOptions {
        image_padding: Some(0.0),
        ..ImageOptions::new("flag.png", "c")
    }
    .validate()
    .unwrap();
    assert_eq!(tight.canvas_size(150, 100), (150, 100));
    assert_eq!(tight.draw_offset(), 0.0);
}

#[test]
fn odd_paddings_follow_the_same_arithmetic() {
    let with_padding = |p: f64| {
        ImageOptions {
            image_padding: Some(p),
            ..ImageOptions::new("flag.png", "c")
        }
        .validate()
        .unwrap()
    };

    let fractional = with_padding(2.75);
    assert_eq!(fractional.image_padding, 2.75);
    assert_eq!(fractional.canvas_size(150, 100), (150, 105));
    assert_eq!(fractional.draw_offset(), 1.375);

    let negative = with_padding(-10.0);
    assert_eq!(negative.image_padding, -10.0);
    assert_eq!(negative.canvas_size(150, 100), (150, 80));
    assert_eq!(negative.draw_offset(), -5.0);
    assert_eq!(with_padding(-80.0).canvas_size(150, 100), (150, 0));

    let nan = with_padding(f64::NAN);
    assert!(nan.image_padding.is_nan());
    assert_eq!(nan.canvas_size(150, 100), (150, 0));
}

#[test]
fn image_validation_is_idempotent() {
    let mut options = ImageOptions::new("flag.png", "c");
    options.wave.orientation = Some(Orientation::Vertical);
    options.wave.amplitude = Some(3.0);
    let once = options.validate().unwrap();
    let twice = ImageOptions::from(once.clone()).validate().unwrap();
    assert_eq!(once, twice);
}

#[test]
fn image_wave_settings_carry_over_to_surface() {
    let mut options = ImageOptions::new("flag.png", "c");
    options.wave.orientation = Some(Orientation::Vertical);
    options.wave.fps = Some(12.0);
    let config = options.validate().unwrap();

    let wave = config.wave_options((200u32, 80u32)).validate().unwrap();
    assert_eq!(wave.params.orientation, Orientation::Vertical);
    assert_eq!(wave.params.fps, 12.0);
    assert_eq!(wave.params.wavelength, 20.0);
}

#[test]
fn interval_follows_fps() {
    let mut p = WaveParams::for_width(100);
    assert_eq!(p.interval_ms(), 33);
    p.fps = 60.0;
    assert_eq!(p.interval_ms(), 17);
    p.fps = 0.0;
    assert_eq!(p.interval_ms(), i32::MAX);
    p.fps = -10.0;
    assert_eq!(p.interval_ms(), 0);
    p.fps = f64::NAN;
    assert_eq!(p.interval_ms(), 0);
}
