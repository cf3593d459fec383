//! Save / load round-trips and end-to-end splitting through the public API.

use chansplit_core::pipeline::{
    analyze_channels, extract_channel, generate_test_image, load_image, save_image,
};
use chansplit_core::{
    ChannelSelector, ChannelSplitter, Config, OutputMode, PipelineError, PixelBuffer, SplitOptions,
};
use std::path::PathBuf;

fn gradient(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        [(x * 3) as u8, (y * 5) as u8, ((x + y) * 2) as u8]
    })
}

#[test]
fn png_round_trip_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let buf = gradient(64, 40);

    let written = save_image(&buf, dir.path().join("gradient.png")).unwrap();
    let loaded = load_image(&written).unwrap();

    assert!(!loaded.has_alpha);
    assert_eq!(loaded.buffer, buf);
}

#[test]
fn bmp_round_trip_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let buf = gradient(33, 17);

    let written = save_image(&buf, dir.path().join("gradient.BMP")).unwrap();
    assert_eq!(written, dir.path().join("gradient.BMP"));
    assert_eq!(load_image(&written).unwrap().buffer, buf);
}

#[test]
fn jpeg_extension_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let written = save_image(&generate_test_image(), dir.path().join("out.JPG")).unwrap();

    assert_eq!(written, dir.path().join("out.JPG"));
    let header = std::fs::read(&written).unwrap();
    assert_eq!(&header[..3], &[0xFF, 0xD8, 0xFF]);

    // Lossy: only the dimensions are guaranteed
    let loaded = load_image(&written).unwrap();
    assert_eq!((loaded.width, loaded.height), (300, 200));
}

#[test]
fn unsupported_or_missing_extension_becomes_png() {
    let dir = tempfile::tempdir().unwrap();
    let buf = gradient(4, 4);

    let plain = save_image(&buf, dir.path().join("out")).unwrap();
    assert_eq!(plain, dir.path().join("out.png"));

    let gif = save_image(&buf, dir.path().join("other.gif")).unwrap();
    assert_eq!(gif, dir.path().join("other.png"));
    assert!(!dir.path().join("other.gif").exists());

    assert_eq!(load_image(&gif).unwrap().buffer, buf);
}

#[test]
fn grayscale_channel_round_trips_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let src = gradient(20, 20);
    let green = extract_channel(&src, ChannelSelector::Green, OutputMode::Grayscale);

    let written = save_image(&green, dir.path().join("green.png")).unwrap();
    let loaded = load_image(&written).unwrap().buffer;

    for (s, o) in src.pixels().zip(loaded.pixels()) {
        assert_eq!(o, [s[1]; 3]);
    }
    let stats = analyze_channels(&loaded).unwrap();
    assert_eq!(stats.red, stats.green);
    assert_eq!(stats.green, stats.blue);
}

#[tokio::test]
async fn split_loaded_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    save_image(&gradient(50, 30), &input).unwrap();

    let config = Config::default();
    let splitter = ChannelSplitter::new(&config);
    let options = SplitOptions {
        mode: OutputMode::Color,
        base_name: "photo".to_string(),
        out_dir: dir.path().join("channels"),
        image_format: "tiff".to_string(),
        parallel: true,
    };

    let source = splitter.load(&input).unwrap();
    let report = splitter.split(source, &options).await.unwrap();

    assert_eq!(report.source, input.display().to_string());
    let expected: Vec<PathBuf> = ["red", "green", "blue"]
        .iter()
        .map(|c| dir.path().join("channels").join(format!("photo_{c}.png")))
        .collect();
    let written: Vec<PathBuf> = report.outputs.iter().map(|o| o.path.clone()).collect();
    assert_eq!(written, expected);

    let blue = load_image(&expected[2]).unwrap().buffer;
    assert!(blue.pixels().all(|[r, g, _]| r == 0 && g == 0));
}

#[tokio::test]
async fn split_test_image_stats() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.output.directory = dir.path().to_path_buf();
    config.processing.mode = OutputMode::Grayscale;
    let splitter = ChannelSplitter::new(&config);

    let report = splitter
        .split(splitter.test_image(), &SplitOptions::from_config(&config))
        .await
        .unwrap();

    assert_eq!(report.mode, OutputMode::Grayscale);
    assert!((report.stats.red.mean - 85.0).abs() < 1e-9);

    let red = load_image(&report.outputs[0].path).unwrap().buffer;
    assert_eq!(red.pixel(50, 100), Some([255, 255, 255]));
    assert_eq!(red.pixel(150, 100), Some([0, 0, 0]));
}

#[test]
fn load_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    // Valid PNG signature, truncated body
    std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0]).unwrap();

    let splitter = ChannelSplitter::new(&Config::default());
    let err = splitter.load(&path).unwrap_err();
    assert!(matches!(err, PipelineError::Decode { .. }));
}
