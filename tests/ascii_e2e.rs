//! End-to-end tests for the image to text pipeline.
//!
//! These tests run real images through decoding, planning, resampling and
//! composition:
//! - Output grid matches the planned dimensions
//! - Output is deterministic
//! - Gradients produce meaningful character variation
//! - The optional grayscale preview is written when requested

use image::{DynamicImage, ImageBuffer, Rgba};
use pic2ascii::ascii::{plan_dimensions, Bounds, DensityRamp};
use pic2ascii::raster;
use pic2ascii::{Converter, Dimensions, FontRatio, PixelBuffer, RenderError, RenderOptions};
use std::collections::HashSet;

/// Helper to create a test image with the specified pattern.
fn make_test_image(pattern: &str, width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let v = match pattern {
            // Left dark, right bright
            "gradient_h" => ((x as f32 / (width - 1).max(1) as f32) * 255.0) as u8,
            // Top dark, bottom bright
            "gradient_v" => ((y as f32 / (height - 1).max(1) as f32) * 255.0) as u8,
            "black" => 0,
            "white" => 255,
            _ => panic!("Unknown pattern: {}", pattern),
        };
        Rgba([v, v, v, 255])
    });
    DynamicImage::ImageRgba8(img)
}

fn converter(ratio: f64) -> Converter {
    Converter::new(RenderOptions::default(), FontRatio::new(ratio).unwrap())
}

#[test]
fn test_grid_matches_planned_dimensions() {
    let img = make_test_image("gradient_h", 200, 80);
    let ratio = FontRatio::new(2.0).unwrap();
    let planned = plan_dimensions(200, 80, ratio, Bounds::default()).unwrap();

    let out = converter(2.0).render_image(&img).unwrap();
    assert_eq!(out.grid.dimensions(), planned);

    let lines: Vec<&str> = out.grid.lines().collect();
    assert_eq!(lines.len(), planned.height as usize);
    for line in lines {
        assert_eq!(line.chars().count(), planned.width as usize);
    }
}

#[test]
fn test_black_image_is_all_darkest() {
    let img = make_test_image("black", 12, 6);
    let out = converter(2.0).render_image(&img).unwrap();
    let text = out.grid.as_str();
    assert!(text.chars().filter(|&c| c != '\n').all(|c| c == '@'));
}

#[test]
fn test_white_image_is_all_lightest() {
    let img = make_test_image("white", 12, 6);
    let out = converter(1.0).render_image(&img).unwrap();
    assert!(out.grid.as_str().chars().filter(|&c| c != '\n').all(|c| c == '.'));
}

#[test]
fn test_transparent_image_renders_as_black() {
    let img = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(4, 2, Rgba([255, 255, 255, 0])));
    let out = converter(1.0).render_image(&img).unwrap();
    assert_eq!(out.grid.as_str(), "@@@@\n@@@@\n");
}

#[test]
fn test_transparent_border_does_not_lighten_scaled_image() {
    let img = DynamicImage::ImageRgba8(ImageBuffer::from_fn(40, 20, |x, _| {
        if x < 20 {
            Rgba([255, 255, 255, 0])
        } else {
            Rgba([0, 0, 0, 255])
        }
    }));
    let out = converter(1.0).render_image(&img).unwrap();
    assert!(out.grid.as_str().chars().filter(|&c| c != '\n').all(|c| c == '@'));
}

#[test]
fn test_horizontal_gradient_varies_across_row() {
    let img = make_test_image("gradient_h", 40, 10);
    let out = converter(1.0).render_image(&img).unwrap();
    let first = out.grid.lines().next().unwrap();

    let unique: HashSet<char> = first.chars().collect();
    assert!(unique.len() >= 5, "expected variation, got {:?}", first);
    assert_eq!(first.chars().next(), Some('@'));
    assert_eq!(first.chars().last(), Some('.'));
}

#[test]
fn test_vertical_gradient_rows_are_uniform() {
    let img = make_test_image("gradient_v", 10, 30);
    let out = converter(1.0).render_image(&img).unwrap();
    for line in out.grid.lines() {
        let unique: HashSet<char> = line.chars().collect();
        assert_eq!(unique.len(), 1, "row {:?} should be uniform", line);
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let img = make_test_image("gradient_h", 123, 77);
    let conv = converter(2.07);
    let first = conv.render_image(&img).unwrap();
    let second = conv.render_image(&img).unwrap();
    assert_eq!(first.grid.as_str().as_bytes(), second.grid.as_str().as_bytes());
}

#[test]
fn test_render_path_decodes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");
    make_test_image("gradient_h", 64, 32).save(&path).unwrap();

    let from_file = converter(2.0).render_path(&path).unwrap();
    let from_memory = converter(2.0)
        .render_image(&make_test_image("gradient_h", 64, 32))
        .unwrap();
    assert_eq!(from_file.grid, from_memory.grid);
}

#[test]
fn test_preview_written_at_grid_size() {
    let dir = tempfile::tempdir().unwrap();
    let preview_path = dir.path().join("preview.png");

    let options = RenderOptions {
        preview: true,
        ..RenderOptions::default()
    };
    let conv = Converter::new(options, FontRatio::new(2.0).unwrap());
    let out = conv.render_image(&make_test_image("gradient_v", 30, 20)).unwrap();
    let preview = out.preview.expect("preview requested");
    raster::save_buffer(&preview, &preview_path).unwrap();

    let written = image::open(&preview_path).unwrap();
    let dims = out.grid.dimensions();
    assert_eq!((written.width(), written.height()), (dims.width, dims.height));
}

#[test]
fn test_render_buffer_uses_buffer_width() {
    let buf = PixelBuffer::new([[0u8, 0, 0, 255]; 6].concat(), 3, 2).unwrap();
    let out = converter(2.0).render_buffer(&buf).unwrap();
    assert_eq!(out.grid.as_str(), "@@@\n@@@\n");
    assert_eq!(out.grid.dimensions(), Dimensions::new(3, 2));
}

#[test]
fn test_degenerate_image_is_error() {
    let img = make_test_image("white", 1000, 1);
    let err = converter(2.0).render_image(&img).unwrap_err();
    assert!(matches!(err, RenderError::DegeneratePlan { .. }));
}

#[test]
fn test_custom_ramp() {
    let options = RenderOptions {
        ramp: DensityRamp::new("X ").unwrap(),
        ..RenderOptions::default()
    };
    let conv = Converter::new(options, FontRatio::new(1.0).unwrap());
    let out = conv.render_image(&make_test_image("black", 4, 2)).unwrap();
    assert_eq!(out.grid.as_str(), "XXXX\nXXXX\n");
}
