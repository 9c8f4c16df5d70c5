use pixed_engine::{Color, EngineError, Pixmap};
use pretty_assertions::assert_eq;

fn assert_invariants(pixmap: &Pixmap) {
    assert!(pixmap.color_count() >= 1);
    assert_eq!(pixmap.pixels().len(), pixmap.width() * pixmap.height());
    assert!(pixmap.pixels().iter().all(|&p| p < pixmap.color_count()));
}

#[test]
fn test_default_palette_is_one_opaque_black_color() {
    let pixmap = Pixmap::new(2, 2).unwrap();
    assert_eq!(pixmap.color_count(), 1);
    assert_eq!(pixmap.color(0), Color::new(0, 0, 0));
    assert!(!pixmap.is_transparent_color(0));
}

#[test]
fn test_palette_size_is_at_least_one() {
    let pixmap = Pixmap::with_palette_size(2, 2, 0).unwrap();
    assert_eq!(pixmap.color_count(), 1);
    let pixmap = Pixmap::with_palette_size(2, 2, 4).unwrap();
    assert_eq!(pixmap.color_count(), 4);
}

#[test]
fn test_zero_dimensions_are_rejected() {
    assert!(matches!(Pixmap::new(0, 4), Err(EngineError::InvalidDimensions { width: 0, height: 4 })));
    assert!(matches!(Pixmap::new(4, 0), Err(EngineError::InvalidDimensions { width: 4, height: 0 })));
}

#[test]
fn test_overflowing_dimensions_are_rejected() {
    let huge = usize::MAX / 2 + 1;
    assert!(matches!(Pixmap::new(huge, 2), Err(EngineError::InvalidDimensions { width, height: 2 }) if width == huge));
    assert!(matches!(
        Pixmap::with_palette_size(2, usize::MAX, 4),
        Err(EngineError::InvalidDimensions { width: 2, height: usize::MAX })
    ));
}

#[test]
fn test_new_image_uses_default_index() {
    let pixmap = Pixmap::new(2, 2).unwrap();
    assert_eq!(pixmap.pixels(), &[0, 0, 0, 0]);
    assert_invariants(&pixmap);
}

#[test]
fn test_fill() {
    let mut pixmap = Pixmap::new(2, 2).unwrap();
    let color = pixmap.add_color(Color::new(255, 255, 255));
    assert!(pixmap.fill(color));
    for x in 0..2 {
        for y in 0..2 {
            assert_eq!(pixmap.pixel(x, y), color);
        }
    }
}

#[test]
fn test_fill_with_invalid_index() {
    let mut pixmap = Pixmap::new(2, 2).unwrap();
    let before = pixmap.clone();
    assert!(!pixmap.fill(1));
    assert_eq!(pixmap, before);
}

#[test]
fn test_resize() {
    let mut pixmap = Pixmap::new(2, 2).unwrap();
    assert!(pixmap.resize(4, 4));
    assert_eq!(pixmap.width(), 4);
    assert_eq!(pixmap.height(), 4);
    assert_invariants(&pixmap);
}

#[test]
fn test_resize_rejects_zero_width() {
    let mut pixmap = Pixmap::new(2, 2).unwrap();
    let before = pixmap.clone();
    assert!(!pixmap.resize(0, 4));
    assert_eq!(pixmap, before);
}

#[test]
fn test_resize_rejects_zero_height() {
    let mut pixmap = Pixmap::new(2, 2).unwrap();
    let before = pixmap.clone();
    assert!(!pixmap.resize(4, 0));
    assert_eq!(pixmap, before);
}

#[test]
fn test_resize_rejects_overflowing_size() {
    let mut pixmap = Pixmap::new(2, 2).unwrap();
    let red = pixmap.add_color(Color::new(255, 0, 0));
    assert!(pixmap.set_pixel(1, 1, red));
    let before = pixmap.clone();
    assert!(!pixmap.resize(usize::MAX / 2 + 1, 2));
    assert!(!pixmap.resize(usize::MAX, usize::MAX));
    assert_eq!(pixmap, before);
    assert_invariants(&pixmap);
}

#[test]
fn test_resize_keeps_existing_pixels() {
    let mut pixmap = Pixmap::with_palette_size(2, 2, 4).unwrap();
    pixmap.set_pixel(0, 0, 0);
    pixmap.set_pixel(1, 0, 1);
    pixmap.set_pixel(0, 1, 2);
    pixmap.set_pixel(1, 1, 3);
    pixmap.resize(4, 4);
    assert_eq!(pixmap.pixel(0, 0), 0);
    assert_eq!(pixmap.pixel(1, 0), 1);
    assert_eq!(pixmap.pixel(0, 1), 2);
    assert_eq!(pixmap.pixel(1, 1), 3);
    for y in 0..4 {
        for x in 0..4 {
            if x >= 2 || y >= 2 {
                assert_eq!(pixmap.pixel(x, y), 0, "new pixel at {x},{y}");
            }
        }
    }
}

#[test]
fn test_resize_fills_new_rows_with_default_index() {
    let mut pixmap = Pixmap::with_palette_size(2, 2, 2).unwrap();
    pixmap.fill(1);
    pixmap.resize(2, 3);
    assert_eq!(pixmap.pixel(0, 2), 0);
    assert_eq!(pixmap.pixel(1, 2), 0);
    assert_eq!(pixmap.pixel(1, 1), 1);
}

#[test]
fn test_resize_crops_from_top_left() {
    let mut pixmap = Pixmap::with_palette_size(3, 3, 9).unwrap();
    for i in 0..9 {
        pixmap.set_pixel(i % 3, i / 3, i);
    }
    assert!(pixmap.resize(2, 2));
    assert_eq!(pixmap.pixels(), &[0, 1, 3, 4]);

    // wider but shorter
    assert!(pixmap.resize(3, 1));
    assert_eq!(pixmap.pixels(), &[0, 1, 0]);
}

#[test]
fn test_get_and_set_pixel() {
    let mut pixmap = Pixmap::with_palette_size(2, 2, 2).unwrap();
    assert!(pixmap.set_pixel(0, 0, 1));
    assert_eq!(pixmap.pixel(0, 0), 1);
    assert_eq!(pixmap.pixel(1, 0), 0);
}

#[test]
fn test_pixel_outside_is_zero() {
    let mut pixmap = Pixmap::with_palette_size(2, 2, 2).unwrap();
    pixmap.fill(1);
    assert_eq!(pixmap.pixel(2, 0), 0);
    assert_eq!(pixmap.pixel(0, 2), 0);
    assert!(pixmap.pixel_color(5, 5).is_transparent());
}

#[test]
fn test_set_pixel_out_of_bounds_does_nothing() {
    let mut pixmap = Pixmap::with_palette_size(2, 2, 2).unwrap();
    let before = pixmap.clone();
    assert!(!pixmap.set_pixel(2, 0, 1));
    assert!(!pixmap.set_pixel(0, 2, 1));
    assert!(!pixmap.set_pixel(0, 0, 2));
    assert_eq!(pixmap, before);
}

const FLOOD_FILL_SOURCE: [usize; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 1, 1, 1, 0, 0, 0, //
    0, 1, 0, 0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, 1, 0, 0, //
    0, 0, 0, 1, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, 0, 1, 0, //
    0, 1, 0, 0, 0, 0, 1, 0, //
    0, 1, 0, 0, 0, 0, 1, 0, //
];

const FLOOD_FILL_RESULT: [usize; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 1, 1, 1, 0, 0, 0, //
    0, 1, 2, 2, 2, 1, 0, 0, //
    0, 0, 1, 2, 2, 1, 0, 0, //
    0, 0, 0, 1, 2, 1, 0, 0, //
    0, 0, 1, 2, 2, 2, 1, 0, //
    0, 1, 2, 2, 2, 2, 1, 0, //
    0, 1, 2, 2, 2, 2, 1, 0, //
];

fn flood_fill_pixmap() -> Pixmap {
    let mut pixmap = Pixmap::with_palette_size(8, 8, 3).unwrap();
    for (i, &index) in FLOOD_FILL_SOURCE.iter().enumerate() {
        assert!(pixmap.set_pixel(i % 8, i / 8, index));
    }
    pixmap
}

#[test]
fn test_flood_fill_area() {
    let mut pixmap = flood_fill_pixmap();
    assert!(pixmap.floodfill(5, 5, 2));
    assert_eq!(pixmap.pixels(), &FLOOD_FILL_RESULT[..]);
}

#[test]
fn test_flood_fill_with_same_index_changes_nothing() {
    let mut pixmap = flood_fill_pixmap();
    assert!(pixmap.floodfill(5, 5, 0));
    assert_eq!(pixmap.pixels(), &FLOOD_FILL_SOURCE[..]);
}

#[test]
fn test_flood_fill_invalid_arguments() {
    let mut pixmap = flood_fill_pixmap();
    assert!(!pixmap.floodfill(8, 0, 2));
    assert!(!pixmap.floodfill(0, 8, 2));
    assert!(!pixmap.floodfill(5, 5, 3));
    assert_eq!(pixmap.pixels(), &FLOOD_FILL_SOURCE[..]);
}

#[test]
fn test_flood_fill_large_area() {
    let mut pixmap = Pixmap::with_palette_size(1024, 1024, 2).unwrap();
    assert!(pixmap.floodfill(512, 512, 1));
    assert!(pixmap.pixels().iter().all(|&p| p == 1));
}

#[test]
fn test_change_palette_color() {
    let mut pixmap = Pixmap::with_palette_size(2, 2, 2).unwrap();
    assert!(pixmap.set_color(1, Color::new(0, 255, 0)));
    assert_eq!(pixmap.color(1), Color::new(0, 255, 0));
    assert!(!pixmap.set_color(2, Color::new(0, 255, 0)));
}

#[test]
fn test_add_color() {
    let mut pixmap = Pixmap::with_palette_size(2, 2, 2).unwrap();
    let old_count = pixmap.color_count();
    let index = pixmap.add_color(Color::new(0, 255, 0));
    assert_eq!(index, old_count);
    assert_eq!(pixmap.color_count(), old_count + 1);
    assert_eq!(pixmap.color(2), Color::new(0, 255, 0));
}

#[test]
fn test_color_out_of_range_is_transparent() {
    let pixmap = Pixmap::new(2, 2).unwrap();
    assert!(pixmap.color(1).is_transparent());
    assert!(!pixmap.is_transparent_color(1));
}

#[test]
fn test_transparent_flag_makes_color_transparent() {
    let mut pixmap = Pixmap::with_palette_size(2, 2, 2).unwrap();
    let mut c = Color::new(255, 255, 255);
    c.transparent = true;
    pixmap.set_color(0, c);
    assert!(pixmap.is_transparent_color(0));
}

#[test]
fn test_default_color_is_transparent() {
    let mut pixmap = Pixmap::with_palette_size(2, 2, 2).unwrap();
    pixmap.set_color(0, Color::default());
    assert!(pixmap.is_transparent_color(0));
}

#[test]
fn test_set_pixel_color_reuses_palette_entries() {
    let mut pixmap = Pixmap::new(2, 2).unwrap();
    assert!(pixmap.set_pixel_color(1, 1, Color::new(10, 20, 30)));
    assert_eq!(pixmap.color_count(), 2);
    assert!(pixmap.set_pixel_color(0, 1, Color::new(10, 20, 30)));
    assert_eq!(pixmap.color_count(), 2);
    assert!(pixmap.set_pixel_color(0, 0, Color::BLACK));
    assert_eq!(pixmap.color_count(), 2);
    assert_eq!(pixmap.pixels(), &[0, 0, 1, 1]);
    assert_eq!(pixmap.pixel_color(1, 1), Color::new(10, 20, 30));
}

#[test]
fn test_set_pixel_color_outside_does_not_grow_palette() {
    let mut pixmap = Pixmap::new(2, 2).unwrap();
    assert!(!pixmap.set_pixel_color(2, 2, Color::new(10, 20, 30)));
    assert_eq!(pixmap.color_count(), 1);
}

#[test]
fn test_resize_palette() {
    let mut pixmap = Pixmap::with_palette_size(2, 1, 3).unwrap();
    pixmap.set_pixel(0, 0, 1);
    pixmap.set_pixel(1, 0, 2);

    assert!(!pixmap.resize_palette(0));
    assert_eq!(pixmap.color_count(), 3);

    assert!(pixmap.resize_palette(2));
    assert_eq!(pixmap.color_count(), 2);
    assert_eq!(pixmap.pixels(), &[1, 0]);
    assert_invariants(&pixmap);

    assert!(pixmap.resize_palette(5));
    assert_eq!(pixmap.color_count(), 5);
    assert_eq!(pixmap.color(4), Color::BLACK);
}

#[test]
fn test_invariants_hold_after_mixed_edits() {
    let mut pixmap = Pixmap::with_palette_size(5, 4, 2).unwrap();
    pixmap.set_pixel(1, 1, 1);
    pixmap.floodfill(0, 0, 1);
    pixmap.resize(7, 2);
    pixmap.add_color(Color::transparent());
    pixmap.set_pixel(6, 1, 2);
    pixmap.resize_palette(2);
    pixmap.resize(3, 9);
    assert_invariants(&pixmap);
}
