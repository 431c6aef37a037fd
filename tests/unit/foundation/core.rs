use super::*;

#[test]
fn frame_index_next_saturates() {
    assert_eq!(FrameIndex(4).next(), FrameIndex(5));
    assert_eq!(FrameIndex(u64::MAX).next(), FrameIndex(u64::MAX));
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.as_f64() - 29.97).abs() < 0.01);
    assert!((fps.frame_duration_secs() * fps.as_f64() - 1.0).abs() < 1e-12);
}

#[test]
fn canvas_requires_positive_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(800, 600).unwrap();
    assert_eq!(c.rgba_len(), 800 * 600 * 4);
}

#[test]
fn scaled_color_keeps_alpha_and_rounds() {
    let c = Rgba8::rgba(255, 50, 50, 200).scaled(0.8);
    assert_eq!(c, Rgba8::rgba(204, 40, 40, 200));
}

#[test]
fn premultiply_half_alpha() {
    let p = Rgba8::rgba(255, 255, 255, 100).premultiplied();
    assert_eq!(p.to_array(), [100, 100, 100, 100]);
    assert_eq!(
        Rgba8::rgb(15, 15, 15).premultiplied().to_array(),
        [15, 15, 15, 255]
    );
}
