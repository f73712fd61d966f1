//! Integration tests for the tint workspace.
//!
//! This crate holds end-to-end tests that exercise the interaction
//! between `tint-core`, `tint-spaces`, `tint-gradient`, and
//! `tint-raster`. The heavy sweeps live in `tests/`; this library only
//! provides shared input generators.

use tint_core::Color;

/// Opaque RGB color cube with `size` samples per axis.
///
/// `size = 8` gives 512 colors spanning the full 8-bit range, including
/// the black and white corners.
pub fn rgb_cube(size: u32) -> Vec<Color> {
    let mut cube = Vec::with_capacity((size * size * size) as usize);
    for r in 0..size {
        for g in 0..size {
            for b in 0..size {
                let scale = |v: u32| (v * 255 / (size - 1)) as u8;
                cube.push(Color::rgb(scale(r), scale(g), scale(b)));
            }
        }
    }
    cube
}

/// Asserts two colors agree within `tol` per channel.
pub fn assert_close(original: Color, back: Color, tol: i32, what: &str) {
    let dr = (original.r as i32 - back.r as i32).abs();
    let dg = (original.g as i32 - back.g as i32).abs();
    let db = (original.b as i32 - back.b as i32).abs();
    let da = (original.a as i32 - back.a as i32).abs();
    assert!(
        dr <= tol && dg <= tol && db <= tol && da <= tol,
        "{what}: {original:?} -> {back:?}"
    );
}
