//! Behavioral properties of the pixel transforms.
//!
//! Each test walks every `(row, col, channel)` of small deterministic
//! buffers and checks the documented per-value contract.

use approx::assert_abs_diff_eq;
use pixfx_core::PixelBuffer;
use pixfx_ops::combine::combine;
use pixfx_ops::filter::{apply_kernel, box_blur, Kernel};
use pixfx_ops::point::{adjust_brightness, adjust_contrast, DEFAULT_MID};
use pixfx_ops::OpsError;

fn sample(width: usize, height: usize, channels: usize, seed: usize) -> PixelBuffer {
    let n = width * height * channels;
    let data = (0..n)
        .map(|i| ((i * 17 + seed * 5) % 29) as f32 / 28.0)
        .collect();
    PixelBuffer::from_decoded(data, width, height, channels).unwrap()
}

fn coords(buf: &PixelBuffer) -> impl Iterator<Item = (usize, usize, usize)> {
    let (w, h, c) = buf.shape();
    (0..h).flat_map(move |r| (0..w).flat_map(move |col| (0..c).map(move |ch| (r, col, ch))))
}

#[test]
fn brightness_is_pointwise_scale() {
    for (seed, factor) in [(0, 0.25), (1, 1.0), (2, 3.5)] {
        let b = sample(7, 5, 3, seed);
        let out = adjust_brightness(&b, factor).unwrap();
        assert_eq!(out.shape(), b.shape());
        for (r, c, ch) in coords(&b) {
            assert_abs_diff_eq!(
                out.get(r, c, ch).unwrap(),
                b.get(r, c, ch).unwrap() * factor,
                epsilon = 1e-6
            );
        }
    }
}

#[test]
fn brightness_one_is_identity() {
    let b = sample(6, 6, 3, 4);
    assert!(adjust_brightness(&b, 1.0).unwrap().approx_eq(&b, 1e-7));
}

#[test]
fn contrast_is_pointwise_affine() {
    for (factor, mid) in [(2.0, DEFAULT_MID), (-1.0, 0.2), (0.0, 0.8)] {
        let b = sample(5, 4, 3, 9);
        let out = adjust_contrast(&b, factor, mid);
        assert_eq!(out.shape(), b.shape());
        for (r, c, ch) in coords(&b) {
            let v = b.get(r, c, ch).unwrap();
            assert_abs_diff_eq!(
                out.get(r, c, ch).unwrap(),
                (v - mid) * factor + mid,
                epsilon = 1e-6
            );
        }
    }
}

#[test]
fn transforms_preserve_shape() {
    let b = sample(9, 4, 3, 1);
    let other = sample(9, 4, 3, 2);
    let shape = b.shape();
    assert_eq!(adjust_brightness(&b, 2.0).unwrap().shape(), shape);
    assert_eq!(adjust_contrast(&b, 2.0, DEFAULT_MID).shape(), shape);
    assert_eq!(box_blur(&b, 5).unwrap().shape(), shape);
    assert_eq!(apply_kernel(&b, &Kernel::sobel_x()).unwrap().shape(), shape);
    assert_eq!(combine(&b, &other).unwrap().shape(), shape);
}

#[test]
fn box_blur_on_uniform_buffer_interior() {
    let b = PixelBuffer::from_decoded(vec![0.42; 8 * 8 * 3], 8, 8, 3).unwrap();
    let out = box_blur(&b, 3).unwrap();
    for r in 1..7 {
        for c in 1..7 {
            for ch in 0..3 {
                assert_abs_diff_eq!(out.get(r, c, ch).unwrap(), 0.42, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn box_blur_edge_truncation_keeps_fixed_divisor() {
    let ones = PixelBuffer::from_decoded(vec![1.0; 3 * 3 * 3], 3, 3, 3).unwrap();
    let out = box_blur(&ones, 3).unwrap();
    for ch in 0..3 {
        assert_abs_diff_eq!(out.get(0, 0, ch).unwrap(), 4.0 / 9.0, epsilon = 1e-6);
    }
}

#[test]
fn unit_kernel_is_identity() {
    let b = sample(6, 5, 3, 3);
    let k = Kernel::from_rows(&[[1.0f32]]).unwrap();
    assert_eq!(apply_kernel(&b, &k).unwrap(), b);
}

#[test]
fn combine_with_self_scales_by_sqrt2() {
    let a = sample(4, 4, 3, 6);
    let out = combine(&a, &a).unwrap();
    for (r, c, ch) in coords(&a) {
        assert_abs_diff_eq!(
            out.get(r, c, ch).unwrap(),
            a.get(r, c, ch).unwrap() * std::f32::consts::SQRT_2,
            epsilon = 1e-6
        );
    }
}

#[test]
fn apply_kernel_rejects_bad_kernels() {
    let b = sample(4, 4, 3, 0);
    let non_square = Kernel::from_rows(&[[1.0f32, 0.0, 0.0], [0.0, 1.0, 0.0]]).unwrap();
    let even = Kernel::from_rows(&[[1.0f32, 0.0], [0.0, 1.0]]).unwrap();
    for k in [non_square, even] {
        assert!(matches!(
            apply_kernel(&b, &k).unwrap_err(),
            OpsError::InvalidKernel(_)
        ));
    }
}

#[test]
fn inputs_are_reusable_after_transforms() {
    let a = sample(5, 5, 3, 8);
    let b = sample(5, 5, 3, 9);
    let (a0, b0) = (a.clone(), b.clone());
    let _ = adjust_brightness(&a, 2.0).unwrap();
    let _ = adjust_contrast(&a, 2.0, DEFAULT_MID);
    let _ = box_blur(&a, 3).unwrap();
    let _ = apply_kernel(&a, &Kernel::sobel_y()).unwrap();
    let _ = combine(&a, &b).unwrap();
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}
