//! RGBA pixel surface that mirrors the host viewport.
//!
//! The buffer is laid out row-major RGBA8 so the WASM host can wrap it in an
//! `ImageData` without intermediate copies. Resizing tracks the viewport only;
//! it never touches animation phase or particle state, which live elsewhere.

use crate::draw::color::Rgba;
use bytemuck::{Pod, Zeroable};

/// One packed RGBA8 pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// The drawable target. Owns pixel dimensions tracking the host viewport.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// A zero-area surface is legal; layers treat it as a rendering fault.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Track a new viewport size. Safe to call at any time; takes effect on
    /// the next render pass. Resizing to the current size is a no-op.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize * 4, 0);
    }

    /// Clear to transparent black at the start of a frame.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// The raw RGBA byte buffer, ready for `ImageData`.
    pub fn frame(&self) -> &[u8] {
        &self.pixels
    }

    pub fn frame_ptr(&self) -> *const u8 {
        self.pixels.as_ptr()
    }

    pub fn frame_len(&self) -> usize {
        self.pixels.len()
    }

    /// Read one pixel. Returns `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let px: &[Pixel] = bytemuck::cast_slice(&self.pixels);
        Some(px[y as usize * self.width as usize + x as usize])
    }

    /// Source-over blend one pixel. Out-of-bounds coordinates are ignored, so
    /// layers may draw shapes that spill past the frame edges.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let a = color.a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        let px: &mut [Pixel] = bytemuck::cast_slice_mut(&mut self.pixels);
        let dst = &mut px[idx];
        let inv = 1.0 - a;
        dst.r = (color.r.clamp(0.0, 255.0) * a + dst.r as f32 * inv).round() as u8;
        dst.g = (color.g.clamp(0.0, 255.0) * a + dst.g as f32 * inv).round() as u8;
        dst.b = (color.b.clamp(0.0, 255.0) * a + dst.b as f32 * inv).round() as u8;
        dst.a = (a * 255.0 + dst.a as f32 * inv).round().min(255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_dimensions_and_buffer() {
        let mut s = Surface::new(800, 600);
        s.resize(1920, 1080);
        assert_eq!(s.width(), 1920);
        assert_eq!(s.height(), 1080);
        assert_eq!(s.frame_len(), 1920 * 1080 * 4);
    }

    #[test]
    fn blend_opaque_overwrites() {
        let mut s = Surface::new(4, 4);
        s.blend_pixel(1, 1, Rgba::rgb(255.0, 128.0, 0.0));
        let p = s.pixel(1, 1).unwrap();
        assert_eq!((p.r, p.g, p.b, p.a), (255, 128, 0, 255));
    }

    #[test]
    fn blend_half_alpha_mixes() {
        let mut s = Surface::new(2, 2);
        s.blend_pixel(0, 0, Rgba::rgb(200.0, 200.0, 200.0));
        s.blend_pixel(0, 0, Rgba::rgba(0.0, 0.0, 0.0, 0.5));
        let p = s.pixel(0, 0).unwrap();
        assert_eq!(p.r, 100);
    }

    #[test]
    fn out_of_bounds_draw_is_ignored() {
        let mut s = Surface::new(2, 2);
        s.blend_pixel(-1, 0, Rgba::rgb(255.0, 0.0, 0.0));
        s.blend_pixel(0, 99, Rgba::rgb(255.0, 0.0, 0.0));
        assert_eq!(s.pixel(0, 0).unwrap().a, 0);
    }

    #[test]
    fn zero_area_surface_is_empty() {
        let s = Surface::new(0, 600);
        assert!(s.is_empty());
        assert_eq!(s.frame_len(), 0);
    }
}
