use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage};
use kurbo::{Affine, Rect};

use crate::{
    choreography::style::{Property, StyleRecord},
    foundation::{
        core::{Rgba8, Viewport},
        error::{CurtainError, CurtainResult},
    },
    sections::background::{BACKGROUND_BASE, BACKGROUND_LAYERS},
    stage::frame::{FrameSnapshot, SectionFrame},
};

/// Share of the viewport width a placeholder box spans when no width is animated.
const BOX_WIDTH_FRAC: f64 = 0.5;

/// Paint one frame at `scale` times the snapshot's viewport size.
#[tracing::instrument(level = "trace", skip(snapshot), fields(scroll_y = snapshot.scroll_y))]
pub fn render_snapshot(snapshot: &FrameSnapshot, scale: f64) -> CurtainResult<RgbaImage> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(CurtainError::validation(format!(
            "preview scale must be finite and > 0, got {scale}"
        )));
    }
    let vp = snapshot.viewport;
    let width = ((vp.width * scale).round() as u32).max(1);
    let height = ((vp.height * scale).round() as u32).max(1);
    let mut canvas = Canvas {
        img: RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_BASE.to_premul_bytes())),
        to_pixels: Affine::scale(scale),
    };
    let screen = Rect::new(0.0, 0.0, vp.width, vp.height);

    for layer in &BACKGROUND_LAYERS {
        let opacity = snapshot
            .background
            .get(layer.name)
            .map_or(0.0, StyleRecord::opacity);
        canvas.fill(screen, layer.tint.with_opacity(opacity));
    }

    for section in snapshot.visible_sections() {
        paint_section(&mut canvas, section, snapshot.scroll_y, vp);
    }
    Ok(canvas.img)
}

fn paint_section(canvas: &mut Canvas, section: &SectionFrame, scroll_y: f64, vp: Viewport) {
    let band = section
        .bounds
        .with_origin((section.bounds.x0, section.bounds.y0 - scroll_y))
        .intersect(Rect::new(0.0, 0.0, vp.width, vp.height));
    if band.height() <= 0.0 {
        return;
    }
    // Variant color sits over the page background without hiding it completely.
    canvas.fill(band, section.variant.background().with_opacity(0.6));

    let n = section.styles.len();
    if n == 0 {
        return;
    }
    let slot_h = band.height() / n as f64;
    for (i, (_, record)) in section.styles.iter().enumerate() {
        let top = band.y0 + slot_h * i as f64;
        let w = record
            .number(Property::Width, vp)
            .unwrap_or(vp.width * BOX_WIDTH_FRAC);
        let cx = vp.width / 2.0;
        let slot = Rect::new(
            cx - w / 2.0,
            top + slot_h * 0.2,
            cx + w / 2.0,
            top + slot_h * 0.8,
        );
        let color = record
            .get(Property::Color)
            .and_then(|v| v.as_color())
            .unwrap_or_else(|| section.variant.text());
        canvas.fill(
            element_transform(record, slot, vp).transform_rect_bbox(slot),
            color.with_opacity(record.opacity()),
        );
    }
}

/// Translate, rotate and scale about the box center, in that order, as CSS applies them.
fn element_transform(record: &StyleRecord, slot: Rect, vp: Viewport) -> Affine {
    let read = |p: Property, default: f64| record.number(p, vp).unwrap_or(default);
    let center = slot.center().to_vec2();
    Affine::translate((read(Property::TranslateX, 0.0), read(Property::TranslateY, 0.0)))
        * Affine::translate(center)
        * Affine::rotate(read(Property::Rotate, 0.0).to_radians())
        * Affine::scale(read(Property::Scale, 1.0))
        * Affine::translate(-center)
}

struct Canvas {
    img: RgbaImage,
    to_pixels: Affine,
}

impl Canvas {
    fn fill(&mut self, rect: Rect, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let px = self.to_pixels.transform_rect_bbox(rect);
        let (w, h) = (f64::from(self.img.width()), f64::from(self.img.height()));
        let x0 = px.x0.round().clamp(0.0, w) as u32;
        let x1 = px.x1.round().clamp(0.0, w) as u32;
        let y0 = px.y0.round().clamp(0.0, h) as u32;
        let y1 = px.y1.round().clamp(0.0, h) as u32;
        let src = color.to_premul_bytes();
        for y in y0..y1 {
            for x in x0..x1 {
                let p = self.img.get_pixel_mut(x, y);
                p.0 = over(p.0, src);
            }
        }
    }
}

/// Source-over for premultiplied RGBA8.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let inv = 255u16 - u16::from(src[3]);
    std::array::from_fn(|i| src[i].saturating_add(mul_div255(u16::from(dst[i]), inv)))
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Evenly spaced scroll positions covering `[0, max_scroll]`, endpoints included.
pub fn storyboard_positions(max_scroll: f64, frames: u32) -> Vec<f64> {
    let max_scroll = max_scroll.max(0.0);
    match frames {
        0 => Vec::new(),
        1 => vec![0.0],
        n => (0..n)
            .map(|i| max_scroll * f64::from(i) / f64::from(n - 1))
            .collect(),
    }
}

pub fn save_png(img: &RgbaImage, path: &Path) -> CurtainResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/preview/raster.rs"]
mod tests;
