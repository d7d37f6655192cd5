//! 2D saturation-value plane.
//!
//! A rectangle whose horizontal axis maps to saturation (left 0, right
//! 100) and whose vertical axis maps, inverted, to value (top 100,
//! bottom 0). The gradient for the current hue is rasterized to an RGBA8
//! pixel buffer once per hue and scaled to the widget size rather than
//! redrawn.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Hsv;
use crate::constants;
use crate::math;
use crate::session::{DragSurface, PickerSession};

/// Map a pointer position to (saturation, value).
///
/// Positions outside the rectangle are clamped to its bounds, then the
/// fractional position is scaled to 0..=100 and rounded.
pub(crate) fn sat_val_at(x: f64, y: f64, width: f64, height: f64) -> (u8, u8) {
    let x = x.clamp(0.0, width);
    let y = y.clamp(0.0, height);
    let s = (x / width * 100.0).round() as u8;
    let v = (100.0 - y / height * 100.0).round() as u8;
    (s, v)
}

/// Rasterize the plane for `hue` (0.0–1.0): saturation left→right,
/// value top→bottom. `width`/`height` are in raster pixels.
fn rasterize_plane(width: u32, height: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];

    for py in 0..height {
        let v = 1.0 - py as f64 / (height - 1).max(1) as f64;
        let row_offset = (py * width * 4) as usize;

        for px in 0..width {
            let s = px as f64 / (width - 1).max(1) as f64;
            let (r, g, b) = math::hsv_to_rgb(hue, s, v);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = 255;
        }
    }

    buf
}

pub(crate) struct SvPlane {
    id: ViewId,
    session: RwSignal<PickerSession>,
    hsv: Hsv,
    size: floem::taffy::prelude::Size<f32>,
    /// Cached gradient image, keyed by the hue it was rasterized for.
    plane_img: Option<peniko::Image>,
    plane_hash: Vec<u8>,
    cached_hue: Option<u16>,
}

/// Creates the saturation-value plane for `session`.
///
/// Pointer-down claims the drag capture; every subsequent pointer-move
/// re-applies the mapping until pointer-up (or focus loss) releases it.
pub(crate) fn sv_plane(session: RwSignal<PickerSession>) -> SvPlane {
    let id = ViewId::new();

    create_effect(move |_| {
        let hsv = session.with(|s| s.hsv());
        id.update_state(hsv);
    });

    SvPlane {
        id,
        session,
        hsv: session.with_untracked(|s| s.hsv()),
        size: Default::default(),
        plane_img: None,
        plane_hash: Vec::new(),
        cached_hue: None,
    }
    .style(|s| {
        s.height(constants::PLANE_HEIGHT)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl SvPlane {
    fn apply_pointer(&mut self, pos: floem::kurbo::Point) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (s, v) = sat_val_at(pos.x, pos.y, w, h);
        self.session.update(|st| st.set_sat_val(s, v));
    }

    fn cursor_position(&self) -> (f64, f64) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        (
            self.hsv.s as f64 / 100.0 * w,
            (1.0 - self.hsv.v as f64 / 100.0) * h,
        )
    }

    /// Rasterize at a fixed resolution for the current hue, then let the
    /// renderer scale the image to the widget size.
    fn ensure_plane_image(&mut self) {
        if self.cached_hue == Some(self.hsv.h) {
            return;
        }

        let size = constants::PLANE_RASTER_SIZE;
        let pixels = rasterize_plane(size, size, self.hsv.h as f64 / 360.0);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, size, size);

        self.plane_hash = blob.id().to_le_bytes().to_vec();
        self.plane_img = Some(img);
        self.cached_hue = Some(self.hsv.h);
    }
}

impl View for SvPlane {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hsv) = state.downcast::<Hsv>() {
            self.hsv = *hsv;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let claimed = {
                    let mut claimed = false;
                    self.session
                        .update(|st| claimed = st.begin_drag(DragSurface::SvPlane));
                    claimed
                };
                if claimed {
                    cx.update_active(self.id());
                    self.apply_pointer(e.pos);
                    self.id.request_layout();
                }
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self
                    .session
                    .with_untracked(|st| st.is_dragging(DragSurface::SvPlane))
                {
                    self.apply_pointer(e.pos);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.session.update(|st| st.end_drag());
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.session.update(|st| st.end_drag());
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        self.ensure_plane_image();
        if let Some(ref img) = self.plane_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.plane_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Cursor ring
        let (cur_x, cur_y) = self.cursor_position();
        let cur_pt = floem::kurbo::Point::new(cur_x, cur_y);
        let outer = Circle::new(cur_pt, constants::CURSOR_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let cursor = Circle::new(cur_pt, constants::CURSOR_RADIUS);
        cx.stroke(&cursor, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let inner = Circle::new(cur_pt, constants::CURSOR_RADIUS - 1.5);
        cx.stroke(
            &inner,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::sat_val_at;

    #[test]
    fn positions_outside_the_rect_are_clamped() {
        // Left of the left edge → saturation 0.
        assert_eq!(sat_val_at(-25.0, 50.0, 200.0, 100.0).0, 0);
        // Right of the right edge → saturation 100.
        assert_eq!(sat_val_at(500.0, 50.0, 200.0, 100.0).0, 100);
        // Above the top edge → value 100.
        assert_eq!(sat_val_at(100.0, -10.0, 200.0, 100.0).1, 100);
        // Below the bottom edge → value 0.
        assert_eq!(sat_val_at(100.0, 400.0, 200.0, 100.0).1, 0);
    }

    #[test]
    fn corners_and_center() {
        assert_eq!(sat_val_at(0.0, 0.0, 200.0, 100.0), (0, 100));
        assert_eq!(sat_val_at(200.0, 100.0, 200.0, 100.0), (100, 0));
        assert_eq!(sat_val_at(100.0, 50.0, 200.0, 100.0), (50, 50));
    }

    #[test]
    fn fractional_positions_round_to_nearest() {
        // 101/200 → 50.5 → 51 (round half away from zero).
        assert_eq!(sat_val_at(101.0, 0.0, 200.0, 100.0).0, 51);
        assert_eq!(sat_val_at(99.0, 0.0, 200.0, 100.0).0, 50);
    }
}
