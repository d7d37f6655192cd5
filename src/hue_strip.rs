//! Hue strip (0–360°).
//!
//! A horizontal rectangle mapping left→right to the canonical hue cycle
//! red→yellow→green→cyan→blue→magenta→red. The rainbow gradient is
//! rasterized once to an RGBA8 image and scaled to the widget size,
//! avoiding vger's broken linear gradient coordinate handling.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;
use crate::session::{DragSurface, PickerSession};

/// Map a pointer x to a hue in 0..=360, clamping to the strip bounds.
pub(crate) fn hue_at(x: f64, width: f64) -> u16 {
    let x = x.clamp(0.0, width);
    (x / width * 360.0).round() as u16
}

/// Rasterize the full hue cycle at saturation and value 100.
fn rasterize_hue_gradient(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let hue = px as f64 / (width - 1).max(1) as f64;
        let (r, g, b) = math::hsv_to_rgb(hue, 1.0, 1.0);
        let cr = (r * 255.0 + 0.5) as u8;
        let cg = (g * 255.0 + 0.5) as u8;
        let cb = (b * 255.0 + 0.5) as u8;
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }
    buf
}

pub(crate) struct HueStrip {
    id: ViewId,
    session: RwSignal<PickerSession>,
    hue: u16,
    size: floem::taffy::prelude::Size<f32>,
    /// Cached rainbow image; the gradient never changes, only its size.
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
}

/// Creates the hue strip for `session`.
pub(crate) fn hue_strip(session: RwSignal<PickerSession>) -> HueStrip {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = session.with(|s| s.hsv().h);
        id.update_state(h);
    });

    HueStrip {
        id,
        session,
        hue: session.with_untracked(|s| s.hsv().h),
        size: Default::default(),
        grad_img: None,
        grad_hash: Vec::new(),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueStrip {
    fn apply_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        if w <= 0.0 {
            return;
        }
        let h = hue_at(x, w);
        self.session.update(|st| st.set_hue(h));
    }

    fn ensure_gradient_image(&mut self) {
        if self.grad_img.is_some() {
            return;
        }

        let (pw, ph) = (constants::HUE_RASTER_WIDTH, constants::HUE_RASTER_HEIGHT);
        let pixels = rasterize_hue_gradient(pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.grad_hash = blob.id().to_le_bytes().to_vec();
        self.grad_img = Some(img);
    }
}

impl View for HueStrip {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hue) = state.downcast::<u16>() {
            self.hue = *hue;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let claimed = {
                    let mut claimed = false;
                    self.session
                        .update(|st| claimed = st.begin_drag(DragSurface::HueStrip));
                    claimed
                };
                if claimed {
                    cx.update_active(self.id());
                    self.apply_pointer(e.pos.x);
                    self.id.request_layout();
                }
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self
                    .session
                    .with_untracked(|st| st.is_dragging(DragSurface::HueStrip))
                {
                    self.apply_pointer(e.pos.x);
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
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        // Clip to rounded rect for rounded ends
        cx.save();
        cx.clip(&rrect);
        self.ensure_gradient_image();
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }
        cx.restore();

        // Strip outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (circular ring), drawn inset so it stays inside the track
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + self.hue as f64 / 360.0 * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::hue_at;

    #[test]
    fn clamps_to_the_strip() {
        assert_eq!(hue_at(-5.0, 200.0), 0);
        assert_eq!(hue_at(0.0, 200.0), 0);
        assert_eq!(hue_at(210.0, 200.0), 360);
    }

    #[test]
    fn scales_linearly_across_the_cycle() {
        assert_eq!(hue_at(100.0, 200.0), 180);
        assert_eq!(hue_at(50.0, 200.0), 90);
        // 120° lands a third of the way across.
        assert_eq!(hue_at(200.0 / 3.0, 200.0), 120);
    }
}
