//! Picker session state.
//!
//! A [`PickerSession`] is the state of one open instance of the dialog:
//! the hex value being edited (`draft`), the snapshot taken when the
//! dialog opened (`committed`), the HSV decomposition that drives the
//! interactive surfaces, and which surface (if any) is capturing pointer
//! movement. The session owns this state exclusively; the externally
//! owned color is read on open and written back only on commit.
//!
//! `draft` is the authoritative representation. `hsv` is a derived cache:
//! it is recomputed from edits, never written independently, and it is
//! deliberately left untouched while `draft` holds a partially typed hex
//! string so the surface cursors don't jump mid-edit.

use crate::color::{is_strict_hex, Channel, Hsv, Rgb};

/// Which interactive surface is capturing pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSurface {
    /// The 2D saturation-value plane.
    SvPlane,
    /// The 1D hue strip.
    HueStrip,
}

/// State for one open/commit-or-cancel cycle of the picker dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSession {
    open: bool,
    draft: String,
    committed: String,
    hsv: Hsv,
    dragging: Option<DragSurface>,
}

impl PickerSession {
    /// A session that has not been opened yet.
    pub fn closed() -> Self {
        Self {
            open: false,
            draft: String::new(),
            committed: String::new(),
            hsv: Hsv { h: 0, s: 0, v: 0 },
            dragging: None,
        }
    }

    /// Reset all fields from the externally owned value and open.
    pub fn open_with(&mut self, current: &str) {
        self.open = true;
        self.draft = current.to_string();
        self.committed = current.to_string();
        self.hsv = Hsv::from_hex(current);
        self.dragging = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The hex value being edited. May be transiently malformed while the
    /// user types into the hex field.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The draft decomposed into channels, with the permissive fallback
    /// (malformed draft reads as black).
    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(&self.draft)
    }

    // ── interactive surfaces ────────────────────────────────────────────

    /// Claim pointer capture for `surface`. Only one surface may track at
    /// a time; returns whether the claim succeeded.
    pub fn begin_drag(&mut self, surface: DragSurface) -> bool {
        if !self.open || self.dragging.is_some() {
            return false;
        }
        self.dragging = Some(surface);
        true
    }

    pub fn is_dragging(&self, surface: DragSurface) -> bool {
        self.dragging == Some(surface)
    }

    /// Release pointer capture. Called on pointer-up and on abrupt focus
    /// loss; safe when nothing is tracking.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Merge a new saturation/value from the plane, preserving hue.
    pub fn set_sat_val(&mut self, s: u8, v: u8) {
        self.hsv = self.hsv.with_sat_val(s, v);
        self.draft = self.hsv.to_hex();
    }

    /// Merge a new hue from the strip, preserving saturation and value.
    pub fn set_hue(&mut self, h: u16) {
        self.hsv = self.hsv.with_hue(h);
        self.draft = self.hsv.to_hex();
    }

    // ── direct value entry ──────────────────────────────────────────────

    /// Accept hex text verbatim into the draft. The HSV cache follows
    /// only when the text is a complete `#rrggbb` value.
    pub fn set_hex_text(&mut self, text: &str) {
        self.draft = text.to_string();
        if is_strict_hex(text) {
            self.hsv = Hsv::from_hex(text);
        }
    }

    /// Set one RGB channel, clamping to 0..=255. The other channels come
    /// from the current draft, the result always round-trips to valid hex.
    pub fn set_channel(&mut self, ch: Channel, value: i64) {
        let rgb = self.rgb().with(ch, value.clamp(0, 255) as u8);
        self.draft = rgb.to_hex();
        self.hsv = Hsv::from_rgb(rgb);
    }

    /// Select a preset swatch: the draft takes the preset value exactly.
    pub fn apply_preset(&mut self, hex: &str) {
        self.draft = hex.to_string();
        self.hsv = Hsv::from_hex(hex);
    }

    /// Accept a color sampled from the screen.
    pub fn apply_sampled(&mut self, rgb: Rgb) {
        self.draft = rgb.to_hex();
        self.hsv = Hsv::from_rgb(rgb);
    }

    // ── terminal actions ────────────────────────────────────────────────

    /// Close the session, keeping the draft as the final value.
    ///
    /// Returns the value to write back to the externally owned color, or
    /// `None` if the session was already closed (terminal actions fire at
    /// most once per session).
    pub fn commit(&mut self) -> Option<String> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.dragging = None;
        self.committed = self.draft.clone();
        Some(self.draft.clone())
    }

    /// Close the session, discarding edits. The draft is reset to the
    /// value captured at open time; the externally owned color is never
    /// touched on this path. Returns whether the session was open.
    pub fn cancel(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.dragging = None;
        self.draft = self.committed.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(current: &str) -> PickerSession {
        let mut s = PickerSession::closed();
        s.open_with(current);
        s
    }

    #[test]
    fn open_resets_all_fields() {
        let s = opened("#ff0000");
        assert!(s.is_open());
        assert_eq!(s.draft(), "#ff0000");
        assert_eq!(s.hsv(), Hsv { h: 0, s: 100, v: 100 });
        assert!(!s.is_dragging(DragSurface::SvPlane));
        assert!(!s.is_dragging(DragSurface::HueStrip));
    }

    #[test]
    fn cancel_restores_the_opening_value() {
        let mut s = opened("#ff0000");
        s.set_hue(120);
        assert_eq!(s.draft(), "#00ff00");
        assert!(s.cancel());
        assert_eq!(s.draft(), "#ff0000");
        assert!(!s.is_open());
    }

    #[test]
    fn commit_returns_the_edited_value() {
        let mut s = opened("#ff0000");
        s.set_hue(120);
        assert_eq!(s.commit().as_deref(), Some("#00ff00"));
        assert!(!s.is_open());
    }

    #[test]
    fn terminal_actions_fire_at_most_once() {
        let mut s = opened("#ff0000");
        assert!(s.commit().is_some());
        assert!(s.commit().is_none());
        assert!(!s.cancel());

        let mut s = opened("#ff0000");
        assert!(s.cancel());
        assert!(!s.cancel());
        assert!(s.commit().is_none());
    }

    #[test]
    fn surface_edits_merge_into_hsv() {
        let mut s = opened("#ff0000");
        s.set_sat_val(50, 50);
        assert_eq!(s.hsv(), Hsv { h: 0, s: 50, v: 50 });
        s.set_hue(240);
        assert_eq!(s.hsv(), Hsv { h: 240, s: 50, v: 50 });
    }

    #[test]
    fn sat_val_at_zero_keeps_hue() {
        let mut s = opened("#00ff00");
        s.set_sat_val(0, 0);
        assert_eq!(s.draft(), "#000000");
        // Hue survives in the cache so the strip thumb doesn't jump.
        assert_eq!(s.hsv().h, 120);
    }

    #[test]
    fn preset_overwrites_draft_and_hsv() {
        let mut s = opened("#ffffff");
        s.apply_preset("#112233");
        assert_eq!(s.draft(), "#112233");
        assert_eq!(s.hsv(), Hsv::from_hex("#112233"));
    }

    #[test]
    fn sampled_color_overwrites_draft_and_hsv() {
        let mut s = opened("#ffffff");
        s.apply_sampled(Rgb { r: 16, g: 32, b: 64 });
        assert_eq!(s.draft(), "#102040");
        assert_eq!(s.hsv(), Hsv::from_hex("#102040"));
    }

    #[test]
    fn partial_hex_text_leaves_the_cursor_alone() {
        let mut s = opened("#abcdef");
        let before = s.hsv();
        s.set_hex_text("#12");
        assert_eq!(s.draft(), "#12");
        assert_eq!(s.hsv(), before);
        // Completing the value moves the cursor.
        s.set_hex_text("#120000");
        assert_eq!(s.hsv(), Hsv::from_hex("#120000"));
    }

    #[test]
    fn channel_edits_clamp_and_recombine() {
        let mut s = opened("#000000");
        s.set_channel(Channel::Red, 300);
        assert_eq!(s.draft(), "#ff0000");
        s.set_channel(Channel::Green, -5);
        assert_eq!(s.draft(), "#ff0000");
        s.set_channel(Channel::Blue, 128);
        assert_eq!(s.draft(), "#ff0080");
        assert_eq!(s.hsv(), Hsv::from_hex("#ff0080"));
    }

    #[test]
    fn channel_edit_on_malformed_draft_reads_black() {
        let mut s = opened("#abcdef");
        s.set_hex_text("#12");
        s.set_channel(Channel::Red, 255);
        assert_eq!(s.draft(), "#ff0000");
    }

    #[test]
    fn only_one_surface_tracks_at_a_time() {
        let mut s = opened("#ff0000");
        assert!(s.begin_drag(DragSurface::SvPlane));
        assert!(!s.begin_drag(DragSurface::HueStrip));
        assert!(s.is_dragging(DragSurface::SvPlane));
        assert!(!s.is_dragging(DragSurface::HueStrip));
        s.end_drag();
        assert!(s.begin_drag(DragSurface::HueStrip));
    }

    #[test]
    fn drag_requires_an_open_session() {
        let mut s = PickerSession::closed();
        assert!(!s.begin_drag(DragSurface::SvPlane));
        let mut s = opened("#ff0000");
        s.commit();
        assert!(!s.begin_drag(DragSurface::SvPlane));
    }
}
