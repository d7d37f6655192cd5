//! # floem-swatch
//!
//! A modal color picker dialog for [Floem](https://github.com/lapce/floem).
//!
//! The dialog edits a hex color (`#rrggbb`) through a 2D saturation-value
//! plane, a hue strip, hex/RGB text entry, preset swatches, and (on
//! macOS) the system eyedropper. Edits accumulate in a draft; the
//! externally owned value is only written when the user confirms.
//! Cancelling, including a click outside the panel, restores it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_swatch::color_dialog;
//!
//! let color = RwSignal::new("#3b82f6".to_string());
//! let open = RwSignal::new(false);
//! // Place `color_dialog(color, open, presets, on_commit, on_cancel)`
//! // last in a `stack` over your content; set `open` to true to show it.
//! ```

mod color;
mod session;

mod constants;
mod dialog;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
mod eyedropper;
mod hue_strip;
mod inputs;
mod math;
mod sv_plane;
mod swatches;

pub use color::{is_strict_hex, Channel, Hsv, Rgb};
pub use session::{DragSurface, PickerSession};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the modal color picker dialog.
///
/// - `color`: the externally owned current value, read when `open` flips
///   to true and overwritten only on commit.
/// - `open`: shows/hides the dialog; the widget sets it back to false
///   when a session ends.
/// - `presets`: hex values rendered as one-click swatches.
/// - `on_commit`: invoked exactly once per confirmed session with the
///   final hex value.
/// - `on_cancel`: invoked exactly once per aborted session.
///
/// The returned view fills its parent and centers the panel over a
/// dimmed backdrop, so place it last in a `stack` over your content.
pub fn color_dialog(
    color: RwSignal<String>,
    open: RwSignal<bool>,
    presets: Vec<String>,
    on_commit: impl Fn(&str) + 'static,
    on_cancel: impl Fn() + 'static,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    dialog::dialog(color, open, presets, on_commit, on_cancel)
}
