//! Preset color swatches.

use floem::peniko::Color;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate, SignalWith};

use crate::color::Rgb;
use crate::constants;
use crate::session::PickerSession;

fn swatch(session: RwSignal<PickerSession>, hex: String) -> impl IntoView {
    let fill = Rgb::from_hex(&hex);
    let selected_hex = hex.clone();
    container(empty())
        .style(move |s| {
            let selected = session.with(|st| st.draft() == selected_hex);
            let border = if selected {
                Color::rgb8(37, 99, 235)
            } else {
                Color::rgb8(204, 204, 204)
            };
            s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border_radius(constants::RADIUS)
                .border(2.0)
                .border_color(border)
                .background(Color::rgb8(fill.r, fill.g, fill.b))
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_click_stop(move |_| {
            session.update(|st| st.apply_preset(&hex));
        })
}

/// A row of preset swatches. Selecting one overwrites the draft with the
/// preset value exactly; the swatch matching the draft is outlined.
pub(crate) fn preset_row(
    session: RwSignal<PickerSession>,
    presets: Vec<String>,
) -> impl IntoView {
    stack_from_iter(presets.into_iter().map(move |hex| swatch(session, hex)))
        .style(|s| s.gap(constants::GAP / 2.0).items_center())
}
