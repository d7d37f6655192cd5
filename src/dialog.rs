//! Modal dialog assembly.
//!
//! Wires one [`PickerSession`] to the interactive surfaces, the value
//! entry row, the preset swatches, and the Commit/Cancel protocol. The
//! externally owned color is read when `open` flips to true and written
//! back only on OK; Cancel (button or a pointer-down on the backdrop)
//! leaves it untouched. Each open session ends in exactly one of the two.

use std::rc::Rc;

use floem::peniko::Color;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate, SignalWith};

use crate::color::Channel;
use crate::constants;
use crate::hue_strip::hue_strip;
use crate::inputs::{channel_input, copy_button, hex_input};
use crate::session::PickerSession;
use crate::sv_plane::sv_plane;
use crate::swatches::preset_row;

fn action_button(
    text: &'static str,
    fg: Color,
    bg: Color,
    bg_hover: Color,
    on_press: impl Fn() + 'static,
) -> impl IntoView {
    label(move || text)
        .style(move |s| {
            s.padding_horiz(16.0)
                .padding_top(6.0)
                .padding_bottom(6.0)
                .font_size(13.0)
                .border_radius(6.0)
                .color(fg)
                .background(bg)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(move |s| s.background(bg_hover))
        })
        .on_click_stop(move |_| on_press())
}

fn eyedropper_button(
    session: RwSignal<PickerSession>,
    notice: RwSignal<String>,
) -> impl IntoView {
    label(|| lucide_icons::Icon::Pipette.unicode().to_string())
        .style(|s| {
            s.font_size(18.0)
                .font_family("lucide".to_string())
                .cursor(floem::style::CursorStyle::Pointer)
                .border_radius(3.0)
                .padding(2.0)
                .color(Color::rgb8(120, 120, 120))
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
        })
        .on_click_stop(move |_| {
            #[cfg(all(feature = "eyedropper", target_os = "macos"))]
            {
                let available = crate::eyedropper::sample_color(move |rgb| {
                    // The sampler resolves asynchronously; the session may
                    // have closed in the meantime.
                    session.update(|s| {
                        if s.is_open() {
                            s.apply_sampled(rgb);
                        }
                    });
                });
                if available {
                    return;
                }
            }
            let _ = session;
            log::warn!("screen color sampler not available");
            notice.set("Screen color sampling is not available here.".to_string());
        })
}

/// Builds the modal color dialog. See [`crate::color_dialog`].
pub(crate) fn dialog(
    color: RwSignal<String>,
    open: RwSignal<bool>,
    presets: Vec<String>,
    on_commit: impl Fn(&str) + 'static,
    on_cancel: impl Fn() + 'static,
) -> impl IntoView {
    let session = RwSignal::new(PickerSession::closed());
    let notice = RwSignal::new(String::new());

    let on_commit = Rc::new(on_commit);
    let on_cancel = Rc::new(on_cancel);

    // Opening resets all session state from the externally owned value.
    create_effect(move |_| {
        if open.get() {
            let current = color.get_untracked();
            log::debug!("picker session opened with {current}");
            notice.set(String::new());
            session.update(|s| s.open_with(&current));
        }
    });

    let do_cancel = move || {
        if session.with_untracked(|s| s.is_open()) {
            session.update(|s| {
                s.cancel();
            });
            log::debug!("picker session cancelled");
            open.set(false);
            on_cancel();
        }
    };
    let cancel_outside = do_cancel.clone();

    let do_commit = move || {
        let hex = session.with_untracked(|s| {
            if s.is_open() {
                Some(s.draft().to_string())
            } else {
                None
            }
        });
        if let Some(hex) = hex {
            session.update(|s| {
                s.commit();
            });
            log::debug!("picker session committed {hex}");
            color.set(hex.clone());
            open.set(false);
            on_commit(&hex);
        }
    };

    let preview = empty().style(move |st| {
        let c = session.with(|s| s.rgb());
        st.size(constants::PREVIEW_SIZE, constants::PREVIEW_SIZE)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180))
            .background(Color::rgb8(c.r, c.g, c.b))
    });

    let panel = v_stack((
        sv_plane(session),
        // Eyedropper, preview swatch, hue strip in one row
        h_stack((
            eyedropper_button(session, notice),
            preview,
            hue_strip(session).style(|s| s.flex_grow(1.0)),
        ))
        .style(|s| s.items_center().gap(constants::GAP)),
        // Hex + RGB entry row
        h_stack((
            hex_input(session),
            channel_input("R", session, Channel::Red),
            channel_input("G", session, Channel::Green),
            channel_input("B", session, Channel::Blue),
            copy_button(move || session.with_untracked(|s| s.draft().to_string())),
        ))
        .style(|s| s.items_start().gap(constants::GAP)),
        preset_row(session, presets),
        label(move || notice.get()).style(move |s| {
            s.font_size(constants::LABEL_FONT + 1.0)
                .color(Color::rgb8(150, 60, 60))
                .apply_if(notice.with(|n| n.is_empty()), |s| s.hide())
        }),
        h_stack((
            action_button(
                "Cancel",
                Color::rgb8(55, 65, 81),
                Color::rgb8(243, 244, 246),
                Color::rgb8(229, 231, 235),
                do_cancel,
            ),
            action_button(
                "OK",
                Color::WHITE,
                Color::rgb8(37, 99, 235),
                Color::rgb8(29, 78, 216),
                do_commit,
            ),
        ))
        .style(|s| {
            s.gap(constants::GAP)
                .items_center()
                .justify_content(Some(floem::taffy::AlignContent::FlexEnd))
        }),
    ))
    .style(|s| {
        s.width(constants::PANEL_WIDTH)
            .gap(constants::GAP)
            .padding(constants::PADDING)
            .border_radius(12.0)
            .border(1.0)
            .border_color(Color::rgb8(220, 220, 220))
            .background(Color::WHITE)
    })
    // Pointer-downs inside the panel must not reach the backdrop.
    .on_event_stop(floem::event::EventListener::PointerDown, |_| {});

    container(panel)
        .style(move |s| {
            s.absolute()
                .size_full()
                .items_center()
                .justify_center()
                .background(Color::rgba(0.0, 0.0, 0.0, 0.2))
                .apply_if(!open.get(), |s| s.hide())
        })
        .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
            cancel_outside()
        })
}
