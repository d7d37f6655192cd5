//! Text and numeric inputs for direct value entry.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate, SignalWith};

use floem::peniko::Color;

use crate::color::Channel;
use crate::constants;
use crate::session::PickerSession;

fn field_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(3.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

/// The hex text field.
///
/// The draft takes the typed text verbatim (transient invalid states are
/// fine while typing); the session only recomputes HSV once the text is a
/// complete `#rrggbb` value. Non-hex characters are stripped as typed and
/// the text is capped at six digits, like the reference widget's field.
pub(crate) fn hex_input(session: RwSignal<PickerSession>) -> impl IntoView {
    let text = RwSignal::new(session.with_untracked(|s| {
        s.draft().trim_start_matches('#').to_string()
    }));

    // Draft → text (surface drags, presets, channel edits, reopen)
    create_effect(move |_| {
        let shown = session.with(|s| s.draft().trim_start_matches('#').to_string());
        if text.get_untracked() != shown {
            text.set(shown);
        }
    });

    // Text → draft on every keystroke
    create_effect(move |_| {
        let raw = text.get();
        let filtered: String = raw.chars().filter(|c| c.is_ascii_hexdigit()).take(6).collect();
        if filtered != raw {
            text.set(filtered.clone());
        }
        let candidate = format!("#{filtered}");
        let stale = session.with_untracked(|s| s.is_open() && s.draft() != candidate);
        if stale {
            session.update(|s| s.set_hex_text(&candidate));
        }
    });

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        v_stack((
            text_input(text).style(|s| field_style(s, constants::HEX_INPUT_WIDTH)),
            label(|| "Hex").style(|s| {
                s.font_size(constants::LABEL_FONT)
                    .color(Color::rgb8(120, 120, 120))
            }),
        ))
        .style(|s| s.items_center().gap(1.0)),
    ))
    .style(|s| s.items_start().gap(2.0))
}

/// A numeric input bound to one RGB channel of the session draft.
///
/// Edits commit on Enter or focus-lost; the value is clamped to 0..=255
/// and the draft recombined immediately.
pub(crate) fn channel_input(
    lbl: &'static str,
    session: RwSignal<PickerSession>,
    channel: Channel,
) -> impl IntoView {
    let text = RwSignal::new(session.with_untracked(|s| s.rgb().get(channel).to_string()));

    // Draft → text (external updates)
    create_effect(move |_| {
        let expected = session.with(|s| s.rgb().get(channel).to_string());
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match raw.trim().parse::<i64>() {
            Ok(num) => {
                let clamped = num.clamp(0, 255);
                let stale =
                    session.with_untracked(|s| s.is_open() && s.rgb().get(channel) as i64 != clamped);
                if stale {
                    session.update(|s| s.set_channel(channel, clamped));
                }
                let formatted = clamped.to_string();
                if raw != formatted {
                    text.set(formatted);
                }
            }
            Err(_) => {
                // Reset to the current channel value
                let formatted = session.with_untracked(|s| s.rgb().get(channel).to_string());
                if raw != formatted {
                    text.set(formatted);
                }
            }
        }
    };
    let on_commit_clone = on_commit;

    v_stack((
        text_input(text)
            .style(|s| field_style(s, constants::INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit_clone();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}
