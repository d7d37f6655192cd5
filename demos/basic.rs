//! Standalone demo: a swatch button that opens the color dialog.

use floem::peniko::Color;
use floem::prelude::*;
use floem::window::WindowConfig;
use floem_swatch::{color_dialog, Rgb};

fn main() {
    env_logger::init();

    let color = RwSignal::new("#3b82f6".to_string());
    let open = RwSignal::new(false);
    let presets: Vec<String> = [
        "#000000", "#ffffff", "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6", "#a855f7",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    let app = move |_| {
        let content = v_stack((
            label(move || format!("Current color: {}", color.get())),
            empty()
                .style(move |s| {
                    let c = Rgb::from_hex(&color.get());
                    s.size(64.0, 64.0)
                        .border_radius(8.0)
                        .border(1.0)
                        .border_color(Color::rgb8(180, 180, 180))
                        .background(Color::rgb8(c.r, c.g, c.b))
                        .cursor(floem::style::CursorStyle::Pointer)
                })
                .on_click_stop(move |_| open.set(true)),
        ))
        .style(|s| s.size_full().items_center().justify_center().gap(12.0));

        stack((
            content,
            color_dialog(
                color,
                open,
                presets.clone(),
                |hex| log::info!("committed {hex}"),
                || log::info!("cancelled"),
            ),
        ))
        .style(|s| s.size_full())
        .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
            floem::quit_app()
        })
    };

    floem::Application::new()
        .window(
            app,
            Some(
                WindowConfig::default()
                    .size((560.0, 480.0))
                    .title("floem-swatch"),
            ),
        )
        .run();
}
