//! macOS native eyedropper (screen color sampler) integration.
//!
//! Uses `NSColorSampler` via Objective-C FFI to invoke the system-wide
//! screen color picker. The sampler runs asynchronously — macOS shows a
//! magnifying-glass overlay, the user clicks a pixel, and the callback
//! fires with the sampled color. Cancelling (Esc) never invokes the
//! callback, leaving the session untouched.

use std::cell::Cell;

use block2::RcBlock;
use objc2::rc::{Allocated, Id};
use objc2::runtime::{AnyClass, AnyObject};
use objc2::{msg_send, msg_send_id};

use crate::color::Rgb;

/// Invokes the macOS native screen color sampler.
///
/// When the user picks a pixel, `on_pick` is called with the sampled
/// color converted to sRGB. Returns `false` when the sampler class is
/// missing on this system, so the caller can surface a notice instead.
///
/// Must be called from the main thread (Floem event handlers satisfy this).
pub(crate) fn sample_color(on_pick: impl FnOnce(Rgb) + 'static) -> bool {
    let cls = match AnyClass::get("NSColorSampler") {
        Some(c) => c,
        None => return false,
    };

    let sampler: Allocated<AnyObject> = unsafe { msg_send_id![cls, alloc] };
    let sampler: Id<AnyObject> = unsafe { msg_send_id![sampler, init] };

    type Callback = Cell<Option<Box<dyn FnOnce(Rgb)>>>;
    let callback: Callback = Cell::new(Some(Box::new(on_pick)));

    let block = RcBlock::new(move |color_ptr: *mut AnyObject| {
        if color_ptr.is_null() {
            return;
        }
        unsafe {
            let ns_cs_cls = match AnyClass::get("NSColorSpace") {
                Some(c) => c,
                None => return,
            };
            let srgb: *const AnyObject = msg_send![ns_cs_cls, sRGBColorSpace];
            if srgb.is_null() {
                return;
            }
            let srgb_color: *const AnyObject =
                msg_send![&*color_ptr, colorUsingColorSpace: &*srgb];
            if srgb_color.is_null() {
                return;
            }
            let mut r: f64 = 0.0;
            let mut g: f64 = 0.0;
            let mut b: f64 = 0.0;
            let mut a: f64 = 0.0;
            let _: () = msg_send![
                &*srgb_color,
                getRed: &mut r,
                green: &mut g,
                blue: &mut b,
                alpha: &mut a
            ];
            if let Some(cb) = callback.take() {
                cb(Rgb {
                    r: (r * 255.0).round() as u8,
                    g: (g * 255.0).round() as u8,
                    b: (b * 255.0).round() as u8,
                });
            }
        }
    });

    unsafe {
        let _: () = msg_send![&*sampler, showSamplerWithSelectionHandler: &*block];
    }
    true
}
