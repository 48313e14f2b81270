#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Cosmetic glass effects for the landing page: pointer distortion over the
//! glass surfaces, style presets from the nav, a scroll-driven nav theme and
//! a parallax hero background.
//!
//! The geometry and decision logic live in host-independent modules so they
//! can be unit tested with plain `cargo test`. The DOM wiring is only compiled
//! for `wasm32`.

pub mod config;
pub mod css;
pub mod error;
pub mod nav;
pub mod parallax;
pub mod pointer;
pub mod preset;
pub mod session;
pub mod theme;

pub use config::FxConfig;
pub use error::FxError;
pub use session::Session;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::{FxConfig, FxError, Session};

    pub mod dom;
    pub mod glass;
    pub mod parallax;
    pub mod scroll_theme;
    pub mod switcher;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Module scripts may run before parsing finishes.
        if document.ready_state() == "loading" {
            let on_ready = Closure::once_into_js(move || {
                if let Err(err) = boot_with(FxConfig::default()) {
                    log::error!("glass effects disabled: {err}");
                }
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_ready.unchecked_ref(),
            )?;
            return Ok(());
        }

        boot_with(FxConfig::default()).map_err(|err| {
            log::error!("glass effects disabled: {err}");
            JsValue::from(err)
        })
    }

    /// Discovers the page elements and attaches every effect.
    ///
    /// Only a missing `window`/`document`, an invalid config or a selector the
    /// browser rejects is an error. Absent optional elements just leave the
    /// matching effect inert.
    pub fn boot_with(config: FxConfig) -> Result<(), FxError> {
        config.validate()?;
        let window = web_sys::window().ok_or(FxError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(FxError::MissingGlobal("document"))?;

        let page = Rc::new(dom::Page::discover(&document, &config)?);
        log::info!(
            "glass effects: {} surfaces, {} nav items, {} sections",
            page.surfaces.len(),
            page.nav_items.len(),
            page.sections.len()
        );

        let session = Rc::new(RefCell::new(Session::new(config)));
        glass::attach(&page, &session)?;
        switcher::attach(&page, &session)?;
        scroll_theme::attach(&window, &page, &session)?;
        parallax::attach(&window, &page, &session)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::boot_with;
