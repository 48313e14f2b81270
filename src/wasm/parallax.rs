use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlElement, MouseEvent, Window};

use super::dom::{self, Page};
use crate::{FxError, Session};

/// Moves the hero background with scroll and pointer.
///
/// A single frame callback is created up front and re-requested only when the
/// parallax state goes from clean to dirty, so a burst of input events costs
/// one style write per frame.
pub fn attach(
    window: &Window,
    page: &Rc<Page>,
    session: &Rc<RefCell<Session>>,
) -> Result<(), FxError> {
    let (Some(hero), Some(hero_bg)) = (page.hero.clone(), page.hero_bg.clone()) else {
        log::debug!("no hero background; parallax disabled");
        return Ok(());
    };

    let frame: js_sys::Function = {
        let session = session.clone();
        let hero = hero.clone();
        Closure::<dyn FnMut()>::new(move || {
            render_frame(&mut session.borrow_mut(), &hero, &hero_bg);
        })
        .into_js_value()
        .unchecked_into()
    };

    let on_scroll = {
        let window = window.clone();
        let session = session.clone();
        let frame = frame.clone();
        Closure::<dyn FnMut()>::new(move || {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            if session.borrow_mut().parallax.set_scroll(scroll_y) {
                request_frame(&window, &frame);
            }
        })
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    let on_move = {
        let window = window.clone();
        let session = session.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let width = viewport_extent(window.inner_width());
            let height = viewport_extent(window.inner_height());
            let schedule = session.borrow_mut().parallax.set_pointer(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                width,
                height,
            );
            if schedule {
                request_frame(&window, &frame);
            }
        })
    };
    hero.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

/// Applies the pending translation, if any. Safe to call with a clean state.
pub fn render_frame(session: &mut Session, hero: &HtmlElement, hero_bg: &HtmlElement) {
    let hero_height = f64::from(hero.offset_height());
    if let Some(translation) = session.parallax.take_frame(hero_height) {
        dom::log_failure(
            "hero transform",
            hero_bg.style().set_property("transform", &translation.to_css()),
        );
    }
}

fn request_frame(window: &Window, frame: &js_sys::Function) {
    if let Err(err) = window.request_animation_frame(frame) {
        // Without a frame the dirty flag would never clear; run it now instead.
        dom::log_failure("request animation frame", Err(err));
        run_frame_now(frame);
    }
}

/// Invokes the frame callback synchronously. Returns false if it threw.
pub fn run_frame_now(frame: &js_sys::Function) -> bool {
    dom::log_failure(
        "parallax frame",
        frame.call0(&wasm_bindgen::JsValue::NULL).map(|_| ()),
    )
}

fn viewport_extent(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}
