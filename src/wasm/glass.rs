use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, MouseEvent};

use super::dom::{self, Page};
use crate::config::DARK_MODE_CLASS;
use crate::pointer::{PointerEffect, SurfaceRect};
use crate::{FxError, Session};

/// Hooks pointer move/leave on every glass surface.
pub fn attach(page: &Rc<Page>, session: &Rc<RefCell<Session>>) -> Result<(), FxError> {
    for surface in &page.surfaces {
        let on_move = {
            let page = page.clone();
            let session = session.clone();
            let surface = surface.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                pointer_move(&page, &session.borrow(), &surface, &event);
            })
        };
        surface.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let on_leave = {
            let page = page.clone();
            let session = session.clone();
            let surface = surface.clone();
            Closure::<dyn FnMut()>::new(move || {
                pointer_leave(&page, &session.borrow(), &surface);
            })
        };
        surface.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }
    Ok(())
}

pub fn pointer_move(page: &Page, session: &Session, surface: &Element, event: &MouseEvent) {
    let rect = surface.get_bounding_client_rect();
    let effect = PointerEffect::at(
        SurfaceRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        },
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        surface.class_list().contains(DARK_MODE_CLASS),
    );

    if let Some(displacement) = &page.displacement {
        dom::log_failure(
            "displacement scale",
            displacement.set_attribute("scale", &effect.scale_attr()),
        );
    }
    if let Some(specular) = specular(session, surface) {
        dom::log_failure(
            "specular highlight",
            dom::set_style(&specular, "background", &effect.specular_background()),
        );
    }
}

pub fn pointer_leave(page: &Page, session: &Session, surface: &Element) {
    if let Some(displacement) = &page.displacement {
        dom::log_failure(
            "displacement reset",
            displacement.set_attribute("scale", session.base_scale()),
        );
    }
    if let Some(specular) = specular(session, surface) {
        dom::log_failure(
            "specular reset",
            dom::set_style(&specular, "background", "none"),
        );
    }
}

fn specular(session: &Session, surface: &Element) -> Option<Element> {
    match surface.query_selector(session.config().specular_selector) {
        Ok(found) => found,
        Err(err) => {
            dom::log_failure("specular lookup", Err(err));
            None
        }
    }
}
