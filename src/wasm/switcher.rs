use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event};

use super::dom::{self, Page};
use crate::config::ACTIVE_CLASS;
use crate::nav::NavClick;
use crate::preset::{self, StylePreset};
use crate::{FxError, Session};

/// Hooks clicks on every nav item.
pub fn attach(page: &Rc<Page>, session: &Rc<RefCell<Session>>) -> Result<(), FxError> {
    for item in &page.nav_items {
        let on_click = {
            let page = page.clone();
            let session = session.clone();
            let item = item.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                click(&page, &mut session.borrow_mut(), &item, &event);
            })
        };
        item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

pub fn click(page: &Page, session: &mut Session, item: &Element, event: &Event) -> NavClick {
    let style = item.get_attribute(session.config().style_attr);
    let href = item.get_attribute("href");
    let outcome = NavClick::classify(style.as_deref(), href.as_deref());

    match outcome {
        NavClick::ApplyPreset(preset) => {
            event.prevent_default();
            mark_active(&page.nav_items, item);
            apply_preset(page, session, preset);
        }
        NavClick::Activate => mark_active(&page.nav_items, item),
        NavClick::Ignore => {}
    }
    outcome
}

/// Pushes a preset onto every surface and the shared distortion filter.
pub fn apply_preset(page: &Page, session: &mut Session, preset: &'static StylePreset) {
    session.apply_preset(preset);

    for surface in &page.surfaces {
        let classes = surface.class_list();
        for class in preset::preset_classes() {
            dom::log_failure("remove preset class", classes.remove_1(class));
        }
        if preset.has_class() {
            dom::log_failure("add preset class", classes.add_1(preset.class_name));
        }
    }

    if let Some(turbulence) = &page.turbulence {
        dom::log_failure(
            "turbulence frequency",
            turbulence.set_attribute("baseFrequency", preset.base_frequency),
        );
    }
    if let Some(displacement) = &page.displacement {
        dom::log_failure(
            "displacement scale",
            displacement.set_attribute("scale", preset.scale),
        );
    }
    log::debug!("glass preset `{}` applied", preset.id);
}

/// Moves the active marker to `chosen`, clearing it everywhere else first.
fn mark_active(items: &[Element], chosen: &Element) {
    for item in items {
        dom::log_failure("clear active", item.class_list().remove_1(ACTIVE_CLASS));
    }
    dom::log_failure("set active", chosen.class_list().add_1(ACTIVE_CLASS));
}
