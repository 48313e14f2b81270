use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, HtmlElement, Window};

use super::dom::{self, Page};
use crate::config::{DARK_MODE_CLASS, LIGHT_THEME};
use crate::theme::{self, SectionBox};
use crate::{FxConfig, FxError, Session};

/// Runs the theme check now and on every window scroll.
pub fn attach(
    window: &Window,
    page: &Rc<Page>,
    session: &Rc<RefCell<Session>>,
) -> Result<(), FxError> {
    let Some(nav) = page.nav.clone() else {
        log::debug!("no navigation bar; scroll theme disabled");
        return Ok(());
    };
    let config = session.borrow().config().clone();

    check(&nav, &page.sections, &config);

    let on_scroll = {
        let page = page.clone();
        Closure::<dyn FnMut()>::new(move || {
            check(&nav, &page.sections, &config);
        })
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

/// Sets or clears the nav dark-mode class. Returns whether it is now set.
pub fn check(nav: &Element, sections: &[Element], config: &FxConfig) -> bool {
    let boxes: Vec<SectionBox> = sections
        .iter()
        .map(|section| section_box(section, config))
        .collect();
    let dark = theme::nav_is_dark(&boxes, config.trigger_offset);

    let classes = nav.class_list();
    let result = if dark {
        classes.add_1(DARK_MODE_CLASS)
    } else {
        classes.remove_1(DARK_MODE_CLASS)
    };
    dom::log_failure("nav theme", result);
    dark
}

fn section_box(section: &Element, config: &FxConfig) -> SectionBox {
    let rect = section.get_bounding_client_rect();
    let height = section
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or_else(|| rect.height());
    SectionBox {
        top: rect.top(),
        height,
        light: section.get_attribute(config.theme_attr).as_deref() == Some(LIGHT_THEME),
    }
}
