use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::{FxConfig, FxError};

/// Elements the effects act on, looked up once at boot.
pub struct Page {
    pub surfaces: Vec<Element>,
    pub nav: Option<Element>,
    pub nav_items: Vec<Element>,
    pub turbulence: Option<Element>,
    pub displacement: Option<Element>,
    pub sections: Vec<Element>,
    pub hero: Option<HtmlElement>,
    pub hero_bg: Option<HtmlElement>,
}

impl Page {
    pub fn discover(document: &Document, config: &FxConfig) -> Result<Self, FxError> {
        let page = Self {
            surfaces: query_all(document, config.surface_selector)?,
            nav: document.query_selector(config.nav_selector)?,
            nav_items: query_all(document, config.nav_item_selector)?,
            turbulence: document.query_selector(config.turbulence_selector)?,
            displacement: document.query_selector(config.displacement_selector)?,
            sections: query_all(document, config.section_selector)?,
            hero: document
                .get_element_by_id(config.hero_id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            hero_bg: document
                .query_selector(config.hero_bg_selector)?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        };

        // Specular overlays are looked up per surface; check the selector once.
        document.query_selector(config.specular_selector)?;

        if page.displacement.is_none() {
            log::debug!("no displacement map; pointer scale updates disabled");
        }
        if page.turbulence.is_none() {
            log::debug!("no turbulence primitive; preset frequencies not applied");
        }
        Ok(page)
    }
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FxError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Sets an inline style property. Non-HTML elements are left alone.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    match element.dyn_ref::<HtmlElement>() {
        Some(el) => el.style().set_property(property, value),
        None => Ok(()),
    }
}

/// DOM writes inside handlers never propagate; a failure is only logged.
/// Returns whether the write went through.
pub fn log_failure(action: &str, result: Result<(), JsValue>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("{action} failed: {}", FxError::from(err));
            false
        }
    }
}
