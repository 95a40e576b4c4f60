use tactics::config::PageConfig;
use tactics::page::{SelectControl, Selectors};
use tactics::selector::SelectOption;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlOptionElement, HtmlSelectElement};

/// A `<select>` the page already contains.
pub(super) struct DomSelect(pub(super) HtmlSelectElement);

impl SelectControl for DomSelect {
    fn append_option(&mut self, option: &SelectOption) -> Result<(), String> {
        let el = HtmlOptionElement::new_with_text_and_value(&option.label, &option.value)
            .map_err(|_| "option: constructor threw".to_string())?;
        self.0
            .append_child(&el)
            .map_err(|_| "select: append_child() threw".to_string())?;
        Ok(())
    }

    fn value(&self) -> String {
        self.0.value()
    }
}

pub(super) struct Panels {
    pub(super) map: HtmlElement,
    pub(super) operator: HtmlElement,
}

/// Finds the five elements the static page must provide.
pub(super) fn locate(config: &PageConfig) -> Result<(Selectors<DomSelect>, Panels), String> {
    let document = document()?;
    let select = |id: &str| element_by_id::<HtmlSelectElement>(&document, id).map(DomSelect);

    let selectors = Selectors {
        map: select(&config.map_select_id)?,
        side: select(&config.side_select_id)?,
        operator: select(&config.operator_select_id)?,
    };
    let panels = Panels {
        map: element_by_id(&document, &config.map_panel_id)?,
        operator: element_by_id(&document, &config.operator_panel_id)?,
    };
    Ok((selectors, panels))
}

fn document() -> Result<Document, String> {
    let window = web_sys::window().ok_or("no window".to_string())?;
    window.document().ok_or("no document".to_string())
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("missing element #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| format!("element #{id} has an unexpected type"))
}

/// Calls `f` with the select's new value on every `change` event.
/// The listener lives for the rest of the page.
pub(super) fn on_change(
    select: &DomSelect,
    mut f: impl FnMut(String) + 'static,
) -> Result<(), String> {
    let source = select.0.clone();
    let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        f(source.value());
    }) as Box<dyn FnMut(_)>);

    select
        .0
        .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        .map_err(|_| "addEventListener() threw".to_string())?;
    cb.forget();
    Ok(())
}

pub(super) fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Defaults, overlaid with the JSON in `<body attr='...'>` when present.
pub(super) fn page_config_from_body(attr: &str) -> PageConfig {
    let raw = document()
        .ok()
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(attr));

    let Some(raw) = raw else {
        return PageConfig::default();
    };

    match PageConfig::from_json_overrides(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            console_error(&format!("tactics: ignoring invalid {attr}: {e}"));
            PageConfig::default()
        }
    }
}
