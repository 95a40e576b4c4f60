use std::sync::Arc;

use leptos::prelude::*;
use tactics::config::PageConfig;
use tactics::dataset::Dataset;
use tactics::page::{start_page, SelectControl, Started};
use tactics::render::{render_map_panel, render_operator_panel};

mod console_log;
mod dom;
mod fetch;
mod panels;

use dom::{DomSelect, Panels};
use panels::PanelView;

/// Optional JSON overrides for [`PageConfig`] on `<body>`.
const CONFIG_ATTR: &str = "data-tactics-config";

/// Loads the dataset and wires the page using the default element ids
/// (overridable through `data-tactics-config` on `<body>`).
pub fn start() {
    start_with(dom::page_config_from_body(CONFIG_ATTR));
}

pub fn start_with(config: PageConfig) {
    console_log::init(config.max_log_level());

    wasm_bindgen_futures::spawn_local(async move {
        let load = fetch::load_dataset(&config.dataset_url).await;

        // A failed load leaves the static page as-is: no options, no panels.
        match start_page(load, || dom::locate(&config)) {
            Ok(started) => {
                if let Err(e) = mount(started) {
                    dom::console_error(&format!("tactics: page setup failed: {e}"));
                }
            }
            Err(e) => dom::console_error(&e.to_string()),
        }
    });
}

/// Everything the renderers read. Built once after the dataset loads; the
/// signals mirror the three selectors.
#[derive(Clone)]
struct AppState {
    dataset: Arc<Dataset>,
    map: RwSignal<String>,
    side: RwSignal<String>,
    operator: RwSignal<String>,
}

fn mount(started: Started<DomSelect, Panels>) -> Result<(), String> {
    let Started {
        dataset,
        selectors,
        panels,
    } = started;

    let state = AppState {
        dataset: Arc::new(dataset),
        map: RwSignal::new(selectors.map.value()),
        side: RwSignal::new(selectors.side.value()),
        operator: RwSignal::new(selectors.operator.value()),
    };

    dom::on_change(&selectors.map, move |v| state.map.set(v))?;
    dom::on_change(&selectors.side, move |v| state.side.set(v))?;
    dom::on_change(&selectors.operator, move |v| state.operator.set(v))?;

    // Panels are fully owned by their renderer from here on.
    panels.map.set_inner_html("");
    panels.operator.set_inner_html("");

    let map_state = state.clone();
    leptos::mount::mount_to(panels.map, move || view! { <MapTactics state=map_state /> })
        .forget();
    leptos::mount::mount_to(panels.operator, move || {
        view! { <OperatorTactics state=state /> }
    })
    .forget();

    Ok(())
}

#[component]
fn MapTactics(state: AppState) -> impl IntoView {
    move || {
        let panel = render_map_panel(&state.dataset, &state.map.get(), &state.side.get());
        view! { <PanelView panel=panel /> }
    }
}

#[component]
fn OperatorTactics(state: AppState) -> impl IntoView {
    move || {
        let panel = render_operator_panel(&state.dataset, &state.operator.get());
        view! { <PanelView panel=panel /> }
    }
}
