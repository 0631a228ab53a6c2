use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use missions_map_shared::{CountryFeature, FactTable, load_countries, unmatched_names};

use crate::config::{ATLAS_URL, TOPOLOGY_OBJECT};
use crate::latest::LatestRequest;

thread_local! {
    static ATLAS_FETCH: RefCell<Option<web_sys::AbortController>> = const { RefCell::new(None) };
    static ATLAS_LOADS: LatestRequest = const { LatestRequest::new() };
}

/// Fetch the raw atlas topology.
pub async fn fetch_atlas(signal: &web_sys::AbortSignal) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(ATLAS_URL)
        .abort_signal(Some(signal))
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.text().await.map_err(|e| format!("fetch error: {e}"))
}

/// Start loading the atlas into `countries`. A previous in-flight load is
/// aborted; an aborted or superseded load never touches the signal.
pub fn load_atlas(countries: RwSignal<Option<Vec<CountryFeature>>>, facts: StoredValue<FactTable>) {
    let Ok(controller) = web_sys::AbortController::new() else {
        return;
    };
    let signal = controller.signal();
    let ticket = ATLAS_LOADS.with(LatestRequest::begin);
    ATLAS_FETCH.with(|slot| {
        if let Some(old) = slot.borrow_mut().replace(controller) {
            old.abort();
        }
    });

    spawn_local(async move {
        let result = fetch_atlas(&signal).await.and_then(|json| {
            facts.with_value(|table| {
                let loaded = load_countries(&json, TOPOLOGY_OBJECT, table)
                    .map_err(|e| format!("parse error: {e}"))?;
                let missing = unmatched_names(&loaded, table);
                if !missing.is_empty() {
                    web_sys::console::info_1(
                        &format!("No facts for {} countries: {}", missing.len(), missing.join(", "))
                            .into(),
                    );
                }
                Ok(loaded)
            })
        });
        if signal.aborted() || !ATLAS_LOADS.with(|loads| loads.is_current(ticket)) {
            return;
        }
        ATLAS_FETCH.with(|slot| slot.borrow_mut().take());
        match result {
            Ok(loaded) => {
                let _ = countries.try_set(Some(loaded));
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("World atlas load failed: {e}").into());
            }
        }
    });
}

/// Abort the in-flight atlas load, if any.
pub fn cancel_atlas_load() {
    ATLAS_LOADS.with(LatestRequest::cancel);
    ATLAS_FETCH.with(|slot| {
        if let Some(controller) = slot.borrow_mut().take() {
            controller.abort();
        }
    });
}
