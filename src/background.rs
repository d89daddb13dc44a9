/// Background context: wires the chrome.* event sources to the recorder
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::bridge;
use crate::failure_data::{
    FailureEvent, InstalledDetails, NavigationErrorDetails, RequestErrorDetails, details_from_js,
};
use crate::recorder::{handle_installed, handle_startup, record_failure};
use crate::storage::ChromeStorage;

fn parse_details<T: DeserializeOwned>(details: JsValue) -> Option<T> {
    match details_from_js(details) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("Unexpected event details: {}", e);
            None
        }
    }
}

/// Build a listener that adapts one event source's details into a `FailureEvent`
fn failure_listener<T>() -> Closure<dyn FnMut(JsValue)>
where
    T: DeserializeOwned + Into<FailureEvent> + 'static,
{
    Closure::wrap(Box::new(move |details: JsValue| {
        let Some(details) = parse_details::<T>(details) else {
            return;
        };
        let event: FailureEvent = details.into();
        let now = js_sys::Date::now() as i64;

        spawn_local(async move {
            record_failure(&ChromeStorage, event, now).await;
        });
    }) as Box<dyn FnMut(JsValue)>)
}

/// Register every background listener. Called once from the service worker.
///
/// Lifecycle listeners go first so install cleanup still happens when a
/// failure source is missing.
pub fn register_listeners() {
    let on_installed = Closure::wrap(Box::new(move |details: JsValue| {
        let Some(details) = parse_details::<InstalledDetails>(details) else {
            return;
        };
        spawn_local(async move {
            handle_installed(&ChromeStorage, &details).await;
        });
    }) as Box<dyn FnMut(JsValue)>);
    bridge::addInstalledListener(&on_installed);
    on_installed.forget();

    let on_startup = Closure::wrap(Box::new(handle_startup) as Box<dyn FnMut()>);
    bridge::addStartupListener(&on_startup);
    on_startup.forget();

    let on_request_error = failure_listener::<RequestErrorDetails>();
    if !bridge::addRequestErrorListener(&on_request_error) {
        log::warn!("webRequest unavailable; request errors will not be recorded");
    }
    on_request_error.forget();

    let on_navigation_error = failure_listener::<NavigationErrorDetails>();
    if !bridge::addNavigationErrorListener(&on_navigation_error) {
        log::info!("webNavigation unavailable; relying on webRequest errors only");
    }
    on_navigation_error.forget();
}
