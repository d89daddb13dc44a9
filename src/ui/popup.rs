/// Popup UI for the Website Unavailable Helper extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;

use crate::presenter::{BrowserOpener, PopupView, activate, load_view};
use crate::storage::ChromeStorage;
use crate::suggestions::Suggestion;
use crate::ui::components::{Loading, SuggestionList};

#[derive(Clone, PartialEq)]
enum AppState {
    Loading,
    Ready(PopupView),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Loading);

    // Read the last failure once, on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let storage = ChromeStorage::detect();
            let now = js_sys::Date::now() as i64;
            spawn_local(async move {
                let view = load_view(storage.as_ref(), now).await;
                state.set(AppState::Ready(view));
            });
            || ()
        });
    }

    let on_activate = Callback::from(move |suggestion: Suggestion| {
        spawn_local(async move {
            activate(&BrowserOpener::detect(), &suggestion).await;
        });
    });

    let body = match &*state {
        AppState::Loading => html! {
            <Loading message={Some("Checking for failed sites...".to_string())} />
        },
        AppState::Ready(PopupView::StorageUnavailable) => html! {
            <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                {"Storage API is not available in this browser."}
            </Alert>
        },
        AppState::Ready(PopupView::LoadFailed(msg)) => html! {
            <p id="status">{msg}</p>
        },
        AppState::Ready(PopupView::NoFailure) => html! {
            <>
                <p id="status"><span class="no-domain">{"No failed domains detected recently."}</span></p>
                <p id="time"></p>
                <p id="error-code"></p>
            </>
        },
        AppState::Ready(PopupView::Failure(failure)) => html! {
            <>
                <p id="status">
                    {"Could not access "}
                    <span id="domain">{&failure.domain}</span>
                </p>
                <p id="time">{format!("Detected {}", failure.time_ago)}</p>
                <p id="error-code">{format!("Error: {}", failure.error_code)}</p>
                <h2 class="suggestions-title">{"Try instead"}</h2>
                <SuggestionList
                    suggestions={failure.suggestions.clone()}
                    on_activate={on_activate}
                />
            </>
        },
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Website Unavailable Helper"}</h1>
            {body}
            <p class="footer-popup">
                {"Website Unavailable Helper v0.1.0"}
            </p>
        </div>
    }
}
