/// Reusable UI components

use yew::prelude::*;

use crate::suggestions::Suggestion;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading-container">
            <div class="loading-spinner"></div>
            if let Some(msg) = &props.message {
                <p class="loading-message">{msg}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuggestionItemProps {
    pub suggestion: Suggestion,
    pub on_activate: Callback<Suggestion>,
}

#[function_component(SuggestionItem)]
pub fn suggestion_item(props: &SuggestionItemProps) -> Html {
    let onclick = {
        let suggestion = props.suggestion.clone();
        let on_activate = props.on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_activate.emit(suggestion.clone());
        })
    };

    html! {
        <li>
            <a
                class="alternative-link"
                href={props.suggestion.url.clone()}
                target="_blank"
                {onclick}
            >
                {&props.suggestion.text}
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuggestionListProps {
    /// `Err` is shown as a single inline error item
    pub suggestions: Result<Vec<Suggestion>, String>,
    pub on_activate: Callback<Suggestion>,
}

#[function_component(SuggestionList)]
pub fn suggestion_list(props: &SuggestionListProps) -> Html {
    let items = match &props.suggestions {
        Err(msg) => html! {
            <li class="suggestion-error">{msg}</li>
        },
        Ok(suggestions) if suggestions.is_empty() => html! {
            <li class="no-suggestions">{"No suggestions available."}</li>
        },
        Ok(suggestions) => html! {
            <>
                {for suggestions.iter().map(|suggestion| html! {
                    <SuggestionItem
                        key={suggestion.url.clone()}
                        suggestion={suggestion.clone()}
                        on_activate={props.on_activate.clone()}
                    />
                })}
            </>
        },
    };

    html! {
        <ul id="suggestions" class="suggestions-list">
            {items}
        </ul>
    }
}
