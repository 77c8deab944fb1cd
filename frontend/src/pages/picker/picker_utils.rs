use yew::prelude::*;

use crate::styles;

// Result line under each wheel's input
#[derive(Properties, PartialEq)]
pub struct ResultLineProps {
    pub result: Option<String>,
}

#[function_component(ResultLine)]
pub fn result_line(props: &ResultLineProps) -> Html {
    html! {
        <p class={styles::TEXT_BODY}>
            <span class="font-medium">{"Result:"}</span>
            {" "}
            {props.result.clone().unwrap_or_else(|| "—".to_string())}
        </p>
    }
}

// Start / Redo button
#[derive(Properties, PartialEq)]
pub struct StartButtonProps {
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(StartButton)]
pub fn start_button(props: &StartButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={styles::BUTTON_PRIMARY}
            onclick={props.onclick.clone()}
            aria-label={props.label.clone()}
        >
            {props.label.clone()}
        </button>
    }
}
