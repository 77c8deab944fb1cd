use shared::{Wheel, WheelId};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::picker_utils::ResultLine;
use super::wheel_disc::WheelDisc;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelCardProps {
    pub wheel: Wheel,
    pub colors: Vec<String>,
    pub rotation: f64,
    pub can_remove: bool,
    pub on_edit: Callback<(WheelId, String)>,
    pub on_remove: Callback<WheelId>,
}

#[function_component(WheelCard)]
pub fn wheel_card(props: &WheelCardProps) -> Html {
    let wheel = &props.wheel;
    let input_id = format!("names-{}", wheel.id);
    let error_id = format!("{}-error", input_id);

    let oninput = {
        let on_edit = props.on_edit.clone();
        let id = wheel.id;
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((id, input.value()));
        })
    };

    let onremove = {
        let on_remove = props.on_remove.clone();
        let id = wheel.id;
        Callback::from(move |_: MouseEvent| on_remove.emit(id))
    };

    html! {
        <section class={styles::CARD}>
            <div class="flex items-start justify-between gap-2">
                <h2 class={styles::TEXT_H2}>{"Wheel"}</h2>
                <button
                    type="button"
                    class={styles::BUTTON_SMALL}
                    onclick={onremove}
                    disabled={!props.can_remove}
                    aria-disabled={(!props.can_remove).to_string()}
                    aria-label="Remove wheel"
                >
                    {"– Remove"}
                </button>
            </div>

            <div class="mt-3 grid grid-cols-[200px_1fr] gap-4 items-start">
                <WheelDisc
                    names={wheel.names().to_vec()}
                    colors={props.colors.clone()}
                    rotation={props.rotation}
                    highlighted={wheel.highlighted_index()}
                />

                <div class="space-y-2">
                    <label class={styles::TEXT_LABEL} for={input_id.clone()}>
                        {"Names"}
                    </label>
                    <textarea
                        id={input_id}
                        class={if wheel.error.is_some() { styles::TEXTAREA_ERROR } else { styles::TEXTAREA }}
                        placeholder="Enter names (one per line)"
                        value={wheel.raw_input().to_string()}
                        oninput={oninput}
                        aria-invalid={wheel.error.is_some().to_string()}
                        aria-describedby={wheel.error.as_ref().map(|_| error_id.clone())}
                    />
                    if let Some(error) = &wheel.error {
                        <p id={error_id} class={styles::TEXT_ERROR}>{error.clone()}</p>
                    }
                    <ResultLine result={wheel.last_result.clone()} />
                </div>
            </div>
        </section>
    }
}
