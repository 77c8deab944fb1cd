use shared::constants::CUSTOM_PALETTE_ID;
use shared::PALETTES;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PalettePickerProps {
    pub palette_id: String,
    pub custom_colors: String,
    /// Emits `(palette_id, custom_colors_text)` on every change.
    pub on_change: Callback<(String, String)>,
}

/// Palette selector. The free-text color field only shows for the
/// custom palette.
#[function_component(PalettePicker)]
pub fn palette_picker(props: &PalettePickerProps) -> Html {
    let onselect = {
        let on_change = props.on_change.clone();
        let custom = props.custom_colors.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit((select.value(), custom.clone()));
            }
        })
    };

    let oninput = {
        let on_change = props.on_change.clone();
        let palette_id = props.palette_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((palette_id.clone(), input.value()));
        })
    };

    html! {
        <div class="flex items-center gap-2">
            <label class="text-sm" for="palette-select">{"Palette"}</label>
            <select
                id="palette-select"
                class={styles::SELECT}
                onchange={onselect}
                aria-label="Color palette"
            >
                {for PALETTES.iter().map(|palette| html! {
                    <option
                        key={palette.id}
                        value={palette.id}
                        selected={palette.id == props.palette_id}
                    >
                        {palette.name}
                    </option>
                })}
            </select>
            if props.palette_id == CUSTOM_PALETTE_ID {
                <input
                    type="text"
                    class={styles::INPUT}
                    placeholder="#ff0000, #00ff00, #0000ff"
                    value={props.custom_colors.clone()}
                    oninput={oninput}
                    aria-label="Custom colors"
                />
            }
        </div>
    }
}
