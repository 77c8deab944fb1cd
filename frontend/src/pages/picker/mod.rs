pub mod animation;
mod picker_utils;
mod wheel_card;
mod wheel_disc;

use shared::{Wheel, WheelId};
use yew::prelude::*;

use crate::components::PalettePicker;
use crate::config::PickerConfig;
use crate::hooks::use_board;
use crate::styles;

use picker_utils::StartButton;
use wheel_card::WheelCard;

#[derive(Properties, PartialEq)]
pub struct NamePickerProps {
    pub config: PickerConfig,
}

#[function_component(NamePicker)]
pub fn name_picker(props: &NamePickerProps) -> Html {
    let handle = use_board(&props.config);

    // Snapshot what the view needs so no borrow outlives this render
    let (wheels, colors, label, can_remove, palette_id, custom_colors) = {
        let board = handle.board();
        (
            board.wheels().to_vec(),
            board.colors().to_vec(),
            board.primary_label(),
            board.can_remove(),
            board.palette_id().to_string(),
            board.custom_colors().to_string(),
        )
    };

    let on_start = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.start_all())
    };

    let on_reset = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.reset_all())
    };

    let on_add = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.add_wheel())
    };

    let on_remove = {
        let handle = handle.clone();
        Callback::from(move |id: WheelId| handle.remove_wheel(id))
    };

    let on_edit = {
        let handle = handle.clone();
        Callback::from(move |(id, text): (WheelId, String)| handle.edit_wheel(id, &text))
    };

    let on_palette = {
        let handle = handle.clone();
        Callback::from(move |(palette_id, custom): (String, String)| {
            handle.set_palette(&palette_id, &custom)
        })
    };

    let render_wheel = |wheel: &Wheel| {
        html! {
            <WheelCard
                key={wheel.id.to_string()}
                wheel={wheel.clone()}
                colors={colors.clone()}
                rotation={handle.rotation(wheel.id)}
                can_remove={can_remove}
                on_edit={on_edit.clone()}
                on_remove={on_remove.clone()}
            />
        }
    };

    html! {
        <div class={styles::CONTAINER}>
            <header class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <h1 class={styles::TEXT_H1}>{"Spinning Wheel"}</h1>
                    <div class={styles::NAV_ITEMS}>
                        <StartButton label={label} onclick={on_start} />
                        <button
                            type="button"
                            class={styles::BUTTON_SECONDARY}
                            onclick={on_reset}
                            aria-label="Reset all wheels"
                        >
                            {"Reset"}
                        </button>
                        <button
                            type="button"
                            class={styles::BUTTON_SECONDARY}
                            onclick={on_add}
                            aria-label="Add wheel"
                        >
                            {"+ Add Wheel"}
                        </button>
                        <PalettePicker
                            palette_id={palette_id}
                            custom_colors={custom_colors}
                            on_change={on_palette}
                        />
                    </div>
                </div>
            </header>

            <main class={styles::GRID}>
                {for wheels.iter().map(render_wheel)}
            </main>
        </div>
    }
}
