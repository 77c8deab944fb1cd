use shared::constants::{LABEL_RADIUS, WHEEL_RADIUS, WHEEL_VIEW_SIZE};
use shared::segments::{layout, segment_fill};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelDiscProps {
    pub names: Vec<String>,
    pub colors: Vec<String>,
    pub rotation: f64,
    pub highlighted: Option<usize>,
}

#[function_component(WheelDisc)]
pub fn wheel_disc(props: &WheelDiscProps) -> Html {
    let segments = layout(props.names.len(), WHEEL_RADIUS, LABEL_RADIUS);
    let half = WHEEL_VIEW_SIZE / 2.0;
    let size = WHEEL_VIEW_SIZE.to_string();

    html! {
        <div class="relative flex items-center justify-center">
            <div
                class="w-[180px] h-[180px] rounded-full border relative overflow-hidden"
                style={format!("transform: rotate({}deg);", props.rotation)}
                role="img"
                aria-label="Spinning wheel"
            >
                <svg viewBox={format!("0 0 {} {}", size, size)} width={size.clone()} height={size.clone()} class="block">
                    <g transform={format!("translate({},{})", half, half)}>
                        {for segments.iter().map(|segment| {
                            let highlighted = props.highlighted == Some(segment.index);
                            let fill = segment_fill(&props.colors, segment.index, highlighted);
                            let name = props.names.get(segment.index).cloned().unwrap_or_default();
                            html! {
                                <g key={segment.index}>
                                    <path d={segment.path.clone()} fill={fill} stroke="rgba(0,0,0,0.12)" />
                                    if !props.names.is_empty() {
                                        <text
                                            x={segment.label_x.to_string()}
                                            y={segment.label_y.to_string()}
                                            font-size="10"
                                            text-anchor="middle"
                                            dominant-baseline="middle"
                                            style={if highlighted { "font-weight: 600" } else { "font-weight: 400" }}
                                        >
                                            {name}
                                        </text>
                                    }
                                </g>
                            }
                        })}
                    </g>
                </svg>
            </div>
            // Fixed pointer at 3 o'clock, the wheel's 0 degree mark
            <div
                class="absolute -right-3 top-1/2 -translate-y-1/2 w-0 h-0 border-y-[8px] border-y-transparent border-l-[12px] border-l-red-500"
                aria-hidden="true"
            />
        </div>
    }
}
