use frontend::config::PickerConfig;
use frontend::{App, AppProps};
use yew::Renderer;

fn main() {
    let config = PickerConfig::from_window();

    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("starting name picker with {:?}", config);

    Renderer::<App>::with_props(AppProps { config }).render();
}
