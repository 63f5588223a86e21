use verificacion_calidad::config::CONFIG;
use verificacion_calidad::App;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Verificación de calidad ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
