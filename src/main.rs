use carbon_footprint_calculator::config::AppConfig;
use carbon_footprint_calculator::ui::CarbonApp;

fn main() -> Result<(), eframe::Error> {
    let config = AppConfig::default();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} {} starting", config.title, env!("CARGO_PKG_VERSION"));

    let options = config.native_options();
    let app_name = config.title;

    eframe::run_native(
        app_name,
        options,
        Box::new(move |cc| {
            // Schriftgrößen und Abstände global einstellen
            let style = config.style(&cc.egui_ctx.style());
            cc.egui_ctx.set_style(style);

            Ok(Box::new(CarbonApp::default()))
        }),
    )
}
