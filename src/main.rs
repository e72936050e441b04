use work_panel::common::config_files::executable_dir;
use work_panel::common::file_dialog::NativeFilePicker;
use work_panel::config_store::ConfigStore;
use work_panel::gui::{PanelApp, WINDOW_TITLE};
use work_panel::launcher::NativeLauncher;
use work_panel::logging;
use work_panel::panel::SlotPanel;
use work_panel::settings::Settings;
use work_panel::toast_log::ToastLog;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings_path = Settings::default_path();
    let (settings, settings_error) = match Settings::load(&settings_path.to_string_lossy()) {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    logging::init(settings.debug_logging, settings.log_file());
    if let Some(e) = settings_error {
        tracing::warn!(path = %settings_path.display(), "invalid settings, using defaults: {e:#}");
    }

    let store = ConfigStore::beside_executable();
    tracing::info!(path = %store.path().display(), "loading configuration");
    let panel = SlotPanel::load(store);
    let launcher = NativeLauncher::for_host();
    tracing::debug!(platform = ?launcher.platform(), "launcher selected");

    let app = PanelApp::new(
        panel,
        Box::new(NativeFilePicker),
        Box::new(launcher),
        &settings,
        Some(ToastLog::in_dir(&executable_dir())),
    );

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size(app.window_size())
        .with_min_inner_size([260.0, 320.0])
        .with_resizable(true)
        .with_drag_and_drop(true);
    if settings.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
