use eframe::egui;

/// Modal window reporting a problem opening a slot's target.
#[derive(Debug, Clone, Default)]
pub struct WarningModal {
    open: bool,
    title: String,
    message: String,
}

impl WarningModal {
    pub fn show_warning(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.title = title.into();
        self.message = message.into();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }
        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(self.title.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.colored_label(egui::Color32::YELLOW, &self.message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed || !open {
            self.open = false;
        }
    }
}
