mod warning_modal;

pub use warning_modal::WarningModal;

use crate::common::file_dialog::FilePicker;
use crate::launcher::Launcher;
use crate::panel::{Activation, SlotPanel, MISSING_TARGET_MESSAGE};
use crate::settings::Settings;
use crate::slots::SLOT_COUNT;
use crate::toast_log::ToastLog;
use crate::validator::base_name;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

pub const WINDOW_TITLE: &str = "work_panel";

pub struct PanelApp {
    panel: SlotPanel,
    picker: Box<dyn FilePicker>,
    launcher: Box<dyn Launcher>,
    warning: WarningModal,
    toasts: Toasts,
    toast_log: Option<ToastLog>,
    pub enable_toasts: bool,
    pub toast_duration: f32,
    base_size: [f32; 2],
    applied_size: [f32; 2],
    row_rects: [Option<egui::Rect>; SLOT_COUNT],
}

impl PanelApp {
    pub fn new(
        panel: SlotPanel,
        picker: Box<dyn FilePicker>,
        launcher: Box<dyn Launcher>,
        settings: &Settings,
        toast_log: Option<ToastLog>,
    ) -> Self {
        let base_size = settings.window_size();
        let applied_size = panel.window_size(base_size);
        Self {
            panel,
            picker,
            launcher,
            warning: WarningModal::default(),
            toasts: Toasts::new()
                .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
                .direction(egui::Direction::BottomUp),
            toast_log,
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
            base_size,
            applied_size,
            row_rects: [None; SLOT_COUNT],
        }
    }

    pub fn panel(&self) -> &SlotPanel {
        &self.panel
    }

    pub fn warning(&self) -> &WarningModal {
        &self.warning
    }

    /// Size the window should currently have.
    pub fn window_size(&self) -> [f32; 2] {
        self.panel.window_size(self.base_size)
    }

    /// Click on the button of slot `index`.
    pub fn click(&mut self, index: usize) {
        let result = self
            .panel
            .activate(index, self.picker.as_mut(), self.launcher.as_ref());
        match result {
            Ok(outcome) => self.report(index, outcome),
            Err(e) => tracing::error!("slot action failed: {e:#}"),
        }
    }

    /// Bind dropped files. A file dropped over a row binds that row, anything
    /// else goes to the first unbound slot.
    pub fn handle_dropped_files(&mut self, files: Vec<egui::DroppedFile>, pos: Option<egui::Pos2>) {
        let mut hovered = pos.and_then(|p| self.row_at(p));
        for file in files {
            let Some(path) = file.path else { continue };
            let target = hovered.take().or_else(|| {
                self.panel
                    .slots()
                    .iter()
                    .position(|s| !s.state.is_bound())
            });
            let Some(index) = target else {
                tracing::debug!("no free slot for dropped file");
                break;
            };
            match self.panel.bind(index, &path.to_string_lossy()) {
                Ok(outcome) => self.report(index, outcome),
                Err(e) => tracing::error!("dropped file not bound: {e:#}"),
            }
        }
    }

    fn row_at(&self, pos: egui::Pos2) -> Option<usize> {
        self.row_rects
            .iter()
            .position(|r| r.is_some_and(|r| r.contains(pos)))
    }

    fn report(&mut self, index: usize, outcome: Activation) {
        match outcome {
            Activation::Dismissed | Activation::Opened { .. } => {}
            Activation::Rejected { path } => {
                tracing::debug!(slot = index + 1, path = %path, "inline error shown");
            }
            Activation::Bound { path, save_error } => {
                self.toast(
                    ToastKind::Success,
                    format!("Slot {}: {}", index + 1, base_name(&path)),
                );
                if save_error.is_some() {
                    self.toast(ToastKind::Error, "Failed to save configuration".into());
                }
            }
            Activation::Missing { .. } => {
                self.warning.show_warning("Warning", MISSING_TARGET_MESSAGE);
            }
            Activation::LaunchFailed { message, .. } => {
                self.warning
                    .show_warning("Open failed", format!("Could not open: {message}"));
            }
        }
    }

    fn toast(&mut self, kind: ToastKind, text: String) {
        if let Some(log) = &self.toast_log {
            log.append(&text);
        }
        if !self.enable_toasts {
            return;
        }
        self.toasts.add(Toast {
            text: text.into(),
            kind,
            options: ToastOptions::default().duration_in_seconds(self.toast_duration as f64),
        });
    }

    fn sync_window_size(&mut self, ctx: &egui::Context) {
        let wanted = self.window_size();
        if wanted != self.applied_size {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                wanted[0], wanted[1],
            )));
            self.applied_size = wanted;
        }
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            let pos = ctx.input(|i| i.pointer.hover_pos());
            self.handle_dropped_files(dropped, pos);
        }

        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            for (i, slot) in self.panel.slots().iter().enumerate() {
                let row = ui.horizontal(|ui| {
                    let button = egui::Button::new(slot.state.affordance())
                        .min_size(egui::vec2(90.0, 36.0));
                    if ui.add(button).clicked() {
                        clicked = Some(i);
                    }
                    let color = if slot.error.is_some() {
                        egui::Color32::RED
                    } else {
                        ui.visuals().text_color()
                    };
                    let label = ui.add(
                        egui::Label::new(egui::RichText::new(slot.label()).color(color))
                            .truncate(true),
                    );
                    if let Some(path) = slot.state.path() {
                        label.on_hover_text(path);
                    }
                });
                self.row_rects[i] = Some(row.response.rect);
                ui.add_space(12.0);
            }
        });

        if let Some(index) = clicked {
            self.click(index);
        }

        self.warning.ui(ctx);
        self.sync_window_size(ctx);
        self.toasts.show(ctx);
    }
}
