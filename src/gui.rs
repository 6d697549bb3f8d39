use crate::config::EditorConfig;
use crate::document::{DiscardChoice, DiscardDecision, DocumentPrompt, ProfileDocument, Severity};
use crate::statics;
use eframe::egui;
use std::path::{Path, PathBuf};

pub fn run_gui(config: EditorConfig) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ProfileEditorApp::new(config)))),
    )
}

/// Presentation layer: owns the document and renders its text, title and status.
struct ProfileEditorApp {
    doc: ProfileDocument,
    config: EditorConfig,
    dialog_dir: Option<PathBuf>,
    last_title: String,
    // Set once the discard confirmation for a close has been answered.
    close_confirmed: bool,
}

/// rfd-backed confirmation, save picker and error prompt.
struct RfdPrompt {
    dialog_dir: Option<PathBuf>,
}

impl RfdPrompt {
    fn file_dialog(&self) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new()
            .add_filter(statics::EN_FILTER_PROFILE, &[statics::JSON_EXTENSION]);
        if let Some(dir) = self.dialog_dir.as_ref() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn pick_open_path(&self) -> Option<PathBuf> {
        self.file_dialog().pick_file()
    }

    fn show_error(title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

impl DocumentPrompt for RfdPrompt {
    fn choose_discard(&mut self) -> DiscardChoice {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(statics::EN_DIALOG_UNSAVED_TITLE)
            .set_description(statics::EN_DIALOG_UNSAVED_BODY)
            .set_buttons(rfd::MessageButtons::YesNoCancel)
            .show();
        match answer {
            rfd::MessageDialogResult::Yes => DiscardChoice::Save,
            rfd::MessageDialogResult::No => DiscardChoice::Discard,
            _ => DiscardChoice::Cancel,
        }
    }

    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        self.file_dialog().set_file_name(suggested_name).save_file()
    }

    fn report_error(&mut self, message: &str) {
        Self::show_error(statics::EN_DIALOG_ERROR_TITLE, message);
    }
}

impl ProfileEditorApp {
    fn new(config: EditorConfig) -> Self {
        let doc = ProfileDocument::from_template(&config.current_user(), Self::now());
        Self {
            doc,
            dialog_dir: config.profiles_dir.clone(),
            config,
            last_title: String::new(),
            close_confirmed: false,
        }
    }

    fn now() -> chrono::NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    fn prompt(&self) -> RfdPrompt {
        RfdPrompt {
            dialog_dir: self.dialog_dir.clone(),
        }
    }

    fn remember_dir(&mut self) {
        if let Some(dir) = self.doc.bound_path().and_then(Path::parent) {
            self.dialog_dir = Some(dir.to_path_buf());
        }
    }

    fn new_profile(&mut self) {
        let user = self.config.current_user();
        let mut prompt = self.prompt();
        if self.doc.request_new(&user, Self::now(), &mut prompt).is_err() {
            tracing::debug!("new profile cancelled");
        }
    }

    fn open_file(&mut self) {
        let mut prompt = self.prompt();
        if self.doc.confirm_discard(&mut prompt) == DiscardDecision::Abort {
            return;
        }
        self.remember_dir();

        let prompt = self.prompt();
        let Some(path) = prompt.pick_open_path() else {
            return;
        };

        match self.doc.load(&path) {
            Ok(()) => self.remember_dir(),
            Err(e) => RfdPrompt::show_error(
                statics::EN_DIALOG_ERROR_TITLE,
                &format!("Failed to load: {e}"),
            ),
        }
    }

    fn save_file(&mut self) {
        let mut prompt = self.prompt();
        self.doc.save_interactive(&mut prompt);
        self.remember_dir();
    }

    fn save_file_as(&mut self) {
        let mut prompt = self.prompt();
        let Some(path) = prompt.pick_save_path(&self.doc.suggested_file_name()) else {
            return;
        };

        match self.doc.save_as(&path) {
            Ok(()) => self.remember_dir(),
            Err(e) => prompt.report_error(&format!("Failed to save: {e}")),
        }
    }

    fn validate(&mut self) {
        if let Err(e) = self.doc.validate()
            && !e.is_warning()
        {
            RfdPrompt::show_error(statics::EN_DIALOG_VALIDATION_TITLE, &e.to_string());
        }
    }

    /// Returns true when the window may close.
    fn confirm_close(&mut self) -> bool {
        if self.close_confirmed {
            return true;
        }
        let mut prompt = self.prompt();
        self.close_confirmed = self.doc.confirm_discard(&mut prompt) == DiscardDecision::Proceed;
        self.close_confirmed
    }

    fn severity_color(ui: &egui::Ui, severity: Severity) -> egui::Color32 {
        match severity {
            Severity::Ready => ui.visuals().text_color(),
            Severity::Success => egui::Color32::from_rgb(0, 160, 0),
            Severity::Warning => egui::Color32::from_rgb(230, 150, 0),
            Severity::Error => egui::Color32::from_rgb(220, 0, 0),
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.doc.title(&self.config.window_title);
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }
}

impl eframe::App for ProfileEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut do_new = false;
        let mut do_open = false;
        let mut do_save = false;
        ctx.input_mut(|i| {
            if i.consume_key(egui::Modifiers::COMMAND, egui::Key::N) {
                do_new = true;
            }
            if i.consume_key(egui::Modifiers::COMMAND, egui::Key::O) {
                do_open = true;
            }
            if i.consume_key(egui::Modifiers::COMMAND, egui::Key::S) {
                do_save = true;
            }
        });
        if do_new {
            self.new_profile();
        }
        if do_open {
            self.open_file();
        }
        if do_save {
            self.save_file();
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.confirm_close() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_NEW).clicked() {
                    self.new_profile();
                }
                if ui.button(statics::EN_BTN_OPEN).clicked() {
                    self.open_file();
                }
                if ui.button(statics::EN_BTN_SAVE).clicked() {
                    self.save_file();
                }
                if ui.button(statics::EN_BTN_SAVE_AS).clicked() {
                    self.save_file_as();
                }
                ui.separator();
                if ui.button(statics::EN_BTN_VALIDATE).clicked() {
                    self.validate();
                }
                ui.separator();
                if ui.button(statics::EN_BTN_CLOSE).clicked() && self.confirm_close() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status = self.doc.status();
                let color = Self::severity_color(ui, status.severity);
                ui.colored_label(color, &status.message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} {}", statics::EN_LABEL_CHARS, self.doc.char_count()));
                    ui.label(format!("{} {}", statics::EN_LABEL_LINES, self.doc.line_count()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                self.doc.edit(|text| {
                    ui.add(
                        egui::TextEdit::multiline(text)
                            .code_editor()
                            .desired_width(f32::INFINITY)
                            .desired_rows(32),
                    )
                    .changed()
                });
            });
        });

        self.sync_title(ctx);
    }
}
