use crate::error::{DocumentError, ValidationError};
use crate::{statics, template, validate};
use chrono::NaiveDateTime;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Ready,
    Success,
    Warning,
    Error,
}

/// Status line shown after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub severity: Severity,
}

impl Status {
    fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new(statics::EN_STATUS_READY, Severity::Ready)
    }
}

/// Answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardChoice {
    Save,
    Discard,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardDecision {
    Proceed,
    Abort,
}

/// User-facing collaborator: confirmation prompt, save picker and error prompt.
pub trait DocumentPrompt {
    fn choose_discard(&mut self) -> DiscardChoice;
    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf>;
    fn report_error(&mut self, message: &str);
}

/// The profile text buffer plus its bound file and dirty flag.
///
/// All operations are synchronous and leave the document usable after any failure:
/// failed loads and saves never touch `text`, `bound_path` or `dirty`.
#[derive(Debug, Clone, Default)]
pub struct ProfileDocument {
    text: String,
    bound_path: Option<PathBuf>,
    dirty: bool,
    status: Status,
}

impl ProfileDocument {
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// A fresh, unbound, clean document holding the starter template.
    pub fn from_template(current_user: &str, now: NaiveDateTime) -> Self {
        Self {
            text: template::create_template(current_user, now),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bound_path(&self) -> Option<&Path> {
        self.bound_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Window title: base, then ` - <file>` when bound, then ` *` when dirty.
    pub fn title(&self, base: &str) -> String {
        let mut title = base.to_string();
        if let Some(name) = self.bound_path.as_deref().and_then(Path::file_name) {
            title.push_str(statics::TITLE_FILE_SEPARATOR);
            title.push_str(&name.to_string_lossy());
        }
        if self.dirty {
            title.push_str(statics::TITLE_DIRTY_MARKER);
        }
        title
    }

    pub fn suggested_file_name(&self) -> String {
        self.bound_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| statics::DEFAULT_FILE_NAME.to_string())
    }

    /// On-edit notification. Returns true only on the clean -> dirty transition.
    pub fn mark_edited(&mut self) -> bool {
        if self.dirty {
            return false;
        }
        self.dirty = true;
        self.status = Status::new(statics::EN_STATUS_UNSAVED, Severity::Ready);
        tracing::debug!("profile marked dirty");
        true
    }

    /// Hand the buffer to an editor widget; `f` returns whether it changed the text.
    pub fn edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut String) -> bool,
    {
        let changed = f(&mut self.text);
        if changed {
            self.mark_edited();
        }
        changed
    }

    /// Replace the text wholesale, as a user edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.mark_edited();
    }

    /// Swap in the starter template: unbound and dirty, since it was never saved.
    pub fn replace_with_template(&mut self, current_user: &str, now: NaiveDateTime) {
        self.text = template::create_template(current_user, now);
        self.bound_path = None;
        self.dirty = true;
        self.status = Status::new(statics::EN_STATUS_NEW_TEMPLATE, Severity::Success);
        tracing::info!(user = current_user, "new profile from template");
    }

    /// Replace the document with a template once any unsaved changes are dealt with.
    pub fn request_new(
        &mut self,
        current_user: &str,
        now: NaiveDateTime,
        prompt: &mut dyn DocumentPrompt,
    ) -> Result<(), DocumentError> {
        match self.confirm_discard(prompt) {
            DiscardDecision::Proceed => {
                self.replace_with_template(current_user, now);
                Ok(())
            }
            DiscardDecision::Abort => Err(DocumentError::Cancelled),
        }
    }

    /// Load `path`. The caller is responsible for `confirm_discard` beforehand.
    pub fn load(&mut self, path: &Path) -> Result<(), DocumentError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) => {
                let err = DocumentError::Read {
                    path: path.to_path_buf(),
                    source,
                };
                self.fail(&err);
                return Err(err);
            }
        };

        self.text = text;
        self.bound_path = Some(path.to_path_buf());
        self.dirty = false;
        self.status = Status::new(format!("Loaded {}", path.display()), Severity::Success);
        tracing::info!(path = %path.display(), bytes = self.text.len(), "profile loaded");
        Ok(())
    }

    /// Overwrite the bound file. Signals `NoPathBound` for never-saved documents.
    pub fn save(&mut self) -> Result<(), DocumentError> {
        let Some(path) = self.bound_path.clone() else {
            self.status = Status::new(statics::EN_STATUS_NO_PATH, Severity::Warning);
            return Err(DocumentError::NoPathBound);
        };
        self.write_to(&path)
    }

    /// Write to `path` (with a `.json` suffix enforced) and bind the document to it.
    pub fn save_as(&mut self, path: &Path) -> Result<(), DocumentError> {
        let path = normalize_json_path(path);
        self.write_to(&path)?;
        self.bound_path = Some(path);
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), DocumentError> {
        if let Err(source) = fs::write(path, self.text.as_bytes()) {
            let err = DocumentError::Write {
                path: path.to_path_buf(),
                source,
            };
            self.fail(&err);
            return Err(err);
        }

        self.dirty = false;
        self.status = Status::new(format!("Saved {}", path.display()), Severity::Success);
        tracing::info!(path = %path.display(), bytes = self.text.len(), "profile saved");
        Ok(())
    }

    fn fail(&mut self, err: &DocumentError) {
        tracing::warn!(error = %err, "profile io failed");
        self.status = Status::new(err.to_string(), Severity::Error);
    }

    /// Run the structure check on the current text and record the outcome.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let result = validate::validate(&self.text);
        self.status = match result {
            Ok(()) => Status::new(statics::EN_STATUS_VALID, Severity::Success),
            Err(e) if e.is_warning() => Status::new(e.to_string(), Severity::Warning),
            Err(e) => Status::new(e.to_string(), Severity::Error),
        };
        match result {
            Ok(()) => tracing::debug!("profile validated"),
            Err(e) => tracing::info!(error = %e, "profile failed validation"),
        }
        result
    }

    /// Gate a destructive action (new/open/close) on unsaved changes.
    ///
    /// Clean documents proceed without prompting. `Discard` leaves the text alone;
    /// the caller applies its own effect afterwards.
    pub fn confirm_discard(&mut self, prompt: &mut dyn DocumentPrompt) -> DiscardDecision {
        if !self.dirty {
            return DiscardDecision::Proceed;
        }

        let decision = match prompt.choose_discard() {
            DiscardChoice::Save => self.save_interactive(prompt),
            DiscardChoice::Discard => DiscardDecision::Proceed,
            DiscardChoice::Cancel => DiscardDecision::Abort,
        };
        if decision == DiscardDecision::Abort {
            self.status = Status::new(statics::EN_STATUS_CANCELLED, Severity::Ready);
        }
        tracing::debug!(?decision, "discard confirmation");
        decision
    }

    /// `save()`, falling back to a save picker + `save_as` when nothing is bound.
    pub fn save_interactive(&mut self, prompt: &mut dyn DocumentPrompt) -> DiscardDecision {
        let result = match self.save() {
            Err(DocumentError::NoPathBound) => {
                let suggested = self.suggested_file_name();
                match prompt.pick_save_path(&suggested) {
                    Some(path) => self.save_as(&path),
                    None => Err(DocumentError::Cancelled),
                }
            }
            other => other,
        };

        match result {
            Ok(()) => DiscardDecision::Proceed,
            Err(DocumentError::Cancelled) => DiscardDecision::Abort,
            Err(e) => {
                prompt.report_error(&format!("Failed to save: {e}"));
                DiscardDecision::Abort
            }
        }
    }
}

/// Append `.json` unless the file name already ends with exactly that suffix.
/// Paths without a file name (`..`, `/`) get the default profile file name.
pub fn normalize_json_path(path: &Path) -> PathBuf {
    let Some(name) = path.file_name() else {
        return path.join(statics::DEFAULT_FILE_NAME);
    };
    if name.to_string_lossy().ends_with(statics::JSON_SUFFIX) {
        return path.to_path_buf();
    }

    let mut name = name.to_os_string();
    name.push(statics::JSON_SUFFIX);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::{ProfileDocument, Severity, normalize_json_path};
    use std::path::{Path, PathBuf};

    #[test]
    fn normalize_appends_json_once() {
        assert_eq!(normalize_json_path(Path::new("foo")), PathBuf::from("foo.json"));
        assert_eq!(
            normalize_json_path(Path::new("foo.json")),
            PathBuf::from("foo.json")
        );
        assert_eq!(
            normalize_json_path(Path::new("dir/foo.txt")),
            PathBuf::from("dir/foo.txt.json")
        );
    }

    #[test]
    fn normalize_is_case_sensitive() {
        assert_eq!(
            normalize_json_path(Path::new("foo.JSON")),
            PathBuf::from("foo.JSON.json")
        );
    }

    #[test]
    fn normalize_handles_trailing_separator_and_missing_name() {
        assert_eq!(normalize_json_path(Path::new("dir/")), PathBuf::from("dir.json"));
        assert_eq!(
            normalize_json_path(Path::new("..")),
            Path::new("..").join("profile.json")
        );
    }

    #[test]
    fn line_and_char_counts() {
        let mut doc = ProfileDocument::new_empty();
        assert_eq!((doc.line_count(), doc.char_count()), (0, 0));

        doc.set_text("a\n");
        assert_eq!((doc.line_count(), doc.char_count()), (1, 2));

        doc.set_text("é\n\u{1F600}x");
        assert_eq!((doc.line_count(), doc.char_count()), (2, 4));
    }

    #[test]
    fn title_reflects_path_and_dirty() {
        let mut doc = ProfileDocument::new_empty();
        assert_eq!(doc.title("Editor"), "Editor");

        doc.bound_path = Some(PathBuf::from("/tmp/x/profile.json"));
        assert_eq!(doc.title("Editor"), "Editor - profile.json");

        doc.mark_edited();
        assert_eq!(doc.title("Editor"), "Editor - profile.json *");
    }

    #[test]
    fn mark_edited_transitions_once() {
        let mut doc = ProfileDocument::new_empty();
        assert!(doc.mark_edited());
        assert!(!doc.mark_edited());
        assert!(doc.is_dirty());
    }

    #[test]
    fn edit_only_marks_dirty_on_change() {
        let mut doc = ProfileDocument::new_empty();
        assert!(!doc.edit(|_| false));
        assert!(!doc.is_dirty());

        assert!(doc.edit(|t| {
            t.push('x');
            true
        }));
        assert!(doc.is_dirty());
        assert_eq!(doc.text(), "x");
    }

    #[test]
    fn validate_records_severity() {
        let mut doc = ProfileDocument::new_empty();
        assert!(doc.validate().is_err());
        assert_eq!(doc.status().severity, Severity::Warning);

        doc.set_text("{ nope }");
        assert!(doc.validate().is_err());
        assert_eq!(doc.status().severity, Severity::Error);
    }

    #[test]
    fn suggested_file_name_falls_back() {
        let mut doc = ProfileDocument::new_empty();
        assert_eq!(doc.suggested_file_name(), "profile.json");
        doc.bound_path = Some(PathBuf::from("a/b/mine.json"));
        assert_eq!(doc.suggested_file_name(), "mine.json");
    }
}
