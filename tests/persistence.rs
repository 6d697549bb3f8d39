use pretty_assertions::assert_eq;

use ndf_profile_editor::{DocumentError, ProfileDocument, Severity, create_template, validate};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn now() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2025, 1, 2)
        .and_then(|d| d.and_hms_opt(3, 4, 5))
        .expect("valid timestamp")
}

#[test]
fn load_then_save_is_byte_identical() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profile.json");

    // Odd spacing and CRLF must survive untouched.
    let input = "{\r\n  \"profileName\": \"x\",\r\n    \"modifications\": [ ]\r\n}  \r\n";
    std::fs::write(&path, input.as_bytes())?;

    let mut doc = ProfileDocument::new_empty();
    doc.load(&path)?;
    assert!(!doc.is_dirty());
    assert_eq!(doc.bound_path(), Some(path.as_path()));
    assert_eq!(doc.text(), input);
    assert_eq!(doc.status().severity, Severity::Success);

    doc.save()?;
    assert_eq!(doc.status().severity, Severity::Success);
    assert_eq!(std::fs::read(&path)?, input.as_bytes());
    Ok(())
}

#[test]
fn failed_load_leaves_state_untouched() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let good = dir.path().join("good.json");
    std::fs::write(&good, b"{}")?;

    let mut doc = ProfileDocument::new_empty();
    doc.load(&good)?;
    doc.set_text("edited");

    let err = doc.load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, DocumentError::Read { .. }));
    assert_eq!(doc.status().severity, Severity::Error);
    assert_eq!(doc.text(), "edited");
    assert_eq!(doc.bound_path(), Some(good.as_path()));
    assert!(doc.is_dirty());
    Ok(())
}

#[test]
fn load_rejects_invalid_utf8() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bin.json");
    std::fs::write(&path, [0xff_u8, 0xfe, 0x00])?;

    let mut doc = ProfileDocument::new_empty();
    assert!(matches!(doc.load(&path), Err(DocumentError::Read { .. })));
    assert_eq!(doc.bound_path(), None);
    Ok(())
}

#[test]
fn load_accepts_any_extension() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"plain text")?;

    let mut doc = ProfileDocument::new_empty();
    doc.load(&path)?;
    assert_eq!(doc.text(), "plain text");
    Ok(())
}

#[test]
fn save_without_path_signals_no_path_bound() {
    let mut doc = ProfileDocument::new_empty();
    doc.set_text("x");
    assert!(matches!(doc.save(), Err(DocumentError::NoPathBound)));
    assert!(doc.is_dirty());
    assert_eq!(doc.status().severity, Severity::Warning);
    assert_eq!(doc.status().message, "No file selected");
}

#[test]
fn failed_save_on_bound_path_leaves_state_untouched() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub)?;
    let path = sub.join("p.json");
    std::fs::write(&path, b"{}")?;

    let mut doc = ProfileDocument::new_empty();
    doc.load(&path)?;
    doc.set_text("{ changed }");
    std::fs::remove_dir_all(&sub)?;

    assert!(matches!(doc.save(), Err(DocumentError::Write { .. })));
    assert!(doc.is_dirty());
    assert_eq!(doc.bound_path(), Some(path.as_path()));
    assert_eq!(doc.text(), "{ changed }");
    assert_eq!(doc.status().severity, Severity::Error);
    Ok(())
}

#[test]
fn save_as_appends_json_suffix_once() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let mut doc = ProfileDocument::new_empty();
    doc.set_text("{}");
    doc.save_as(&dir.path().join("foo"))?;
    assert_eq!(doc.bound_path(), Some(dir.path().join("foo.json").as_path()));
    assert!(!doc.is_dirty());

    doc.set_text("{ }");
    doc.save_as(&dir.path().join("bar.json"))?;
    assert_eq!(doc.bound_path(), Some(dir.path().join("bar.json").as_path()));
    assert!(!dir.path().join("bar.json.json").exists());
    assert_eq!(std::fs::read_to_string(dir.path().join("bar.json"))?, "{ }");
    Ok(())
}

#[test]
fn plain_save_keeps_bound_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut doc = ProfileDocument::new_empty();
    doc.set_text("a");
    doc.save_as(&dir.path().join("keep.json"))?;

    doc.set_text("b");
    doc.save()?;
    assert_eq!(doc.bound_path(), Some(dir.path().join("keep.json").as_path()));
    assert_eq!(std::fs::read_to_string(dir.path().join("keep.json"))?, "b");
    Ok(())
}

#[test]
fn failed_save_as_leaves_state_untouched() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut doc = ProfileDocument::new_empty();
    doc.set_text("a");

    let bad = dir.path().join("no_such_dir").join("x.json");
    assert!(matches!(doc.save_as(&bad), Err(DocumentError::Write { .. })));
    assert_eq!(doc.status().severity, Severity::Error);
    assert_eq!(doc.bound_path(), None);
    assert!(doc.is_dirty());
    Ok(())
}

#[test]
fn edits_after_load_mark_dirty_once() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("p.json");
    std::fs::write(&path, b"{}")?;

    let mut doc = ProfileDocument::new_empty();
    doc.load(&path)?;

    doc.edit(|t| {
        t.push(' ');
        true
    });
    assert!(doc.is_dirty());

    doc.load(&path)?;
    assert!(!doc.is_dirty());
    let transitions = (0..5).filter(|_| doc.mark_edited()).count();
    assert_eq!(transitions, 1);
    Ok(())
}

#[test]
fn template_document_validates() -> Result<()> {
    let doc = ProfileDocument::from_template("tester", now());
    assert!(!doc.is_dirty());
    assert_eq!(doc.bound_path(), None);
    assert_eq!(validate(doc.text()), Ok(()));
    assert_eq!(doc.text(), create_template("tester", now()));
    Ok(())
}

#[test]
fn replace_with_template_clears_path_and_marks_dirty() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("p.json");
    std::fs::write(&path, b"{}")?;

    let mut doc = ProfileDocument::new_empty();
    doc.load(&path)?;
    doc.replace_with_template("tester", now());
    assert!(doc.is_dirty());
    assert_eq!(doc.bound_path(), None);
    assert_eq!(doc.title("Editor"), "Editor *");
    Ok(())
}
