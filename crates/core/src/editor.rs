//! Editing session that user interfaces drive.
//!
//! A front-end keeps no slide data of its own. Each user action (selecting a
//! list entry, pressing add, dropping a dragged entry, saving) maps to one
//! method here, and the view is redrawn from [`Editor::labels`] and the
//! fields returned by [`Editor::select`].

use crate::document;
use crate::error::{Error, Result};
use crate::input::FieldNormalizer;
use crate::policy::ValidationPolicy;
use crate::store::{move_permutation, SlideStore};
use crate::types::{Presentation, Slide, SlideFields, SlideKind};
use std::path::{Path, PathBuf};

/// State of one open presentation in an editor.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    store: SlideStore,
    normalizer: FieldNormalizer,
    selected: Option<usize>,
    path: Option<PathBuf>,
    modified: bool,
}

impl Editor {
    /// Create an editor with an empty, unsaved presentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation policy for added and edited slides.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.store = self.store.with_policy(policy);
        self
    }

    /// Replace the input normalizer.
    pub fn with_normalizer(mut self, normalizer: FieldNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn slides(&self) -> &[Slide] {
        self.store.slides()
    }

    /// List entries for the slide list view.
    pub fn labels(&self) -> Vec<String> {
        self.store.labels()
    }

    /// Index of the selected slide, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// File the presentation was opened from or last saved to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether there are changes that have not been saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Discard the current presentation and start an empty one.
    pub fn new_presentation(&mut self) {
        self.store.replace(Presentation::new());
        self.selected = None;
        self.path = None;
        self.modified = false;
    }

    /// Select a slide and return its values for the editing form.
    pub fn select(&mut self, index: usize) -> Result<SlideFields> {
        let fields = self
            .store
            .get(index)
            .map(Slide::to_fields)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.store.len(),
            })?;

        self.selected = Some(index);
        Ok(fields)
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Create a slide from form input and add it at the end.
    ///
    /// Returns the new slide's index. Rejected input leaves the presentation
    /// unchanged.
    pub fn add(&mut self, kind: SlideKind, fields: &SlideFields) -> Result<usize> {
        let fields = self.normalizer.normalize_fields(fields);
        let slide = self.store.create(kind, &fields)?;

        let index = self.store.append(slide);
        self.modified = true;
        Ok(index)
    }

    /// Overwrite the selected slide with form input.
    pub fn apply(&mut self, fields: &SlideFields) -> Result<()> {
        let index = self.selected.ok_or(Error::NoSelection)?;
        let fields = self.normalizer.normalize_fields(fields);

        self.store.update(index, &fields)?;
        self.modified = true;
        Ok(())
    }

    /// Delete the selected slide and clear the selection.
    pub fn remove_selected(&mut self) -> Result<Slide> {
        let index = self.selected.ok_or(Error::NoSelection)?;

        let slide = self.store.remove(index)?;
        self.selected = None;
        self.modified = true;
        Ok(slide)
    }

    /// Apply a new order read back from the list view.
    ///
    /// The selection follows the slide it pointed at.
    pub fn reorder(&mut self, order: &[usize]) -> Result<()> {
        self.store.reorder(order)?;

        self.selected = self
            .selected
            .and_then(|old| order.iter().position(|&i| i == old));
        self.modified = true;
        Ok(())
    }

    /// Move one slide, as a drag and drop in the list view does.
    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<()> {
        let order = move_permutation(self.store.len(), from, to)?;
        self.reorder(&order)
    }

    /// Load a presentation from `path`, replacing the current one.
    ///
    /// If the file cannot be read or parsed, the current presentation is
    /// kept as it was.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let presentation = document::load(path)?;

        self.store.replace(presentation);
        self.selected = None;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Save to the file the presentation came from.
    pub fn save(&mut self) -> Result<()> {
        let path = self.path.clone().ok_or(Error::NoPath)?;
        self.save_as(path)
    }

    /// Save to `path` and remember it for later saves.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        document::save(path, self.store.presentation())?;

        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_fields(title: &str) -> SlideFields {
        SlideFields::new().with_title(title).with_content("body")
    }

    fn editor_with(titles: &[&str]) -> Editor {
        let mut editor = Editor::new();
        for title in titles {
            editor.add(SlideKind::Text, &text_fields(title)).unwrap();
        }
        editor
    }

    #[test]
    fn test_add_normalizes_input() {
        let mut editor = Editor::new();
        let fields = SlideFields::new()
            .with_title("  Warm-up ")
            .with_question("2+2?  ")
            .with_options(["3", " ", "4"]);

        let index = editor.add(SlideKind::Quiz, &fields).unwrap();

        assert_eq!(index, 0);
        assert_eq!(editor.slides()[0], Slide::quiz("Warm-up", "2+2?", ["3", "4"]));
        assert!(editor.is_modified());
    }

    #[test]
    fn test_add_rejected_is_not_committed() {
        let mut editor = Editor::new();
        let fields = SlideFields::new()
            .with_title("Q1")
            .with_question("2+2?")
            .with_options(["A"]);

        assert!(matches!(
            editor.add(SlideKind::Quiz, &fields),
            Err(Error::ValidationError(_))
        ));
        assert!(editor.slides().is_empty());
        assert!(!editor.is_modified());
    }

    #[test]
    fn test_lenient_add_untitled() {
        let mut editor = Editor::new().with_policy(ValidationPolicy::Lenient);
        editor.add(SlideKind::Text, &SlideFields::new()).unwrap();
        assert_eq!(editor.labels(), vec!["Text: New Text Slide"]);
    }

    #[test]
    fn test_custom_normalizer() {
        let normalizer = FieldNormalizer::new().with_collapse_whitespace(false);
        let mut editor = Editor::new().with_normalizer(normalizer);

        editor
            .add(SlideKind::Text, &text_fields("  Two   spaces "))
            .unwrap();

        assert_eq!(editor.labels(), vec!["Text: Two   spaces"]);
    }

    #[test]
    fn test_select_and_apply() {
        let mut editor = editor_with(&["A", "B"]);

        let mut fields = editor.select(1).unwrap();
        assert_eq!(fields.title, "B");

        fields.title = "Bee".to_string();
        editor.apply(&fields).unwrap();

        assert_eq!(editor.labels(), vec!["Text: A", "Text: Bee"]);
    }

    #[test]
    fn test_select_out_of_range_keeps_selection() {
        let mut editor = editor_with(&["A"]);
        editor.select(0).unwrap();

        assert!(matches!(
            editor.select(5),
            Err(Error::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(editor.selected(), Some(0));
    }

    #[test]
    fn test_apply_without_selection() {
        let mut editor = editor_with(&["A"]);
        editor.select(0).unwrap();
        editor.deselect();

        assert!(matches!(
            editor.apply(&text_fields("B")),
            Err(Error::NoSelection)
        ));
    }

    #[test]
    fn test_remove_selected() {
        let mut editor = editor_with(&["A", "B", "C"]);
        editor.select(1).unwrap();

        let removed = editor.remove_selected().unwrap();

        assert_eq!(removed.title(), "B");
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.labels(), vec!["Text: A", "Text: C"]);
        assert!(matches!(editor.remove_selected(), Err(Error::NoSelection)));
    }

    #[test]
    fn test_selection_follows_reorder() {
        let mut editor = editor_with(&["A", "B", "C"]);
        editor.select(0).unwrap();

        editor.reorder(&[2, 1, 0]).unwrap();
        assert_eq!(editor.selected(), Some(2));

        editor.move_slide(2, 0).unwrap();
        assert_eq!(editor.selected(), Some(0));
        assert_eq!(editor.labels(), vec!["Text: A", "Text: C", "Text: B"]);
    }

    #[test]
    fn test_save_without_path() {
        let mut editor = editor_with(&["A"]);
        assert!(matches!(editor.save(), Err(Error::NoPath)));
    }

    #[test]
    fn test_save_as_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");

        let mut editor = editor_with(&["A", "B"]);
        editor.save_as(&path).unwrap();
        assert!(!editor.is_modified());
        assert_eq!(editor.path(), Some(path.as_path()));

        let mut reopened = Editor::new();
        reopened.open(&path).unwrap();
        assert_eq!(reopened.slides(), editor.slides());

        reopened.select(0).unwrap();
        reopened.remove_selected().unwrap();
        reopened.save().unwrap();

        assert_eq!(document::load(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_failed_open_keeps_presentation() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let array = dir.path().join("array.json");
        std::fs::write(&array, "[]").unwrap();

        let mut editor = editor_with(&["A"]);
        editor.select(0).unwrap();

        assert!(matches!(editor.open(&broken), Err(Error::ParseError(_))));
        assert!(matches!(editor.open(&array), Err(Error::ParseError(_))));
        assert!(matches!(
            editor.open(dir.path().join("absent.json")),
            Err(Error::IoError(_))
        ));

        assert_eq!(editor.labels(), vec!["Text: A"]);
        assert_eq!(editor.selected(), Some(0));
        assert_eq!(editor.path(), None);
    }

    #[test]
    fn test_new_presentation_resets() {
        let mut editor = editor_with(&["A"]);
        editor.select(0).unwrap();

        editor.new_presentation();

        assert!(editor.slides().is_empty());
        assert_eq!(editor.selected(), None);
        assert!(!editor.is_modified());
    }
}
