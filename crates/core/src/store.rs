//! The slide store: an ordered, editable sequence of slides.

use crate::error::{Error, Result};
use crate::policy::ValidationPolicy;
use crate::types::{Presentation, Slide, SlideFields, SlideKind};
use serde_json::Value;

/// Owns the slides of one presentation and every operation that changes them.
///
/// Slides are addressed by zero-based index in presentation order.
#[derive(Debug, Clone, Default)]
pub struct SlideStore {
    presentation: Presentation,
    policy: ValidationPolicy,
}

impl SlideStore {
    /// Create an empty store using the strict validation policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation policy used by `create` and `update`.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Swap in a whole presentation, e.g. one that was just loaded.
    pub fn replace(&mut self, presentation: Presentation) -> Presentation {
        std::mem::replace(&mut self.presentation, presentation)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.presentation.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.presentation.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.presentation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presentation.is_empty()
    }

    /// List entries for every slide, in order.
    pub fn labels(&self) -> Vec<String> {
        self.slides().iter().map(Slide::label).collect()
    }

    /// Build a slide from form fields under the store's policy.
    ///
    /// The slide is not added; pass it to [`append`](Self::append).
    pub fn create(&self, kind: SlideKind, fields: &SlideFields) -> Result<Slide> {
        Ok(self.policy.build(kind, fields)?)
    }

    /// Add a slide at the end and return its index.
    pub fn append(&mut self, slide: Slide) -> usize {
        log::debug!("Appending {}", slide.label());
        self.presentation.add_slide(slide);
        self.len() - 1
    }

    /// Overwrite the slide at `index` with `fields`, keeping its kind.
    ///
    /// On error the slide is left as it was.
    pub fn update(&mut self, index: usize, fields: &SlideFields) -> Result<()> {
        let kind = self.slide_at(index)?.kind();
        let slide = self.create(kind, fields)?;

        log::debug!("Updating slide {} to {}", index, slide.label());
        self.presentation.slides[index] = slide;
        Ok(())
    }

    /// Delete and return the slide at `index`. Later slides move up by one.
    pub fn remove(&mut self, index: usize) -> Result<Slide> {
        self.slide_at(index)?;

        let slide = self.presentation.slides.remove(index);
        log::debug!("Removed slide {} ({})", index, slide.label());
        Ok(slide)
    }

    /// Rebuild the sequence so that the new slide `i` is the old slide `order[i]`.
    ///
    /// `order` must contain every current index exactly once; otherwise the
    /// store is left unchanged.
    pub fn reorder(&mut self, order: &[usize]) -> Result<()> {
        check_permutation(order, self.len())?;

        let reordered: Vec<Slide> = order
            .iter()
            .map(|&i| self.presentation.slides[i].clone())
            .collect();
        self.presentation.slides = reordered;

        log::debug!("Reordered slides to {:?}", order);
        Ok(())
    }

    /// Move the slide at `from` so that it ends up at index `to`.
    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<()> {
        let order = move_permutation(self.len(), from, to)?;
        self.reorder(&order)
    }

    /// The presentation as a `{"slides": [...]}` JSON value.
    pub fn to_document(&self) -> Result<Value> {
        self.presentation.to_document()
    }

    /// Read a presentation from a JSON value.
    ///
    /// See [`Presentation::from_document`] for the accepted shape.
    pub fn from_document(value: &Value) -> Result<Presentation> {
        Presentation::from_document(value)
    }

    fn slide_at(&self, index: usize) -> Result<&Slide> {
        self.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }
}

/// Check that `order` is a permutation of `0..len`.
fn check_permutation(order: &[usize], len: usize) -> Result<()> {
    if order.len() != len {
        return Err(Error::InvalidPermutation(format!(
            "expected {} indices, got {}",
            len,
            order.len()
        )));
    }

    let mut seen = vec![false; len];
    for &index in order {
        if index >= len {
            return Err(Error::InvalidPermutation(format!(
                "index {} is out of range",
                index
            )));
        }
        if seen[index] {
            return Err(Error::InvalidPermutation(format!(
                "index {} appears more than once",
                index
            )));
        }
        seen[index] = true;
    }

    Ok(())
}

/// The permutation that lifts the slide at `from` and drops it at `to`.
///
/// This is how a drag-and-drop in a list view is expressed as a reorder.
pub fn move_permutation(len: usize, from: usize, to: usize) -> Result<Vec<usize>> {
    for index in [from, to] {
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
    }

    let mut order: Vec<usize> = (0..len).collect();
    let moved = order.remove(from);
    order.insert(to, moved);
    Ok(order)
}

/// The permutation that undoes `order`.
pub fn inverse_permutation(order: &[usize]) -> Result<Vec<usize>> {
    check_permutation(order, order.len())?;

    let mut inverse = vec![0; order.len()];
    for (position, &index) in order.iter().enumerate() {
        inverse[index] = position;
    }
    Ok(inverse)
}
