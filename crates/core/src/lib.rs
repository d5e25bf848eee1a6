//! Core slide model, validation, JSON persistence and editing session
//! for the slide deck editor.

pub mod document;
pub mod editor;
pub mod error;
pub mod input;
pub mod policy;
pub mod store;
pub mod types;

pub use editor::Editor;
pub use error::{Error, Result, ValidationError};
pub use input::FieldNormalizer;
pub use policy::ValidationPolicy;
pub use store::SlideStore;
pub use types::{ImageSlide, Presentation, QuizSlide, Slide, SlideFields, SlideKind, TextSlide};
