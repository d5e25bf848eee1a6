//! Rules for turning form fields into slides.
//!
//! Two policies exist and a store uses exactly one of them:
//!
//! - [`ValidationPolicy::Strict`] refuses incomplete slides, so every slide
//!   in the presentation has a title and the body its kind needs.
//! - [`ValidationPolicy::Lenient`] accepts anything and fills an empty title
//!   with a placeholder such as `New Text Slide`, leaving the rest to be
//!   completed later.

use crate::error::ValidationError;
use crate::types::{ImageSlide, QuizSlide, Slide, SlideFields, SlideKind, TextSlide};

/// Alt text given to strict image slides that were created without one.
const DEFAULT_ALT_TEXT: &str = "Image";

/// Minimum number of answer options a strict quiz needs.
pub const MIN_QUIZ_OPTIONS: usize = 2;

/// How strictly new and edited slides are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Reject slides with a missing title, body, URL, question or options.
    #[default]
    Strict,
    /// Accept every slide, substituting placeholder titles.
    Lenient,
}

impl ValidationPolicy {
    /// Build a slide of `kind` from `fields` under this policy.
    ///
    /// Values are stored trimmed and blank quiz options are dropped.
    pub fn build(&self, kind: SlideKind, fields: &SlideFields) -> Result<Slide, ValidationError> {
        let fields = trimmed(fields);
        match self {
            Self::Strict => build_strict(kind, &fields),
            Self::Lenient => Ok(build_lenient(kind, &fields)),
        }
    }
}

fn trimmed(fields: &SlideFields) -> SlideFields {
    SlideFields {
        title: fields.title.trim().to_string(),
        content: fields.content.trim().to_string(),
        url: fields.url.trim().to_string(),
        alt: fields.alt.trim().to_string(),
        question: fields.question.trim().to_string(),
        options: fields
            .options
            .iter()
            .map(|option| option.trim())
            .filter(|option| !option.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

fn build_strict(kind: SlideKind, fields: &SlideFields) -> Result<Slide, ValidationError> {
    if fields.title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let slide = match kind {
        SlideKind::Text => {
            if fields.content.is_empty() {
                return Err(ValidationError::EmptyContent);
            }
            Slide::Text(TextSlide {
                title: fields.title.clone(),
                content: fields.content.clone(),
            })
        }
        SlideKind::Image => {
            if fields.url.is_empty() {
                return Err(ValidationError::EmptyUrl);
            }
            let alt = if fields.alt.is_empty() {
                DEFAULT_ALT_TEXT.to_string()
            } else {
                fields.alt.clone()
            };
            Slide::Image(ImageSlide {
                title: fields.title.clone(),
                url: fields.url.clone(),
                alt,
            })
        }
        SlideKind::Quiz => {
            if fields.question.is_empty() {
                return Err(ValidationError::EmptyQuestion);
            }
            if fields.options.len() < MIN_QUIZ_OPTIONS {
                return Err(ValidationError::TooFewOptions {
                    found: fields.options.len(),
                });
            }
            Slide::Quiz(QuizSlide {
                title: fields.title.clone(),
                question: fields.question.clone(),
                options: fields.options.clone(),
            })
        }
    };

    Ok(slide)
}

fn build_lenient(kind: SlideKind, fields: &SlideFields) -> Slide {
    let title = if fields.title.is_empty() {
        kind.placeholder_title().to_string()
    } else {
        fields.title.clone()
    };

    match kind {
        SlideKind::Text => Slide::Text(TextSlide {
            title,
            content: fields.content.clone(),
        }),
        SlideKind::Image => Slide::Image(ImageSlide {
            title,
            url: fields.url.clone(),
            alt: fields.alt.clone(),
        }),
        SlideKind::Quiz => Slide::Quiz(QuizSlide {
            title,
            question: fields.question.clone(),
            options: fields.options.clone(),
        }),
    }
}
