//! Domain types for slides and presentations.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three kinds of slide a presentation can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Text,
    Image,
    Quiz,
}

impl SlideKind {
    /// The `type` tag used in the JSON document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Quiz => "quiz",
        }
    }

    /// Capitalized name used in slide list labels.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Quiz => "Quiz",
        }
    }

    /// Title given to a new slide of this kind when none is supplied.
    pub fn placeholder_title(&self) -> &'static str {
        match self {
            Self::Text => "New Text Slide",
            Self::Image => "New Image Slide",
            Self::Quiz => "New Quiz Slide",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlideKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "quiz" => Ok(Self::Quiz),
            _ => Err(Error::UnknownSlideKind(s.to_string())),
        }
    }
}

/// A slide with a title and a body of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSlide {
    pub title: String,
    pub content: String,
}

/// A slide showing a single image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSlide {
    pub title: String,
    pub url: String,
    /// Alternative text for the image.
    pub alt: String,
}

/// A multiple-choice question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSlide {
    pub title: String,
    pub question: String,
    /// Answer options in display order.
    pub options: Vec<String>,
}

/// A single slide, tagged on the wire by its `type` field.
///
/// Fields missing from a document fall back to empty values; fields that do
/// not belong to the slide's kind are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slide {
    Text(TextSlide),
    Image(ImageSlide),
    Quiz(QuizSlide),
}

impl Slide {
    /// Create a text slide.
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Text(TextSlide {
            title: title.into(),
            content: content.into(),
        })
    }

    /// Create an image slide.
    pub fn image(
        title: impl Into<String>,
        url: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self::Image(ImageSlide {
            title: title.into(),
            url: url.into(),
            alt: alt.into(),
        })
    }

    /// Create a quiz slide.
    pub fn quiz<I, S>(title: impl Into<String>, question: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Quiz(QuizSlide {
            title: title.into(),
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
        })
    }

    pub fn kind(&self) -> SlideKind {
        match self {
            Self::Text(_) => SlideKind::Text,
            Self::Image(_) => SlideKind::Image,
            Self::Quiz(_) => SlideKind::Quiz,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Text(s) => &s.title,
            Self::Image(s) => &s.title,
            Self::Quiz(s) => &s.title,
        }
    }

    /// Entry shown in the slide list, e.g. `Quiz: Warm-up`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.kind().label(), self.title())
    }

    /// Copy this slide's values into an editing form.
    ///
    /// Fields that do not belong to the slide's kind are left empty.
    pub fn to_fields(&self) -> SlideFields {
        match self {
            Self::Text(s) => SlideFields {
                title: s.title.clone(),
                content: s.content.clone(),
                ..SlideFields::default()
            },
            Self::Image(s) => SlideFields {
                title: s.title.clone(),
                url: s.url.clone(),
                alt: s.alt.clone(),
                ..SlideFields::default()
            },
            Self::Quiz(s) => SlideFields {
                title: s.title.clone(),
                question: s.question.clone(),
                options: s.options.clone(),
                ..SlideFields::default()
            },
        }
    }
}

/// The flat set of values an editing form collects.
///
/// Only the fields relevant to the chosen [`SlideKind`] are read when a
/// slide is built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideFields {
    pub title: String,
    /// Body of a text slide.
    pub content: String,
    pub url: String,
    pub alt: String,
    pub question: String,
    pub options: Vec<String>,
}

impl SlideFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// An ordered sequence of slides. Order controls playback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// Slides in presentation order.
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slide to the end of the presentation.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl From<Vec<Slide>> for Presentation {
    fn from(slides: Vec<Slide>) -> Self {
        Self { slides }
    }
}
