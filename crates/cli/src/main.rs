//! Command-line editor for slide deck JSON files.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use slide_core::{Editor, FieldNormalizer, Slide, SlideFields, SlideKind, ValidationPolicy};
use std::path::{Path, PathBuf};

/// Create and edit text, image and quiz slides stored in a JSON file.
#[derive(Parser, Debug)]
#[command(name = "slide-edit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Accept incomplete slides and give untitled ones a placeholder title
    #[arg(long, global = true)]
    lenient: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a presentation file with no slides
    Init {
        file: PathBuf,

        /// Overwrite the file if it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// List the slides in order
    List { file: PathBuf },

    /// Print every field of one slide
    Show {
        file: PathBuf,
        /// Slide number (starting at 1)
        slide: usize,
    },

    /// Add a slide at the end
    Add {
        file: PathBuf,
        /// Slide type: text, image or quiz
        kind: SlideKind,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of an existing slide
    Edit {
        file: PathBuf,
        /// Slide number (starting at 1)
        slide: usize,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a slide
    Remove {
        file: PathBuf,
        /// Slide number (starting at 1)
        slide: usize,
    },

    /// Move a slide to another position
    Move {
        file: PathBuf,
        /// Current slide number
        from: usize,
        /// Slide number it should end up at
        to: usize,
    },

    /// Put all slides in a new order, e.g. `reorder deck.json 2 1 3`
    Reorder {
        file: PathBuf,
        /// Every current slide number, listed in the new order
        #[arg(required = true, num_args = 1..)]
        order: Vec<usize>,
    },
}

/// Slide field values given on the command line.
#[derive(clap::Args, Debug)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,

    /// Body of a text slide
    #[arg(long)]
    content: Option<String>,

    /// Image location
    #[arg(long)]
    url: Option<String>,

    /// Image alternative text
    #[arg(long)]
    alt: Option<String>,

    /// Quiz question
    #[arg(long)]
    question: Option<String>,

    /// Quiz answer option (repeat for each option)
    #[arg(long = "option")]
    options: Vec<String>,

    /// Quiz answer options, one per line
    #[arg(long, conflicts_with = "options")]
    options_text: Option<String>,
}

impl FieldArgs {
    /// Overlay the given flags onto `fields`, leaving the others untouched.
    fn apply_to(&self, mut fields: SlideFields, normalizer: &FieldNormalizer) -> SlideFields {
        let overlays = [
            (&self.title, &mut fields.title),
            (&self.content, &mut fields.content),
            (&self.url, &mut fields.url),
            (&self.alt, &mut fields.alt),
            (&self.question, &mut fields.question),
        ];
        for (flag, field) in overlays {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }

        if let Some(text) = &self.options_text {
            fields.options = normalizer.options_from_text(text);
        } else if !self.options.is_empty() {
            fields.options = self.options.clone();
        }

        fields
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    run(&args)
}

/// Carry out one subcommand against its presentation file.
fn run(args: &Args) -> Result<()> {
    let policy = if args.lenient {
        ValidationPolicy::Lenient
    } else {
        ValidationPolicy::Strict
    };
    let normalizer = FieldNormalizer::new();

    match &args.command {
        Command::Init { file, force } => {
            if file.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    file.display()
                );
            }
            let mut editor = Editor::new().with_policy(policy);
            editor
                .save_as(file)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            println!("Created {}", file.display());
        }

        Command::List { file } => {
            let editor = open_editor(file, policy)?;
            print_list(&editor);
        }

        Command::Show { file, slide } => {
            let editor = open_editor(file, policy)?;
            let index = slide_index(*slide)?;
            let slide = editor
                .slides()
                .get(index)
                .with_context(|| format!("There is no slide {}", index + 1))?;
            print_slide(slide);
        }

        Command::Add { file, kind, fields } => {
            let mut editor = open_editor(file, policy)?;
            let fields = fields.apply_to(SlideFields::new(), &normalizer);

            let index = editor
                .add(*kind, &fields)
                .context("Could not add slide")?;
            save_editor(&mut editor)?;
            println!("Added slide {}: {}", index + 1, editor.labels()[index]);
        }

        Command::Edit {
            file,
            slide,
            fields,
        } => {
            let mut editor = open_editor(file, policy)?;
            let index = slide_index(*slide)?;

            let current = editor.select(index)?;
            let fields = fields.apply_to(current, &normalizer);
            editor
                .apply(&fields)
                .with_context(|| format!("Could not update slide {}", index + 1))?;
            save_editor(&mut editor)?;
            println!("Updated slide {}: {}", index + 1, editor.labels()[index]);
        }

        Command::Remove { file, slide } => {
            let mut editor = open_editor(file, policy)?;
            let index = slide_index(*slide)?;

            editor.select(index)?;
            let removed = editor.remove_selected()?;
            save_editor(&mut editor)?;
            println!("Removed {}", removed.label());
        }

        Command::Move { file, from, to } => {
            let mut editor = open_editor(file, policy)?;
            editor.move_slide(slide_index(*from)?, slide_index(*to)?)?;
            save_editor(&mut editor)?;
            print_list(&editor);
        }

        Command::Reorder { file, order } => {
            let mut editor = open_editor(file, policy)?;
            let order = order
                .iter()
                .map(|&number| slide_index(number))
                .collect::<Result<Vec<_>>>()?;
            editor.reorder(&order)?;
            save_editor(&mut editor)?;
            print_list(&editor);
        }
    }

    Ok(())
}

/// Load a presentation file into a fresh editor.
fn open_editor(file: &Path, policy: ValidationPolicy) -> Result<Editor> {
    let mut editor = Editor::new().with_policy(policy);
    editor
        .open(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;

    log::debug!("Opened {} with {} slides", file.display(), editor.slides().len());
    Ok(editor)
}

/// Write the editor's presentation back to the file it came from.
fn save_editor(editor: &mut Editor) -> Result<()> {
    let target = editor
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    editor
        .save()
        .with_context(|| format!("Failed to save {}", target))
}

/// Convert a 1-based slide number from the command line to an index.
fn slide_index(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Slide numbers start at 1"),
    }
}

fn print_list(editor: &Editor) {
    let labels = editor.labels();
    if labels.is_empty() {
        println!("(no slides)");
        return;
    }
    for (idx, label) in labels.iter().enumerate() {
        println!("{:>3}. {}", idx + 1, label);
    }
}

fn print_slide(slide: &Slide) {
    println!("Type:     {}", slide.kind());
    println!("Title:    {}", slide.title());

    match slide {
        Slide::Text(text) => {
            println!("Content:");
            for line in text.content.lines() {
                println!("  {}", line);
            }
        }
        Slide::Image(image) => {
            println!("URL:      {}", image.url);
            println!("Alt:      {}", image.alt);
        }
        Slide::Quiz(quiz) => {
            println!("Question: {}", quiz.question);
            println!("Options:");
            for (idx, option) in quiz.options.iter().enumerate() {
                println!("  {}. {}", idx + 1, option);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slide_core::document;

    fn run_with(argv: &[&str]) -> Result<()> {
        let args = Args::try_parse_from(std::iter::once("slide-edit").chain(argv.iter().copied()))?;
        run(&args)
    }

    fn new_deck(dir: &tempfile::TempDir) -> (PathBuf, String) {
        let path = dir.path().join("deck.json");
        let file = path.to_str().unwrap().to_string();
        run_with(&["init", &file]).unwrap();
        (path, file)
    }

    fn titles(path: &Path) -> Vec<String> {
        document::load(path)
            .unwrap()
            .slides
            .iter()
            .map(|s| s.title().to_string())
            .collect()
    }

    fn no_fields() -> FieldArgs {
        FieldArgs {
            title: None,
            content: None,
            url: None,
            alt: None,
            question: None,
            options: Vec::new(),
            options_text: None,
        }
    }

    #[test]
    fn test_slide_index() {
        assert_eq!(slide_index(1).unwrap(), 0);
        assert_eq!(slide_index(4).unwrap(), 3);
        assert!(slide_index(0).is_err());
    }

    #[test]
    fn test_field_overlay_keeps_unset_fields() {
        let current = Slide::quiz("Q1", "2+2?", ["3", "4"]).to_fields();
        let flags = FieldArgs {
            title: Some("Warm-up".to_string()),
            ..no_fields()
        };

        let fields = flags.apply_to(current, &FieldNormalizer::new());

        assert_eq!(fields.title, "Warm-up");
        assert_eq!(fields.question, "2+2?");
        assert_eq!(fields.options, vec!["3", "4"]);
    }

    #[test]
    fn test_options_text_splits_lines() {
        let flags = FieldArgs {
            options_text: Some("A\nB\n\nC".to_string()),
            ..no_fields()
        };

        let fields = flags.apply_to(SlideFields::new(), &FieldNormalizer::new());
        assert_eq!(fields.options, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_args_parse_add_quiz() {
        let args = Args::try_parse_from([
            "slide-edit",
            "add",
            "deck.json",
            "quiz",
            "--title",
            "Q1",
            "--question",
            "2+2?",
            "--option",
            "A",
            "--option",
            "B",
        ])
        .unwrap();

        match args.command {
            Command::Add { kind, fields, .. } => {
                assert_eq!(kind, SlideKind::Quiz);
                assert_eq!(fields.options, vec!["A", "B"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_args_reject_unknown_kind() {
        let result = Args::try_parse_from(["slide-edit", "add", "deck.json", "video"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let (path, file) = new_deck(&dir);
        run_with(&["add", &file, "text", "--title", "Intro", "--content", "Hi"]).unwrap();

        assert!(run_with(&["init", &file]).is_err());
        assert_eq!(titles(&path), vec!["Intro"]);

        run_with(&["init", &file, "--force"]).unwrap();
        assert!(titles(&path).is_empty());
    }

    #[test]
    fn test_add_then_edit_title() {
        let dir = tempfile::tempdir().unwrap();
        let (path, file) = new_deck(&dir);

        run_with(&[
            "add", &file, "quiz", "--title", "Q1", "--question", "2+2?", "--option", "3",
            "--option", "4",
        ])
        .unwrap();
        run_with(&["edit", &file, "1", "--title", "Warm-up"]).unwrap();

        let presentation = document::load(&path).unwrap();
        assert_eq!(
            presentation.slides,
            vec![Slide::quiz("Warm-up", "2+2?", ["3", "4"])]
        );
    }

    #[test]
    fn test_rejected_add_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let (path, file) = new_deck(&dir);

        let result = run_with(&[
            "add", &file, "quiz", "--title", "Q1", "--question", "?", "--option", "A",
        ]);

        assert!(result.is_err());
        assert!(titles(&path).is_empty());
    }

    #[test]
    fn test_lenient_add_untitled() {
        let dir = tempfile::tempdir().unwrap();
        let (path, file) = new_deck(&dir);

        run_with(&["--lenient", "add", &file, "image"]).unwrap();
        assert_eq!(titles(&path), vec!["New Image Slide"]);
    }

    #[test]
    fn test_move_reorder_and_remove_use_slide_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let (path, file) = new_deck(&dir);
        for title in ["A", "B", "C"] {
            run_with(&["add", &file, "text", "--title", title, "--content", "x"]).unwrap();
        }

        run_with(&["move", &file, "1", "3"]).unwrap();
        assert_eq!(titles(&path), vec!["B", "C", "A"]);

        run_with(&["reorder", &file, "3", "1", "2"]).unwrap();
        assert_eq!(titles(&path), vec!["A", "B", "C"]);

        run_with(&["remove", &file, "2"]).unwrap();
        assert_eq!(titles(&path), vec!["A", "C"]);

        assert!(run_with(&["remove", &file, "0"]).is_err());
        assert!(run_with(&["reorder", &file, "1", "1"]).is_err());
        assert_eq!(titles(&path), vec!["A", "C"]);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
