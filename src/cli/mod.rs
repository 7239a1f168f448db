// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Arguments are parsed
// with `clap`; all work is delegated to Layer 2 (application)
// and this layer only prints the results.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use crate::application::ingest_use_case::IngestUseCase;
use crate::application::notes_use_case::NotesUseCase;
use crate::domain::note::Note;
use commands::{AddArgs, Commands, ExportArgs, SummarizeArgs};

#[derive(Parser, Debug)]
#[command(
    name = "pdf-notes",
    version = "0.1.0",
    about = "Summarise PDF, DOCX and text files into notes, then list, show, delete or export them."
)]
pub struct Cli {
    /// JSON file that holds the notes
    #[arg(long, global = true, default_value = "notes.json")]
    pub store: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand to its use case. Never computes.
    pub fn run(self) -> Result<()> {
        let store = self.store;
        match self.command {
            Commands::Add(args)       => run_add(store, args),
            Commands::List            => run_list(&store),
            Commands::Show(args)      => run_show(&store, args.index),
            Commands::Delete(args)    => run_delete(&store, args.index),
            Commands::Export(args)    => run_export(&store, args),
            Commands::Summarize(args) => run_summarize(store, args),
        }
    }
}

fn run_add(store: String, args: AddArgs) -> Result<()> {
    let uploads = (!args.no_copy).then_some(args.uploads_dir);
    let config  = args.summary.into_config(store, uploads);

    tracing::info!("Ingesting '{}' into '{}'", args.path, config.store_path);
    let outcome = IngestUseCase::new(config).execute(Path::new(&args.path))?;

    println!("Added note {}: {}", outcome.index, outcome.note.title);
    println!("Keywords: {}", outcome.note.keywords.join(", "));
    Ok(())
}

fn run_list(store: &str) -> Result<()> {
    let notes = NotesUseCase::new(store).list()?;
    if notes.is_empty() {
        println!("No notes yet.");
        return Ok(());
    }

    for (i, note) in notes.iter().enumerate() {
        println!("[{}] {}", i, note.title);
    }
    Ok(())
}

fn run_show(store: &str, index: usize) -> Result<()> {
    let note = NotesUseCase::new(store).view(index)?;
    print_note(&note);
    Ok(())
}

fn run_delete(store: &str, index: usize) -> Result<()> {
    match NotesUseCase::new(store).delete(index)? {
        Some(note) => println!("Deleted note {}: {}", index, note.title),
        None       => println!("No note at index {}", index),
    }
    Ok(())
}

fn run_export(store: &str, args: ExportArgs) -> Result<()> {
    let path = NotesUseCase::new(store).export(args.index, args.format.into(), Path::new(&args.out))?;
    println!("Exported to {}", path.display());
    Ok(())
}

fn run_summarize(store: String, args: SummarizeArgs) -> Result<()> {
    let config  = args.summary.into_config(store, None);
    let preview = IngestUseCase::new(config).preview(Path::new(&args.path))?;

    println!("Title: {}\n", preview.source);
    println!("Keywords: {}\n", preview.keywords.join(", "));
    println!("SUMMARY:\n{}", preview.summary);
    if args.sentences {
        println!("\nSENTENCES:");
        for (i, sentence) in preview.sentences.iter().enumerate() {
            println!("{:>4}. {}", i + 1, sentence);
        }
    }
    if args.full {
        println!("\nFULL TEXT:\n{}", preview.text);
    }
    Ok(())
}

fn print_note(note: &Note) {
    println!("Title: {}", note.title);
    println!("File: {}\n", note.filename);
    println!("Keywords: {}\n", note.keywords.join(", "));
    println!("SUMMARY:\n{}\n", note.summary);
    println!("FULL TEXT:\n{}", note.text);
}
