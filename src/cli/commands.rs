// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   add        ingest a document and store a note
//   list       show every stored note
//   show       print one note
//   delete     remove one note
//   export     write one note as TXT or PDF
//   summarize  print a summary without storing anything
//
// clap's derive macros generate --help, argument errors and
// string → number conversion.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::ingest_use_case::{IngestConfig, KeywordMethod, DEFAULT_TOP_KEYWORDS};
use crate::infra::exporter::ExportFormat;
use crate::summary::selector::DEFAULT_MAX_SENTENCES;
use crate::summary::summarizer::DEFAULT_MAX_INPUT_BYTES;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarise a PDF, DOCX, TXT or MD file and store it as a note
    Add(AddArgs),

    /// List stored notes with their index
    List,

    /// Print one note in full
    Show(IndexArgs),

    /// Delete one note (later notes move down by one)
    Delete(IndexArgs),

    /// Export one note as a TXT or PDF file
    Export(ExportArgs),

    /// Print the summary and keywords of a file without storing it
    Summarize(SummarizeArgs),
}

/// Flags shared by `add` and `summarize`
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Number of sentences kept in the summary
    #[arg(long, default_value_t = DEFAULT_MAX_SENTENCES)]
    pub max_sentences: usize,

    /// Number of keywords kept
    #[arg(long, default_value_t = DEFAULT_TOP_KEYWORDS)]
    pub top_keywords: usize,

    /// Raw text beyond this many bytes is ignored
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    pub max_input_bytes: usize,

    /// yake: keyphrases of up to three words; frequency: most frequent words
    #[arg(long, value_enum, default_value_t = KeywordArg::Yake)]
    pub keywords: KeywordArg,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Document to ingest
    pub path: String,

    /// Directory that keeps a copy of every ingested file
    #[arg(long, default_value = "uploads")]
    pub uploads_dir: String,

    /// Do not keep a copy of the file
    #[arg(long)]
    pub no_copy: bool,

    #[command(flatten)]
    pub summary: SummaryArgs,
}

#[derive(Args, Debug)]
pub struct IndexArgs {
    /// 0-based note index, as shown by `list`
    pub index: usize,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// 0-based note index, as shown by `list`
    pub index: usize,

    #[arg(long, value_enum, default_value_t = FormatArg::Txt)]
    pub format: FormatArg,

    /// Output directory
    #[arg(long, default_value = ".")]
    pub out: String,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Document to summarise
    pub path: String,

    /// Also print the full normalised text
    #[arg(long)]
    pub full: bool,

    /// Also print every sentence, numbered
    #[arg(long)]
    pub sentences: bool,

    #[command(flatten)]
    pub summary: SummaryArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Txt,
    Pdf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordArg {
    Yake,
    Frequency,
}

impl From<KeywordArg> for KeywordMethod {
    fn from(k: KeywordArg) -> Self {
        match k {
            KeywordArg::Yake      => KeywordMethod::Yake,
            KeywordArg::Frequency => KeywordMethod::Frequency,
        }
    }
}

/// The exporter never sees clap types.
impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Txt => ExportFormat::Txt,
            FormatArg::Pdf => ExportFormat::Pdf,
        }
    }
}

impl SummaryArgs {
    /// Build an IngestConfig for `store_path` from these flags.
    /// This is the boundary between Layer 1 and Layer 2.
    pub fn into_config(self, store_path: String, uploads_dir: Option<String>) -> IngestConfig {
        IngestConfig {
            store_path,
            uploads_dir,
            max_sentences:   self.max_sentences,
            top_keywords:    self.top_keywords,
            max_input_bytes: self.max_input_bytes,
            keyword_method:  self.keywords.into(),
        }
    }
}
