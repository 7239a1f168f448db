// ============================================================
// Layer 4 - Document Loader
// ============================================================
// Reads a single source file and returns its text as a Document.
//
// Supported formats, chosen by file extension:
//   .pdf       → pdf-extract walks every page's content stream
//   .docx      → docx-rs parses the ZIP/XML package
//   .txt, .md  → read as UTF-8
//
// The docx-rs document structure looks like:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text (the actual words!)
//
// Extracted text is passed through the TextNormalizer before
// the Document is returned, so every later stage sees clean text.
//
// Reference: pdf-extract and docx-rs crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use docx_rs::read_docx;
use std::{fs, path::Path};

use crate::data::normalizer::TextNormalizer;
use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Loads PDF, DOCX and plain-text files from disk.
/// Implements the DocumentSource trait from Layer 3.
#[derive(Debug, Default)]
pub struct FileLoader {
    normalizer: TextNormalizer,
}

impl FileLoader {
    pub fn new() -> Self {
        Self { normalizer: TextNormalizer::new() }
    }
}

impl DocumentSource for FileLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let raw = match ext.as_str() {
            "pdf"         => extract_pdf_text(path)?,
            "docx"        => extract_docx_text(path)?,
            "txt" | "md"  => fs::read_to_string(path)
                .with_context(|| format!("Cannot read '{}'", path.display()))?,
            other         => bail!(
                "Unsupported document type '.{}' for '{}' (expected .pdf, .docx, .txt or .md)",
                other,
                path.display()
            ),
        };

        let text = self.normalizer.normalize(&raw);

        // Use the filename as the source identifier
        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        tracing::debug!("Loaded: {} ({} chars after cleaning)", source, text.len());
        Ok(Document::new(source, text))
    }
}

/// Pull the text layer out of a PDF file.
fn extract_pdf_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| anyhow::anyhow!("PDF text extraction failed for '{}': {}", path.display(), e))
}

/// Parse a .docx file and join its non-empty paragraphs with newlines.
fn extract_docx_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = read_docx(&bytes)
        .map_err(|e| {
            anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e)
        })?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        // Tables, images and section properties carry no body text we need
        if let DocumentChild::Paragraph(para) = child {
            let para_text = extract_paragraph_text(para);
            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Paragraph → Run → Text. Runs belong to the same sentence,
/// so they are concatenated with no separator.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_and_cleans_text_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut f = fs::File::create(&path).unwrap();
        write!(f, "<b>Report</b>\n\n cid:12 findings\0here.").unwrap();

        let doc = FileLoader::new().load(&path).unwrap();
        assert_eq!(doc.source, "notes.txt");
        assert_eq!(doc.text, "Report findings here.");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.MD");
        fs::write(&path, "Hello   world.").unwrap();

        let doc = FileLoader::new().load(&path).unwrap();
        assert_eq!(doc.text, "Hello world.");
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");
        fs::write(&path, [0u8, 1, 2]).unwrap();

        let err = FileLoader::new().load(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported document type"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(FileLoader::new().load(&path).is_err());
    }

    #[test]
    fn test_loads_pdf_text() {
        use crate::domain::note::Note;
        use crate::infra::exporter::export_pdf;

        let note = Note::new(
            "Quarterly report",
            "Revenue grew in every region.",
            "Revenue grew.",
            vec!["revenue".into()],
            "report.txt",
        );
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.PDF");
        fs::write(&path, export_pdf(&note).unwrap()).unwrap();

        let doc = FileLoader::new().load(&path).unwrap();
        assert_eq!(doc.source, "report.PDF");
        assert!(!doc.text.contains("  "));
        assert!(!doc.text.contains('\n'));

        // Extractors differ on spacing between text blocks, so compare without it
        let squashed: String = doc.text.split_whitespace().collect();
        assert!(squashed.contains("Quarterlyreport"), "{}", doc.text);
        assert!(squashed.contains("Summary:Revenuegrew."), "{}", doc.text);
        assert!(squashed.contains("Revenuegrewineveryregion."), "{}", doc.text);
    }

    fn write_docx(path: &Path) {
        use docx_rs::{Docx, Paragraph, Run};

        let file = fs::File::create(path).unwrap();
        Docx::new()
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Quarter"))
                    .add_run(Run::new().add_text("ly results rose.")),
            )
            .add_paragraph(Paragraph::new())
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Costs fell.")))
            .build()
            .pack(file)
            .unwrap();
    }

    #[test]
    fn test_docx_runs_join_and_paragraphs_split() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("minutes.docx");
        write_docx(&path);

        // Runs join with no separator; blank paragraphs are skipped
        let raw = extract_docx_text(&path).unwrap();
        assert_eq!(raw, "Quarterly results rose.\nCosts fell.");
    }

    #[test]
    fn test_loads_docx_text() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("minutes.docx");
        write_docx(&path);

        let doc = FileLoader::new().load(&path).unwrap();
        assert_eq!(doc.source, "minutes.docx");
        assert_eq!(doc.text, "Quarterly results rose. Costs fell.");
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"not really a pdf").unwrap();
        assert!(FileLoader::new().load(&path).is_err());
    }
}
