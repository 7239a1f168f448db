// ============================================================
// Layer 6 - Note Exporter
// ============================================================
// Renders a note as a downloadable file.
//
//   TXT → a fixed plain-text layout:
//           Title: ...
//
//           Keywords: a, b, c
//
//           SUMMARY:
//           ...
//
//           FULL TEXT:
//           ...
//
//   PDF → A4 pages built with lopdf, 15 mm margins, Helvetica.
//         Title (bold 14), keywords (11), "Summary:" heading
//         (bold 12) + summary (11), "Full Text:" heading
//         (bold 12) + full text (11). Lines are word-wrapped
//         and a new page starts when the bottom margin is hit.
//
// The standard Type1 fonts only cover Latin-1 here, so any
// character outside it is dropped from the PDF output.
//
// Reference: lopdf crate documentation (Document, Content, Operation)

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::note::Note;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_-]+").expect("filename pattern is valid"));

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Turn a note title into a file name: every run of characters outside
/// `[a-zA-Z0-9_-]` becomes `_`, and an empty result becomes `note`.
pub fn safe_filename(title: &str, ext: &str) -> String {
    let base = UNSAFE_FILENAME_CHARS.replace_all(title, "_");
    let base = if base.is_empty() { "note" } else { base.as_ref() };
    format!("{base}.{ext}")
}

/// Render `note` in the requested format
pub fn export(note: &Note, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Txt => Ok(export_txt(note).into_bytes()),
        ExportFormat::Pdf => export_pdf(note),
    }
}

// ─── TXT ──────────────────────────────────────────────────────────────────────

pub fn export_txt(note: &Note) -> String {
    format!(
        "Title: {}\n\nKeywords: {}\n\nSUMMARY:\n{}\n\nFULL TEXT:\n{}\n",
        note.title,
        note.keywords.join(", "),
        note.summary,
        note.text,
    )
}

// ─── PDF ──────────────────────────────────────────────────────────────────────

// A4 in points
const PAGE_WIDTH:  i64 = 595;
const PAGE_HEIGHT: i64 = 842;
// 15 mm
const MARGIN:      i64 = 42;

// Line heights and gaps, in points
const TITLE_LEADING:   i64 = 22;
const HEADING_LEADING: i64 = 17;
const BODY_LEADING:    i64 = 14;
const BLOCK_GAP:       i64 = 11;
const SECTION_GAP:     i64 = 9;

// Rough Helvetica advance width as a fraction of the font size
const AVG_CHAR_WIDTH: f32 = 0.55;

#[derive(Debug, Clone, Copy)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource_name(self) -> &'static [u8] {
        match self {
            Font::Regular => b"F1",
            Font::Bold    => b"F2",
        }
    }
}

/// Collects drawing operations page by page, moving a cursor down
/// the page and starting a new page when the bottom margin is hit.
struct PageLayout {
    finished: Vec<Vec<Operation>>,
    current:  Vec<Operation>,
    y:        i64,
}

impl PageLayout {
    fn new() -> Self {
        Self { finished: Vec::new(), current: Vec::new(), y: PAGE_HEIGHT - MARGIN }
    }

    /// Write a wrapped block of text, one line every `leading` points.
    fn cell(&mut self, font: Font, size: i64, leading: i64, text: &str) {
        let usable    = (PAGE_WIDTH - 2 * MARGIN) as f32;
        let max_chars = ((usable / (size as f32 * AVG_CHAR_WIDTH)) as usize).max(1);

        for line in wrap(text, max_chars) {
            if self.y - leading < MARGIN {
                self.finished.push(std::mem::take(&mut self.current));
                self.y = PAGE_HEIGHT - MARGIN;
            }
            self.y -= leading;

            self.current.push(Operation::new("BT", vec![]));
            self.current.push(Operation::new(
                "Tf",
                vec![Object::Name(font.resource_name().to_vec()), Object::Integer(size)],
            ));
            self.current.push(Operation::new(
                "Td",
                vec![Object::Integer(MARGIN), Object::Integer(self.y)],
            ));
            self.current.push(Operation::new("Tj", vec![Object::string_literal(to_latin1(&line))]));
            self.current.push(Operation::new("ET", vec![]));
        }
    }

    /// Vertical space between blocks
    fn gap(&mut self, points: i64) {
        self.y -= points;
    }

    fn into_pages(mut self) -> Vec<Vec<Operation>> {
        self.finished.push(self.current);
        self.finished
    }
}

/// Greedy word wrap. Words longer than a line are split.
/// Empty text still produces one (blank) line.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines   = Vec::new();
    let mut current = String::new();
    let mut len     = 0usize;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();

        for piece in chars.chunks(max_chars) {
            let piece_len = piece.len();
            let needed    = if len == 0 { piece_len } else { len + 1 + piece_len };

            if needed > max_chars && len > 0 {
                lines.push(std::mem::take(&mut current));
                len = 0;
            }
            if len > 0 {
                current.push(' ');
                len += 1;
            }
            current.extend(piece);
            len += piece_len;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Keep only characters representable in Latin-1.
fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| u8::try_from(u32::from(c)).ok())
        .collect()
}

pub fn export_pdf(note: &Note) -> Result<Vec<u8>> {
    let mut layout = PageLayout::new();

    layout.cell(Font::Bold, 14, TITLE_LEADING, &note.title);
    layout.gap(BLOCK_GAP);

    layout.cell(Font::Regular, 11, HEADING_LEADING, &format!("Keywords: {}", note.keywords.join(", ")));
    layout.gap(BLOCK_GAP);

    layout.cell(Font::Bold, 12, HEADING_LEADING, "Summary:");
    layout.cell(Font::Regular, 11, BODY_LEADING, &note.summary);
    layout.gap(SECTION_GAP);

    layout.cell(Font::Bold, 12, HEADING_LEADING, "Full Text:");
    layout.cell(Font::Regular, 11, BODY_LEADING, &note.text);

    let bytes = render_pages(layout.into_pages())?;
    tracing::debug!("Rendered PDF for '{}' ({} bytes)", note.title, bytes.len());
    Ok(bytes)
}

/// Assemble the page operations into a complete PDF file.
fn render_pages(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>> {
    let mut doc  = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type"     => "Font",
        "Subtype"  => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type"     => "Font",
        "Subtype"  => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }
            .encode()
            .context("Cannot encode PDF page content")?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type"     => "Page",
            "Parent"   => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    let media_box: Vec<Object> = [0, 0, PAGE_WIDTH, PAGE_HEIGHT]
        .into_iter()
        .map(Object::Integer)
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type"      => "Pages",
            "Kids"      => kids,
            "Count"     => count,
            "Resources" => resources_id,
            "MediaBox"  => media_box,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type"  => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).context("Cannot write PDF")?;
    Ok(bytes)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        Note::new(
            "report.pdf",
            "Full text here.",
            "Short summary.",
            vec!["alpha".into(), "beta".into()],
            "report.pdf",
        )
    }

    #[test]
    fn test_txt_layout() {
        assert_eq!(
            export_txt(&sample_note()),
            "Title: report.pdf\n\nKeywords: alpha, beta\n\nSUMMARY:\nShort summary.\n\nFULL TEXT:\nFull text here.\n"
        );
    }

    #[test]
    fn test_txt_without_keywords() {
        let mut note = sample_note();
        note.keywords.clear();
        assert!(export_txt(&note).contains("Keywords: \n"));
    }

    #[test]
    fn test_safe_filename() {
        assert_eq!(safe_filename("report.pdf", "txt"), "report_pdf.txt");
        assert_eq!(safe_filename("Q3 results (final)", "pdf"), "Q3_results_final_.pdf");
        assert_eq!(safe_filename("", "txt"), "note.txt");
        assert_eq!(safe_filename("my-file_2", "pdf"), "my-file_2.pdf");
        assert_eq!(safe_filename("日本", "txt"), "_.txt");
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("aaa bbb ccc ddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
        assert!(wrap("abcdefghij", 4).iter().all(|l| l.chars().count() <= 4));
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_latin1_filter() {
        assert_eq!(to_latin1("café 日本"), b"caf\xe9 ".to_vec());
    }

    #[test]
    fn test_pdf_is_well_formed() {
        let bytes = export_pdf(&sample_note()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_long_text_spans_pages() {
        let mut note = sample_note();
        note.text    = "Lorem ipsum dolor sit amet. ".repeat(2000);

        let bytes = export(&note, ExportFormat::Pdf).unwrap();
        let doc   = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }
}
