//! Text extraction from various file formats

use crate::error::{Result, SkillfyError};
use crate::input::file_detector::FileType;
use log::info;
use pulldown_cmark::{html, Parser};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::OnceLock;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Route a file to the extractor for its type.
pub async fn extract_by_type(file_type: FileType, path: &Path) -> Result<String> {
    match file_type {
        FileType::Pdf => {
            info!("Extracting text from PDF: {}", path.display());
            PdfExtractor.extract(path).await
        }
        FileType::Docx => {
            info!("Extracting text from DOCX: {}", path.display());
            DocxExtractor.extract(path).await
        }
        FileType::Text => {
            info!("Reading plain text file: {}", path.display());
            PlainTextExtractor.extract(path).await
        }
        FileType::Markdown => {
            info!("Processing markdown file: {}", path.display());
            MarkdownExtractor.extract(path).await
        }
        FileType::Unknown => Err(SkillfyError::UnsupportedFormat(format!(
            "Unsupported file type for: {}",
            path.display()
        ))),
    }
}

fn unreadable(path: &Path, reason: impl Into<String>) -> SkillfyError {
    SkillfyError::UnreadableDocument {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        // pdf-extract panics on some malformed files; both paths map to UnreadableDocument.
        let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes));

        match extracted {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(unreadable(path, e.to_string())),
            Err(_) => Err(unreadable(path, "PDF parser aborted on malformed content")),
        }
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        docx_to_text(&bytes).map_err(|reason| unreadable(path, reason))
    }
}

/// Pull paragraph text out of a DOCX archive.
///
/// Runs inside a paragraph are concatenated; paragraphs are joined with a
/// single space.
pub fn docx_to_text(bytes: &[u8]) -> std::result::Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| format!("not a DOCX archive: {}", e))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| format!("missing word/document.xml: {}", e))?
        .read_to_string(&mut xml)
        .map_err(|e| format!("failed to read document body: {}", e))?;

    // Text lives in w:t runs; a closing w:p ends the paragraph
    let mut reader = Reader::from_str(&xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => current.push('\t'),
            Ok(Event::Text(t)) if in_text_run => {
                let text = t
                    .unescape()
                    .map_err(|e| format!("invalid text run: {}", e))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(format!(
                    "malformed document XML at byte {}: {}",
                    reader.buffer_position(),
                    e
                ))
            }
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join(" "))
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        String::from_utf8(bytes).map_err(|e| unreadable(path, format!("not valid UTF-8 text: {}", e)))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = PlainTextExtractor.extract(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render markdown and strip it down to plain text lines.
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    // Block closers become line breaks
    let text = html_output
        .replace("<br />", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n");

    // Strip tags before decoding entities; `&amp;` goes last
    let stripped = tag_regex().replace_all(&text, "");

    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    // Drop blank lines and edge whitespace
    decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buffer.into_inner()
    }

    #[test]
    fn test_markdown_to_text_strips_formatting() {
        let text = markdown_to_text("# Jane Roe\n\n**Skills:** Python, *SQL* & C++\n\n- React\n- Flask\n");
        assert!(text.contains("Jane Roe"));
        assert!(text.contains("Skills: Python, SQL & C++"));
        assert!(text.contains("React"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains("<li>"));
    }

    #[test]
    fn test_markdown_angle_brackets_keep_enclosed_text() {
        let text = markdown_to_text("Requirements: 2 < years with Python > 5 teams\n");
        assert_eq!(text, "Requirements: 2 < years with Python > 5 teams");

        let text = markdown_to_text("a < Python > b\n\nUse &lt;html&gt; & \"quotes\"\n");
        assert!(text.contains("a < Python > b"));
        assert!(text.contains("Use <html> & \"quotes\""));
    }

    #[test]
    fn test_docx_paragraphs_joined_with_spaces() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Roe</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Skills: Python, </w:t></w:r><w:r><w:t>SQL &amp; C++</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Led data analysis projects</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let text = docx_to_text(&build_docx(xml)).unwrap();
        assert_eq!(text, "Jane Roe Skills: Python, SQL & C++ Led data analysis projects");
    }

    #[test]
    fn test_docx_rejects_non_archives() {
        let err = docx_to_text(b"plain bytes, not a zip").unwrap_err();
        assert!(err.contains("not a DOCX archive"));
    }

    #[test]
    fn test_docx_requires_document_body() {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            writer
                .start_file("word/styles.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"<w:styles/>").unwrap();
            writer.finish().unwrap();
        }

        let err = docx_to_text(&buffer.into_inner()).unwrap_err();
        assert!(err.contains("word/document.xml"));
    }
}
