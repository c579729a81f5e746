//! DOCX text extraction.
//!
//! DOCX files are ZIP archives; the main content lives in `word/document.xml`.
//! Streamed with quick-xml: body paragraph texts come first, then table-cell
//! texts, each on its own line.

use std::fs;
use std::io::BufReader;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::warn;
use zip::ZipArchive;

/// Extract plain text from a DOCX file.
///
/// A missing or malformed archive degrades to an empty string with a warning
/// rather than failing the whole review.
pub fn extract_docx(path: &Path) -> String {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot open docx file");
            return String::new();
        }
    };

    let mut archive = match ZipArchive::new(file) {
        Ok(a) => a,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "not a valid docx archive");
            return String::new();
        }
    };

    let document = match archive.by_name("word/document.xml") {
        Ok(d) => d,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "docx archive has no word/document.xml");
            return String::new();
        }
    };

    let mut reader = Reader::from_reader(BufReader::new(document));
    reader.config_mut().trim_text(true);

    let mut buf = Vec::with_capacity(1024);

    // Paragraphs outside tables, then cell paragraphs, each on its own line.
    let mut paragraphs: Vec<String> = Vec::new();
    let mut cells: Vec<String> = Vec::new();

    let mut table_depth: u32 = 0;
    let mut in_text = false;
    let mut current = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"p" => current.clear(),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    if let Ok(text) = e.unescape() {
                        current.push_str(&text);
                    }
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"t" => in_text = false,
                b"p" => {
                    if !current.trim().is_empty() {
                        let line = current.trim().to_string();
                        if table_depth > 0 {
                            cells.push(line);
                        } else {
                            paragraphs.push(line);
                        }
                    }
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "docx XML parse error, stopping");
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    paragraphs.extend(cells);
    paragraphs.join("\n")
}
