//! Documentation blocks extracted from annotated test files.
//!
//! A test file documents itself with JSDoc-style blocks:
//!
//! ```text
//! /**
//!  * @title Granting access
//!  * @chapter access-control
//!  * Explains how FHE.allow works.
//!  */
//! it("grants access", async () => { ... });
//! ```
//!
//! Each block becomes a [`DocSection`] whose code sample is the text between
//! the block and the next block (or end of file). Blocks without `@title` are
//! dropped. Scanning is a line-based state machine and never fails: an
//! unclosed block ends at the next line starting with `/**` or at end of file.
//!
//! Outside a block, `/**` also opens one after code on the same line when it
//! follows whitespace. Code before the opener still belongs to the previous
//! section's sample.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Chapter assigned to a section without a `@chapter` marker.
pub const DEFAULT_CHAPTER: &str = "basic";
/// Maximum number of lines kept from the code following a block.
pub const MAX_CODE_LINES: usize = 20;

const BLOCK_OPEN: &str = "/**";
const BLOCK_CLOSE: &str = "*/";
const TITLE_MARKER: &str = "@title";
const CHAPTER_MARKER: &str = "@chapter";

/// One titled unit of documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocSection {
    pub title: String,
    /// Block prose with marker lines removed.
    pub body: String,
    /// First [`MAX_CODE_LINES`] lines following the block, if any.
    pub code: Option<String>,
    pub chapter: String,
}

/// Extract sections from the test file at `path`. A missing file yields none.
pub fn extract(path: &Path) -> Result<Vec<DocSection>> {
    if !path.is_file() {
        tracing::debug!("no test file at {}, no sections", path.display());
        return Ok(Vec::new());
    }
    let source = std::fs::read_to_string(path)?;
    Ok(extract_from_str(&source))
}

/// Scanner state between lines.
enum State<'s> {
    /// Before the first block.
    Outside,
    /// Inside a comment block.
    InBlock { block: Vec<&'s str> },
    /// After a closed block, collecting its code sample.
    InTrailing {
        block: Vec<&'s str>,
        trailing: Vec<&'s str>,
    },
}

/// Extract sections from test source text.
pub fn extract_from_str(source: &str) -> Vec<DocSection> {
    let mut sections = Vec::new();
    let mut state = State::Outside;

    for line in source.lines() {
        let opener = find_opener(line);
        state = match state {
            State::Outside => match opener {
                Some(at) => open_block(&line[at..]),
                None => State::Outside,
            },
            State::InBlock { block } if line.trim_start().starts_with(BLOCK_OPEN) => {
                sections.extend(finish(&block, &[]));
                open_block(line.trim_start())
            }
            State::InBlock { mut block } => match line.split_once(BLOCK_CLOSE) {
                Some((inside, after)) => {
                    block.push(inside);
                    State::InTrailing {
                        block,
                        trailing: non_empty(after),
                    }
                }
                None => {
                    block.push(line);
                    State::InBlock { block }
                }
            },
            State::InTrailing {
                block,
                mut trailing,
            } => match opener {
                Some(at) => {
                    trailing.extend(non_empty(&line[..at]));
                    sections.extend(finish(&block, &trailing));
                    open_block(&line[at..])
                }
                None => {
                    trailing.push(line);
                    State::InTrailing { block, trailing }
                }
            },
        };
    }

    match state {
        State::Outside => {}
        State::InBlock { block } => sections.extend(finish(&block, &[])),
        State::InTrailing { block, trailing } => sections.extend(finish(&block, &trailing)),
    }
    sections
}

/// Byte offset of the first `/**` at line start or after whitespace, so
/// globs such as `"contracts/**/*.sol"` don't open a block.
fn find_opener(line: &str) -> Option<usize> {
    line.match_indices(BLOCK_OPEN)
        .map(|(at, _)| at)
        .find(|&at| line[..at].chars().next_back().is_none_or(char::is_whitespace))
}

/// Start a block from text beginning with `/**`.
fn open_block(text: &str) -> State<'_> {
    let rest = &text[BLOCK_OPEN.len()..];
    match rest.split_once(BLOCK_CLOSE) {
        Some((inside, after)) => State::InTrailing {
            block: vec![inside],
            trailing: non_empty(after),
        },
        None => State::InBlock { block: vec![rest] },
    }
}

fn non_empty(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        Vec::new()
    } else {
        vec![text]
    }
}

/// Strip `*` decoration from one comment line.
fn clean_line(line: &str) -> &str {
    let line = line.trim();
    let line = line.strip_prefix('*').unwrap_or(line);
    line.trim()
}

/// `@title Foo` / `@title: Foo` -> `Some("Foo")`.
fn marker_value<'l>(line: &'l str, marker: &str) -> Option<&'l str> {
    let rest = line.strip_prefix(marker)?;
    if !(rest.is_empty() || rest.starts_with([' ', '\t', ':'])) {
        return None;
    }
    Some(rest.trim_start_matches(':').trim())
}

fn finish(block: &[&str], trailing: &[&str]) -> Option<DocSection> {
    let mut title = None;
    let mut chapter = None;
    let mut body = Vec::new();

    for raw in block {
        let line = clean_line(raw);
        if let Some(value) = marker_value(line, TITLE_MARKER) {
            title.get_or_insert_with(|| value.to_string());
        } else if let Some(value) = marker_value(line, CHAPTER_MARKER) {
            chapter.get_or_insert_with(|| value.to_string());
        } else {
            body.push(line);
        }
    }

    let title = title.filter(|t| !t.is_empty())?;
    let chapter = chapter
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CHAPTER.to_string());

    let code = trailing.join("\n");
    let code = code
        .trim()
        .lines()
        .take(MAX_CODE_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    Some(DocSection {
        title,
        body: body.join("\n").trim().to_string(),
        code: if code.is_empty() { None } else { Some(code) },
        chapter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_default_chapter() {
        let source = "\
/**
 * @title Foo
 * Explains foo.
 */
it(\"does foo\", async () => {
  expect(1).to.equal(1);
});
";
        let sections = extract_from_str(source);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Foo");
        assert_eq!(sections[0].chapter, DEFAULT_CHAPTER);
        assert_eq!(sections[0].body, "Explains foo.");
        assert_eq!(
            sections[0].code.as_deref(),
            Some("it(\"does foo\", async () => {\n  expect(1).to.equal(1);\n});")
        );
    }

    #[test]
    fn test_block_without_title_dropped() {
        let source = "\
/**
 * @chapter decryption
 * No title here.
 */
const a = 1;
/**
 * @title Kept
 * @chapter decryption
 */
const b = 2;
";
        let sections = extract_from_str(source);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Kept");
        assert_eq!(sections[0].chapter, "decryption");
        assert_eq!(sections[0].body, "");
        assert_eq!(sections[0].code.as_deref(), Some("const b = 2;"));
    }

    #[test]
    fn test_code_stops_at_next_block() {
        let source = "\
/** @title First */
const first = 1;

/**
 * @title Second
 */
const second = 2;
";
        let sections = extract_from_str(source);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].code.as_deref(), Some("const first = 1;"));
        assert_eq!(sections[1].code.as_deref(), Some("const second = 2;"));
    }

    #[test]
    fn test_empty_trailing_has_no_code() {
        let sections = extract_from_str("/**\n * @title Lonely\n */\n\n   \n");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].code.is_none());
    }

    #[test]
    fn test_code_truncated_to_max_lines() {
        let mut source = String::from("/**\n * @title Long\n */\n");
        for i in 0..30 {
            source.push_str(&format!("line{i}\n"));
        }
        let sections = extract_from_str(&source);
        let code = sections[0].code.as_deref().unwrap();
        assert_eq!(code.lines().count(), MAX_CODE_LINES);
        assert!(code.starts_with("line0"));
        assert!(code.ends_with("line19"));
    }

    #[test]
    fn test_unclosed_block_extends_to_next_open() {
        let source = "\
/**
 * @title Unclosed
 * still inside
/**
 * @title Closed
 */
done();
";
        let sections = extract_from_str(source);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Unclosed");
        assert_eq!(sections[0].body, "still inside");
        assert!(sections[0].code.is_none());
        assert_eq!(sections[1].code.as_deref(), Some("done();"));
    }

    #[test]
    fn test_unclosed_block_extends_to_eof() {
        let sections = extract_from_str("/**\n * @title Tail\n * body text\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "body text");
        assert!(sections[0].code.is_none());
    }

    #[test]
    fn test_marker_requires_word_boundary() {
        let sections = extract_from_str("/**\n * @titles nope\n */\nx();\n");
        assert!(sections.is_empty());

        let sections = extract_from_str("/**\n * @title: With Colon\n */\n");
        assert_eq!(sections[0].title, "With Colon");
    }

    #[test]
    fn test_block_opened_mid_line() {
        let source = "\
it('setup'); /** @title Inline */
it('inline', async () => {});
const x = 1; /** @title Second */ it('second');";
        let sections = extract_from_str(source);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Inline");
        assert_eq!(
            sections[0].code.as_deref(),
            Some("it('inline', async () => {});\nconst x = 1;")
        );
        assert_eq!(sections[1].title, "Second");
        assert_eq!(sections[1].code.as_deref(), Some("it('second');"));
    }

    #[test]
    fn test_glob_in_code_does_not_open_block() {
        let source = "\
/** @title Paths */
const files = glob(\"contracts/**/*.sol\");";
        let sections = extract_from_str(source);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].code.as_deref(),
            Some("const files = glob(\"contracts/**/*.sol\");")
        );
    }

    #[test]
    fn test_text_before_first_block_ignored() {
        let source = "import { expect } from \"chai\";\n/**\n * @title Only\n */\nrun();\n";
        let sections = extract_from_str(source);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].code.as_deref(), Some("run();"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let sections = extract(Path::new("/tmp/nonexistent_fhevm_test_file.ts")).unwrap();
        assert!(sections.is_empty());
    }

    #[test]
    fn test_extract_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Counter.ts");
        std::fs::write(&path, "/**\n * @title Foo\n */\nincrement();\n").unwrap();
        let sections = extract(&path).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Foo");
        assert_eq!(sections[0].chapter, DEFAULT_CHAPTER);
    }
}
