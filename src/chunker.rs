//! Size-bounded chunk files.
//!
//! A document body is trimmed, prefixed with a fixed header, and written as
//! one `.md` file if it fits in `max_chars`. Longer bodies are cut at pure
//! character offsets into `_part{i}of{n}.md` files, each carrying the same
//! header. Cuts never look at words, sentences, or pages.

use std::path::Path;

use crate::error::{ConvertError, ConvertResult};
use crate::model::{ChunkFile, ChunkOutcome, ChunkPlan, with_suffix};

/// Default maximum characters per chunk.
pub const DEFAULT_MAX_CHARS: usize = 12_000;

/// Configuration for chunk splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Maximum characters of body text per output file.
    pub max_chars: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl ChunkConfig {
    pub fn new(max_chars: usize) -> ConvertResult<Self> {
        if max_chars == 0 {
            return Err(ConvertError::InvalidChunkSize { size: max_chars });
        }
        Ok(Self { max_chars })
    }
}

/// The header every chunk file starts with.
pub fn chunk_header(title: &str) -> String {
    format!("# {title}\n\nSource: {title}.pdf\n\n")
}

/// Split `text` into consecutive slices of at most `max_chars` characters.
///
/// Concatenating the slices yields `text` again.
pub fn split_by_chars(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut slices = Vec::new();
    let mut start = 0usize;
    let mut count = 0usize;

    for (offset, _) in text.char_indices() {
        if count == max_chars {
            slices.push(&text[start..offset]);
            start = offset;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        slices.push(&text[start..]);
    }
    slices
}

/// Work out which files `body` turns into, without touching the filesystem.
///
/// A blank body plans no files.
pub fn plan_chunks(base_path: &Path, title: &str, body: &str, config: &ChunkConfig) -> ChunkPlan {
    let body = body.trim();
    if body.is_empty() {
        return Vec::new();
    }

    let header = chunk_header(title);
    let body_chars = body.chars().count();

    if header.chars().count() + body_chars <= config.max_chars {
        return vec![ChunkFile {
            path: with_suffix(base_path, ".md"),
            contents: format!("{header}{body}"),
        }];
    }

    let parts = body_chars.div_ceil(config.max_chars);
    split_by_chars(body, config.max_chars)
        .into_iter()
        .enumerate()
        .map(|(i, slice)| ChunkFile {
            path: with_suffix(base_path, &format!("_part{}of{parts}.md", i + 1)),
            contents: format!("{header}{slice}"),
        })
        .collect()
}

/// Write `body` as one or more chunk files under `base_path`.
///
/// A blank body prints a warning naming `base_path` and writes nothing.
/// Existing files are overwritten.
pub fn write_chunks(
    base_path: &Path,
    title: &str,
    body: &str,
    config: &ChunkConfig,
) -> ConvertResult<ChunkOutcome> {
    let plan = plan_chunks(base_path, title, body, config);
    if plan.is_empty() {
        println!(
            "WARNING: No extractable text (might be scanned): {}",
            base_path.display()
        );
        tracing::debug!(base = %base_path.display(), "no extractable text");
        return Ok(ChunkOutcome::Empty);
    }

    let mut written = Vec::with_capacity(plan.len());
    for chunk in plan {
        std::fs::write(&chunk.path, chunk.contents.as_bytes())
            .map_err(|e| ConvertError::write(&chunk.path, e))?;
        tracing::debug!(path = %chunk.path.display(), "wrote chunk");
        written.push(chunk.path);
    }
    Ok(ChunkOutcome::Written(written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn body_of(contents: &str, title: &str) -> String {
        contents
            .strip_prefix(&chunk_header(title))
            .expect("chunk starts with header")
            .to_string()
    }

    #[test]
    fn header_format() {
        assert_eq!(chunk_header("doc"), "# doc\n\nSource: doc.pdf\n\n");
    }

    #[test]
    fn zero_chunk_size_rejected() {
        assert!(matches!(
            ChunkConfig::new(0),
            Err(ConvertError::InvalidChunkSize { size: 0 })
        ));
        assert_eq!(ChunkConfig::new(5).unwrap().max_chars, 5);
        assert_eq!(ChunkConfig::default().max_chars, 12_000);
    }

    #[test]
    fn split_respects_char_boundaries() {
        let text = "héllo wörld";
        let slices = split_by_chars(text, 4);
        assert_eq!(slices, vec!["héll", "o wö", "rld"]);
        assert_eq!(slices.concat(), text);
    }

    #[test]
    fn split_exact_multiple() {
        assert_eq!(split_by_chars("abcdef", 3), vec!["abc", "def"]);
        assert!(split_by_chars("", 3).is_empty());
    }

    #[test]
    fn blank_body_plans_nothing() {
        let config = ChunkConfig::default();
        assert!(plan_chunks(Path::new("out/doc"), "doc", "", &config).is_empty());
        assert!(plan_chunks(Path::new("out/doc"), "doc", " \n\t ", &config).is_empty());
    }

    #[test]
    fn small_body_is_one_file() {
        let config = ChunkConfig::default();
        let plan = plan_chunks(Path::new("out/doc"), "doc", "\n  body text \n", &config);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].path, PathBuf::from("out/doc.md"));
        assert_eq!(plan[0].contents, "# doc\n\nSource: doc.pdf\n\nbody text");
    }

    #[test]
    fn header_counts_toward_single_file_limit() {
        let header_len = chunk_header("t").chars().count();
        let config = ChunkConfig::new(30).unwrap();

        let fits = "x".repeat(30 - header_len);
        assert_eq!(plan_chunks(Path::new("t"), "t", &fits, &config).len(), 1);

        let spills = "x".repeat(30 - header_len + 1);
        let plan = plan_chunks(Path::new("t"), "t", &spills, &config);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].path, PathBuf::from("t_part1of1.md"));
    }

    #[test]
    fn long_body_split_into_numbered_parts() {
        let body: String = ('a'..='z').cycle().take(15_000).collect();
        let plan = plan_chunks(Path::new("out/sample"), "sample", &body, &ChunkConfig::default());

        let names: Vec<_> = plan.iter().map(|c| c.path.clone()).collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("out/sample_part1of2.md"),
                PathBuf::from("out/sample_part2of2.md"),
            ]
        );
        assert_eq!(body_of(&plan[0].contents, "sample"), &body[..12_000]);
        assert_eq!(body_of(&plan[1].contents, "sample"), &body[12_000..]);
    }

    #[test]
    fn parts_reassemble_trimmed_body() {
        let body = format!("   {}\n\n", "lorem ipsum dolor sit amet ".repeat(40).trim_end());
        let config = ChunkConfig::new(97).unwrap();
        let plan = plan_chunks(Path::new("b"), "b", &body, &config);

        let expected_parts = body.trim().chars().count().div_ceil(97);
        assert_eq!(plan.len(), expected_parts);

        let rebuilt: String = plan.iter().map(|c| body_of(&c.contents, "b")).collect();
        assert_eq!(rebuilt, body.trim());
        for chunk in &plan {
            assert!(body_of(&chunk.contents, "b").chars().count() <= 97);
        }
    }

    #[test]
    fn write_creates_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let base = dir.path().join("doc");
        let outcome = write_chunks(&base, "doc", "hello", &ChunkConfig::default()).unwrap();

        let expected = dir.path().join("doc.md");
        assert_eq!(outcome, ChunkOutcome::Written(vec![expected.clone()]));
        assert_eq!(
            std::fs::read_to_string(expected).unwrap(),
            "# doc\n\nSource: doc.pdf\n\nhello"
        );
    }

    #[test]
    fn write_blank_body_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let base = dir.path().join("scan");
        let outcome = write_chunks(&base, "scan", "  \n ", &ChunkConfig::default()).unwrap();
        assert_eq!(outcome, ChunkOutcome::Empty);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let base = dir.path().join("doc");
        std::fs::write(dir.path().join("doc.md"), "stale").unwrap();
        write_chunks(&base, "doc", "fresh", &ChunkConfig::default()).unwrap();
        assert!(
            std::fs::read_to_string(dir.path().join("doc.md"))
                .unwrap()
                .ends_with("fresh")
        );
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let base = dir.path().join("missing").join("doc");
        let err = write_chunks(&base, "doc", "text", &ChunkConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
    }
}
