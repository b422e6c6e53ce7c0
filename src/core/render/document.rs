//! Nested output structure and its indenter

use std::fmt;

/// Indentation added per nesting level
const SPACER: &str = "  ";

/// A line of output or an indented block of further chunks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// A single line (may itself contain newlines, which are not re-indented)
    Line(String),
    /// Chunks indented one level deeper than the enclosing ones
    Block(Vec<Chunk>),
}

impl Chunk {
    /// A single line
    #[must_use]
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    /// An empty separator line
    #[must_use]
    pub const fn blank() -> Self {
        Self::Line(String::new())
    }

    /// An indented block of plain lines
    #[must_use]
    pub fn block(lines: Vec<String>) -> Self {
        Self::Block(lines.into_iter().map(Self::Line).collect())
    }

    fn write_lines(&self, level: usize, out: &mut Vec<String>) {
        match self {
            Self::Line(text) if text.is_empty() => out.push(String::new()),
            Self::Line(text) => out.push(format!("{}{text}", SPACER.repeat(level))),
            Self::Block(chunks) => {
                for chunk in chunks {
                    chunk.write_lines(level + 1, out);
                }
            }
        }
    }
}

/// Wrap plain lines as chunks at the current level
#[must_use]
pub fn lines(lines: Vec<String>) -> Vec<Chunk> {
    lines.into_iter().map(Chunk::Line).collect()
}

/// A rendered graph, ready to be flattened into DOT text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphDocument {
    /// Top-level chunks, written without indentation
    pub chunks: Vec<Chunk>,
}

impl GraphDocument {
    /// Create a document from top-level chunks
    #[must_use]
    pub const fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    /// Flatten to text, two spaces per nesting level, no trailing newline
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = Vec::new();
        for chunk in &self.chunks {
            chunk.write_lines(0, &mut out);
        }
        out.join("\n")
    }
}

impl fmt::Display for GraphDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
