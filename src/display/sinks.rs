// Display sink implementations
//
// Three sinks cover the common destinations: capturing fragments for tests
// and inspection, writing to any byte stream, and framing fragments with
// the evcxr Jupyter kernel rich-output protocol so a notebook front end
// typesets them.

use super::DisplaySink;
use crate::error::Result;
use std::io::{self, Write};

/// Sink that captures every displayed fragment in order.
///
/// Intended for unit tests and for callers that want to inspect the exact
/// string a front end would receive.
///
/// # Examples
///
/// ```rust
/// use longan::{BufferSink, display_matrix};
///
/// let mut sink = BufferSink::new();
/// display_matrix(&vec![vec![1.0]], &mut sink)?;
/// assert!(sink.displayed()[0].starts_with("$$"));
/// # Ok::<(), longan::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct BufferSink {
    fragments: Vec<String>,
}

impl BufferSink {
    /// Create an empty capturing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fragments displayed so far, oldest first.
    #[inline]
    pub fn displayed(&self) -> &[String] {
        &self.fragments
    }

    /// Take ownership of the captured fragments, leaving the sink empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.fragments)
    }
}

impl DisplaySink for BufferSink {
    fn display_math(&mut self, latex: &str) -> Result<()> {
        self.fragments.push(latex.to_string());
        Ok(())
    }
}

/// Sink that writes each fragment, followed by a newline, to any writer.
///
/// I/O failures surface as [`Error::Io`](crate::Error::Io).
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer in a display sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for WriterSink<W> {
    fn display_math(&mut self, latex: &str) -> Result<()> {
        writeln!(self.writer, "{latex}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink that frames fragments with the evcxr rich-output protocol.
///
/// The evcxr Jupyter kernel watches standard output for content framed as
///
/// ```text
/// EVCXR_BEGIN_CONTENT text/latex
/// ...
/// EVCXR_END_CONTENT
/// ```
///
/// and forwards it to the front end as a `text/latex` MIME bundle, which
/// the notebook typesets. Use [`EvcxrSink::stdout`] inside a notebook cell.
#[derive(Debug)]
pub struct EvcxrSink<W: Write> {
    writer: W,
}

/// MIME type the notebook front end typesets as math.
const LATEX_MIME: &str = "text/latex";

impl EvcxrSink<io::Stdout> {
    /// Create a sink framing content onto standard output, where the evcxr
    /// kernel picks it up.
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> EvcxrSink<W> {
    /// Frame content onto an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for EvcxrSink<W> {
    fn display_math(&mut self, latex: &str) -> Result<()> {
        writeln!(self.writer, "EVCXR_BEGIN_CONTENT {LATEX_MIME}")?;
        writeln!(self.writer, "{latex}")?;
        writeln!(self.writer, "EVCXR_END_CONTENT")?;
        self.writer.flush()?;
        Ok(())
    }
}
