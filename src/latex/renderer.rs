// LaTeX renderer implementation
//
// This module contains the LatexRenderer struct and the free-function entry
// points. The renderer owns a reusable output buffer with pre-allocated
// capacity so repeated renders do not reallocate.

use super::options::{LatexOptions, MathStyle};
use super::rounding::round_to;
use crate::error::{Error, Result};
use crate::matrix::{MatrixView, validate_shape};
use std::fmt::Write;

/// Renders matrices to LaTeX math-mode fragments.
///
/// Uses a reusable internal buffer with capacity estimated from the matrix
/// shape before writing. The rendered output depends only on the matrix and
/// the options, never on prior calls.
///
/// # Example
///
/// ```rust
/// use longan::LatexRenderer;
///
/// let mut renderer = LatexRenderer::new();
/// let latex = renderer.render(&vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
/// assert!(latex.starts_with("$$\n\\left("));
/// # Ok::<(), longan::Error>(())
/// ```
pub struct LatexRenderer {
    /// Buffer for building the LaTeX output with pre-allocated capacity
    buffer: String,
    /// Options applied to every render
    options: LatexOptions,
}

impl LatexRenderer {
    /// Create a new renderer with default options.
    pub fn new() -> Self {
        Self::with_options(LatexOptions::default())
    }

    /// Create a new renderer with custom options.
    pub fn with_options(options: LatexOptions) -> Self {
        Self {
            buffer: String::with_capacity(256),
            options,
        }
    }

    /// The options applied to every render.
    #[inline]
    pub fn options(&self) -> &LatexOptions {
        &self.options
    }

    /// Render a matrix to a LaTeX fragment.
    ///
    /// Validates the shape, rounds every element to the configured
    /// precision, and emits an `array` environment wrapped in
    /// `\left( ... \right)` inside display-math delimiters. The input is
    /// only read; rounding happens on per-element copies.
    ///
    /// Returns a reference into the internal buffer to avoid unnecessary
    /// string cloning; the reference is valid until the next render.
    pub fn render<M: MatrixView + ?Sized>(&mut self, matrix: &M) -> Result<&str> {
        let (rows, cols) = validate_shape(matrix)?;

        self.buffer.clear();
        self.buffer
            .reserve(estimate_capacity(rows, cols, &self.options));

        let (open, close) = match self.options.math_style {
            MathStyle::Dollar => ("$$", "$$"),
            MathStyle::LaTeX => ("\\[", "\\]"),
        };

        self.buffer.push_str(open);
        self.buffer.push('\n');
        self.buffer.push_str("\\left(\n");

        self.push_indent(1);
        write!(self.buffer, "\\begin{{array}}{{")
            .map_err(|e| Error::Format(e.to_string()))?;
        let align = self.options.alignment.as_char();
        for _ in 0..cols {
            self.buffer.push(align);
        }
        self.buffer.push_str("}\n");

        let mut element = ryu::Buffer::new();
        for row in 0..rows {
            self.push_indent(2);
            for (col, &value) in matrix.row(row).iter().enumerate() {
                if !value.is_finite() {
                    return Err(Error::NonFinite { row, col, value });
                }
                if col > 0 {
                    self.buffer.push_str(" & ");
                }
                let rounded = round_to(value, self.options.precision, self.options.rounding);
                self.buffer.push_str(element.format_finite(rounded));
            }
            self.buffer.push_str(" \\\\ \n");
        }

        self.push_indent(1);
        self.buffer.push_str("\\end{array}\n");
        self.buffer.push_str("\\right)\n");
        self.buffer.push_str(close);

        Ok(&self.buffer)
    }

    /// Get the current buffer content without re-rendering.
    #[inline]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Clear the internal buffer, keeping its capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    fn push_indent(&mut self, level: usize) {
        for _ in 0..level * self.options.indent {
            self.buffer.push(' ');
        }
    }
}

impl Default for LatexRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a matrix to a LaTeX fragment with default options.
///
/// Elements are rounded to two decimal places (ties to even), columns are
/// right-aligned, and the fragment is wrapped in `$$ ... $$`.
///
/// # Example
///
/// ```rust
/// use longan::matrix_to_latex;
///
/// let latex = matrix_to_latex(&vec![vec![1.0]])?;
/// assert!(latex.contains("\\begin{array}{r}"));
/// # Ok::<(), longan::Error>(())
/// ```
pub fn matrix_to_latex<M: MatrixView + ?Sized>(matrix: &M) -> Result<String> {
    matrix_to_latex_with_options(matrix, &LatexOptions::default())
}

/// Render a matrix to a LaTeX fragment with custom options.
pub fn matrix_to_latex_with_options<M: MatrixView + ?Sized>(
    matrix: &M,
    options: &LatexOptions,
) -> Result<String> {
    let mut renderer = LatexRenderer::with_options(options.clone());
    Ok(renderer.render(matrix)?.to_string())
}

/// Estimate capacity needed for one render to avoid reallocations.
fn estimate_capacity(rows: usize, cols: usize, options: &LatexOptions) -> usize {
    // Delimiters plus the \left( / \begin{array} / \end{array} / \right) lines
    let env_overhead = 28 + 2 * options.indent + cols;
    // Indent, element digits, " & " separators, and the trailing " \\ \n"
    let element_width = options.precision as usize + 8;
    let row_overhead = 2 * options.indent + 4;
    env_overhead + rows * (row_overhead + cols * element_width + cols.saturating_sub(1) * 3)
}
