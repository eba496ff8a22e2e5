//! Longan - A Rust library for typesetting numeric matrices as LaTeX
//!
//! This library renders rectangular 2-D numeric arrays as LaTeX math-mode
//! fragments and hands them to a rich-display sink so notebook front ends
//! show typeset math instead of raw numbers.
//!
//! # Features
//!
//! - **Matrix views**: Render nested vectors, fixed-size arrays, or the
//!   crate's own [`DenseMatrix`] through one read-only view trait
//! - **Fixed-precision rounding**: Entries rounded to two decimal places by
//!   default, with an explicit, documented tie-breaking rule
//! - **Shape validation**: Empty and ragged input is rejected before any
//!   output is produced
//! - **Injected display sinks**: Capture fragments in tests, write them to
//!   any stream, or frame them for the evcxr Jupyter kernel
//! - **Zero-allocation number formatting**: Elements are written straight
//!   into a reusable buffer
//!
//! # Example - Displaying a matrix
//!
//! ```rust
//! use longan::{BufferSink, display_matrix};
//!
//! # fn main() -> Result<(), longan::Error> {
//! let matrix = vec![vec![1.005, 2.0], vec![3.0, 4.999]];
//!
//! let mut sink = BufferSink::new();
//! display_matrix(&matrix, &mut sink)?;
//!
//! let latex = &sink.displayed()[0];
//! assert!(latex.contains("1.0 & 2.0"));
//! assert!(latex.contains("3.0 & 5.0"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Rendering to a string
//!
//! ```rust
//! use longan::ToLatex;
//!
//! # fn main() -> Result<(), longan::Error> {
//! let latex = vec![vec![1.0, 2.0], vec![3.0, 4.0]].to_latex()?;
//! assert!(latex.starts_with("$$\n\\left("));
//! assert!(latex.contains("\\begin{array}{rr}"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom rendering options
//!
//! ```rust
//! use longan::{Alignment, LatexOptions, MathStyle, matrix_to_latex_with_options};
//!
//! # fn main() -> Result<(), longan::Error> {
//! let options = LatexOptions::new()
//!     .with_precision(3)
//!     .with_alignment(Alignment::Center)
//!     .with_math_style(MathStyle::LaTeX);
//!
//! let latex = matrix_to_latex_with_options(&vec![vec![0.3333]], &options)?;
//! assert!(latex.contains("0.333"));
//! # Ok(())
//! # }
//! ```

/// Unified error types
///
/// This module provides the unified [`Error`] type, the [`ShapeError`]
/// taxonomy for empty and ragged input, and the crate-wide [`Result`]
/// alias.
pub mod error;

/// Read-only 2-D numeric views
///
/// This module defines the [`MatrixView`] capability the renderer consumes,
/// shape validation, and the owned [`DenseMatrix`] storage.
pub mod matrix;

/// LaTeX rendering
///
/// This module converts a matrix view into a LaTeX `array` environment
/// wrapped in parenthesis delimiters and display-math markers.
pub mod latex;

/// Rich-display hand-off
///
/// This module defines the [`DisplaySink`] capability and the single-shot
/// [`display_matrix`] operation, plus the shipped sink implementations.
pub mod display;

// Re-export commonly used types for convenience
pub use display::{BufferSink, DisplaySink, EvcxrSink, WriterSink};
pub use display::{display_matrix, display_matrix_with_options};
pub use error::{Error, Result, ShapeError};
pub use latex::{
    Alignment, LatexOptions, LatexRenderer, MathStyle, RoundingMode, ToLatex, matrix_to_latex,
    matrix_to_latex_with_options,
};
pub use matrix::{DenseMatrix, MatrixView};
