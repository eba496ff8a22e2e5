// Rich-display hand-off
//
// This module defines the display-sink capability and the single-shot
// display operation: render a matrix with the configured options, then hand
// the fragment to the sink exactly once. The sink is an injected
// collaborator so the generated string stays unit-testable without a live
// notebook front end.

mod sinks;

pub use sinks::{BufferSink, EvcxrSink, WriterSink};

use crate::error::Result;
use crate::latex::{LatexOptions, matrix_to_latex_with_options};
use crate::matrix::MatrixView;

/// External capability that renders a math-mode string to the user.
///
/// Implementors receive a well-formed LaTeX fragment delimited per the
/// renderer's options (`$$ ... $$` by default) and are responsible for
/// surfacing it — capturing it, writing it to a stream, or framing it for a
/// notebook kernel.
pub trait DisplaySink {
    /// Accept one math-mode fragment for rendering.
    fn display_math(&mut self, latex: &str) -> Result<()>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    #[inline]
    fn display_math(&mut self, latex: &str) -> Result<()> {
        (**self).display_math(latex)
    }
}

/// Render a matrix and hand the fragment to a display sink.
///
/// Elements are rounded to two decimal places (ties to even) and the
/// fragment is wrapped in `$$ ... $$`. The sink is called exactly once; on
/// any validation or render failure it is not called at all. The call
/// exists for its display side effect and returns nothing beyond the error
/// channel.
///
/// # Examples
///
/// ```rust
/// use longan::{BufferSink, display_matrix};
///
/// let mut sink = BufferSink::new();
/// display_matrix(&vec![vec![1.0, 2.0], vec![3.0, 4.0]], &mut sink)?;
/// assert_eq!(sink.displayed().len(), 1);
/// # Ok::<(), longan::Error>(())
/// ```
pub fn display_matrix<M, S>(matrix: &M, sink: &mut S) -> Result<()>
where
    M: MatrixView + ?Sized,
    S: DisplaySink + ?Sized,
{
    display_matrix_with_options(matrix, &LatexOptions::default(), sink)
}

/// Render a matrix with custom options and hand the fragment to a sink.
pub fn display_matrix_with_options<M, S>(
    matrix: &M,
    options: &LatexOptions,
    sink: &mut S,
) -> Result<()>
where
    M: MatrixView + ?Sized,
    S: DisplaySink + ?Sized,
{
    let latex = matrix_to_latex_with_options(matrix, options)?;
    sink.display_math(&latex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ShapeError};
    use crate::latex::matrix_to_latex;

    #[test]
    fn test_display_matrix_calls_sink_once() {
        let matrix = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let mut sink = BufferSink::new();

        display_matrix(&matrix, &mut sink).unwrap();

        assert_eq!(sink.displayed().len(), 1);
        assert_eq!(sink.displayed()[0], matrix_to_latex(&matrix).unwrap());
    }

    #[test]
    fn test_display_matrix_skips_sink_on_error() {
        let ragged = vec![vec![1.0], vec![2.0, 3.0]];
        let mut sink = BufferSink::new();

        let err = display_matrix(&ragged, &mut sink).unwrap_err();

        assert!(matches!(err, Error::Shape(ShapeError::Ragged { .. })));
        assert!(sink.displayed().is_empty());
    }

    #[test]
    fn test_display_matrix_with_options_applies_them() {
        let options = LatexOptions::new().with_precision(0);
        let mut sink = BufferSink::new();

        display_matrix_with_options(&vec![vec![1.4, 2.6]], &options, &mut sink).unwrap();

        assert!(sink.displayed()[0].contains("1.0 & 3.0"));
    }
}
