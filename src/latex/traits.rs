/// Core trait for LaTeX conversion.
///
/// This module defines the `ToLatex` trait that enables matrix types to be
/// converted to LaTeX math-mode fragments.
use super::options::LatexOptions;
use super::renderer::matrix_to_latex_with_options;
use crate::error::Result;
use crate::matrix::MatrixView;

/// Core trait for types that can be rendered as a LaTeX matrix.
///
/// A blanket implementation covers every [`MatrixView`], so nested vectors,
/// fixed-size arrays, and [`DenseMatrix`](crate::DenseMatrix) all convert
/// directly.
///
/// # Examples
///
/// ```rust
/// use longan::ToLatex;
///
/// let latex = vec![vec![1.0, 2.0], vec![3.0, 4.0]].to_latex()?;
/// assert!(latex.starts_with("$$"));
/// # Ok::<(), longan::Error>(())
/// ```
pub trait ToLatex {
    /// Render this matrix to LaTeX with default options.
    fn to_latex(&self) -> Result<String> {
        self.to_latex_with_options(&LatexOptions::default())
    }

    /// Render this matrix to LaTeX with custom options.
    ///
    /// # Arguments
    ///
    /// * `options` - Configuration for the rendering
    fn to_latex_with_options(&self, options: &LatexOptions) -> Result<String>;
}

impl<M: MatrixView> ToLatex for M {
    fn to_latex_with_options(&self, options: &LatexOptions) -> Result<String> {
        matrix_to_latex_with_options(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::renderer::matrix_to_latex;
    use crate::matrix::DenseMatrix;

    #[test]
    fn test_to_latex_matches_free_function() {
        let m = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(m.to_latex().unwrap(), matrix_to_latex(&m).unwrap());
    }

    #[test]
    fn test_to_latex_on_dense_matrix() {
        let dense = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let nested = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(dense.to_latex().unwrap(), nested.to_latex().unwrap());
    }
}
