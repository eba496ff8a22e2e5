// LaTeX rendering module
//
// This module contains the rendering pipeline that turns a validated matrix
// view into a LaTeX math-mode fragment: rounding policy, rendering options,
// the buffer-backed renderer, and the ToLatex convenience trait.

mod options;
mod renderer;
mod rounding;
mod traits;

pub use options::{Alignment, LatexOptions, MathStyle};
pub use renderer::{LatexRenderer, matrix_to_latex, matrix_to_latex_with_options};
pub use rounding::RoundingMode;
pub use traits::ToLatex;
