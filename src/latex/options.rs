/// Configuration types for LaTeX rendering.
///
/// This module defines the configuration options and enums used to customize
/// how a matrix is rendered to a LaTeX math-mode fragment.
use super::rounding::RoundingMode;

/// Configuration options for LaTeX rendering.
///
/// This struct controls rounding precision, column alignment, math
/// delimiters, and indentation of the emitted fragment.
///
/// # Examples
///
/// ```rust
/// use longan::{Alignment, LatexOptions, MathStyle};
///
/// // Create with defaults
/// let options = LatexOptions::default();
///
/// // Or customize
/// let options = LatexOptions::new()
///     .with_precision(3)
///     .with_alignment(Alignment::Center)
///     .with_math_style(MathStyle::LaTeX);
/// ```
#[derive(Debug, Clone)]
pub struct LatexOptions {
    /// Decimal places every element is rounded to before rendering
    pub precision: u32,
    /// Tie-breaking rule for the rounding step
    pub rounding: RoundingMode,
    /// Column alignment in the emitted `array` environment
    pub alignment: Alignment,
    /// Display-math delimiters wrapped around the fragment
    pub math_style: MathStyle,
    /// Spaces per nesting level inside the fragment
    pub indent: usize,
}

impl Default for LatexOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            rounding: RoundingMode::HalfToEven,
            alignment: Alignment::Right,
            math_style: MathStyle::Dollar,
            indent: 3,
        }
    }
}

impl LatexOptions {
    /// Create a new `LatexOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decimal places elements are rounded to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::LatexOptions;
    ///
    /// let options = LatexOptions::new().with_precision(4);
    /// ```
    #[inline]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Set the tie-breaking rule for the rounding step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::{LatexOptions, RoundingMode};
    ///
    /// let options = LatexOptions::new().with_rounding(RoundingMode::HalfAwayFromZero);
    /// ```
    #[inline]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the column alignment of the `array` environment.
    #[inline]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the display-math delimiter style.
    #[inline]
    pub fn with_math_style(mut self, math_style: MathStyle) -> Self {
        self.math_style = math_style;
        self
    }

    /// Set the indentation per nesting level (number of spaces).
    #[inline]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Column alignment inside the `array` environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left-aligned columns (`l`)
    Left,
    /// Centered columns (`c`)
    Center,
    /// Right-aligned columns (`r`), the conventional choice for numbers
    #[default]
    Right,
}

impl Alignment {
    /// The LaTeX column-spec character for this alignment.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Center => 'c',
            Alignment::Right => 'r',
        }
    }
}

/// Display-math delimiter styles.
///
/// Determines how the fragment is wrapped for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MathStyle {
    /// Wrap in `$$ ... $$` on their own lines.
    ///
    /// Understood by notebook renderers such as MathJax and KaTeX.
    #[default]
    Dollar,

    /// Wrap in `\[ ... \]` on their own lines, the LaTeX-native form.
    LaTeX,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_options_builder() {
        let options = LatexOptions::new()
            .with_precision(3)
            .with_rounding(RoundingMode::HalfAwayFromZero)
            .with_alignment(Alignment::Center)
            .with_math_style(MathStyle::LaTeX)
            .with_indent(2);

        assert_eq!(options.precision, 3);
        assert_eq!(options.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(options.alignment, Alignment::Center);
        assert_eq!(options.math_style, MathStyle::LaTeX);
        assert_eq!(options.indent, 2);
    }

    #[test]
    fn test_latex_options_default() {
        let options = LatexOptions::default();
        assert_eq!(options.precision, 2);
        assert_eq!(options.rounding, RoundingMode::HalfToEven);
        assert_eq!(options.alignment, Alignment::Right);
        assert_eq!(options.math_style, MathStyle::Dollar);
        assert_eq!(options.indent, 3);
    }

    #[test]
    fn test_alignment_chars() {
        assert_eq!(Alignment::Left.as_char(), 'l');
        assert_eq!(Alignment::Center.as_char(), 'c');
        assert_eq!(Alignment::Right.as_char(), 'r');
    }
}
