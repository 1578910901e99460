use wheelpose_ui_graphics::{FontWeight, Size, TextStyle};

/// Measured size of a single label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    /// Number of lines in the label
    pub line_count: usize,
}

impl LabelLayout {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Text measurement supplied by the host renderer.
///
/// Results are cached by text, resolved font size, weight and family only.
/// A measurer must not read any other [`TextStyle`] field (line height,
/// letter spacing, font style), or a shared [`LabelCache`] will hand one
/// style's layout to another.
///
/// [`LabelCache`]: crate::text::LabelCache
pub trait LabelMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> LabelLayout;
}

impl<F> LabelMeasurer for F
where
    F: Fn(&str, &TextStyle) -> LabelLayout,
{
    fn measure(&self, text: &str, style: &TextStyle) -> LabelLayout {
        self(text, style)
    }
}

/// Fixed-advance measurer for headless use and tests.
///
/// Every character advances by a fraction of the font size; bold weights are
/// slightly wider. Line height is always 1.4 times the font size.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedLabelMeasurer;

impl MonospacedLabelMeasurer {
    const ADVANCE_RATIO: f32 = 0.6;
    const BOLD_ADVANCE_RATIO: f32 = 0.65;
    const LINE_HEIGHT_RATIO: f32 = 1.4;
}

impl LabelMeasurer for MonospacedLabelMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> LabelLayout {
        let font_size = style.resolved_font_size();
        let advance_ratio = match style.font_weight {
            Some(weight) if weight >= FontWeight::SEMI_BOLD => Self::BOLD_ADVANCE_RATIO,
            _ => Self::ADVANCE_RATIO,
        };
        let advance = font_size * advance_ratio;
        let line_height = font_size * Self::LINE_HEIGHT_RATIO;

        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);
        let width = lines
            .iter()
            .map(|line| line.chars().count() as f32 * advance)
            .fold(0.0_f32, f32::max);

        LabelLayout {
            width,
            height: line_count as f32 * line_height,
            line_height,
            line_count,
        }
    }
}
