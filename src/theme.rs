use gpui::*;

#[derive(Clone, Debug)]
pub struct FigureTheme {
    pub background: Hsla,
    pub legend_background: Hsla,
    pub legend_border: Hsla,
    pub legend_text: Hsla,
    pub legend_text_size: Pixels,
    /// Rubber-band rectangle shown while a region is being dragged.
    pub selection: Hsla,
}

impl Default for FigureTheme {
    fn default() -> Self {
        Self {
            background: gpui::white(),
            legend_background: gpui::white().alpha(0.85),
            legend_border: gpui::black().alpha(0.6),
            legend_text: gpui::black(),
            legend_text_size: px(11.0),
            selection: gpui::black(),
        }
    }
}
