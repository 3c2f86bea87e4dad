use plotly::common::{Font, Reference, Title};
use plotly::layout::BarMode;
use plotly::Layout;

/// How the bar series of one chart share the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackingMode {
    /// Series are layered on top of each other
    Stack,
    /// Series are placed side by side
    Group,
}

impl StackingMode {
    pub const ALL: [StackingMode; 2] = [StackingMode::Stack, StackingMode::Group];

    /// Suffix of the container id
    pub fn as_str(self) -> &'static str {
        match self {
            StackingMode::Stack => "stack",
            StackingMode::Group => "group",
        }
    }

    /// Parenthesized word at the end of the chart title
    pub fn title_suffix(self) -> &'static str {
        match self {
            StackingMode::Stack => "stacked",
            StackingMode::Group => "grouped",
        }
    }
}

impl From<StackingMode> for BarMode {
    fn from(mode: StackingMode) -> BarMode {
        match mode {
            StackingMode::Stack => BarMode::Stack,
            StackingMode::Group => BarMode::Group,
        }
    }
}

/// Fixed presentation settings applied to every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub width: usize,
    pub height: usize,
    pub title_font_family: String,
    pub title_font_size: usize,
    /// Title offset from the left edge of the plotting area, as a fraction of its width.
    pub title_x: f64,
    /// Used for any label that has no colour assigned.
    pub fallback_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            width: 600,
            height: 600,
            title_font_family: "Droid Sans".to_string(),
            title_font_size: 16,
            title_x: 0.05,
            fallback_color: "#7f7f7f".to_string(),
        }
    }
}

impl ChartStyle {
    /// Layout titled `title`. The bar mode is only set when given, otherwise
    /// plotly's default applies.
    pub fn layout(&self, title: &str, bar_mode: Option<StackingMode>) -> Layout {
        let layout = Layout::new()
            .height(self.height)
            .width(self.width)
            .title(
                Title::from(title)
                    .font(
                        Font::new()
                            .family(self.title_font_family.as_str())
                            .size(self.title_font_size),
                    )
                    .x_ref(Reference::Paper)
                    .x(self.title_x),
            );
        match bar_mode {
            Some(mode) => layout.bar_mode(mode.into()),
            None => layout,
        }
    }
}

/// Layout in the default chart style.
pub fn build_layout(title: &str, bar_mode: Option<StackingMode>) -> Layout {
    ChartStyle::default().layout(title, bar_mode)
}
