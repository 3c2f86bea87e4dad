use crate::colors::ColorAssignment;
use crate::counts::{GroupedMetadataCounts, MetadataKind};
use crate::layout::{ChartStyle, StackingMode};
use crate::{ChartError, PlotlyChart};
use plotly::common::Marker;
use plotly::Bar;

/// Metadata value counts of one project for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    /// Project name, shown in the legend
    pub name: String,
    /// Metadata values
    pub x: Vec<String>,
    /// Count of each metadata value
    pub y: Vec<u64>,
    pub color: String,
}

impl ChartSeries {
    pub fn trace(&self) -> Box<Bar<String, u64>> {
        Bar::new(self.x.clone(), self.y.clone())
            .name(self.name.as_str())
            .marker(Marker::new().color(self.color.clone()))
    }
}

/// One series per project recorded for `field_name`, in upstream order. An
/// unknown field has no series.
pub fn build_grouped_bar_series(
    grouped: &GroupedMetadataCounts,
    colors: &ColorAssignment,
    field_name: &str,
    fallback_color: &str,
) -> Vec<ChartSeries> {
    let Some(projects) = grouped.get(field_name) else {
        return Vec::new();
    };
    projects
        .iter()
        .map(|(project, values)| {
            let (x, y) = values
                .iter()
                .map(|(value, &count)| (value.clone(), count))
                .unzip();
            ChartSeries {
                name: project.clone(),
                x,
                y,
                color: colors.resolve(project, fallback_color),
            }
        })
        .collect()
}

/// Container of one field's chart. The field name is used verbatim, matching
/// the containers the summary page lays out.
pub fn bar_container_id(kind: MetadataKind, field_name: &str, mode: StackingMode) -> String {
    format!(
        "metadata_harmonised_{kind}_by_project_{field_name}_{}",
        mode.as_str()
    )
}

pub fn bar_title(kind: MetadataKind, field_name: &str, mode: StackingMode) -> String {
    format!(
        "Harmonised {} Metadata {field_name} counts by project ({})",
        kind.title_name(),
        mode.title_suffix()
    )
}

pub fn field_chart(
    kind: MetadataKind,
    field_name: &str,
    series: &[ChartSeries],
    mode: StackingMode,
    style: &ChartStyle,
) -> Result<PlotlyChart, ChartError> {
    let title = bar_title(kind, field_name, mode);
    let layout = style.layout(&title, Some(mode));
    let traces: Vec<_> = series.iter().map(ChartSeries::trace).collect();
    PlotlyChart::with_layout_and_data(&title, &layout, &traces)
}
