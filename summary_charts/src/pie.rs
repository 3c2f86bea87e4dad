use crate::colors::ColorAssignment;
use crate::counts::{AggregateCount, SummaryStatistics};
use crate::layout::ChartStyle;
use crate::{ChartError, PlotlyChart};
use serde::Serialize;

/// The sample assay categories that get a pie chart each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieCategory {
    Project,
    Assay,
    SampleMatrix,
    SampleType,
}

impl PieCategory {
    pub const ALL: [PieCategory; 4] = [
        PieCategory::Project,
        PieCategory::Assay,
        PieCategory::SampleMatrix,
        PieCategory::SampleType,
    ];

    pub fn container_id(self) -> &'static str {
        match self {
            PieCategory::Project => "pie_chart_one",
            PieCategory::Assay => "pie_chart_two",
            PieCategory::SampleMatrix => "pie_chart_three",
            PieCategory::SampleType => "pie_chart_four",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PieCategory::Project => "SampleAssay counts by project",
            PieCategory::Assay => "SampleAssay counts by assay",
            PieCategory::SampleMatrix => "SampleAssay counts by sample matrix",
            PieCategory::SampleType => "SampleAssay counts by sample type",
        }
    }

    /// Only project slices have an assigned colour.
    pub fn is_colored(self) -> bool {
        self == PieCategory::Project
    }

    pub fn counts(self, stats: &SummaryStatistics) -> &AggregateCount {
        match self {
            PieCategory::Project => &stats.project_counts,
            PieCategory::Assay => &stats.assay_counts,
            PieCategory::SampleMatrix => &stats.sample_matrix_counts,
            PieCategory::SampleType => &stats.sample_type_counts,
        }
    }
}

/// Slices of a pie chart. `values`, `labels` and `colors` are index aligned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieChartInput {
    pub title: String,
    pub values: Vec<u64>,
    pub labels: Vec<String>,
    pub colors: Option<Vec<String>>,
}

#[derive(Serialize)]
struct PieMarker<'a> {
    colors: &'a [String],
}

/// Plotly pie trace borrowing from a [`PieChartInput`].
#[derive(Serialize)]
pub struct PieTrace<'a> {
    #[serde(rename = "type")]
    trace_type: &'static str,
    values: &'a [u64],
    labels: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<PieMarker<'a>>,
}

impl PieChartInput {
    pub fn trace(&self) -> PieTrace<'_> {
        PieTrace {
            trace_type: "pie",
            values: &self.values,
            labels: &self.labels,
            marker: self.colors.as_deref().map(|colors| PieMarker { colors }),
        }
    }

    pub fn to_chart(&self, style: &ChartStyle) -> Result<PlotlyChart, ChartError> {
        let layout = style.layout(&self.title, None);
        PlotlyChart::with_layout_and_data(&self.title, &layout, &[self.trace()])
    }
}

/// One slice per label, in the order of `counts`. When `colors` is given every
/// slice gets a colour, falling back to `fallback_color` for unassigned labels.
pub fn build_simple_pie(
    counts: &AggregateCount,
    colors: Option<&ColorAssignment>,
    title: &str,
    fallback_color: &str,
) -> PieChartInput {
    let (labels, values) = counts
        .iter()
        .map(|(label, &count)| (label.clone(), count))
        .unzip();
    let colors = colors.map(|colors| {
        counts
            .keys()
            .map(|label| colors.resolve(label, fallback_color))
            .collect()
    });
    PieChartInput {
        title: title.to_string(),
        values,
        labels,
        colors,
    }
}
