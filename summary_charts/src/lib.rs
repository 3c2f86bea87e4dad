//! summary_charts
//!
//! Builds the Plotly charts of a saved query summary: one pie per sample
//! assay category, and a stacked plus a grouped bar chart for every harmonised
//! metadata field, with one bar series per project.

pub mod bar;
pub mod colors;
pub mod counts;
pub mod dashboard;
mod error;
pub mod layout;
pub mod pie;
pub mod render;
pub mod summary_table;

pub use error::ChartError;

use plotly::Layout;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::{Display, Formatter};
use thousands::Separable;

/// A preformatted metric, as shown in a table cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrettyMetric(pub String);

impl Display for PrettyMetric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PrettyMetric {
    /// Integer with thousands separators.
    pub fn integer(src: u64) -> Self {
        PrettyMetric(src.separate_with_commas())
    }
}

/// One row of a table, every cell already formatted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableRow(pub Vec<String>);

impl TableRow {
    /// A `label | value` row.
    pub fn two_col(c1: impl ToString, c2: impl ToString) -> Self {
        TableRow(vec![c1.to_string(), c2.to_string()])
    }
}

impl From<Vec<String>> for TableRow {
    fn from(item: Vec<String>) -> Self {
        TableRow(item)
    }
}

/// A table with an optional header row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenericTable {
    /// Column headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Vec<String>>,
    /// Table body.
    pub rows: Vec<TableRow>,
}

/// Plotly config shared by every chart. The mode bar image export is switched
/// to SVG and named after the chart title.
pub fn plotly_config(title: &str) -> Value {
    json!({
        "responsive": true,
        "displaylogo": false,
        "modeBarButtonsToRemove": ["sendDataToCloud"],
        "toImageButtonOptions": {
            "format": "svg",
            "filename": export_file_name(title),
        },
    })
}

/// File name stem for an exported chart image.
pub fn export_file_name(title: &str) -> String {
    title
        .replace(':', "_")
        .replace("<br />", "_")
        .replace('/', "_")
        .replace(' ', "_")
}

/// Everything `Plotly.newPlot` needs besides the container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlotlyChart {
    /// Plot config (mode bar, export options).
    pub config: Value,
    /// Traces.
    pub data: Vec<Value>,
    /// Layout.
    pub layout: Value,
}

impl PlotlyChart {
    /// Serialize a layout and its traces into a chart titled `title`.
    pub fn with_layout_and_data<D: Serialize>(
        title: &str,
        layout: &Layout,
        data: &[D],
    ) -> Result<Self, ChartError> {
        Ok(PlotlyChart {
            config: plotly_config(title),
            data: data
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()?,
            layout: serde_json::to_value(layout)?,
        })
    }
}

/// Assert that two JSON strings hold the same value
#[cfg(test)]
pub(crate) fn check_eq_json(j1: &str, j2: &str) {
    pretty_assertions::assert_eq!(
        serde_json::from_str::<Value>(j1).unwrap(),
        serde_json::from_str::<Value>(j2).unwrap()
    );
}
