//!
//! Precomputed summary statistics of a saved query, as handed over by the
//! query factory.
//!
#![deny(missing_docs)]

use crate::colors::ColorAssignment;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Label -> count, in the order the labels were produced upstream.
pub type AggregateCount = IndexMap<String, u64>;

/// Project -> metadata value -> count, for a single metadata field.
pub type ProjectValueCounts = IndexMap<String, AggregateCount>;

/// Metadata field -> project -> metadata value -> count.
pub type GroupedMetadataCounts = IndexMap<String, ProjectValueCounts>;

/// The value type of a harmonised metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// Harmonised numeric values
    Numeric,
    /// Harmonised text values
    Text,
    /// Harmonised datetime values
    Datetime,
}

impl MetadataKind {
    /// Every kind, in the order they appear on the summary page.
    pub const ALL: [MetadataKind; 3] = [
        MetadataKind::Numeric,
        MetadataKind::Text,
        MetadataKind::Datetime,
    ];

    /// Capitalized name used in chart titles.
    pub fn title_name(self) -> &'static str {
        match self {
            MetadataKind::Numeric => "Numeric",
            MetadataKind::Text => "Text",
            MetadataKind::Datetime => "Datetime",
        }
    }

    /// The grouped counts of this kind.
    pub fn counts(self, stats: &SummaryStatistics) -> &GroupedMetadataCounts {
        match self {
            MetadataKind::Numeric => &stats.metadata_counts_harmonised_numeric_by_project,
            MetadataKind::Text => &stats.metadata_counts_harmonised_text_by_project,
            MetadataKind::Datetime => &stats.metadata_counts_harmonised_datetime_by_project,
        }
    }
}

impl Display for MetadataKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataKind::Numeric => write!(f, "numeric"),
            MetadataKind::Text => write!(f, "text"),
            MetadataKind::Datetime => write!(f, "datetime"),
        }
    }
}

/// Summary statistics of the sample assays matched by a saved query.
///
/// Count maps that are absent upstream deserialize as empty. Keys the charts
/// do not use (raw and unsplit harmonised counts) are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummaryStatistics {
    /// Number of sample assays matched by the query.
    pub number_of_sample_assays: Option<u64>,
    /// Number of distinct samples.
    pub number_samples: Option<u64>,
    /// Number of distinct subjects.
    pub number_subjects: Option<u64>,
    /// Number of annotated features.
    pub number_of_annotated_features: Option<u64>,
    /// Smallest number of annotated features of any subject.
    pub min_annotated_feature_count: Option<u64>,
    /// Sample assays per project.
    pub project_counts: AggregateCount,
    /// Sample assays per assay.
    pub assay_counts: AggregateCount,
    /// Sample assays per sample matrix.
    pub sample_matrix_counts: AggregateCount,
    /// Sample assays per sample type.
    pub sample_type_counts: AggregateCount,
    /// Harmonised numeric metadata counts, by field then project.
    pub metadata_counts_harmonised_numeric_by_project: GroupedMetadataCounts,
    /// Harmonised text metadata counts, by field then project.
    pub metadata_counts_harmonised_text_by_project: GroupedMetadataCounts,
    /// Harmonised datetime metadata counts, by field then project.
    pub metadata_counts_harmonised_datetime_by_project: GroupedMetadataCounts,
}

/// Everything the summary page is rendered from.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DashboardInput {
    /// Statistics of the saved query.
    pub saved_query_summary_stats: SummaryStatistics,
    /// Chart colour of every project.
    #[serde(default)]
    pub project_colours: ColorAssignment,
}
