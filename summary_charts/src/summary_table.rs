use crate::counts::SummaryStatistics;
use crate::{GenericTable, PrettyMetric, TableRow};
use serde::Serialize;

/// Headline numbers of a saved query. Rows are only shown for statistics the
/// query factory reported.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(into = "GenericTable")]
pub struct SummaryTable {
    pub num_sample_assays: Option<u64>,
    pub num_samples: Option<u64>,
    pub num_subjects: Option<u64>,
    pub num_annotated_features: Option<u64>,
    pub min_annotated_features_per_subject: Option<u64>,
}

impl From<&SummaryStatistics> for SummaryTable {
    fn from(stats: &SummaryStatistics) -> Self {
        SummaryTable {
            num_sample_assays: stats.number_of_sample_assays,
            num_samples: stats.number_samples,
            num_subjects: stats.number_subjects,
            num_annotated_features: stats.number_of_annotated_features,
            min_annotated_features_per_subject: stats.min_annotated_feature_count,
        }
    }
}

impl From<SummaryTable> for GenericTable {
    fn from(table: SummaryTable) -> GenericTable {
        let rows = [
            ("Sample Assays", table.num_sample_assays),
            ("Samples", table.num_samples),
            ("Subjects", table.num_subjects),
            ("Annotated Features", table.num_annotated_features),
            (
                "Min Annotated Features per Subject",
                table.min_annotated_features_per_subject,
            ),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value.map(|v| TableRow::two_col(name, PrettyMetric::integer(v)))
        })
        .collect();
        GenericTable { header: None, rows }
    }
}
