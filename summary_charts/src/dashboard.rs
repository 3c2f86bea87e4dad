//! Renders every chart of the saved query summary page in one pass.

use crate::bar::{bar_container_id, build_grouped_bar_series, field_chart, ChartSeries};
use crate::counts::{DashboardInput, MetadataKind};
use crate::layout::{ChartStyle, StackingMode};
use crate::pie::{build_simple_pie, PieCategory};
use crate::render::{ChartCollection, ChartRenderer};
use crate::summary_table::SummaryTable;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Read the summary page input written by the query factory.
pub fn read_dashboard_input(path: &Path) -> Result<DashboardInput> {
    let file = File::open(path).with_context(|| format!("While opening {path:?}"))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("While parsing summary statistics from {path:?}"))
}

/// Render the four category pies, then a stacked and a grouped bar chart for
/// every harmonised numeric, text and datetime field. Returns the number of
/// charts rendered.
pub fn render_dashboard(
    input: &DashboardInput,
    style: &ChartStyle,
    renderer: &mut impl ChartRenderer,
) -> Result<usize> {
    let stats = &input.saved_query_summary_stats;
    let mut num_charts = 0;

    for category in PieCategory::ALL {
        let colors = category.is_colored().then_some(&input.project_colours);
        let pie = build_simple_pie(
            category.counts(stats),
            colors,
            category.title(),
            &style.fallback_color,
        );
        debug!("{}: {} slices", category.container_id(), pie.values.len());
        renderer.render(category.container_id(), pie.to_chart(style)?)?;
        num_charts += 1;
    }

    for kind in MetadataKind::ALL {
        let grouped = kind.counts(stats);
        for field_name in grouped.keys() {
            let series = build_grouped_bar_series(
                grouped,
                &input.project_colours,
                field_name,
                &style.fallback_color,
            );
            num_charts += render_field(kind, field_name, &series, style, renderer)?;
        }
    }

    info!("rendered {num_charts} summary charts");
    Ok(num_charts)
}

/// Draw one field's series into its stacked and its grouped container.
fn render_field(
    kind: MetadataKind,
    field_name: &str,
    series: &[ChartSeries],
    style: &ChartStyle,
    renderer: &mut impl ChartRenderer,
) -> Result<usize> {
    for mode in StackingMode::ALL {
        let container = bar_container_id(kind, field_name, mode);
        debug!("{container}: {} series", series.len());
        renderer.render(&container, field_chart(kind, field_name, series, mode, style)?)?;
    }
    Ok(StackingMode::ALL.len())
}

/// The summary page content: headline table plus every chart by container.
#[derive(Debug, Serialize)]
pub struct RenderedDashboard {
    pub summary_table: SummaryTable,
    pub charts: ChartCollection,
}

impl RenderedDashboard {
    pub fn build(input: &DashboardInput, style: &ChartStyle) -> Result<Self> {
        let mut charts = ChartCollection::default();
        render_dashboard(input, style, &mut charts)?;
        Ok(RenderedDashboard {
            summary_table: SummaryTable::from(&input.saved_query_summary_stats),
            charts,
        })
    }

    pub fn write_json(&self, writer: impl Write, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_json::to_writer(writer, self)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlotlyChart;
    use serde_json::json;

    fn input() -> DashboardInput {
        serde_json::from_str(
            r##"{
                "saved_query_summary_stats": {
                    "number_of_sample_assays": 8,
                    "project_counts": {"ProjectA": 3, "ProjectB": 5},
                    "assay_counts": {"LPOS": 6, "HPOS": 2},
                    "sample_matrix_counts": {"plasma": 8},
                    "sample_type_counts": {},
                    "metadata_counts_harmonised_numeric_by_project": {
                        "Age": {
                            "ProjectA": {"20-30": 4, "30-40": 2},
                            "ProjectB": {"20-30": 1}
                        }
                    },
                    "metadata_counts_harmonised_text_by_project": {
                        "Sex": {"ProjectB": {"male": 3, "female": 2}},
                        "Is smoker?": {"ProjectA": {"yes": 1}}
                    }
                },
                "project_colours": {"ProjectA": "#ff0000", "ProjectB": "#00ff00"}
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_render_order() {
        let mut charts = ChartCollection::default();
        let n = render_dashboard(&input(), &ChartStyle::default(), &mut charts).unwrap();
        assert_eq!(n, 4 + 2 * 3);
        assert_eq!(
            charts.containers().collect::<Vec<_>>(),
            [
                "pie_chart_one",
                "pie_chart_two",
                "pie_chart_three",
                "pie_chart_four",
                "metadata_harmonised_numeric_by_project_Age_stack",
                "metadata_harmonised_numeric_by_project_Age_group",
                "metadata_harmonised_text_by_project_Sex_stack",
                "metadata_harmonised_text_by_project_Sex_group",
                "metadata_harmonised_text_by_project_Is smoker?_stack",
                "metadata_harmonised_text_by_project_Is smoker?_group",
            ]
        );
    }

    #[test]
    fn test_only_project_pie_is_colored() {
        let mut charts = ChartCollection::default();
        render_dashboard(&input(), &ChartStyle::default(), &mut charts).unwrap();

        let project_pie = &charts.get("pie_chart_one").unwrap().data[0];
        assert_eq!(project_pie["values"], json!([3, 5]));
        assert_eq!(project_pie["labels"], json!(["ProjectA", "ProjectB"]));
        assert_eq!(project_pie["marker"]["colors"], json!(["#ff0000", "#00ff00"]));

        let assay_pie = &charts.get("pie_chart_two").unwrap().data[0];
        assert_eq!(assay_pie["labels"], json!(["LPOS", "HPOS"]));
        assert!(assay_pie.get("marker").is_none());

        let empty_pie = &charts.get("pie_chart_four").unwrap().data[0];
        assert_eq!(empty_pie["values"], json!([]));
    }

    #[test]
    fn test_stacked_and_grouped_get_same_data() {
        let mut charts = ChartCollection::default();
        render_dashboard(&input(), &ChartStyle::default(), &mut charts).unwrap();
        let stacked = charts
            .get("metadata_harmonised_numeric_by_project_Age_stack")
            .unwrap();
        let grouped = charts
            .get("metadata_harmonised_numeric_by_project_Age_group")
            .unwrap();
        assert_eq!(stacked.data, grouped.data);
        assert_eq!(stacked.data.len(), 2);
        assert_eq!(stacked.data[1]["marker"]["color"], json!("#00ff00"));
        assert_eq!(
            grouped.layout["title"]["text"],
            json!("Harmonised Numeric Metadata Age counts by project (grouped)")
        );
    }

    #[test]
    fn test_similar_field_names_render_separately() {
        let mut input = input();
        let text = &mut input
            .saved_query_summary_stats
            .metadata_counts_harmonised_text_by_project;
        let smoker = text["Is smoker?"].clone();
        text.insert("Is smoker".to_string(), smoker);

        let dashboard = RenderedDashboard::build(&input, &ChartStyle::default()).unwrap();
        assert_eq!(dashboard.charts.len(), 4 + 2 * 4);
        for container in [
            "metadata_harmonised_text_by_project_Is smoker?_stack",
            "metadata_harmonised_text_by_project_Is smoker_stack",
            "metadata_harmonised_text_by_project_Is smoker_group",
        ] {
            assert!(dashboard.charts.get(container).is_some(), "{container}");
        }
    }

    /// Renderer that fails after accepting a fixed number of charts.
    struct FailingRenderer {
        remaining: usize,
    }

    impl ChartRenderer for FailingRenderer {
        fn render(&mut self, container: &str, _chart: PlotlyChart) -> Result<()> {
            if self.remaining == 0 {
                anyhow::bail!("no room for {container}");
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_renderer_error_stops_rendering() {
        let mut renderer = FailingRenderer { remaining: 5 };
        let err = render_dashboard(&input(), &ChartStyle::default(), &mut renderer).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no room for metadata_harmonised_numeric_by_project_Age_group"
        );
    }

    #[test]
    fn test_read_dashboard_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"saved_query_summary_stats": {{"assay_counts": {{"LPOS": 2}}}}}}"#
        )
        .unwrap();
        let input = read_dashboard_input(file.path()).unwrap();
        assert_eq!(input.saved_query_summary_stats.assay_counts["LPOS"], 2);
        assert_eq!(input.project_colours.get("ProjectA"), None);
    }

    #[test]
    fn test_read_malformed_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"saved_query_summary_stats": {{"assay_counts": [1, 2]}}}}"#).unwrap();
        let err = read_dashboard_input(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("While parsing summary statistics"));

        let missing = file.path().with_extension("missing");
        assert!(read_dashboard_input(&missing).is_err());
    }

    #[test]
    fn test_rendered_dashboard_json() {
        let dashboard = RenderedDashboard::build(&input(), &ChartStyle::default()).unwrap();
        let mut buf = Vec::new();
        dashboard.write_json(&mut buf, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["summary_table"]["rows"], json!([["Sample Assays", "8"]]));
        assert_eq!(value["charts"].as_object().unwrap().len(), 10);
        assert_eq!(
            value["charts"]["pie_chart_three"]["config"]["toImageButtonOptions"]["filename"],
            json!("SampleAssay_counts_by_sample_matrix")
        );
    }
}
