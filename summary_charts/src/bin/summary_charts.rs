//! summary_charts
#![deny(missing_docs)]

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use summary_charts::dashboard::{read_dashboard_input, RenderedDashboard};
use summary_charts::layout::ChartStyle;

#[derive(Debug, Parser)]
enum Args {
    /// Build the summary charts of a saved query.
    Render {
        /// JSON file with `saved_query_summary_stats` and `project_colours`.
        input: PathBuf,
        /// Write the charts here instead of stdout.
        #[clap(long)]
        output: Option<PathBuf>,
        /// Indent the output JSON.
        #[clap(long)]
        pretty: bool,
    },
}

/// Chart style, with any overrides from chart_parameters.toml.
fn chart_style() -> Result<ChartStyle> {
    Ok(ChartStyle {
        width: *chart_parameters::chart_width()?,
        height: *chart_parameters::chart_height()?,
        title_font_family: chart_parameters::title_font_family()?.to_string(),
        title_font_size: *chart_parameters::title_font_size()?,
        title_x: *chart_parameters::title_x()?,
        fallback_color: chart_parameters::fallback_color()?.to_string(),
    })
}

fn main() -> Result<()> {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    match Args::parse() {
        Args::Render {
            input,
            output,
            pretty,
        } => {
            let dashboard_input = read_dashboard_input(&input)?;
            let dashboard = RenderedDashboard::build(&dashboard_input, &chart_style()?)?;
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("While creating {path:?}"))?;
                    let mut writer = BufWriter::new(file);
                    dashboard.write_json(&mut writer, pretty)?;
                    writer.flush()?;
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    dashboard.write_json(&mut stdout, pretty)?;
                    writeln!(stdout)?;
                }
            }
        }
    }
    Ok(())
}
