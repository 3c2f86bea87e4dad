//!
//! Where finished charts go. The page that owns the containers decides how a
//! chart is drawn; this crate only names the container and hands over the chart.
//!

use crate::{ChartError, PlotlyChart};
use anyhow::Result;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// Receives every chart together with the id of the container it belongs in.
pub trait ChartRenderer {
    fn render(&mut self, container: &str, chart: PlotlyChart) -> Result<()>;
}

/// Keeps rendered charts in render order, keyed by container.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct ChartCollection(IndexMap<String, PlotlyChart>);

impl ChartCollection {
    pub fn get(&self, container: &str) -> Option<&PlotlyChart> {
        self.0.get(container)
    }

    pub fn containers(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ChartRenderer for ChartCollection {
    /// A container holds a single chart, so drawing twice into one is an error.
    fn render(&mut self, container: &str, chart: PlotlyChart) -> Result<()> {
        match self.0.entry(container.to_string()) {
            Entry::Occupied(_) => Err(ChartError::DuplicateContainer {
                container: container.to_string(),
            }
            .into()),
            Entry::Vacant(slot) => {
                slot.insert(chart);
                Ok(())
            }
        }
    }
}
