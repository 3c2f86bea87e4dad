#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("A chart was already rendered into the container '{container}'")]
    DuplicateContainer { container: String },

    #[error("Could not serialize chart for plotly")]
    Serialize(#[from] serde_json::Error),
}
