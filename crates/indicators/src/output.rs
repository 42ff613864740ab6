use serde::{Deserialize, Serialize};

/// One labelled line of an indicator result, aligned to the input bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl NamedSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Uniform result shape produced by the config layer for overlay consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorOutput {
    pub name: String,
    pub lines: Vec<NamedSeries>,
}

impl IndicatorOutput {
    /// Look up a line by label.
    pub fn line(&self, label: &str) -> Option<&[f64]> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.values.as_slice())
    }
}

/// Flatten an indicator's typed output into labelled lines.
pub trait IntoLines {
    fn into_lines(self) -> Vec<NamedSeries>;
}

impl IntoLines for Vec<f64> {
    fn into_lines(self) -> Vec<NamedSeries> {
        vec![NamedSeries::new("value", self)]
    }
}
