//! Read-only plot descriptions for an external rendering collaborator

pub mod series;

pub use series::{plot_series, plot_set, AxisScale, PlotKind, PlotSeries};
