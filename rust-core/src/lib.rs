//! Filter Workbench - Digital Filter Frequency Analysis Core
//!
//! Evaluates rational transfer functions on the unit circle and derives
//! magnitude, phase, group delay, and period responses for inspection.

pub mod analysis;
pub mod catalog;
pub mod plot;

pub use analysis::{AnalysisError, FrequencyResponse, TransferFunction};
pub use plot::{plot_series, plot_set, PlotKind, PlotSeries};
