//! Plot series construction
//!
//! Turns a transfer function's response sequences into labeled, owned
//! series for whatever plotting backend the caller uses. No rendering
//! happens here; the series are plain data.

use crate::analysis::TransferFunction;

/// The fixed set of response views a filter can be plotted as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    /// Gain (dB) against frequency, linear axis
    NormalizedFrequency,
    /// Gain (dB) against frequency, logarithmic frequency axis
    FrequencyLog,
    /// Gain (dB) against period (samples/cycle), logarithmic period axis
    PeriodLog,
    /// Unwrapped phase (radians) against frequency
    Phase,
    /// Group delay (samples) against frequency
    GroupDelay,
}

impl PlotKind {
    /// All plot kinds, in presentation order
    pub const ALL: [PlotKind; 5] = [
        PlotKind::NormalizedFrequency,
        PlotKind::FrequencyLog,
        PlotKind::PeriodLog,
        PlotKind::Phase,
        PlotKind::GroupDelay,
    ];

    /// Fixed per-kind title suffix, appended to the filter name
    pub fn title_suffix(&self) -> &'static str {
        match self {
            PlotKind::NormalizedFrequency => "Normalized Frequency Response",
            PlotKind::FrequencyLog => "Frequency Response",
            PlotKind::PeriodLog => "Period Response",
            PlotKind::Phase => "Phase Response",
            PlotKind::GroupDelay => "Group Delay",
        }
    }
}

/// Axis scaling hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    LogX,
}

/// One labeled x/y series, ready for a renderer
///
/// Owned snapshot of the response data: the series stays valid after the
/// transfer function is dropped. Non-finite samples (infinite period at DC,
/// -inf dB at a null) are carried through unchanged; renderers are expected
/// to skip or clip them.
#[derive(Debug, Clone)]
pub struct PlotSeries {
    /// Filter name plus the per-kind suffix
    pub title: String,

    pub x_label: &'static str,
    pub y_label: &'static str,
    pub scale: AxisScale,

    pub x: Vec<f64>,
    pub y: Vec<f64>,

    /// Literal tick overrides; `None` leaves tick placement to the renderer
    pub x_ticks: Option<Vec<f64>>,
    pub y_ticks: Option<Vec<f64>>,
}

/// Build the series for one plot kind
pub fn plot_series(filter: &TransferFunction, kind: PlotKind) -> PlotSeries {
    let response = filter.response();
    let title = format!("{} {}", filter.name(), kind.title_suffix());

    match kind {
        PlotKind::NormalizedFrequency => PlotSeries {
            title,
            x_label: "Frequency (cycles/sample)",
            y_label: "Gain (dB)",
            scale: AxisScale::Linear,
            x: response.frequency().to_vec(),
            y: response.magnitude_db().to_vec(),
            x_ticks: None,
            y_ticks: None,
        },
        PlotKind::FrequencyLog => PlotSeries {
            title,
            x_label: "Frequency (cycles/sample)",
            y_label: "Gain (dB)",
            scale: AxisScale::LogX,
            x: response.frequency().to_vec(),
            y: response.magnitude_db().to_vec(),
            x_ticks: None,
            y_ticks: None,
        },
        PlotKind::PeriodLog => PlotSeries {
            title,
            x_label: "Period (samples/cycle)",
            y_label: "Gain (dB)",
            scale: AxisScale::LogX,
            x: response.period().to_vec(),
            y: response.magnitude_db().to_vec(),
            x_ticks: Some(vec![10.0, 20.0, 30.0, 40.0, 50.0]),
            y_ticks: Some(vec![-40.0, -20.0, -10.0, -3.0, 0.0]),
        },
        PlotKind::Phase => PlotSeries {
            title,
            x_label: "Frequency (cycles/sample)",
            y_label: "Angle (radians)",
            scale: AxisScale::Linear,
            x: response.frequency().to_vec(),
            y: response.phase().to_vec(),
            x_ticks: None,
            y_ticks: None,
        },
        PlotKind::GroupDelay => PlotSeries {
            title,
            x_label: "Frequency (cycles/sample)",
            y_label: "Group delay (samples)",
            scale: AxisScale::Linear,
            x: response.frequency().to_vec(),
            y: response.group_delay().to_vec(),
            x_ticks: None,
            y_ticks: None,
        },
    }
}

/// Build series for a list of plot kinds, in the given order
pub fn plot_set(filter: &TransferFunction, kinds: &[PlotKind]) -> Vec<PlotSeries> {
    kinds.iter().map(|&kind| plot_series(filter, kind)).collect()
}
