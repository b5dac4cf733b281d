//! Closed-form constructors for commonly used filters

pub mod smoothers;
pub mod ehlers;

pub use smoothers::{
    exponential_smoother, first_order_high_pass_fir, first_order_low_pass_fir, moving_average,
    second_order_low_pass_fir,
};
pub use ehlers::{band_pass, butterworth, high_pass, supersmoother};
