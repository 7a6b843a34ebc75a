//! Reusable observers for attractor solvers.
//!
//! This crate provides capability traits that let one [`Observer`] work with
//! both the adaptive and the fixed-step integrator, plus an optional plotting
//! observer.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasTime`], [`HasState`], [`HasStepSize`], [`CanStopEarly`])
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for charting step sizes, time series,
//!   and phase portraits via egui. This feature adds dependencies on `eframe`
//!   and `egui_plot`.
//!
//! [`Observer`]: attractor_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`HasStepSize`]: traits::HasStepSize
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{Axis, PlotObserver, Plottable, ShowConfig};
