//! Plotting observer for visualizing integrations.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use attractor_core::{Observer, Trajectory};
use attractor_solvers::transient::dormand_prince;
use eframe::egui;
use egui_plot::{Arrows, Legend, Line, Plot, PlotPoints};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Lorenz").legend().equal_axes())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    equal_axes: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, linear
    /// scale, free aspect ratio.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
            equal_axes: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// Non-positive y values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Draws one unit on the x-axis as long as one unit on the y-axis, so
    /// circles in phase space look like circles.
    #[must_use]
    pub fn equal_axes(mut self) -> Self {
        self.equal_axes = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What to draw along one axis when plotting a [`Trajectory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The sample time.
    Time,
    /// One coordinate of the state.
    Coordinate(usize),
}

impl Axis {
    fn project(self, t: f64, state: &[f64]) -> f64 {
        match self {
            Self::Time => t,
            Self::Coordinate(i) => state[i],
        }
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on an event type to pass [`PlotObserver`] directly as a
/// solver observer. Return `None` from [`x`][Plottable::x] to skip the event
/// entirely; return `None` in a trace slot to skip that trace for the event.
///
/// [`dormand_prince::Event`] implements `Plottable<1>` as a step-size history:
/// each accepted step records `|h|` against the time it reached.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<1> for dormand_prince::Event<'_> {
    fn x(&self) -> Option<f64> {
        match self {
            Self::Accepted { t, .. } => Some(*t),
            Self::Rejected { .. } | Self::Sampled { .. } => None,
        }
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [self.step_size().map(f64::abs)]
    }
}

/// An observer that collects trace data during integration and displays it
/// via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names. Record data by either:
///
/// - **Direct path** — pass `&mut PlotObserver` as the solver observer when
///   the event type implements [`Plottable<N>`][Plottable].
/// - **Manual path** — call [`record`][PlotObserver::record],
///   [`record_point`][PlotObserver::record_point], or
///   [`record_trajectory`][PlotObserver::record_trajectory] from a closure or
///   after a solve completes.
///
/// # Example — step sizes
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["|h|"]);
/// dormand_prince::solve(&Lorenz, &[1.0, 1.0, 1.0], &times, &params, &config, &mut obs)?;
/// obs.show(ShowConfig::new().title("Lorenz step sizes").log_y())?;
/// ```
///
/// # Example — phase portrait
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["from (0.5, 0.5)", "from (1, -0.5)"]);
/// for (trace, trajectory) in trajectories.iter().enumerate() {
///     obs.record_trajectory(trace, trajectory, Axis::Coordinate(0), Axis::Coordinate(1));
/// }
/// obs.show(ShowConfig::new().equal_axes())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
    arrows: Vec<ArrowLayer>,
}

/// A named set of arrows drawn from `origins[i]` to `tips[i]`.
struct ArrowLayer {
    name: String,
    origins: Vec<[f64; 2]>,
    tips: Vec<[f64; 2]>,
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
            arrows: Vec::new(),
        }
    }

    /// Records a single x value across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Appends a point to a single trace.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    pub fn record_point(&mut self, trace: usize, point: [f64; 2]) {
        self.data[trace].push(point);
    }

    /// Appends every sample of `trajectory` to `trace`, projected onto the
    /// `x` and `y` axes.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N` or a coordinate axis is out of range for the
    /// trajectory's dimension.
    pub fn record_trajectory(&mut self, trace: usize, trajectory: &Trajectory, x: Axis, y: Axis) {
        let points = trajectory
            .iter()
            .map(|(t, state)| [x.project(t, state), y.project(t, state)]);
        self.data[trace].extend(points);
    }

    /// Adds a layer of arrows, each given as an `(origin, tip)` pair.
    ///
    /// Arrow layers are drawn beneath the traces, as in a quiver plot of a
    /// direction field.
    pub fn record_arrows(
        &mut self,
        name: &str,
        arrows: impl IntoIterator<Item = ([f64; 2], [f64; 2])>,
    ) {
        let (origins, tips) = arrows.into_iter().unzip();
        self.arrows.push(ArrowLayer {
            name: name.to_owned(),
            origins,
            tips,
        });
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();
        let arrows = self.arrows;

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    arrows,
                    legend: config.legend,
                    log_y: config.log_y,
                    equal_axes: config.equal_axes,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    arrows: Vec<ArrowLayer>,
    legend: bool,
    log_y: bool,
    equal_axes: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            if self.equal_axes {
                plot = plot.data_aspect(1.0);
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for layer in &self.arrows {
                    plot_ui.arrows(
                        Arrows::new(layer.origins.clone(), layer.tips.clone()).name(&layer.name),
                    );
                }
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = if log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.iter().copied().collect()
                    };
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
