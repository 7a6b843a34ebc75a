//! Interactive visualizations of dynamical systems.
//!
//! Each mode integrates a classic system and opens an interactive plot window.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- lorenz
//! cargo run --example plot --features plot -- lorenz 35
//! cargo run --example plot --features plot -- steps
//! cargo run --example plot --features plot -- saddle
//! cargo run --example plot --features plot -- predator-prey
//! cargo run --example plot --features plot -- cycle
//! cargo run --example plot --features plot -- liapunov
//! ```
//!
//! # Modes
//!
//! - **lorenz [rho]** — The Lorenz attractor from (1, 1, 1) over t ∈ [0, 40],
//!   projected onto the x–z plane. Try ρ below 1 to watch it collapse onto
//!   the origin, or around 24 to see the onset of chaos.
//!
//! - **steps** — Step sizes chosen by the adaptive integrator along the same
//!   Lorenz trajectory, on a log scale.
//!
//! - **saddle** — Trajectories of `dx = 2x`, `dy = −y` around a hyperbolic point,
//!   over the direction field.
//!
//! - **predator-prey** — Closed Lotka–Volterra orbits with their nullclines and
//!   direction field.
//!
//! - **cycle** — Trajectories winding onto the Hopf limit cycle `r = 1`.
//!
//! - **liapunov** — Sink trajectories crossing level sets of `V = ½‖x‖²`.

use std::{error::Error, f64::consts::TAU};

use attractor_core::{Trajectory, VectorField, linspace};
use attractor_observers::{Axis, PlotObserver, ShowConfig};
use attractor_solvers::transient::{
    batch,
    dormand_prince::{self, Config, Sampling},
};
use attractor_systems::{
    Arrow, Hopf, Linear2, Lorenz, LorenzParams, LotkaVolterra, Nullcline, Quadratic,
    direction_field,
};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "lorenz".into());
    match mode.as_str() {
        "lorenz" => {
            let rho = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid rho, expected a number, e.g. 28");
                    std::process::exit(1);
                })
                .unwrap_or(28.0);
            lorenz(rho)
        }
        "steps" => steps(),
        "saddle" => saddle(),
        "predator-prey" => predator_prey(),
        "cycle" => cycle(),
        "liapunov" => liapunov(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [lorenz [rho]|steps|saddle|predator-prey|cycle|liapunov]");
            std::process::exit(1);
        }
    }
}

/// Integrates `field` from each initial state, failing on the first error.
fn family<F: VectorField<()> + Sync>(
    field: &F,
    initial_states: &[[f64; 2]],
    times: &[f64],
) -> Result<Vec<Trajectory>, dormand_prince::Error> {
    batch::integrate_many(field, initial_states, times, &(), &Config::default())
        .into_iter()
        .map(|result| result.map(|solution| solution.trajectory))
        .collect()
}

fn phase_plane<const N: usize>(names: [&str; N], trajectories: &[Trajectory]) -> PlotObserver<N> {
    let mut obs = PlotObserver::new(names);
    for (trace, trajectory) in trajectories.iter().enumerate() {
        obs.record_trajectory(trace, trajectory, Axis::Coordinate(0), Axis::Coordinate(1));
    }
    obs
}

/// Traces a circle of `radius` into `trace`.
fn circle<const N: usize>(obs: &mut PlotObserver<N>, trace: usize, radius: f64) {
    for theta in linspace(0.0, TAU, 200) {
        obs.record_point(trace, [radius * theta.cos(), radius * theta.sin()]);
    }
}

/// Draws the direction field of `field` on an `n × n` mesh over `[lo, hi]²`,
/// scaled so the longest arrow spans most of one mesh cell.
fn quiver<F: VectorField<()>, const N: usize>(
    obs: &mut PlotObserver<N>,
    field: &F,
    (lo, hi): (f64, f64),
    n: usize,
) -> Result<(), Box<dyn Error>> {
    let axis = linspace(lo, hi, n);
    let arrows = direction_field(field, &axis, &axis, 0.0, &())?;

    let cell = (hi - lo) / (n.max(2) - 1) as f64;
    let longest = arrows.iter().map(Arrow::magnitude).fold(0.0, f64::max);
    let scale = if longest > 0.0 { 0.9 * cell / longest } else { 0.0 };

    obs.record_arrows(
        "direction field",
        arrows.iter().map(|arrow| (arrow.point, arrow.tip(scale))),
    );
    Ok(())
}

// --- Lorenz ------------------------------------------------------------------

fn lorenz(rho: f64) -> Result<(), Box<dyn Error>> {
    let params = LorenzParams {
        rho,
        ..LorenzParams::default()
    };
    let times = linspace(0.0, 40.0, 10_000);
    let config = Config::default().with_sampling(Sampling::Interpolate);

    let solution =
        dormand_prince::solve_unobserved(&Lorenz, &[1.0, 1.0, 1.0], &times, &params, &config)?;

    let mut obs = PlotObserver::<1>::new(["x–z"]);
    obs.record_trajectory(0, &solution.trajectory, Axis::Coordinate(0), Axis::Coordinate(2));

    obs.show(ShowConfig::new().title(format!(
        "Lorenz attractor: σ={:.2}, β={:.2}, ρ={:.2}",
        params.sigma, params.beta, params.rho
    )))?;

    Ok(())
}

fn steps() -> Result<(), Box<dyn Error>> {
    let times = linspace(0.0, 40.0, 10_000);
    let config = Config::default().with_sampling(Sampling::Interpolate);
    let mut obs = PlotObserver::<1>::new(["|h|"]);

    let solution = dormand_prince::solve(
        &Lorenz,
        &[1.0, 1.0, 1.0],
        &times,
        &LorenzParams::default(),
        &config,
        &mut obs,
    )?;

    let stats = solution.stats;
    obs.show(
        ShowConfig::new()
            .title(format!(
                "Lorenz step sizes: {} accepted, {} rejected, {} evaluations",
                stats.accepted, stats.rejected, stats.evaluations
            ))
            .log_y(),
    )?;

    Ok(())
}

// --- Planar systems ----------------------------------------------------------

fn saddle() -> Result<(), Box<dyn Error>> {
    let initial_states = [[0.5, 0.5], [-0.5, 0.5], [1.0, -0.5], [-1.0, -1.0]];
    let trajectories = family(&Linear2::saddle(), &initial_states, &linspace(0.0, 2.0, 200))?;

    let mut obs = phase_plane(
        ["(0.5, 0.5)", "(−0.5, 0.5)", "(1, −0.5)", "(−1, −1)"],
        &trajectories,
    );
    quiver(&mut obs, &Linear2::saddle(), (-2.0, 2.0), 20)?;
    obs.show(
        ShowConfig::new()
            .title("Phase portrait of a hyperbolic point")
            .legend(),
    )?;

    Ok(())
}

fn predator_prey() -> Result<(), Box<dyn Error>> {
    let system = LotkaVolterra::default();
    let initial_states = [[0.5, 0.5], [2.0, 0.5], [3.0, 2.0]];
    let trajectories = family(&system, &initial_states, &linspace(0.0, 10.0, 400))?;

    let mut obs = phase_plane(
        ["(0.5, 0.5)", "(2, 0.5)", "(3, 2)", "x = 0", "y = α/β", "y = 0", "x = γ/δ"],
        &trajectories,
    );

    quiver(&mut obs, &system, (-2.0, 4.0), 20)?;

    let nullclines = system.nullclines();
    for (trace, line) in (3..).zip(nullclines.x.into_iter().chain(nullclines.y)) {
        let [start, end] = match line {
            Nullcline::Vertical(x) => [[x, -2.0], [x, 4.0]],
            Nullcline::Horizontal(y) => [[-2.0, y], [4.0, y]],
        };
        obs.record_point(trace, start);
        obs.record_point(trace, end);
    }

    obs.show(
        ShowConfig::new()
            .title("Predator–prey orbits with nullclines")
            .legend(),
    )?;

    Ok(())
}

fn cycle() -> Result<(), Box<dyn Error>> {
    let system = Hopf::default();
    let initial_states = [[0.1, 0.1], [0.5, 0.0], [1.5, 0.0], [0.0, -1.5]];
    let trajectories = family(&system, &initial_states, &linspace(0.0, 30.0, 600))?;

    let mut obs = phase_plane(
        ["(0.1, 0.1)", "(0.5, 0)", "(1.5, 0)", "(0, −1.5)", "limit cycle"],
        &trajectories,
    );
    if let Some(radius) = system.cycle_radius() {
        circle(&mut obs, 4, radius);
    }

    obs.show(
        ShowConfig::new()
            .title("Limit cycle and ω-limit sets")
            .legend()
            .equal_axes(),
    )?;

    Ok(())
}

fn liapunov() -> Result<(), Box<dyn Error>> {
    let initial_states = [[1.5, 1.5], [1.0, -1.0], [-1.0, 1.0], [-1.5, -1.0]];
    let trajectories = family(&Linear2::sink(), &initial_states, &linspace(0.0, 5.0, 200))?;

    let mut obs = phase_plane(
        [
            "(1.5, 1.5)",
            "(1, −1)",
            "(−1, 1)",
            "(−1.5, −1)",
            "V = 0.125",
            "V = 0.5",
            "V = 1.125",
            "V = 2",
        ],
        &trajectories,
    );
    for (trace, level) in (4..).zip([0.125, 0.5, 1.125, 2.0]) {
        if let Some(radius) = Quadratic::level_radius(level) {
            circle(&mut obs, trace, radius);
        }
    }

    obs.show(
        ShowConfig::new()
            .title("Sink trajectories and level sets of V = ½(x² + y²)")
            .legend()
            .equal_axes(),
    )?;

    Ok(())
}
