/// The right-hand side of an ordinary differential equation.
///
/// A vector field maps a state, a time, and a parameter bundle to the rate of
/// change of that state. Fields must be pure: the same arguments always
/// produce the same derivative, and evaluating a field never mutates shared
/// state. This is what lets independent trajectories be integrated in
/// parallel with nothing more than shared references.
///
/// Parameters are passed on every evaluation rather than captured, so a single
/// field value can be reused across a whole parameter sweep.
///
/// Closures of the form `Fn(&[f64], f64, &P) -> Vec<f64>` implement this trait,
/// which keeps one-off fields in tests and demos short:
///
/// ```
/// use attractor_core::VectorField;
///
/// let decay = |x: &[f64], _t: f64, k: &f64| vec![-k * x[0]];
/// assert_eq!(decay.derivative(&[2.0], 0.0, &0.5), vec![-1.0]);
/// ```
pub trait VectorField<P: ?Sized> {
    /// Returns `d(state)/dt` at `state` and time `t`.
    ///
    /// The returned vector must have the same length as `state`. Solvers check
    /// this on every evaluation and reject fields that violate it.
    fn derivative(&self, state: &[f64], t: f64, params: &P) -> Vec<f64>;
}

impl<P, F> VectorField<P> for F
where
    P: ?Sized,
    F: Fn(&[f64], f64, &P) -> Vec<f64>,
{
    fn derivative(&self, state: &[f64], t: f64, params: &P) -> Vec<f64> {
        self(state, t, params)
    }
}
