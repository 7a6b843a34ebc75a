/// Receives solver events and decides how integration should proceed.
///
/// Solvers report what they do (accepted steps, rejected steps, recorded
/// samples) through an observer instead of logging. Observers can record
/// diagnostics, chart step sizes, or stop an integration early without
/// changing the solver's API.
///
/// `observe` returns `Option<A>`: `Some(action)` requests a solver-specific
/// action and `None` lets the solver continue unchanged.
///
/// Closures implement `Observer`, and `()` is a no-op observer that always
/// returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
