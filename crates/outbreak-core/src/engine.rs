//! Engine abstraction shared by the discrete-time simulators.

/// A discrete-time compartmental simulation advancing in unit steps.
///
/// Implementors validate their parameters at construction, so stepping is
/// infallible. All state lives in the engine value itself; there is no
/// process-wide state, and independent runs may be parallelized externally.
pub trait CompartmentModel {
    /// Compartment labels, in the order [`population`](Self::population)
    /// reports them.
    fn compartments(&self) -> Vec<String>;

    /// Current occupancy of each compartment.
    fn population(&self) -> Vec<f64>;

    /// Advance the simulation by one step.
    fn step(&mut self);

    /// Restore the initial state.
    fn reset(&mut self);

    /// Steps taken since construction or the last reset.
    fn current_step(&self) -> u32;

    /// Run `num_steps` steps, returning the initial state followed by one
    /// snapshot per step.
    fn run(&mut self, num_steps: u32) -> Vec<Vec<f64>> {
        let mut steps = Vec::with_capacity(num_steps as usize + 1);
        steps.push(self.population());
        for _ in 0..num_steps {
            self.step();
            steps.push(self.population());
        }
        steps
    }
}
