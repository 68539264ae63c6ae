/// One row of tabulated simulation output.
///
/// Rows are produced by the simulation at successive temperatures and are
/// trusted to arrive sorted by ascending temperature; the loader does not
/// re-sort or validate the ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Temperature at which the observables were measured.
    pub temperature: f64,
    /// Mean magnetization per spin.
    pub magnetization: f64,
    /// Mean energy per spin.
    pub energy: f64,
    /// Specific heat per spin.
    pub specific_heat: f64,
}

impl Sample {
    pub fn new(temperature: f64, magnetization: f64, energy: f64, specific_heat: f64) -> Self {
        Self {
            temperature,
            magnetization,
            energy,
            specific_heat,
        }
    }
}
