use super::sample::Sample;

/// The three physical quantities a report page is drawn for, in page order.
///
/// Each variant carries the cosmetic identity of its chart: the page title
/// and the y-axis label. The x-axis is always temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observable {
    Magnetization,
    Energy,
    SpecificHeat,
}

impl Observable {
    /// All observables in the fixed page order of the report.
    pub const ALL: [Observable; 3] = [
        Observable::Magnetization,
        Observable::Energy,
        Observable::SpecificHeat,
    ];

    /// Chart caption for this observable's page.
    pub fn title(&self) -> &'static str {
        match self {
            Observable::Magnetization => "Magnetization vs Temperature",
            Observable::Energy => "Energy vs Temperature",
            Observable::SpecificHeat => "Specific Heat vs Temperature",
        }
    }

    /// Y-axis label for this observable's page.
    pub fn y_label(&self) -> &'static str {
        match self {
            Observable::Magnetization => "Magnetization",
            Observable::Energy => "Energy per spin",
            Observable::SpecificHeat => "Specific heat per spin",
        }
    }

    /// Projects one sample onto this observable.
    pub fn value_of(&self, sample: &Sample) -> f64 {
        match self {
            Observable::Magnetization => sample.magnetization,
            Observable::Energy => sample.energy,
            Observable::SpecificHeat => sample.specific_heat,
        }
    }
}

/// An ordered sequence of (temperature, value) pairs for one observable.
///
/// Series derived from the same sample list share row indices, so their
/// lengths and x-values are identical by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<(f64, f64)>,
}

impl Series {
    /// Derives the series for `observable` from the sample list, preserving
    /// row order.
    pub fn project(samples: &[Sample], observable: Observable) -> Self {
        Self {
            points: samples
                .iter()
                .map(|s| (s.temperature, observable.value_of(s)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }
}
