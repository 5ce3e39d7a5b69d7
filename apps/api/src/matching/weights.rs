/// Weights of the four relevance signals. Their sum is the maximum score.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    title: 0.40,
    location: 0.20,
    skills: 0.30,
    company: 0.10,
};

/// Jobs scoring below this are dropped from ranked output.
pub const MIN_RELEVANCE: f64 = 0.2;

/// Upper bound on the number of ranked jobs returned.
pub const MAX_RESULTS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub title: f64,
    pub location: f64,
    pub skills: f64,
    pub company: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.title + self.location + self.skills + self.company
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn default_is_the_fixed_weight_set() {
        assert_eq!(Weights::default(), DEFAULT_WEIGHTS);
    }
}
