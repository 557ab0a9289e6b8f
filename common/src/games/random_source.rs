/// Uniform random values in `[0, 1)`.
///
/// Food placement draws through this trait instead of a global generator, so
/// callers decide whether a game is seeded, scripted or truly random.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Always yields the same value. `FixedRandom(0.0)` picks the first free cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a scripted list of values.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, position: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_cycles() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.5]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.5);
        assert_eq!(rng.next_unit(), 0.1);
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        let mut rng = SequenceRandom::new(Vec::new());
        assert_eq!(rng.next_unit(), 0.0);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let mut fixed = FixedRandom(0.25);
        let source: &mut dyn RandomSource = &mut fixed;
        assert_eq!(source.next_unit(), 0.25);
    }
}
