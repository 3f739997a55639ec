use crate::nn::Parameter;
use crate::value::Value;
use rand::distributions::Uniform;
use rand::Rng;

/// Draws a fresh parameter uniformly from [-1, 1].
///
/// The random source is owned by the caller and passed in explicitly, so a
/// network built with the same seed and topology reproduces the same initial
/// parameters across runs.
pub fn uniform_parameter<R: Rng>(rng: &mut R) -> Parameter {
    let dist = Uniform::new_inclusive(-1.0f64, 1.0);
    Parameter::new(Value::new(rng.sample(dist)))
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
