use crate::error::ScalarGradError;
use crate::value::Value;

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must build a fresh expression graph from the leaf values it is
/// given and return the scalar root. The analytical gradients come from one
/// `backward()` call on that root; the numerical gradient of input `i` is
/// `(f(x + eps_i) - f(x - eps_i)) / (2 * epsilon)`, each side evaluated on a
/// freshly built graph.
///
/// A gradient pair passes if it is within `tolerance` absolutely *or*
/// relatively; otherwise the first failing input is reported.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), ScalarGradError>
where
    F: Fn(&[Value]) -> Value,
{
    let eval = |point: &[f64]| -> f64 {
        let leaves: Vec<Value> = point.iter().map(|&x| Value::new(x)).collect();
        func(&leaves).data()
    };

    // --- Analytical gradients from one backward pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.backward();

    // --- Per-input central differences ---
    for (index, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();

        let mut plus = inputs.to_vec();
        plus[index] += epsilon;
        let mut minus = inputs.to_vec();
        minus[index] -= epsilon;
        let numerical = (eval(&plus) - eval(&minus)) / (2.0 * epsilon);

        if !analytical.is_finite() || !numerical.is_finite() {
            return Err(ScalarGradError::NonFiniteGradient {
                index,
                analytical,
                numerical,
            });
        }

        let difference = (analytical - numerical).abs();
        if difference > tolerance && difference / (analytical.abs() + epsilon) > tolerance {
            return Err(ScalarGradError::GradientMismatch {
                index,
                analytical,
                numerical,
                difference,
            });
        }
    }

    Ok(())
}
