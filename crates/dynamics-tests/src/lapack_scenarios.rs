//! Exercises the `dynamics-lapack` dispatch layer against a dense linear
//! system with a known solution, independent of the algorithm crates.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use dynamics_lapack::{lu_factor, lu_solve, singular_values};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Builds a random SPD-ish system, solves via LU, and checks the
    /// residual, the same round-trip property exercised elsewhere, run
    /// here against the crate's own public API surface rather than a single
    /// module's internal test.
    #[test]
    fn test_lu_round_trip_on_random_system() {
        let n = 5;
        let mut rng = StdRng::seed_from_u64(11);
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            for j in 0..n {
                a[i + j * n] = rng.random_range(-1.0..1.0);
            }
            a[i + i * n] += n as f64;
        }
        let a_orig = a.clone();
        let x_expected: Vec<f64> = (0..n).map(|i| (i + 1) as f64).collect();

        let mut b = vec![0.0f64; n];
        for i in 0..n {
            for j in 0..n {
                b[i] += a_orig[i + j * n] * x_expected[j];
            }
        }

        let ipiv = lu_factor(&mut a, n).unwrap();
        lu_solve(&a, n, &ipiv, &mut b, 1).unwrap();

        for i in 0..n {
            assert_relative_eq!(b[i], x_expected[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn test_diagonal_singular_values_match_entries() {
        let n = 4;
        let diag = [2.0, 5.0, 1.0, 8.0];
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            a[i + i * n] = diag[i];
        }
        let mut s = singular_values(&mut a, n, n).unwrap();
        let mut expected = diag.to_vec();
        s.sort_by(|x, y| y.partial_cmp(x).unwrap());
        expected.sort_by(|x, y| y.partial_cmp(x).unwrap());
        for (got, want) in s.iter().zip(expected.iter()) {
            assert_relative_eq!(got, want, epsilon = 1e-9);
        }
    }
}
