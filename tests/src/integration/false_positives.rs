//! # False Positive Regression Guards
//!
//! Statistical checks that catch gross hash-distribution regressions.
//! Thresholds sit well above theory so the tests are not flaky, but far below
//! what a broken hash family would produce.

#[cfg(test)]
mod tests {
    use rand::distributions::Alphanumeric;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use checksum_bloom::BloomFilter;

    fn random_element(rng: &mut StdRng) -> String {
        let len = rng.gen_range(1..=24);
        rng.sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    /// Fraction of trials in which an unrelated element is reported present
    fn trial_fpr(rng: &mut StdRng, trials: usize, inserted: usize, m: usize, k: usize) -> f64 {
        let mut false_positives = 0;
        for _ in 0..trials {
            let mut filter = BloomFilter::new(m, k).unwrap();
            let added: Vec<String> = (0..inserted).map(|_| random_element(rng)).collect();
            for element in &added {
                filter.add(element);
            }

            let probe = loop {
                let candidate = random_element(rng);
                if !added.contains(&candidate) {
                    break candidate;
                }
            };
            if filter.might_contain(&probe) {
                false_positives += 1;
            }
        }
        false_positives as f64 / trials as f64
    }

    #[test]
    fn test_two_elements_demo_parameters() {
        let mut rng = StdRng::seed_from_u64(0x5EED_B100);
        let fpr = trial_fpr(&mut rng, 10_000, 2, 1000, 3);
        assert!(fpr < 0.05, "Unrelated element matched in {:.2}% of trials", fpr * 100.0);
    }

    #[test]
    fn test_two_elements_random_seed() {
        let mut rng = StdRng::from_entropy();
        let fpr = trial_fpr(&mut rng, 2_000, 2, 1000, 3);
        assert!(fpr < 0.05, "Unrelated element matched in {:.2}% of trials", fpr * 100.0);
    }

    #[test]
    fn test_loaded_filter_tracks_estimate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut filter = BloomFilter::new(10_000, 5).unwrap();
        for i in 0..1000 {
            filter.add(&format!("loaded_{}", i));
        }

        let probes = 50_000;
        let hits = (0..probes)
            .filter(|_| filter.might_contain(&format!("probe_{}", rng.gen::<u64>())))
            .count();
        let observed = hits as f64 / probes as f64;
        let estimate = filter.estimated_false_positive_rate();

        // ~0.94% in theory
        assert!(
            observed < estimate * 3.0,
            "Observed FPR {} far above estimate {}",
            observed,
            estimate
        );
    }

    #[test]
    fn test_more_hashes_fewer_false_positives_at_light_load() {
        let mut rng = StdRng::seed_from_u64(7);
        let k1 = trial_fpr(&mut rng, 400, 50, 1000, 1);
        let k4 = trial_fpr(&mut rng, 400, 50, 1000, 4);
        // Theory: ~4.9% vs ~0.12%
        assert!(k4 < k1 || k1 == 0.0, "k=4 ({}) should beat k=1 ({})", k4, k1);
    }
}
