/// Converts a held-key level signal into a single event per physical press.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyEdge {
    was_down: bool,
}

impl KeyEdge {
    /// Feeds one sample of the key state, returns `true` only on the frame the press starts.
    pub fn pressed(&mut self, is_down: bool) -> bool {
        let fired = is_down && !self.was_down;
        self.was_down = is_down;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    fn count_runs(samples: &[bool]) -> usize {
        samples
            .iter()
            .enumerate()
            .filter(|(i, &down)| down && (*i == 0 || !samples[i - 1]))
            .count()
    }

    fn count_events(samples: &[bool]) -> usize {
        let mut edge = KeyEdge::default();
        samples.iter().filter(|&&s| edge.pressed(s)).count()
    }

    #[test]
    fn held_key_fires_once() {
        let mut edge = KeyEdge::default();

        assert!(edge.pressed(true));
        for _ in 0..100 {
            assert!(!edge.pressed(true));
        }
        assert!(!edge.pressed(false));
        assert!(edge.pressed(true));
    }

    #[test]
    fn idle_key_never_fires() {
        let mut edge = KeyEdge::default();

        assert!((0..10).all(|_| !edge.pressed(false)));
    }

    #[test]
    fn events_match_press_runs() {
        let fixed: [&[bool]; 4] = [
            &[],
            &[true, true, false, true],
            &[false, true, false, true, false, true],
            &[true, true, true, true, true],
        ];

        for samples in fixed {
            assert_eq!(count_events(samples), count_runs(samples));
        }

        let mut rng = Xoshiro256StarStar::seed_from_u64(7);

        for _ in 0..50 {
            let len = rng.gen_range(0..200);
            let samples: Vec<bool> = (0..len).map(|_| rng.gen_bool(0.3)).collect();

            assert_eq!(count_events(&samples), count_runs(&samples));
        }
    }
}
