/// Per-tick physics parameters, derived from the current score.
///
/// All three ramp in steps so a run gets harder every few pipes without any
/// per-tick smoothing; the same score always yields the same parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Downward acceleration per tick.
    pub gravity: f32,
    /// Velocity a flap sets, negative = upward.
    pub impulse: f32,
    /// Pipe movement per tick.
    pub scroll_speed: f32,
}

impl Difficulty {
    pub fn for_score(score: u32) -> Self {
        let ramp = (score / 10) as f32;
        Difficulty {
            gravity: 0.5 + ramp * 0.1,
            impulse: -8.0 - ramp,
            scroll_speed: 3.0 + (score / 5) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_parameters() {
        let d = Difficulty::for_score(0);
        assert!((d.gravity - 0.5).abs() < f32::EPSILON);
        assert!((d.impulse - (-8.0)).abs() < f32::EPSILON);
        assert!((d.scroll_speed - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parameters_step_at_thresholds() {
        // Unchanged just below a threshold
        assert_eq!(Difficulty::for_score(9), Difficulty::for_score(0));
        assert_eq!(Difficulty::for_score(4).scroll_speed, 3.0);

        let d = Difficulty::for_score(10);
        assert!((d.gravity - 0.6).abs() < 1e-6);
        assert!((d.impulse - (-9.0)).abs() < f32::EPSILON);

        assert!((Difficulty::for_score(5).scroll_speed - 4.0).abs() < f32::EPSILON);
        assert!((Difficulty::for_score(25).scroll_speed - 8.0).abs() < f32::EPSILON);

        let d = Difficulty::for_score(100);
        assert!((d.gravity - 1.5).abs() < 1e-6);
        assert!((d.impulse - (-18.0)).abs() < f32::EPSILON);
        assert!((d.scroll_speed - 23.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ramp_is_monotonic() {
        let mut previous = Difficulty::for_score(0);
        for score in 1..=200 {
            let current = Difficulty::for_score(score);
            assert!(current.gravity >= previous.gravity);
            assert!(current.impulse <= previous.impulse);
            assert!(current.scroll_speed >= previous.scroll_speed);
            previous = current;
        }
    }
}
