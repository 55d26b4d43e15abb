#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

///
/// Scalar offset moved by a fixed step per trigger, reversing once it leaves `[lower, upper]`.
///
/// The bound check runs after the step is applied, so the offset overshoots a
/// bound by up to one step before it turns around. A negative `step` makes
/// "forward" move towards negative values.
///
#[derive(Debug, Clone, Copy)]
pub struct BounceAxis {
    offset: f32,
    step: f32,
    lower: f32,
    upper: f32,
    direction: Direction,
}

impl BounceAxis {
    pub fn new(step: f32, lower: f32, upper: f32) -> Self {
        Self {
            offset: 0.0,
            step,
            lower,
            upper,
            direction: Direction::Forward,
        }
    }

    /// Applies one step and returns the new offset.
    pub fn advance(&mut self) -> f32 {
        match self.direction {
            Direction::Forward => self.offset += self.step,
            Direction::Backward => self.offset -= self.step,
        }

        if self.offset > self.upper || self.offset < self.lower {
            self.direction = self.direction.flipped();
        }

        self.offset
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{a} != {b}");
    }

    #[test]
    fn x_axis_overshoots_then_returns() {
        let mut axis = BounceAxis::new(0.2, -1.0, 1.0);
        let expected = [0.2, 0.4, 0.6, 0.8, 1.0, 1.2, 1.0, 0.8, 0.6, 0.4, 0.2, 0.0];

        for (i, &e) in expected.iter().enumerate() {
            assert_close(axis.advance(), e);

            let dir = if i < 5 {
                Direction::Forward
            } else {
                Direction::Backward
            };
            assert_eq!(axis.direction(), dir, "press {}", i + 1);
        }
    }

    #[test]
    fn negative_step_moves_forward_towards_lower_bound() {
        let mut axis = BounceAxis::new(-0.2, -1.5, 1.5);

        for _ in 0..7 {
            axis.advance();
        }
        assert_close(axis.offset(), -1.4);
        assert_eq!(axis.direction(), Direction::Forward);

        assert_close(axis.advance(), -1.6);
        assert_eq!(axis.direction(), Direction::Backward);

        assert_close(axis.advance(), -1.4);
    }

    #[test]
    fn stays_within_one_step_of_bounds() {
        let mut axis = BounceAxis::new(0.2, -1.0, 1.0);

        for _ in 0..1000 {
            let v = axis.advance();
            assert!((-1.2 - 1e-4..=1.2 + 1e-4).contains(&v), "{v}");
        }
    }
}
