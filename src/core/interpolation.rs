use serde::{Deserialize, Serialize};
use crate::core::hero_error::HeroError;

/// Piecewise-linear mapping over `(input, output)` control points.
///
/// Inputs below the first point or above the last hold the boundary value, so the
/// output never leaves the range spanned by the control points.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<(f32, f32)>", into = "Vec<(f32, f32)>")]
pub struct Keyframes {
    points: Vec<(f32, f32)>,
}

impl Keyframes {
    pub fn new(points: Vec<(f32, f32)>) -> Result<Self, HeroError> {
        if points.is_empty() {
            return Err(HeroError::InvalidKeyframes("at least one control point is required".to_string()));
        }
        if let Some((x, y)) = points.iter().find(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(HeroError::InvalidKeyframes(format!("non-finite control point ({}, {})", x, y)));
        }
        for w in points.windows(2) {
            if w[1].0 < w[0].0 {
                return Err(HeroError::InvalidKeyframes(format!(
                    "inputs must be non-decreasing, found {} after {}",
                    w[1].0, w[0].0
                )));
            }
        }
        Ok(Keyframes { points })
    }

    // Points must already be sorted by input and finite.
    pub(crate) fn from_sorted(points: Vec<(f32, f32)>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].0 <= w[1].0));
        Keyframes { points }
    }

    /// Two-point mapping from `from` at progress 0 to `to` at progress 1.
    pub fn linear(from: f32, to: f32) -> Self {
        Keyframes { points: vec![(0.0, from), (1.0, to)] }
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn first(&self) -> f32 {
        self.points[0].1
    }

    pub fn last(&self) -> f32 {
        self.points[self.points.len() - 1].1
    }

    /// Smallest and largest output value across the control points.
    pub fn output_range(&self) -> (f32, f32) {
        self.points.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        })
    }

    pub fn sample(&self, input: f32) -> f32 {
        let (first_x, first_y) = self.points[0];
        let (last_x, last_y) = self.points[self.points.len() - 1];

        if input.is_nan() || input <= first_x {
            return first_y;
        }
        if input >= last_x {
            return last_y;
        }

        // First segment whose end lies strictly past the input; zero-width segments
        // before it have already been stepped over.
        let end = self.points.iter().position(|&(x, _)| x > input).unwrap_or(self.points.len() - 1);
        let (x0, y0) = self.points[end - 1];
        let (x1, y1) = self.points[end];
        let t = (input - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}

impl TryFrom<Vec<(f32, f32)>> for Keyframes {
    type Error = HeroError;

    fn try_from(points: Vec<(f32, f32)>) -> Result<Self, Self::Error> {
        Keyframes::new(points)
    }
}

impl From<Keyframes> for Vec<(f32, f32)> {
    fn from(keyframes: Keyframes) -> Self {
        keyframes.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn particle_opacity() -> Keyframes {
        Keyframes::new(vec![(0.0, 0.8), (0.2, 0.8), (1.0, 0.0)]).unwrap()
    }

    #[rstest]
    #[case(0.0, 0.8)]
    #[case(0.25, 1.6)]
    #[case(0.5, 2.4)]
    #[case(0.75, 3.2)]
    #[case(1.0, 4.0)]
    fn monolith_scale_is_linear(#[case] progress: f32, #[case] expected: f32) {
        let scale = Keyframes::linear(0.8, 4.0);
        assert!((scale.sample(progress) - expected).abs() < 1e-5);
    }

    #[test]
    fn endpoints_are_exact() {
        let opacity = particle_opacity();
        assert_eq!(opacity.sample(0.0), 0.8);
        assert_eq!(opacity.sample(1.0), 0.0);

        let rotation = Keyframes::linear(0.0, std::f32::consts::TAU);
        assert_eq!(rotation.sample(1.0), std::f32::consts::TAU);
    }

    #[rstest]
    #[case(-0.1, 0.8)]
    #[case(-50.0, 0.8)]
    #[case(1.2, 0.0)]
    #[case(f32::INFINITY, 0.0)]
    fn out_of_range_holds_boundary(#[case] progress: f32, #[case] expected: f32) {
        assert_eq!(particle_opacity().sample(progress), expected);
    }

    #[test]
    fn output_stays_within_control_values() {
        let opacity = particle_opacity();
        let (lo, hi) = opacity.output_range();
        for i in 0..=1000 {
            let value = opacity.sample(i as f32 / 1000.0);
            assert!(value >= lo && value <= hi, "{} outside [{}, {}]", value, lo, hi);
        }
    }

    #[test]
    fn monotonic_within_each_segment() {
        let text = Keyframes::new(vec![(0.0, 1.0), (0.1, 1.0), (0.2, 0.0), (0.6, 0.5)]).unwrap();
        for w in text.points().windows(2) {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            let rising = y1 >= y0;
            let mut previous = text.sample(x0);
            for step in 1..=100 {
                let value = text.sample(x0 + (x1 - x0) * step as f32 / 100.0);
                if rising {
                    assert!(value >= previous - 1e-6);
                } else {
                    assert!(value <= previous + 1e-6);
                }
                previous = value;
            }
        }
    }

    #[test]
    fn plateau_holds_value() {
        let opacity = particle_opacity();
        assert_eq!(opacity.sample(0.1), 0.8);
        assert!((opacity.sample(0.6) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn zero_width_segment_steps_to_later_value() {
        let step = Keyframes::new(vec![(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)]).unwrap();
        assert_eq!(step.sample(0.49), 0.0);
        assert_eq!(step.sample(0.5), 1.0);
    }

    #[test]
    fn nan_input_yields_first_value() {
        assert_eq!(particle_opacity().sample(f32::NAN), 0.8);
    }

    #[test]
    fn single_point_is_constant() {
        let constant = Keyframes::new(vec![(0.3, 2.0)]).unwrap();
        assert_eq!(constant.sample(-1.0), 2.0);
        assert_eq!(constant.sample(0.3), 2.0);
        assert_eq!(constant.sample(9.0), 2.0);
    }

    #[test]
    fn rejects_invalid_control_points() {
        assert!(matches!(Keyframes::new(vec![]), Err(HeroError::InvalidKeyframes(_))));
        assert!(matches!(
            Keyframes::new(vec![(0.5, 0.0), (0.2, 1.0)]),
            Err(HeroError::InvalidKeyframes(_))
        ));
        assert!(matches!(
            Keyframes::new(vec![(0.0, f32::NAN)]),
            Err(HeroError::InvalidKeyframes(_))
        ));
    }

    #[test]
    fn deserializes_from_point_list() {
        let keyframes: Keyframes = ron::from_str("[(0.0, 1.2), (1.0, 0.01)]").unwrap();
        assert_eq!(keyframes, Keyframes::linear(1.2, 0.01));
        assert!(ron::from_str::<Keyframes>("[(1.0, 0.0), (0.0, 1.0)]").is_err());
    }
}
