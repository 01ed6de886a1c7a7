//! Gravitational load on each mass.

use nalgebra::DVector;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Force, Mass},
    force::newton,
    mass::kilogram,
};

/// Gravitational acceleration in metres per second squared.
pub const GRAVITY: f64 = 9.81;

/// Weight of each mass in newtons, with masses given in kilograms.
///
/// # Examples
/// ```
/// use nalgebra::DVector;
/// use springchain::gravitational_load;
///
/// let load = gravitational_load(&DVector::from_vec(vec![2.0]));
/// assert!((load[0] - 19.62).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn gravitational_load(masses: &DVector<f64>) -> DVector<f64> {
    let gravity = Acceleration::new::<meter_per_second_squared>(GRAVITY);
    masses.map(|mass| {
        let weight: Force = Mass::new::<kilogram>(mass) * gravity;
        weight.get::<newton>()
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn weights_scale_with_gravity() {
        let load = gravitational_load(&DVector::from_vec(vec![1.0, 2.0]));
        assert_relative_eq!(load, DVector::from_vec(vec![9.81, 19.62]), epsilon = 1.0e-12);
    }

    #[test]
    fn empty_masses_give_empty_load() {
        assert_eq!(gravitational_load(&DVector::zeros(0)).len(), 0);
    }
}
