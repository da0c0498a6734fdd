//! Closed-form eigen-decomposition of the symmetric 2×2 inertia tensor.

use super::types::Principal;

/// Principal moments and orientation from `(Ixx, Iyy, Ixy)`.
///
/// `avg = (Ixx+Iyy)/2`, `diff = (Ixx−Iyy)/2`, `R = √(diff² + Ixy²)`,
/// `I1 = avg + R`, `I2 = avg − R`, `theta = atan2(−Ixy, diff)/2`.
///
/// Total for all real inputs. The isotropic case `diff = Ixy = 0` gives
/// `theta = 0` and `I1 = I2 = avg`.
pub fn principal(ixx: f64, iyy: f64, ixy: f64) -> Principal {
    let avg = (ixx + iyy) / 2.0;
    let diff = (ixx - iyy) / 2.0; // signed
    let r = (diff * diff + ixy * ixy).sqrt();
    let theta = (-ixy).atan2(diff) / 2.0;
    debug_assert!(
        theta.is_nan()
            || (-std::f64::consts::FRAC_PI_2..=std::f64::consts::FRAC_PI_2).contains(&theta),
        "halved atan2 out of range"
    );
    Principal {
        i1: avg + r,
        i2: avg - r,
        theta,
    }
}
