use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle in degrees into the half-open interval (-180, 180].
///
/// Sensor euler angles arrive in [0, 360); steering math needs them signed
/// around zero so that a small left tilt and a small right tilt are
/// symmetric.
pub fn wrap_angle_deg(angle: f64) -> f64 {
    let mut wrapped = angle % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    } else if wrapped <= -180.0 {
        wrapped += 360.0;
    }
    wrapped
}

/// Force values inside the deadzone band to exactly zero.
///
/// Values outside the band pass through unchanged; there is no rescaling,
/// so the output is discontinuous at the deadzone edge.
#[inline]
pub fn apply_deadzone(value: f64, deadzone: f64) -> f64 {
    if value.abs() < deadzone {
        0.0
    } else {
        value
    }
}

/// Clamp a value into [0, 1]
#[inline]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
