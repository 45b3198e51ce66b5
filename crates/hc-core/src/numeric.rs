use crate::HcError;

/// Floating point type used throughout the solver
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HcError::NonFinite { what, value: v })
    }
}

/// `num` evenly spaced points from `start` to `stop`, both ends included.
pub fn linspace(start: Real, stop: Real, num: usize) -> Vec<Real> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (stop - start) / (num - 1) as Real;
            let mut points: Vec<Real> = (0..num).map(|i| start + i as Real * delta).collect();
            points[num - 1] = stop;
            points
        }
    }
}

/// Half-open stepped range `[start, stop)`.
///
/// Empty when `stop <= start`. `step` must be positive and finite.
pub fn arange(start: Real, stop: Real, step: Real) -> Result<Vec<Real>, HcError> {
    ensure_finite(start, "range start")?;
    ensure_finite(stop, "range stop")?;
    ensure_finite(step, "range step")?;
    if step <= 0.0 {
        return Err(HcError::InvalidArg {
            what: "range step must be positive",
        });
    }
    if stop <= start {
        return Ok(Vec::new());
    }
    let count = ((stop - start) / step).ceil() as usize;
    Ok((0..count).map(|i| start + i as Real * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
    }

    #[test]
    fn linspace_hits_both_ends() {
        let pts = linspace(1.0, 2.0, 5);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], 1.0);
        assert!((pts[2] - 1.5).abs() < 1e-12);
        assert_eq!(pts[4], 2.0);
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn arange_excludes_stop() {
        let pts = arange(3.5, 5.0, 0.5).unwrap();
        assert_eq!(pts, vec![3.5, 4.0, 4.5]);
        assert!(arange(5.0, 3.0, 0.5).unwrap().is_empty());
        assert!(arange(0.0, 1.0, 0.0).is_err());
        assert!(arange(0.0, f64::NAN, 0.1).is_err());
    }
}
