use smallvec::{smallvec, SmallVec};

pub type Roots = SmallVec<[f32; 2]>;

/// Real roots of `a*t^2 + b*t + c = 0`.
///
/// The `+sqrt(disc)` root comes first. Callers that care about order have to sort.
pub fn quadratic_roots(a: f32, b: f32, c: f32) -> Roots {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return SmallVec::new();
    }
    let discriminant_sqrt = discriminant.sqrt();
    smallvec![
        (-b + discriminant_sqrt) / (2.0 * a),
        (-b - discriminant_sqrt) / (2.0 * a),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_roots() {
        let mut roots = quadratic_roots(1.0, 0.0, -4.0).to_vec();
        roots.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(roots, vec![-2.0, 2.0]);
    }

    #[test]
    fn test_quadratic_roots_order() {
        let roots = quadratic_roots(1.0, -3.0, 2.0);
        assert_eq!(roots.as_slice(), &[2.0, 1.0]);
    }

    #[test]
    fn test_quadratic_no_real_roots() {
        assert!(quadratic_roots(1.0, 0.0, 4.0).is_empty());
    }
}
