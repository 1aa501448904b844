// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod camera;
mod interval;
mod ray;
pub use camera::Camera;
pub use interval::Interval;
pub use ray::Ray;

/// Smallest hit parameter accepted by intersection tests.
///
/// Secondary rays start exactly on a surface, so anything closer than this
/// is treated as the surface the ray is leaving.
pub const T_MIN: f32 = 0.001;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    }
}
