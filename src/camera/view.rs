use crate::math::*;

/// Pinhole camera looking at `look_at`, with the image plane `view_distance` in front of it.
/// One pixel spans one scene unit on that plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct View {
    pub position: Point3,
    pub view_distance: f32,
    pub look_at: Point3,
    pub up: Vec3,
}

impl View {
    pub fn new(position: Point3, view_distance: f32, look_at: Point3, up: Vec3) -> Self {
        View {
            position,
            view_distance,
            look_at,
            up,
        }
    }

    pub fn direction(&self) -> Vec3 {
        (self.look_at - self.position).normalized()
    }

    /// Points on the image plane, one per pixel, row by row from the top left.
    pub fn pixel_grid(&self, width: usize, height: usize) -> Vec<Point3> {
        let (offset_x, offset_y) = (-((width / 2) as i64), -((height / 2) as i64));
        let view_direction = self.direction();
        let screen_center = self.position + view_direction * self.view_distance;
        let right = view_direction.cross(self.up);
        let down = -self.up;

        let mut points = Vec::with_capacity(width * height);
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                let px = (x + offset_x) as f32;
                let py = (y + offset_y) as f32;
                points.push(screen_center + right * px + down * py);
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> View {
        View::new(
            Point3::new(0.0, 0.0, -100.0),
            100.0,
            Point3::new(0.0, 0.0, 100.0),
            Vec3::new(0.0, -1.0, 0.0),
        )
    }

    #[test]
    fn test_pixel_grid_raster_order() {
        let (width, height) = (4, 3);
        let grid = view().pixel_grid(width, height);
        assert_eq!(grid.len(), width * height);
        for row in grid.chunks(width) {
            for pair in row.windows(2) {
                assert!(pair[0].x < pair[1].x);
                assert_eq!(pair[0].y, pair[1].y);
            }
        }
        // rows go downward, which is +y
        assert!(grid[0].y < grid[width].y);
    }

    #[test]
    fn test_pixel_grid_centered() {
        let grid = view().pixel_grid(4, 4);
        assert_eq!(grid[0], Point3::new(-2.0, -2.0, 0.0));
        assert_eq!(grid[15], Point3::new(1.0, 1.0, 0.0));
        // pixel (2, 2) lands on the screen center
        assert_eq!(grid[2 * 4 + 2], Point3::new(0.0, 0.0, 0.0));
    }
}
