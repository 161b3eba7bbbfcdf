use glam::Vec2;

/// Straight-alpha colour, components in `0..=1`.
#[repr(C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// 2D raster area the trail is drawn onto.
pub trait DrawingSurface {
    fn size(&self) -> (u32, u32);
    fn resize(&mut self, width: u32, height: u32);

    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

#[repr(C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// Records the circles of one frame, in draw order.
///
/// The layout of [`Circle`] is the instance layout of the GPU renderer, so a batch
/// can be uploaded with `bytemuck::cast_slice`.
#[derive(Debug, Default)]
pub struct CircleBatch {
    width: u32,
    height: u32,
    circles: Vec<Circle>,
}

impl CircleBatch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            circles: Vec::new(),
        }
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Circles that intersect the surface bounds.
    pub fn visible(&self) -> impl Iterator<Item = &Circle> {
        let max = Vec2::new(self.width as f32, self.height as f32);
        self.circles.iter().filter(move |c| {
            c.center.x + c.radius > 0.0
                && c.center.y + c.radius > 0.0
                && c.center.x - c.radius < max.x
                && c.center.y - c.radius < max.y
        })
    }
}

impl DrawingSurface for CircleBatch {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.circles.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_matches_instance_layout() {
        assert_eq!(std::mem::size_of::<Circle>(), 7 * 4);
    }

    #[test]
    fn test_batch_clear_keeps_size() {
        let mut batch = CircleBatch::new(800, 600);
        batch.fill_circle(Vec2::new(10.0, 10.0), 2.0, Rgba::from_rgb8(255, 0, 0));
        assert_eq!(batch.circles().len(), 1);

        batch.clear();
        assert!(batch.circles().is_empty());
        assert_eq!(batch.size(), (800, 600));
    }

    #[test]
    fn test_visible_skips_circles_outside_bounds() {
        let color = Rgba::from_rgb8(0, 0, 0);
        let mut batch = CircleBatch::new(100, 100);
        batch.fill_circle(Vec2::new(50.0, 50.0), 3.0, color);
        batch.fill_circle(Vec2::new(150.0, 50.0), 3.0, color);
        batch.fill_circle(Vec2::new(-2.0, 50.0), 3.0, color);
        assert_eq!(batch.visible().count(), 2);

        batch.resize(200, 100);
        assert_eq!(batch.visible().count(), 3);
        assert_eq!(batch.circles().len(), 3);
    }

    #[test]
    fn test_from_rgb8() {
        let color = Rgba::from_rgb8(255, 0, 51).with_alpha(0.25);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-6);
        assert_eq!(color.a, 0.25);
    }
}
