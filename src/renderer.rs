use crate::image::Image;
use crate::*;

use log::*;
use rand::prelude::*;

/// Pinhole setup: rays start at `eye` and pass through a square wall of side
/// `wall_size` standing at `z = wall_z`, which the image covers edge to edge.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub eye: Point,
    pub wall_z: f64,
    pub wall_size: f64,
    pub samples_per_pixel: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            eye: Point::new(0.0, 0.0, -5.0),
            wall_z: 10.0,
            wall_size: 7.0,
            samples_per_pixel: 1,
        }
    }
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Renderer { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Ray through the image-space position `(u, v)`; pixel `(x, y)` spans
    /// `[x, x + 1) x [y, y + 1)`.
    pub fn ray_to(&self, w: u32, h: u32, u: f64, v: f64) -> Ray {
        let px_size = self.config.wall_size / w.max(h) as f64;
        let half_w = px_size * w as f64 / 2.0;
        let half_h = px_size * h as f64 / 2.0;
        let target = Point::new(-half_w + px_size * u, half_h - px_size * v, self.config.wall_z);
        Ray::new(self.config.eye, (target - self.config.eye).normalize())
    }

    pub fn shade(&self, spheres: &[Sphere], light: &PointLight, ray: &Ray) -> Result<RGB> {
        let mut xs = Intersections::new();
        for s in spheres {
            xs.extend(s.intersect(ray)?);
        }
        let hit = match xs.hit() {
            Some(hit) => hit,
            None => return Ok(RGB::black()),
        };
        let point = ray.position(hit.t);
        let normal = hit.object.normal_at(&point)?;
        let eye = -ray.direction;
        Ok(hit.object.material().lighting(light, &point, &eye, &normal))
    }

    pub fn render(&self, spheres: &[Sphere], light: &PointLight, image: &mut Image) -> Result<()> {
        use rand::distributions::Uniform;
        let spp = self.config.samples_per_pixel.max(1);
        let mut rng = SmallRng::from_entropy();
        let jitter = Uniform::new(0.0, 1.0);
        let (w, h) = (image.w(), image.h());
        info!(
            "rendering {} sphere(s) at {}x{}, {} sample(s) per pixel",
            spheres.len(),
            w,
            h,
            spp
        );
        let start = std::time::Instant::now();

        for y in 0..h {
            for x in 0..w {
                let mut accum = RGB::black();
                let mut samples = 0;
                for _ in 0..spp {
                    let (du, dv) = if spp == 1 {
                        (0.5, 0.5)
                    } else {
                        (jitter.sample(&mut rng), jitter.sample(&mut rng))
                    };
                    let ray = self.ray_to(w, h, x as f64 + du, y as f64 + dv);
                    let color = self.shade(spheres, light, &ray)?;
                    if color.is_finite() {
                        accum += color;
                        samples += 1;
                    } else {
                        warn!("color is not finite at ({}, {}): {:?}", x, y, color);
                    }
                }
                if samples > 0 {
                    *image.at_mut(x, y) = accum / samples as f64;
                }
            }
            debug!("row {}/{} done", y + 1, h);
        }

        info!("rendered in {:.3} sec", start.elapsed().as_secs_f64());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> PointLight {
        PointLight::new(Point::new(0.0, 0.0, -10.0), RGB::white())
    }

    #[test]
    fn center_ray_points_down_z() {
        let r = Renderer::new(RenderConfig::default());
        let ray = r.ray_to(100, 100, 50.0, 50.0);
        assert_eq!(ray.origin, Point::new(0.0, 0.0, -5.0));
        assert!(ray.direction.approx_eq(&Vector::new(0.0, 0.0, 1.0)));

        let corner = r.ray_to(100, 100, 0.0, 0.0);
        assert!(corner.direction.x < 0.0 && corner.direction.y > 0.0);
        assert!((corner.direction.magnitude() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn shade_hit_and_miss() {
        let r = Renderer::new(RenderConfig::default());
        let spheres = vec![Sphere::new()];
        let straight = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
        let c = r.shade(&spheres, &light(), &straight).unwrap();
        assert!(c.approx_eq(&RGB::all(1.9)));

        let away = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 1.0, 0.0));
        assert_eq!(r.shade(&spheres, &light(), &away).unwrap(), RGB::black());
        assert_eq!(r.shade(&[], &light(), &straight).unwrap(), RGB::black());
    }

    #[test]
    fn shade_picks_nearest_object() {
        let r = Renderer::new(RenderConfig::default());
        let mut far = Sphere::with_transform(Matrix::translation(0.0, 0.0, 3.0));
        far.material_mut().color = RGB::new(0.0, 0.0, 1.0);
        let mut near = Sphere::new();
        near.material_mut().color = RGB::new(1.0, 0.0, 0.0);
        let spheres = vec![far, near];

        let straight = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
        let c = r.shade(&spheres, &light(), &straight).unwrap();
        assert!(c.r > 1.0);
        assert!((c.g - 0.9).abs() < 1e-4);
    }

    #[test]
    fn render_small_image() {
        let r = Renderer::new(RenderConfig::default());
        let spheres = vec![Sphere::new()];
        let mut image = Image::new(11, 11);
        r.render(&spheres, &light(), &mut image).unwrap();
        assert!(image.at(5, 5).r > 1.5);
        assert_eq!(*image.at(0, 0), RGB::black());
        assert_eq!(*image.at(10, 10), RGB::black());
    }

    #[test]
    fn render_with_jitter() {
        let config = RenderConfig {
            samples_per_pixel: 4,
            ..Default::default()
        };
        let r = Renderer::new(config);
        let spheres = vec![Sphere::new()];
        let mut image = Image::new(11, 11);
        r.render(&spheres, &light(), &mut image).unwrap();
        assert!(image.at(5, 5).r > 0.5);
        assert_eq!(*image.at(0, 0), RGB::black());
    }

    #[test]
    fn render_propagates_singular_transform() {
        let r = Renderer::new(RenderConfig::default());
        let spheres = vec![Sphere::with_transform(Matrix::scaling(1.0, 0.0, 1.0))];
        let mut image = Image::new(2, 2);
        assert!(matches!(
            r.render(&spheres, &light(), &mut image),
            Err(Error::NotInvertible)
        ));
    }
}
