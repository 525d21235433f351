use crate::*;

/// Phong surface parameters. `ambient`, `diffuse` and `specular` are
/// conventionally in [0, 1]; `shininess` is positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: RGB,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            color: RGB::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }
}

impl Material {
    pub fn new(color: RGB, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        Material {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    pub fn with_color(color: RGB) -> Self {
        Material {
            color,
            ..Default::default()
        }
    }

    pub fn lighting(
        &self,
        light: &PointLight,
        point: &Point,
        eye: &Vector,
        normal: &Vector,
    ) -> RGB {
        let effective = self.color * light.intensity;
        let to_light = (light.position - *point).normalize();
        let ambient = effective * self.ambient;

        let light_dot_normal = to_light.dot(normal);
        if light_dot_normal < 0.0 {
            // light is on the other side of the surface
            return ambient;
        }

        let diffuse = effective * self.diffuse * light_dot_normal;
        let reflect_dot_eye = (-to_light).reflect(normal).dot(eye);
        let specular = if reflect_dot_eye <= 0.0 {
            RGB::black()
        } else {
            light.intensity * self.specular * reflect_dot_eye.powf(self.shininess)
        };

        ambient + diffuse + specular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shade(eye: Vector, light_at: Point) -> RGB {
        let light = PointLight::new(light_at, RGB::white());
        Material::default().lighting(
            &light,
            &Point::origin(),
            &eye,
            &Vector::new(0.0, 0.0, -1.0),
        )
    }

    fn close(c: RGB, v: f64) -> bool {
        (c.r - v).abs() < 1e-4 && (c.g - v).abs() < 1e-4 && (c.b - v).abs() < 1e-4
    }

    #[test]
    fn default_material() {
        let m = Material::default();
        assert_eq!(m.color, RGB::all(1.0));
        assert_eq!(m.ambient, 0.1);
        assert_eq!(m.diffuse, 0.9);
        assert_eq!(m.specular, 0.9);
        assert_eq!(m.shininess, 200.0);
        assert_eq!(Material::with_color(RGB::new(1.0, 0.2, 1.0)).shininess, 200.0);
    }

    #[test]
    fn eye_between_light_and_surface() {
        let c = shade(Vector::new(0.0, 0.0, -1.0), Point::new(0.0, 0.0, -10.0));
        assert!(close(c, 1.9));
    }

    #[test]
    fn eye_offset_45_degrees() {
        let h = 2f64.sqrt() / 2.0;
        let c = shade(Vector::new(0.0, h, -h), Point::new(0.0, 0.0, -10.0));
        assert!(close(c, 1.0));
    }

    #[test]
    fn light_offset_45_degrees() {
        let c = shade(Vector::new(0.0, 0.0, -1.0), Point::new(0.0, 10.0, -10.0));
        assert!(close(c, 0.7364));
    }

    #[test]
    fn eye_in_reflection_path() {
        let h = 2f64.sqrt() / 2.0;
        let c = shade(Vector::new(0.0, -h, -h), Point::new(0.0, 10.0, -10.0));
        assert!(close(c, 1.6364));
    }

    #[test]
    fn light_behind_surface() {
        let c = shade(Vector::new(0.0, 0.0, -1.0), Point::new(0.0, 0.0, 10.0));
        assert!(close(c, 0.1));
    }

    #[test]
    fn colored_light_and_surface() {
        let m = Material::with_color(RGB::new(1.0, 0.5, 0.0));
        let light = PointLight::new(Point::new(0.0, 0.0, -10.0), RGB::new(0.5, 1.0, 1.0));
        let n = Vector::new(0.0, 0.0, -1.0);
        let c = m.lighting(&light, &Point::origin(), &n, &n);
        // effective (0.5, 0.5, 0) * (0.1 + 0.9) + intensity * 0.9
        assert!(c.approx_eq(&RGB::new(0.95, 1.4, 0.9)));
    }
}
