use crate::intersection::{Intersection, Intersections};
use crate::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Unit sphere centred on its local origin. Placement, size and shape in the
/// world all come from `transform`.
#[derive(Clone, Debug)]
pub struct Sphere {
    id: usize,
    pub transform: Matrix,
    material: Option<Material>,
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Sphere {
    pub fn new() -> Self {
        Sphere {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            transform: Matrix::identity_of(4),
            material: None,
        }
    }

    pub fn with_transform(transform: Matrix) -> Self {
        let mut s = Self::new();
        s.transform = transform;
        s
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Falls back to `Material::default()` until one is assigned.
    pub fn material(&self) -> Material {
        self.material.unwrap_or_default()
    }

    pub fn material_mut(&mut self) -> &mut Material {
        self.material.get_or_insert_with(Material::default)
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = Some(material);
    }

    /// Always yields zero or two intersections, nearer root first. A tangent
    /// ray gives the same `t` twice.
    pub fn intersect(&self, ray: &Ray) -> Result<Intersections<'_>> {
        let local = ray.transform(&self.transform.invert()?)?;
        let d = local.direction;
        let oc = local.origin - Point::origin();

        // See Wikipedia:
        // <http://en.wikipedia.org/wiki/Line%E2%80%93sphere_intersection>
        let a = d.dot(&d);
        let b = 2.0 * d.dot(&oc);
        let c = oc.dot(&oc) - 1.0;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return Ok(Intersections::new());
        }
        let sqrt_discriminant = discriminant.sqrt();
        Ok(Intersections::from(vec![
            Intersection::new((-b - sqrt_discriminant) / (2.0 * a), self),
            Intersection::new((-b + sqrt_discriminant) / (2.0 * a), self),
        ]))
    }

    pub fn normal_at(&self, world_point: &Point) -> Result<Vector> {
        let inv = self.transform.invert()?;
        let local_point = inv.multiply_tuple(world_point)?;
        let local_normal = local_point - Point::origin();
        // normals go through the inverse transpose
        let world_normal = inv.transpose().multiply_tuple(&local_normal)?;
        Ok(world_normal.normalize())
    }
}
