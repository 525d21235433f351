use crate::*;
use std::f64::consts::PI;

pub struct ExampleScene {
    pub spheres: Vec<Sphere>,
    pub light: PointLight,
}

pub const NAMES: &[&str] = &["sphere", "squashed", "trio"];

pub fn by_name(name: &str) -> Result<Option<ExampleScene>> {
    Ok(match name {
        "sphere" => Some(make_sphere()),
        "squashed" => Some(make_squashed()?),
        "trio" => Some(make_trio()?),
        _ => None,
    })
}

fn upper_left_light() -> PointLight {
    PointLight::new(Point::new(-10.0, 10.0, -10.0), RGB::white())
}

pub fn make_sphere() -> ExampleScene {
    let mut sphere = Sphere::new();
    sphere.material_mut().color = RGB::new(1.0, 0.2, 1.0);
    ExampleScene {
        spheres: vec![sphere],
        light: upper_left_light(),
    }
}

pub fn make_squashed() -> Result<ExampleScene> {
    let transform = Matrix::scaling(0.5, 1.0, 1.0)
        .then(&Matrix::rotation_z(PI / 4.0))?
        .then(&Matrix::shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0))?;
    let mut sphere = Sphere::with_transform(transform);
    sphere.set_material(Material::new(RGB::new(0.2, 0.6, 1.0), 0.1, 0.9, 0.6, 50.0));
    Ok(ExampleScene {
        spheres: vec![sphere],
        light: upper_left_light(),
    })
}

pub fn make_trio() -> Result<ExampleScene> {
    let mut middle = Sphere::new();
    middle.material_mut().color = RGB::new(1.0, 0.2, 1.0);

    let mut back = Sphere::with_transform(
        Matrix::scaling(0.6, 0.6, 0.6).then(&Matrix::translation(-1.5, 0.5, 2.0))?,
    );
    back.material_mut().color = RGB::new(0.2, 1.0, 0.3);

    let mut front = Sphere::with_transform(
        Matrix::scaling(0.4, 0.4, 0.4).then(&Matrix::translation(0.9, -0.4, -1.6))?,
    );
    front.set_material(Material::new(RGB::new(1.0, 0.8, 0.1), 0.1, 0.7, 0.3, 10.0));

    Ok(ExampleScene {
        spheres: vec![middle, back, front],
        light: upper_left_light(),
    })
}

#[test]
fn all_names_resolve() {
    for name in NAMES {
        let scene = by_name(name).unwrap().unwrap();
        assert!(!scene.spheres.is_empty());
        for s in scene.spheres.iter() {
            assert!(s.transform.is_invertible().unwrap());
        }
    }
    assert!(by_name("teapot").unwrap().is_none());
}

#[test]
fn trio_front_sphere_occludes() {
    let scene = make_trio().unwrap();
    let front = &scene.spheres[2];
    let target = Point::new(0.9, -0.4, -1.6);
    let eye = Point::new(0.0, 0.0, -5.0);
    let ray = Ray::new(eye, (target - eye).normalize());

    let mut xs = Intersections::new();
    for s in scene.spheres.iter() {
        xs.extend(s.intersect(&ray).unwrap());
    }
    assert!(xs.hit().unwrap().object == front);
}
