use crate::shape::Sphere;
use std::ops::Index;

#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a Sphere,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a Sphere) -> Self {
        Intersection { t, object }
    }
}

/// Intersections in discovery order; not sorted by `t`.
#[derive(Clone, Debug, Default)]
pub struct Intersections<'a> {
    xs: Vec<Intersection<'a>>,
}

impl<'a> Intersections<'a> {
    pub fn new() -> Self {
        Intersections { xs: vec![] }
    }

    pub fn push(&mut self, x: Intersection<'a>) {
        self.xs.push(x)
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.xs.iter()
    }

    /// The intersection with the smallest strictly positive `t`. On ties the
    /// earliest discovered wins.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.xs
            .iter()
            .filter(|x| x.t > 0.0)
            .fold(None, |best: Option<&Intersection<'a>>, x| match best {
                Some(b) if b.t <= x.t => Some(b),
                _ => Some(x),
            })
    }
}

impl<'a> From<Vec<Intersection<'a>>> for Intersections<'a> {
    fn from(xs: Vec<Intersection<'a>>) -> Self {
        Intersections { xs }
    }
}

impl<'a> Extend<Intersection<'a>> for Intersections<'a> {
    fn extend<I: IntoIterator<Item = Intersection<'a>>>(&mut self, iter: I) {
        self.xs.extend(iter)
    }
}

impl<'a> IntoIterator for Intersections<'a> {
    type Item = Intersection<'a>;
    type IntoIter = std::vec::IntoIter<Intersection<'a>>;
    fn into_iter(self) -> Self::IntoIter {
        self.xs.into_iter()
    }
}

impl<'a> Index<usize> for Intersections<'a> {
    type Output = Intersection<'a>;
    fn index(&self, i: usize) -> &Intersection<'a> {
        &self.xs[i]
    }
}
