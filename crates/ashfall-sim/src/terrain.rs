//! Ground-validity query supplied by the terrain collaborator.

/// Answers whether a world point is walkable ground.
pub trait Terrain {
    fn is_ground(&self, x: f64, y: f64) -> bool;
}

/// Terrain where every point is ground.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGround;

impl Terrain for OpenGround {
    fn is_ground(&self, _x: f64, _y: f64) -> bool {
        true
    }
}

impl<F> Terrain for F
where
    F: Fn(f64, f64) -> bool,
{
    fn is_ground(&self, x: f64, y: f64) -> bool {
        self(x, y)
    }
}
