use nalgebra::{Matrix4, Point3, Vector3};

/// A convex shape described by its local-space vertex cloud and a world transform.
///
/// Only the extreme points of the shape matter for collision queries, so the
/// vertices carry no hull topology (faces, edges). The convex hull of the
/// cloud is implied.
#[derive(Debug, Clone)]
pub struct ConvexBody {
    vertices: Vec<Point3<f64>>,
    transform: Matrix4<f64>,
}

impl ConvexBody {
    /// Creates a new convex body from its local-space vertices.
    ///
    /// The world transform starts as the identity; use [`ConvexBody::update`]
    /// to place the body in the world.
    ///
    /// # Arguments
    /// * `vertices` - The local-space vertex cloud of the shape.
    ///
    /// # Example
    /// ```
    /// use nalgebra::Point3;
    /// use rs_collision::models::ConvexBody;
    ///
    /// let tetra = ConvexBody::new(vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    ///     Point3::new(0.0, 0.0, 1.0),
    /// ]);
    /// assert_eq!(tetra.vertices().len(), 4);
    /// ```
    pub fn new(vertices: Vec<Point3<f64>>) -> Self {
        Self {
            vertices,
            transform: Matrix4::identity(),
        }
    }

    /// Replaces the local-space vertex set. The transform is untouched.
    pub fn set_vertices(&mut self, vertices: Vec<Point3<f64>>) {
        self.vertices = vertices;
    }

    /// Replaces the body's world transform wholesale.
    ///
    /// # Arguments
    /// * `transform` - The 4×4 affine matrix mapping local space to world space.
    pub fn update(&mut self, transform: Matrix4<f64>) {
        self.transform = transform;
    }

    /// Returns the local-space vertices.
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Returns the current world transform.
    pub fn transform(&self) -> &Matrix4<f64> {
        &self.transform
    }

    /// Returns the world-space vertex of this body farthest along `direction`.
    ///
    /// Each vertex is mapped through the world transform (as a homogeneous
    /// point, w = 1) and the one with the greatest projection onto
    /// `direction` wins. Ties keep the earliest vertex in input order: the
    /// scan uses a strict greater-than comparison, so a later vertex only
    /// replaces the current best when it is strictly farther.
    ///
    /// Cost is O(number of vertices); no acceleration structure is kept.
    ///
    /// # Panics
    /// Panics if the body has no vertices. Callers must not query a body
    /// before giving it geometry.
    ///
    /// # Example
    /// ```
    /// use nalgebra::{Point3, Vector3};
    /// use rs_collision::models::ConvexBody;
    ///
    /// let segment = ConvexBody::new(vec![
    ///     Point3::new(-1.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    /// ]);
    /// let farthest = segment.support_point(&Vector3::new(1.0, 0.0, 0.0));
    /// assert_eq!(farthest, Point3::new(1.0, 0.0, 0.0));
    /// ```
    pub fn support_point(&self, direction: &Vector3<f64>) -> Point3<f64> {
        let mut best = self.transform.transform_point(&self.vertices[0]);
        let mut farthest = best.coords.dot(direction);

        for vertex in &self.vertices[1..] {
            let world_vertex = self.transform.transform_point(vertex);
            let distance = world_vertex.coords.dot(direction);

            if farthest < distance {
                best = world_vertex;
                farthest = distance;
            }
        }

        best
    }
}
