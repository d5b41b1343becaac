use nalgebra::Vector3;

/// The solver's working set of 0 to 4 points in Minkowski-difference space.
///
/// Fixed capacity, ordered newest-first: slot A (index 0) always holds the
/// most recently added point, with B, C, D behind it. Only the first `len`
/// slots are meaningful; stale slots are overwritten wholesale by the
/// `set_*` methods and never read.
#[derive(Debug, Clone)]
pub struct Simplex {
    points: [Vector3<f64>; 4],
    len: usize,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Self {
            points: [Vector3::zeros(); 4],
            len: 0,
        }
    }

    /// Returns the number of points currently held (0 to 4).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns point A, the newest point.
    pub fn get_a(&self) -> Vector3<f64> {
        debug_assert!(self.len >= 1, "simplex has no point A");
        self.points[0]
    }

    /// Returns point B, the second newest point.
    pub fn get_b(&self) -> Vector3<f64> {
        debug_assert!(self.len >= 2, "simplex has no point B");
        self.points[1]
    }

    /// Returns point C, the third newest point.
    pub fn get_c(&self) -> Vector3<f64> {
        debug_assert!(self.len >= 3, "simplex has no point C");
        self.points[2]
    }

    /// Returns point D, the oldest point of a tetrahedron.
    pub fn get_d(&self) -> Vector3<f64> {
        debug_assert!(self.len >= 4, "simplex has no point D");
        self.points[3]
    }

    /// Inserts a new point at the front: it becomes A, and the existing
    /// points shift back one slot.
    ///
    /// # Panics
    /// Panics in debug builds if the simplex already holds four points.
    pub fn push(&mut self, point: Vector3<f64>) {
        debug_assert!(self.len < 4, "simplex is already a tetrahedron");
        for i in (0..self.len).rev() {
            self.points[i + 1] = self.points[i];
        }
        self.points[0] = point;
        self.len += 1;
    }

    /// Replaces the simplex with the line segment [a, b], newest first.
    pub fn set_ab(&mut self, a: Vector3<f64>, b: Vector3<f64>) {
        self.points[0] = a;
        self.points[1] = b;
        self.len = 2;
    }

    /// Replaces the simplex with the triangle [a, b, c], newest first.
    pub fn set_abc(&mut self, a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) {
        self.points[0] = a;
        self.points[1] = b;
        self.points[2] = c;
        self.len = 3;
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new()
    }
}
