use log::warn;
use nalgebra::Vector3;

use crate::errors::CollisionError;
use crate::models::{ConvexBody, Simplex};

/// Default iteration limit for the GJK main loop.
///
/// This is a hard cap, not a convergence guarantee: solves that exhaust it
/// are reported as intersecting, which is the safe direction to fail in.
pub const DEFAULT_MAX_ITERATIONS: usize = 30;

/// Computes the vector triple product `(x × y) × x`.
///
/// The result is perpendicular to `x`, lies in the plane spanned by `x` and
/// `y`, and points toward the `y` side of that plane. The solver uses it to
/// steer the search from an edge of the simplex toward the origin.
fn triple_product(x: Vector3<f64>, y: Vector3<f64>) -> Vector3<f64> {
    x.cross(&y).cross(&x)
}

/// Returns the extreme point of the Minkowski difference `body1 ⊖ body2`
/// along `direction`.
///
/// The two bodies intersect exactly when the origin lies inside their
/// Minkowski difference, so this is the only geometric query the solver
/// needs: the farthest point of `body1` along `direction` minus the farthest
/// point of `body2` along the opposite direction.
pub fn support(body1: &ConvexBody, body2: &ConvexBody, direction: &Vector3<f64>) -> Vector3<f64> {
    let p1 = body1.support_point(direction);
    let p2 = body2.support_point(&-*direction);
    p1 - p2
}

/// Tuning knobs for the GJK solver.
///
/// Any nonzero seed direction is valid; `(1, 0, 0)` is the classic fixed
/// choice and keeps runs reproducible. The adequacy of the iteration limit
/// depends on shape scale and complexity, which is why both values are
/// configurable rather than baked in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GjkConfig {
    /// The search direction used to seed the solve.
    pub initial_direction: Vector3<f64>,
    /// The maximum number of main-loop iterations before giving up.
    pub max_iterations: usize,
}

impl GjkConfig {
    /// Creates a validated configuration.
    ///
    /// # Arguments
    /// * `initial_direction` - The seed search direction; must be nonzero.
    /// * `max_iterations` - The main-loop iteration limit; must be positive.
    ///
    /// # Errors
    /// Returns an error if the direction is the zero vector or the limit is zero.
    ///
    /// # Example
    /// ```
    /// use nalgebra::Vector3;
    /// use rs_collision::interactions::GjkConfig;
    ///
    /// let config = GjkConfig::new(Vector3::new(0.0, 1.0, 0.0), 64);
    /// assert!(config.is_ok());
    ///
    /// let degenerate = GjkConfig::new(Vector3::zeros(), 64);
    /// assert!(degenerate.is_err());
    /// ```
    pub fn new(
        initial_direction: Vector3<f64>,
        max_iterations: usize,
    ) -> Result<Self, CollisionError> {
        if initial_direction.norm_squared() == 0.0 {
            return Err(CollisionError::InvalidDirection);
        }
        if max_iterations == 0 {
            return Err(CollisionError::InvalidIterationLimit);
        }
        Ok(Self {
            initial_direction,
            max_iterations,
        })
    }
}

impl Default for GjkConfig {
    fn default() -> Self {
        Self {
            initial_direction: Vector3::new(1.0, 0.0, 0.0),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// The outcome of a single GJK solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GjkResult {
    /// The simplex enclosed the origin: the bodies overlap.
    Intersecting,
    /// A supporting hyperplane separated the bodies.
    Separated,
    /// The iteration limit ran out before a terminal verdict. Treated as an
    /// intersection, since a false "separated" is the unsafe failure mode.
    IterationLimitReached,
}

impl GjkResult {
    /// Collapses the result to the boolean verdict, counting an exhausted
    /// iteration limit as an intersection.
    pub fn is_intersecting(&self) -> bool {
        !matches!(self, GjkResult::Separated)
    }
}

/// Boolean intersection test for pairs of convex bodies, using the
/// Gilbert-Johnson-Keerthi (GJK) algorithm.
///
/// The solver walks a simplex of 1 to 4 points across the Minkowski
/// difference of the two bodies, each step either proving separation, moving
/// the simplex closer to enclosing the origin, or enclosing it outright. All
/// solve state lives on the stack of a single call, so one solver can be
/// shared freely across queries.
#[derive(Debug, Clone, Default)]
pub struct GjkSolver {
    config: GjkConfig,
}

impl GjkSolver {
    /// Creates a solver with the classic defaults (seed direction `(1, 0, 0)`,
    /// iteration limit 30).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(config: GjkConfig) -> Self {
        Self { config }
    }

    /// Returns the solver's configuration.
    pub fn config(&self) -> &GjkConfig {
        &self.config
    }

    /// Tests whether two convex bodies overlap.
    ///
    /// `true` means intersecting, or inconclusive after the iteration limit;
    /// `false` means provably separated. Use [`GjkSolver::query`] when the
    /// distinction matters.
    ///
    /// # Arguments
    /// * `body1` - The first body.
    /// * `body2` - The second body.
    ///
    /// # Example
    /// ```
    /// use nalgebra::{Matrix4, Point3, Vector3};
    /// use rs_collision::interactions::GjkSolver;
    /// use rs_collision::models::ConvexBody;
    ///
    /// let cube: Vec<Point3<f64>> = vec![
    ///     Point3::new(-0.5, -0.5, -0.5),
    ///     Point3::new(0.5, -0.5, -0.5),
    ///     Point3::new(-0.5, 0.5, -0.5),
    ///     Point3::new(0.5, 0.5, -0.5),
    ///     Point3::new(-0.5, -0.5, 0.5),
    ///     Point3::new(0.5, -0.5, 0.5),
    ///     Point3::new(-0.5, 0.5, 0.5),
    ///     Point3::new(0.5, 0.5, 0.5),
    /// ];
    /// let body1 = ConvexBody::new(cube.clone());
    /// let mut body2 = ConvexBody::new(cube);
    /// body2.update(Matrix4::new_translation(&Vector3::new(0.5, 0.0, 0.0)));
    ///
    /// let solver = GjkSolver::new();
    /// assert!(solver.intersect(&body1, &body2));
    /// ```
    pub fn intersect(&self, body1: &ConvexBody, body2: &ConvexBody) -> bool {
        self.query(body1, body2).is_intersecting()
    }

    /// Runs the full GJK solve and reports how it terminated.
    ///
    /// Unlike [`GjkSolver::intersect`], this keeps "provably intersecting"
    /// and "iteration limit reached" apart, which is useful when diagnosing
    /// shapes that make the solve struggle.
    pub fn query(&self, body1: &ConvexBody, body2: &ConvexBody) -> GjkResult {
        let mut direction = self.config.initial_direction;
        let mut simplex = Simplex::new();

        // Bootstrap the simplex to a line segment. Each new difference point
        // that fails to reach past the origin along the direction it was
        // queried with proves a separating hyperplane exists.
        let c = support(body1, body2, &direction);
        if c.dot(&direction) < 0.0 {
            return GjkResult::Separated;
        }

        direction = -c;
        let b = support(body1, body2, &direction);
        if b.dot(&direction) < 0.0 {
            return GjkResult::Separated;
        }

        // Search perpendicular to the segment cb, within the plane of c, b,
        // and the origin, toward the origin.
        direction = triple_product(c - b, -b);
        simplex.set_ab(b, c);

        for _ in 0..self.config.max_iterations {
            let a = support(body1, body2, &direction);
            if a.dot(&direction) < 0.0 {
                return GjkResult::Separated;
            }

            simplex.push(a);
            if refine_simplex(&mut simplex, &mut direction) {
                return GjkResult::Intersecting;
            }
        }

        warn!(
            "GJK hit the iteration limit ({}) without a terminal simplex; reporting intersection",
            self.config.max_iterations
        );
        GjkResult::IterationLimitReached
    }
}

/// Runs one step of simplex refinement after a new point entered slot A.
///
/// Returns `true` when the simplex encloses the origin, `false` when the
/// step shrank or grew the simplex and picked a new search direction.
fn refine_simplex(simplex: &mut Simplex, direction: &mut Vector3<f64>) -> bool {
    match simplex.len() {
        3 => handle_triangle_case(simplex, direction),
        4 => handle_tetrahedron_case(simplex, direction),
        len => {
            debug_assert!(false, "refinement on a simplex of {} points", len);
            true
        }
    }
}

/// Handles the triangle case: simplex [a, b, c] with a newest.
///
/// Either the origin lies outside the triangle past one of the edges
/// touching a (shrink back to a line segment), or its projection falls
/// within the triangle and the simplex grows to a tetrahedron whose apex
/// will be sought on the origin's side of the triangle plane. The triangle
/// step never reports enclosure on its own.
fn handle_triangle_case(simplex: &mut Simplex, direction: &mut Vector3<f64>) -> bool {
    let a = simplex.get_a();
    let b = simplex.get_b();
    let c = simplex.get_c();

    let ao = -a;
    let ab = b - a;
    let ac = c - a;

    // Normal of triangle abc.
    let abc = ab.cross(&ac);

    // Plane test on edge ab.
    let abp = ab.cross(&abc);
    if abp.dot(&ao) > 0.0 {
        // Origin lies outside the triangle, near edge ab.
        simplex.set_ab(a, b);
        *direction = triple_product(ab, ao);
        return false;
    }

    // Plane test on edge ac. Note the operand order flips relative to abp:
    // with the right-hand rule, abc × ac is the one that points outward
    // across edge ac.
    let acp = abc.cross(&ac);
    if acp.dot(&ao) > 0.0 {
        // Origin lies outside the triangle, near edge ac.
        simplex.set_ab(a, c);
        *direction = triple_product(ac, ao);
        return false;
    }

    // The origin projects within the triangle, either above or below it.
    if abc.dot(&ao) > 0.0 {
        // Above: keep winding, search along the normal.
        simplex.set_abc(a, b, c);
        *direction = abc;
    } else {
        // Below: swap b and c so the face still winds outward toward the
        // next apex, search against the normal.
        simplex.set_abc(a, c, b);
        *direction = -abc;
    }

    false
}

const OVER_ABC: u8 = 0x1;
const OVER_ACD: u8 = 0x2;
const OVER_ADB: u8 = 0x4;

/// Handles the tetrahedron case: simplex [a, b, c, d] with a the newest apex.
///
/// The three faces touching a are tested for which of them the origin lies
/// outside of; the fourth face (bcd) needs no test because the previous
/// triangle step placed a on the origin's side of it. Whichever faces are
/// flagged get rotated into canonical slots so the one-face and two-face
/// refinements below can run without caring which face they started as. The
/// relabelings must move slots exactly as documented at each call site, or
/// the outward-normal convention breaks for later iterations.
fn handle_tetrahedron_case(simplex: &mut Simplex, direction: &mut Vector3<f64>) -> bool {
    let a = simplex.get_a();
    let b = simplex.get_b();
    let c = simplex.get_c();
    let d = simplex.get_d();

    let ao = -a;
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;

    let abc = ab.cross(&ac);
    let acd = ac.cross(&ad);
    let adb = ad.cross(&ab);

    let plane_tests = (if abc.dot(&ao) > 0.0 { OVER_ABC } else { 0 })
        | (if acd.dot(&ao) > 0.0 { OVER_ACD } else { 0 })
        | (if adb.dot(&ao) > 0.0 { OVER_ADB } else { 0 });

    match plane_tests {
        0 => {
            // Inside all three faces at the apex, and inside bcd by the
            // triangle step's invariant: the tetrahedron encloses the origin.
            true
        }
        OVER_ABC => refine_towards_face(simplex, direction, a, b, c, ao, ab, ac, abc),
        OVER_ACD => {
            // Rotate acd into the abc role: b <- c, c <- d.
            refine_towards_face(simplex, direction, a, c, d, ao, ac, ad, acd)
        }
        OVER_ADB => {
            // Rotate adb into the abc role: b <- d, c <- b.
            refine_towards_face(simplex, direction, a, d, b, ao, ad, ab, adb)
        }
        m if m == OVER_ABC | OVER_ACD => {
            refine_two_faces(simplex, direction, a, b, c, d, ao, ab, ac, ad, abc, acd)
        }
        m if m == OVER_ACD | OVER_ADB => {
            // Rotate (acd, adb) into the (abc, acd) roles: b <- c, c <- d, d <- b.
            refine_two_faces(simplex, direction, a, c, d, b, ao, ac, ad, ab, acd, adb)
        }
        m if m == OVER_ADB | OVER_ABC => {
            // Rotate (adb, abc) into the (abc, acd) roles: b <- d, c <- b, d <- c.
            refine_two_faces(simplex, direction, a, d, b, c, ao, ad, ab, ac, adb, abc)
        }
        _ => {
            // The origin cannot be outside all three faces at the apex when
            // the support function behaves; trip loudly in debug builds and
            // fall back to the conservative verdict otherwise.
            debug_assert!(
                plane_tests != OVER_ABC | OVER_ACD | OVER_ADB,
                "origin outside every face touching the apex; broken support function?"
            );
            true
        }
    }
}

/// Refines against a single violated face, already rotated into the abc role.
///
/// The origin is outside the plane of this face. Either it sits past one of
/// the face's edges touching a (shrink to a line segment) or it projects
/// onto the face, which then becomes the base triangle for the next apex.
/// These are the same edge checks the triangle case runs, with the ac edge
/// tested first.
#[allow(clippy::too_many_arguments)]
fn refine_towards_face(
    simplex: &mut Simplex,
    direction: &mut Vector3<f64>,
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
    ao: Vector3<f64>,
    ab: Vector3<f64>,
    ac: Vector3<f64>,
    abc: Vector3<f64>,
) -> bool {
    // Origin in the region of edge ac.
    if abc.cross(&ac).dot(&ao) > 0.0 {
        simplex.set_ab(a, c);
        *direction = triple_product(ac, ao);
        return false;
    }

    // Origin in the region of edge ab.
    if ab.cross(&abc).dot(&ao) > 0.0 {
        simplex.set_ab(a, b);
        *direction = triple_product(ab, ao);
        return false;
    }

    // Origin in the region of the face itself: rebuild the triangle on it
    // and search along its normal for the next apex.
    simplex.set_abc(a, b, c);
    *direction = abc;
    false
}

/// Refines when two adjacent faces are violated, rotated into the abc/acd
/// roles so that ac is their shared edge.
///
/// Two simultaneously flagged face tests cannot both be binding; a single
/// cross/dot test against the shared edge picks the real one. When the
/// second face wins, it rotates into the abc role and gets the full
/// single-face treatment. When the first face wins, only its ab edge can
/// still claim the origin, since the shared-edge test just ruled out the ac
/// side.
#[allow(clippy::too_many_arguments)]
fn refine_two_faces(
    simplex: &mut Simplex,
    direction: &mut Vector3<f64>,
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
    d: Vector3<f64>,
    ao: Vector3<f64>,
    ab: Vector3<f64>,
    ac: Vector3<f64>,
    ad: Vector3<f64>,
    abc: Vector3<f64>,
    acd: Vector3<f64>,
) -> bool {
    if abc.cross(&ac).dot(&ao) > 0.0 {
        // The second face is binding. Rotate it into the abc role:
        // b <- c, c <- d.
        return refine_towards_face(simplex, direction, a, c, d, ao, ac, ad, acd);
    }

    // The first face is binding; only the ab edge check remains.
    if ab.cross(&abc).dot(&ao) > 0.0 {
        simplex.set_ab(a, b);
        *direction = triple_product(ab, ao);
        return false;
    }

    simplex.set_abc(a, b, c);
    *direction = abc;
    false
}
