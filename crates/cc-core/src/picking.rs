//! Mouse picking: screen click -> world ray -> cube.
//!
//! Degenerate inputs (zero ray components, singular matrices, a ray parallel
//! to the ground plane) are not guarded. They propagate as IEEE Inf/NaN so the
//! hot path stays branch-free.

use log::{debug, trace, warn};

use crate::camera::{CameraState, Viewport};
use crate::math::{Matrix4, Vector3, Vector4};
use crate::scene::{Cube, Scene};

/// A half-line in world space. `direction` is unit length for unprojected rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Point where the ray crosses the ground plane `y = 0`.
    pub fn ground_intersection(&self) -> Vector3 {
        let t = -self.origin.y / self.direction.y;
        self.at(t)
    }
}

/// Ray/AABB acceptance rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HitTest {
    /// Slab test against the full line; boxes behind the origin still hit.
    #[default]
    Line,
    /// Slab test that also rejects boxes whose exit time is negative.
    Forward,
}

/// Outcome of a click. Indices refer to [`Scene::cubes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickResult {
    Selected(usize),
    Spawned(usize),
    Missed,
}

/// Screen pixel to normalized device coordinates. Screen Y grows downwards.
pub fn screen_to_ndc(screen_x: f32, screen_y: f32, viewport: Viewport) -> (f32, f32) {
    let ndc_x = (2.0 * screen_x) / viewport.width - 1.0;
    let ndc_y = 1.0 - (2.0 * screen_y) / viewport.height;
    (ndc_x, ndc_y)
}

/// Builds the world-space ray under a screen pixel.
///
/// The near (`z = -1`) and far (`z = 1`) NDC points are taken through the
/// inverse projection, then the inverse view, then divided by `w`.
pub fn unproject(
    screen_x: f32,
    screen_y: f32,
    viewport: Viewport,
    projection: &Matrix4,
    view: &Matrix4,
) -> Ray {
    let (ndc_x, ndc_y) = screen_to_ndc(screen_x, screen_y, viewport);
    debug!("Normalized device coordinates: {}, {}", ndc_x, ndc_y);

    let inv_projection = projection.invert();
    let inv_view = view.invert();

    let near_point = Vector4::new(ndc_x, ndc_y, -1.0, 1.0)
        .mul(&inv_projection)
        .mul(&inv_view);
    let far_point = Vector4::new(ndc_x, ndc_y, 1.0, 1.0)
        .mul(&inv_projection)
        .mul(&inv_view);
    trace!("Near point: {:?}, far point: {:?}", near_point, far_point);

    let near_point = near_point.div(near_point.w);
    let far_point = far_point.div(far_point.w);

    let origin = near_point.xyz();
    let direction = (far_point.xyz() - origin).normalize();
    debug!("Ray origin: {:?}, direction: {:?}", origin, direction);

    Ray::new(origin, direction)
}

/// Entry/exit parameters of the ray along one axis, sorted.
///
/// A NaN on either side poisons both bounds, so the caller's comparisons
/// never reject on that axis.
fn slab(min: f32, max: f32, origin: f32, direction: f32) -> (f32, f32) {
    let div = 1.0 / direction;
    let t1 = (min - origin) * div;
    let t2 = (max - origin) * div;
    if t1.is_nan() || t2.is_nan() {
        return (f32::NAN, f32::NAN);
    }
    if t1 <= t2 { (t1, t2) } else { (t2, t1) }
}

/// Merged `(entry, exit)` interval, or `None` as soon as two axes disagree.
fn slab_interval(ray: &Ray, min: Vector3, max: Vector3) -> Option<(f32, f32)> {
    let (mut t_min, mut t_max) = slab(min.x, max.x, ray.origin.x, ray.direction.x);
    let (ty_min, ty_max) = slab(min.y, max.y, ray.origin.y, ray.direction.y);

    if t_min > ty_max || ty_min > t_max {
        return None;
    }
    if ty_min > t_min {
        t_min = ty_min;
    }
    if ty_max < t_max {
        t_max = ty_max;
    }

    let (tz_min, tz_max) = slab(min.z, max.z, ray.origin.z, ray.direction.z);
    if t_min > tz_max || tz_min > t_max {
        return None;
    }
    if tz_min > t_min {
        t_min = tz_min;
    }
    if tz_max < t_max {
        t_max = tz_max;
    }

    Some((t_min, t_max))
}

/// Slab test of `ray` against the box `[min, max]`.
///
/// Does not distinguish hits behind the origin from hits in front of it.
pub fn intersects(ray: &Ray, min: Vector3, max: Vector3) -> bool {
    slab_interval(ray, min, max).is_some()
}

/// Like [`intersects`], but a box entirely behind the origin is a miss.
pub fn intersects_forward(ray: &Ray, min: Vector3, max: Vector3) -> bool {
    matches!(slab_interval(ray, min, max), Some((_, t_max)) if t_max >= 0.0 || t_max.is_nan())
}

impl HitTest {
    pub fn test(self, ray: &Ray, cube: &Cube) -> bool {
        match self {
            HitTest::Line => intersects(ray, cube.aabb_min(), cube.aabb_max()),
            HitTest::Forward => intersects_forward(ray, cube.aabb_min(), cube.aabb_max()),
        }
    }
}

/// Finds the hit cube whose origin is closest to the ray origin.
///
/// Cubes are visited in scene order. A cube is only tested when its squared
/// distance is strictly below the best hit so far, and a hit never stops the
/// scan. This can skip a cube whose box is entered first along the ray but
/// whose centre is farther away.
pub fn closest_hit(ray: &Ray, scene: &Scene, hit_test: HitTest) -> Option<usize> {
    scene
        .iter()
        .enumerate()
        .fold((None, f32::INFINITY), |(hit, closest), (index, cube)| {
            let distance = ray.origin.distance_squared(cube.position());
            if distance.is_nan() || distance >= closest {
                return (hit, closest);
            }

            trace!(
                "Cube {} AABB min {:?}, max {:?}",
                index,
                cube.aabb_min(),
                cube.aabb_max()
            );
            let does_intersect = hit_test.test(ray, cube);
            trace!("Cube {} intersects: {}", index, does_intersect);

            if does_intersect {
                (Some(index), distance)
            } else {
                (hit, closest)
            }
        })
        .0
}

/// Resolves an already built ray against the scene.
///
/// Every cube is deactivated first. A hit activates that cube; otherwise, when
/// `spawn_if_miss` is set, a new inactive cube is appended where the ray
/// crosses `y = 0`.
pub fn resolve(ray: &Ray, scene: &mut Scene, spawn_if_miss: bool, hit_test: HitTest) -> PickResult {
    let hit = closest_hit(ray, scene, hit_test);

    scene.select_only(hit);

    if let Some(index) = hit {
        debug!("Selected cube {}", index);
        return PickResult::Selected(index);
    }

    if spawn_if_miss {
        let target = ray.ground_intersection();
        if !target.is_finite() {
            warn!("Spawn target is not finite: {:?}", target);
        }
        let index = scene.push(Cube::new(target));
        debug!("Spawned cube {} at {:?}", index, target);
        return PickResult::Spawned(index);
    }

    PickResult::Missed
}

/// Full click pipeline: unproject the pixel with the camera's current
/// matrices, then [`resolve`] against the scene.
pub fn pick(
    screen_x: f32,
    screen_y: f32,
    camera: &CameraState,
    scene: &mut Scene,
    spawn_if_miss: bool,
    hit_test: HitTest,
) -> PickResult {
    let ray = unproject(
        screen_x,
        screen_y,
        camera.viewport(),
        camera.projection(),
        camera.view(),
    );
    resolve(&ray, scene, spawn_if_miss, hit_test)
}
