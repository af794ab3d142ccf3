use foundation::math::{Vec2, Vec3};
use stations::{Category, PointRegistry};

const WORLD_UP: Vec3 = Vec3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// Pointer ray in world space. Direction is kept unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }
}

/// Hit-sphere radius per point kind. Station cities and fire markers
/// render smaller than the landmark points, and the satellite coverage
/// cities sit in between; the hit spheres match the rendered sizes.
pub fn pick_radius(category: Category) -> f64 {
    match category {
        Category::Monitoring | Category::Observatory | Category::Satellite => 0.05,
        Category::TempoPollutant => 0.025,
        Category::Station | Category::Fire => 0.02,
    }
}

/// Distance along `ray` to the first intersection with a sphere, if any.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f64) -> Option<f64> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let near = -b - sqrt_disc;
    if near >= 0.0 {
        return Some(near);
    }
    // Origin inside the sphere still counts as a hit.
    let far = -b + sqrt_disc;
    (far >= 0.0).then_some(far)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub name: String,
    pub distance: f64,
}

/// Nearest registered point under the ray. Exact distance ties keep the
/// first name in registry order, so the result is deterministic.
pub fn pick(ray: &Ray, registry: &PointRegistry) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    registry.for_each(|entry| {
        let radius = pick_radius(entry.point.category());
        let Some(distance) = ray_sphere(ray, entry.point.position(), radius) else {
            return;
        };
        if best.as_ref().is_none_or(|hit| distance < hit.distance) {
            best = Some(PickHit {
                name: entry.point.name().to_owned(),
                distance,
            });
        }
    });
    best
}

/// Pinhole ray through normalized device coordinates (x right, y up,
/// both in [-1, 1]) for a camera at `eye` looking at `target`.
pub fn screen_ray(eye: Vec3, target: Vec3, fov_y_deg: f64, aspect: f64, ndc: Vec2) -> Ray {
    let forward = (target - eye).normalized();
    let mut right = forward.cross(WORLD_UP);
    if right.length_squared() == 0.0 {
        // Looking straight along the pole axis; any horizontal works.
        right = Vec3::new(1.0, 0.0, 0.0);
    } else {
        right = right.normalized();
    }
    let up = right.cross(forward);

    let half_h = (fov_y_deg.to_radians() / 2.0).tan();
    let half_w = half_h * aspect;
    let direction = forward + right * (ndc.x * half_w) + up * (ndc.y * half_h);
    Ray::new(eye, direction)
}
