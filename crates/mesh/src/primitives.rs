//! Procedural generators for the scene's primitive shapes.
//!
//! All shapes are centred on the origin except the pyramid, whose geometry is
//! given explicitly. Face culling is disabled downstream, so winding is only
//! kept consistent within each generator.

use crate::{MeshData, MeshError};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Default sphere: unit diameter, 16 vertical segments.
pub const SPHERE_TESSELLATION: u32 = 16;
/// Default cylinder: unit height and diameter, 32 segments.
pub const CYLINDER_TESSELLATION: u32 = 32;
/// Upper bound for both curved primitives; keeps vertex indices within `u32`.
pub const MAX_TESSELLATION: u32 = 1024;

fn check_dimension(name: &'static str, value: f32) -> Result<(), MeshError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidDimension { name, value })
    }
}

fn check_tessellation(got: u32) -> Result<(), MeshError> {
    if !(3..=MAX_TESSELLATION).contains(&got) {
        return Err(MeshError::Tessellation {
            min: 3,
            max: MAX_TESSELLATION,
            got,
        });
    }
    Ok(())
}

/// Axis-aligned cube with edge length `size`. 24 vertices, 12 triangles.
pub fn cube(size: f32) -> Result<MeshData, MeshError> {
    check_dimension("size", size)?;
    let p = size * 0.5;
    // (normal, in-plane u, in-plane v) per face
    let faces = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    ];

    let mut mesh = MeshData::with_capacity(24, 36);
    for (normal, u, v) in faces {
        let center = normal * p;
        let a = mesh.push_vertex(center - u * p - v * p, normal);
        let b = mesh.push_vertex(center + u * p - v * p, normal);
        let c = mesh.push_vertex(center + u * p + v * p, normal);
        let d = mesh.push_vertex(center - u * p + v * p, normal);
        mesh.push_triangle(a, b, c);
        mesh.push_triangle(c, d, a);
    }
    tracing::debug!(vertices = mesh.vertex_count(), "generated cube");
    Ok(mesh)
}

/// Latitude/longitude sphere.
///
/// `tessellation` is the number of vertical segments; there are twice as many
/// horizontal segments. Each pole is a single vertex.
pub fn sphere(diameter: f32, tessellation: u32) -> Result<MeshData, MeshError> {
    check_dimension("diameter", diameter)?;
    check_tessellation(tessellation)?;

    let vertical = tessellation;
    let horizontal = tessellation * 2;
    let radius = diameter * 0.5;
    let ring_vertices = (vertical - 1) * horizontal;
    let triangles = 2 * horizontal + (vertical - 2) * horizontal * 2;

    let mut mesh = MeshData::with_capacity(ring_vertices as usize + 2, triangles as usize * 3);

    mesh.push_vertex(Vec3::NEG_Y * radius, Vec3::NEG_Y);
    for i in 0..vertical - 1 {
        let latitude = (i + 1) as f32 * PI / vertical as f32 - PI / 2.0;
        let (dy, dxz) = latitude.sin_cos();
        for j in 0..horizontal {
            let longitude = j as f32 * TAU / horizontal as f32;
            let (dz, dx) = longitude.sin_cos();
            let normal = Vec3::new(dx * dxz, dy, dz * dxz);
            mesh.push_vertex(normal * radius, normal);
        }
    }
    let top = mesh.push_vertex(Vec3::Y * radius, Vec3::Y);

    // Bottom cap fan
    for j in 0..horizontal {
        mesh.push_triangle(0, 1 + (j + 1) % horizontal, 1 + j);
    }

    // Latitude bands
    for i in 0..vertical - 2 {
        for j in 0..horizontal {
            let next_i = i + 1;
            let next_j = (j + 1) % horizontal;
            mesh.push_triangle(
                1 + i * horizontal + j,
                1 + i * horizontal + next_j,
                1 + next_i * horizontal + j,
            );
            mesh.push_triangle(
                1 + i * horizontal + next_j,
                1 + next_i * horizontal + next_j,
                1 + next_i * horizontal + j,
            );
        }
    }

    // Top cap fan
    for j in 0..horizontal {
        mesh.push_triangle(top, top - 1 - (j + 1) % horizontal, top - 1 - j);
    }

    tracing::debug!(
        tessellation,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated sphere"
    );
    Ok(mesh)
}

fn circle_vector(i: u32, tessellation: u32) -> Vec3 {
    let angle = i as f32 * TAU / tessellation as f32;
    let (z, x) = angle.sin_cos();
    Vec3::new(x, 0.0, z)
}

/// Capped cylinder aligned with +Y and centred on the origin.
pub fn cylinder(height: f32, diameter: f32, tessellation: u32) -> Result<MeshData, MeshError> {
    check_dimension("height", height)?;
    check_dimension("diameter", diameter)?;
    check_tessellation(tessellation)?;

    let t = tessellation;
    let half = Vec3::Y * (height * 0.5);
    let radius = diameter * 0.5;
    let mut mesh = MeshData::with_capacity(4 * t as usize, (4 * t as usize - 4) * 3);

    let ring = t * 2;
    for i in 0..t {
        let normal = circle_vector(i, t);
        mesh.push_vertex(normal * radius + half, normal);
        mesh.push_vertex(normal * radius - half, normal);

        mesh.push_triangle(i * 2, i * 2 + 1, (i * 2 + 2) % ring);
        mesh.push_triangle(i * 2 + 1, (i * 2 + 3) % ring, (i * 2 + 2) % ring);
    }

    cylinder_cap(&mut mesh, t, half, radius, Vec3::Y);
    cylinder_cap(&mut mesh, t, -half, radius, Vec3::NEG_Y);

    tracing::debug!(
        tessellation,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cylinder"
    );
    Ok(mesh)
}

fn cylinder_cap(mesh: &mut MeshData, t: u32, offset: Vec3, radius: f32, normal: Vec3) {
    let base = mesh.vertex_count() as u32;
    for i in 0..t - 2 {
        if normal.y > 0.0 {
            mesh.push_triangle(base, base + (i + 1) % t, base + (i + 2) % t);
        } else {
            mesh.push_triangle(base, base + (i + 2) % t, base + (i + 1) % t);
        }
    }
    for i in 0..t {
        mesh.push_vertex(circle_vector(i, t) * radius + offset, normal);
    }
}

/// Pyramid from an apex and a convex base polygon.
///
/// One side face per base edge plus a fan-triangulated base: `2n - 2`
/// triangles for `n` base points. Vertices are not shared between faces so
/// each face keeps a flat normal pointing away from the solid.
pub fn pyramid(apex: Vec3, base: &[Vec3]) -> Result<MeshData, MeshError> {
    let n = base.len();
    if n < 3 {
        return Err(MeshError::PyramidBase(n));
    }
    if !apex.is_finite() || base.iter().any(|p| !p.is_finite()) {
        return Err(MeshError::NonFinitePoint);
    }

    let centroid = (base.iter().copied().sum::<Vec3>() + apex) / (n as f32 + 1.0);
    let mut mesh = MeshData::with_capacity(4 * n, (2 * n - 2) * 3);

    for i in 0..n {
        let a = base[i];
        let b = base[(i + 1) % n];
        let mut normal = (b - a).cross(apex - a).normalize_or_zero();
        let (first, second) = if normal.dot((a + b + apex) / 3.0 - centroid) < 0.0 {
            normal = -normal;
            (b, a)
        } else {
            (a, b)
        };
        let ia = mesh.push_vertex(first, normal);
        let ib = mesh.push_vertex(second, normal);
        let ic = mesh.push_vertex(apex, normal);
        mesh.push_triangle(ia, ib, ic);
    }

    let mut base_normal = (base[1] - base[0]).cross(base[2] - base[0]).normalize_or_zero();
    let flip = base_normal.dot(apex - base[0]) > 0.0;
    if flip {
        base_normal = -base_normal;
    }
    let first = mesh.vertex_count() as u32;
    for p in base {
        mesh.push_vertex(*p, base_normal);
    }
    for i in 1..(n as u32 - 1) {
        if flip {
            mesh.push_triangle(first, first + i + 1, first + i);
        } else {
            mesh.push_triangle(first, first + i, first + i + 1);
        }
    }

    tracing::debug!(base_points = n, triangles = mesh.triangle_count(), "generated pyramid");
    Ok(mesh)
}
