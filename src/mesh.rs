use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Hängt einen achsenparallelen Quader an (6 Faces, CCW von außen).
pub fn push_cuboid(
    verts: &mut Vec<Vertex>,
    inds: &mut Vec<u32>,
    min: Vec3,
    max: Vec3,
    color: [f32; 3],
) {
    let (x0, y0, z0) = (min.x, min.y, min.z);
    let (x1, y1, z1) = (max.x, max.y, max.z);

    // +X
    push_face(verts, inds, color, [x1, y0, z0], [x1, y1, z0], [x1, y1, z1], [x1, y0, z1]);
    // -X
    push_face(verts, inds, color, [x0, y0, z1], [x0, y1, z1], [x0, y1, z0], [x0, y0, z0]);
    // +Y (top)
    push_face(verts, inds, shade(color, 1.1), [x0, y1, z0], [x0, y1, z1], [x1, y1, z1], [x1, y1, z0]);
    // -Y (bottom)
    push_face(verts, inds, shade(color, 0.6), [x1, y0, z0], [x1, y0, z1], [x0, y0, z1], [x0, y0, z0]);
    // +Z
    push_face(verts, inds, shade(color, 0.85), [x1, y0, z1], [x1, y1, z1], [x0, y1, z1], [x0, y0, z1]);
    // -Z
    push_face(verts, inds, shade(color, 0.85), [x0, y0, z0], [x0, y1, z0], [x1, y1, z0], [x1, y0, z0]);
}

fn shade(c: [f32; 3], f: f32) -> [f32; 3] {
    [
        (c[0] * f).min(1.0),
        (c[1] * f).min(1.0),
        (c[2] * f).min(1.0),
    ]
}

#[inline]
fn push_face(
    verts: &mut Vec<Vertex>,
    inds: &mut Vec<u32>,
    color: [f32; 3],
    p0: [f32; 3],
    p1: [f32; 3],
    p2: [f32; 3],
    p3: [f32; 3],
) {
    let base = verts.len() as u32;

    verts.push(Vertex { pos: p0, color });
    verts.push(Vertex { pos: p1, color });
    verts.push(Vertex { pos: p2, color });
    verts.push(Vertex { pos: p3, color });

    // zwei Dreiecke (0,1,2) und (0,2,3)
    inds.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}
