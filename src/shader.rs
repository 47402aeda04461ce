//! WGSL source and GPU-side data layouts for the particle renderer.
//!
//! One quad per particle, expanded in the vertex shader; the fragment
//! shader carves the quad into a filled circle with a soft glow skirt.

use bytemuck::{Pod, Zeroable};

/// Per-particle instance data fed to the vertex shader.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Instance {
    /// Center in arena pixels.
    pub position: [f32; 2],
    /// Linear RGB.
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Frame-constant parameters.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    /// Arena size in pixels.
    pub resolution: [f32; 2],
    /// Particle radius in pixels.
    pub radius: f32,
    /// Glow skirt width in pixels beyond the radius.
    pub glow: f32,
}

/// Width of the glow halo around each particle, px.
pub const GLOW_RADIUS: f32 = 8.0;

pub const SHADER_SOURCE: &str = r#"struct Uniforms {
    resolution: vec2<f32>,
    radius: f32,
    glow: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) particle_pos: vec2<f32>,
    @location(1) particle_color: vec3<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let corner = quad_vertices[vertex_index];
    let half_extent = uniforms.radius + uniforms.glow;
    let pixel = particle_pos + corner * half_extent;

    // Arena pixels (origin top-left, y down) to clip space.
    let clip = vec2<f32>(
        pixel.x / uniforms.resolution.x * 2.0 - 1.0,
        1.0 - pixel.y / uniforms.resolution.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(clip, 0.0, 1.0);
    out.color = particle_color;
    out.uv = corner;

    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dist = length(in.uv);
    if dist > 1.0 {
        discard;
    }

    // Fraction of the quad occupied by the solid disc.
    let core = uniforms.radius / (uniforms.radius + uniforms.glow);
    if dist <= core {
        return vec4<f32>(in.color, 1.0);
    }

    let falloff = 1.0 - smoothstep(core, 1.0, dist);
    let halo = mix(in.color, vec3<f32>(1.0, 1.0, 1.0), 0.35);
    return vec4<f32>(halo, falloff * 0.35);
}
"#;
