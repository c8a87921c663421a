//! GPU uniform blocks, laid out to match the WGSL structs byte for byte.

use crate::palette::Palette;
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    pub model: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub color3: [f32; 4],
    pub accent: [f32; 4],
    pub time: f32,
    pub scroll_velocity: f32,
    pub section_index: f32,
    pub _pad: f32,
}

impl MeshUniforms {
    pub fn compose(
        model: Mat4,
        view_proj: Mat4,
        palette: &Palette,
        time: f32,
        scroll_velocity: f32,
        section_index: f32,
    ) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view_proj: view_proj.to_cols_array_2d(),
            color1: palette.primary.to_vec4(),
            color2: palette.secondary.to_vec4(),
            color3: palette.tertiary.to_vec4(),
            accent: palette.accent.to_vec4(),
            time,
            scroll_velocity,
            section_index,
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PostUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub threshold: f32,
    pub blur_dir: [f32; 2],
    pub bloom_strength: f32,
    pub grain: f32,
}
