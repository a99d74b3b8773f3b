use glam::{Mat3, Mat4, Vec3};

/// Mesh vertex as laid out in the GPU vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                shader_location: 0,
                offset: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                shader_location: 1,
                offset: 12,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                shader_location: 2,
                offset: 24,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    };

    pub const fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }
}

/// Per-frame uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4], // mat3 padded to mat4 for WGSL alignment
    pub camera_position: [f32; 3],
    pub opacity: f32,
    pub background: [f32; 4],
    pub ambient: [f32; 4],          // rgb color, intensity in w
    pub light_dirs: [[f32; 4]; 2],  // direction towards the light, intensity in w
    pub light_colors: [[f32; 4]; 2],
}

impl SceneUniform {
    /// Normal matrix for `model`, padded to 4x4
    pub fn normal_matrix_for(model: Mat4) -> [[f32; 4]; 4] {
        let normal = Mat3::from_mat4(model).inverse().transpose();
        Mat4::from_mat3(normal).to_cols_array_2d()
    }

    pub fn camera(&mut self, view_proj: Mat4, position: Vec3) {
        self.view_proj = view_proj.to_cols_array_2d();
        self.camera_position = position.to_array();
    }
}

impl Default for SceneUniform {
    fn default() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view_proj: identity,
            model: identity,
            normal_matrix: identity,
            camera_position: [0.0, 0.0, 5.0],
            opacity: 0.0,
            background: [1.0, 1.0, 1.0, 1.0],
            ambient: [1.0, 1.0, 1.0, 0.0],
            light_dirs: [[0.0; 4]; 2],
            light_colors: [[1.0, 1.0, 1.0, 1.0]; 2],
        }
    }
}
