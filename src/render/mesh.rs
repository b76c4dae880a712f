use super::helpers;
use crate::core::geometry::{MeshData, Vertex};
use crate::core::scene::StandardMaterial;
use crate::core::{NodeId, SceneGraph};
use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

/// Per-draw data read by the shader through `instance_index`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ModelPacked {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
    color: [f32; 4],
    // x = metalness, y = roughness
    pbr: [f32; 4],
}

/// One mesh node's slice of the shared index buffer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DrawItem {
    pub(crate) node: NodeId,
    pub(crate) first_index: u32,
    pub(crate) index_count: u32,
    pub(crate) base_vertex: i32,
}

pub(crate) struct MeshResources {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) model_buffer: wgpu::Buffer,
    pub(crate) draws: Vec<DrawItem>,
    packed: Vec<ModelPacked>,
}

impl MeshResources {
    /// Upload the geometry of every mesh currently attached to the scene.
    pub(crate) fn upload(device: &wgpu::Device, scene: &SceneGraph) -> Self {
        let mut vertices: Vec<Vertex> = Vec::new();
        let mut indices: Vec<u32> = Vec::new();
        let mut draws = Vec::new();
        let mut packed = Vec::new();
        for (node, world, mesh) in scene.visible_meshes() {
            let data = MeshData::for_shape(&mesh.shape);
            draws.push(DrawItem {
                node,
                first_index: indices.len() as u32,
                index_count: data.indices.len() as u32,
                base_vertex: vertices.len() as i32,
            });
            vertices.extend_from_slice(&data.vertices);
            indices.extend_from_slice(&data.indices);
            packed.push(pack(world, &mesh.material));
        }
        log::info!(
            "[gpu] uploaded {} meshes ({} vertices, {} indices)",
            draws.len(),
            vertices.len(),
            indices.len()
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        // Storage buffers must not be empty.
        if packed.is_empty() {
            packed.push(ModelPacked::zeroed());
        }
        let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_models"),
            contents: bytemuck::cast_slice(&packed),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            vertex_buffer,
            index_buffer,
            model_buffer,
            draws,
            packed,
        }
    }

    /// Refresh world matrices from the scene; materials are fixed at upload.
    pub(crate) fn write_models(&mut self, queue: &wgpu::Queue, scene: &SceneGraph) {
        for (slot, draw) in self.packed.iter_mut().zip(&self.draws) {
            let world = scene.world_matrix(draw.node);
            slot.model = world.to_cols_array_2d();
            slot.normal = world.inverse().transpose().to_cols_array_2d();
        }
        queue.write_buffer(&self.model_buffer, 0, bytemuck::cast_slice(&self.packed));
    }

    pub(crate) fn draw<'p>(&self, pass: &mut wgpu::RenderPass<'p>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        for (i, d) in self.draws.iter().enumerate() {
            let instance = i as u32;
            pass.draw_indexed(
                d.first_index..d.first_index + d.index_count,
                d.base_vertex,
                instance..instance + 1,
            );
        }
    }
}

fn pack(world: glam::Mat4, material: &StandardMaterial) -> ModelPacked {
    let [r, g, b] = material.color;
    ModelPacked {
        model: world.to_cols_array_2d(),
        normal: world.inverse().transpose().to_cols_array_2d(),
        color: [r, g, b, 1.0],
        pbr: [material.metalness, material.roughness, 0.0, 0.0],
    }
}

/// Scene bind group layout: uniforms at 0, per-model storage at 1.
pub(crate) fn create_scene_bgl(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let vis = wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT;
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[
            helpers::uniform_entry(0, vis),
            helpers::storage_entry(1, wgpu::ShaderStages::VERTEX),
        ],
    })
}

pub(crate) fn create_mesh_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    scene_bgl: &wgpu::BindGroupLayout,
    shadow_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mesh_pl"),
        bind_group_layouts: &[scene_bgl, shadow_bgl],
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("mesh_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(wgpu::DepthBiasState::default())),
        multisample: helpers::multisample(sample_count),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
