use super::helpers::{self, DEPTH_FORMAT};
use wgpu;

/// Size-dependent attachments for the main pass.
///
/// - `depth_*` is the scene depth buffer, multisampled to match the colour.
/// - `msaa_*` is the multisampled colour target resolved into the swapchain;
///   absent when antialiasing is off.
pub(crate) struct RenderTargets {
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) msaa: Option<(wgpu::Texture, wgpu::TextureView)>,
    pub(crate) sample_count: u32,
    color_format: wgpu::TextureFormat,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (depth_tex, depth_view) = Self::create_depth(device, width, height, sample_count);
        let msaa = Self::create_msaa(device, width, height, color_format, sample_count);
        Self {
            depth_tex,
            depth_view,
            msaa,
            sample_count,
            color_format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.depth_tex, self.depth_view) =
            Self::create_depth(device, width, height, self.sample_count);
        self.msaa = Self::create_msaa(device, width, height, self.color_format, self.sample_count);
    }

    fn create_depth(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_texture(
            device,
            "depth_tex",
            width,
            height,
            DEPTH_FORMAT,
            sample_count,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        )
    }

    fn create_msaa(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Option<(wgpu::Texture, wgpu::TextureView)> {
        (sample_count > 1).then(|| {
            helpers::create_texture(
                device,
                "msaa_color",
                width,
                height,
                format,
                sample_count,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
            )
        })
    }
}
