// Swapchain format and error policy. Only plain wgpu types, so the host
// tests can include this file.

/// Format the canvas is configured with, and the format frames are rendered
/// through. Shaders write linear colour, so `view` is always an sRGB format
/// when one exists for `surface`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceFormats {
    pub surface: wgpu::TextureFormat,
    pub view: wgpu::TextureFormat,
}

impl SurfaceFormats {
    /// Extra view formats the surface must allow.
    pub fn extra_view_formats(&self) -> Vec<wgpu::TextureFormat> {
        if self.view == self.surface {
            vec![]
        } else {
            vec![self.view]
        }
    }
}

/// Pick a swapchain format from the surface capabilities. An sRGB format is
/// taken as is; otherwise the first 8-bit format that has an sRGB view
/// counterpart (WebGPU canvases only offer the plain `*8Unorm` ones).
pub fn pick_surface_formats(available: &[wgpu::TextureFormat]) -> Option<SurfaceFormats> {
    if let Some(f) = available.iter().copied().find(|f| f.is_srgb()) {
        return Some(SurfaceFormats {
            surface: f,
            view: f,
        });
    }
    let surface = available
        .iter()
        .copied()
        .find(|f| f.add_srgb_suffix().is_srgb())
        .or_else(|| available.first().copied())?;
    Some(SurfaceFormats {
        surface,
        view: surface.add_srgb_suffix(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRecovery {
    /// Configure the surface again at its current size and skip the frame.
    Reconfigure,
    /// Skip the frame; the next one will most likely succeed.
    Skip,
    /// Report it; retrying will not help.
    Fatal,
}

pub fn frame_recovery(err: &wgpu::SurfaceError) -> FrameRecovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => FrameRecovery::Reconfigure,
        wgpu::SurfaceError::Timeout => FrameRecovery::Skip,
        _ => FrameRecovery::Fatal,
    }
}
