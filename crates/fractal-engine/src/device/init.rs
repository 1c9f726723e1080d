/// Settings the window's GPU context is created with.
///
/// Preferences the surface cannot honor fall back to something it supports;
/// only the feature and limit requests can make device creation fail.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format if one is offered.
    ///
    /// When false a non-sRGB format is picked if the surface offers one, so
    /// shader output lands on screen unencoded.
    pub prefer_srgb: bool,

    /// Swap behavior. The render loop has no frame limiter of its own, so
    /// `Fifo` (vsync) is what paces it.
    pub present_mode: wgpu::PresentMode,

    /// Compositor alpha mode; `None` takes the surface's first.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Frames the CPU may queue ahead of the display. A hint only.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_vsynced_and_featureless() {
        let init = GpuInit::default();
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert!(init.required_features.is_empty());
        assert!(init.alpha_mode.is_none());
    }
}
