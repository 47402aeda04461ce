//! Error types for the playground.
//!
//! The simulation arithmetic itself never fails; everything fallible lives
//! in windowing and GPU setup.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running a playground.
#[derive(Debug)]
pub enum PlaygroundError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for PlaygroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaygroundError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            PlaygroundError::Window(e) => write!(f, "Failed to create window: {}", e),
            PlaygroundError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for PlaygroundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaygroundError::EventLoop(e) => Some(e),
            PlaygroundError::Window(e) => Some(e),
            PlaygroundError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for PlaygroundError {
    fn from(e: winit::error::EventLoopError) -> Self {
        PlaygroundError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for PlaygroundError {
    fn from(e: winit::error::OsError) -> Self {
        PlaygroundError::Window(e)
    }
}

impl From<GpuError> for PlaygroundError {
    fn from(e: GpuError) -> Self {
        PlaygroundError::Gpu(e)
    }
}
