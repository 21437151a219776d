//! Software rendering of the maze: a top-down map and a first-person view.

mod first_person;
mod framebuffer;
mod map;
mod renderer;

pub use first_person::FirstPersonView;
pub use framebuffer::FrameBuffer;
pub use map::MapView;
pub use renderer::Renderer;
