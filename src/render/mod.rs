pub mod renderer;
pub mod skin;

pub use renderer::Renderer;
pub use skin::{Appearance, Skin};
