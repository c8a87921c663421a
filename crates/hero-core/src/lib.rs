pub mod camera;
pub mod config;
pub mod constants;
pub mod ease;
pub mod geometry;
pub mod palette;
pub mod scroll;
pub mod sections;
pub mod uniforms;
pub mod viewport;

pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use ease::*;
pub use geometry::*;
pub use palette::*;
pub use scroll::*;
pub use sections::*;
pub use uniforms::*;
pub use viewport::*;
