mod default_layout;
mod layout_descriptor;

pub use default_layout::default_layout;
pub use layout_descriptor::{LayoutDescriptor, LayoutDescriptorError};
