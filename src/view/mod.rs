pub mod diagram;

pub use diagram::render_diagram;
pub use diagram::render_json;
