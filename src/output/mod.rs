mod render;

pub use render::{render_markdown, write_itinerary};
