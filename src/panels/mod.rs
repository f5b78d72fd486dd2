mod banner;
mod central_panel;
mod tools_panel;

pub use banner::{banner, bottom_bar};
pub use central_panel::{CanvasInput, central_panel};
pub use tools_panel::tools_panel;
