mod features;
mod footer;
mod hero;
mod navbar;
mod tooltip;
mod utils;
mod verify_section;

pub use features::render_features;
pub use footer::render_footer;
pub use hero::render_hero;
pub use navbar::render_navbar;
pub use verify_section::render_verify_section;
