// Landing page sections

mod features;
mod footer;
mod header;
mod hero;
mod icons;
mod install;

pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
