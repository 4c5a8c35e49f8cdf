pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod scaffold;

pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use scaffold::Scaffold;
