// UI components for the TUI

pub mod command_palette;
pub mod dashboard;
pub mod header;
pub mod input;
pub mod result;
pub mod sidebar;
pub mod status;

pub use command_palette::CommandPaletteComponent;
pub use dashboard::DashboardComponent;
pub use header::HeaderComponent;
pub use input::InputComponent;
pub use result::ResultComponent;
pub use sidebar::SidebarComponent;
pub use status::StatusComponent;
