mod terminal;

pub mod render;

pub use terminal::TerminalDashboard;
