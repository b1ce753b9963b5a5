pub mod command_line;
mod command_result;
pub mod init;
pub mod list;
pub mod render;
pub mod show;

pub use command_result::*;
