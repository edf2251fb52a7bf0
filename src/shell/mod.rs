//! Text-menu shell
//!
//! The interactive layer over the core:
//! - `menu` - the fixed command set and its parser
//! - `session` - the prompt/dispatch loop, generic over reader and writer

pub mod menu;
pub mod session;

pub use menu::{MenuCommand, MENU};
pub use session::Session;
