//! Theme token resolution
//!
//! Merges the declared theme axes with the implicit default theme into the
//! single resolved token set used by the downstream generator.

mod defaults;
mod merge;
mod tokens;

pub use defaults::DefaultTheme;
pub use merge::ResolvedTheme;
pub use tokens::{FontStack, ScreenWidth, TokenError};
