//! Configuration section definitions.
//!
//! Each module corresponds to a section in `guidepost.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `site`    | `[site]`     | Site identity (base, title, theme)   |
//! | `theme`   | `[theme]`    | Domain, author, display, sidebar     |
//! | `plugins` | `[plugins]`  | Plugin toggles and options           |
//! | `sidebar` | -            | Navigation entry tree                |

pub mod plugins;
pub mod sidebar;
mod site;
mod theme;

pub use plugins::{PluginEntry, PluginMap, PluginOptions};
pub use sidebar::{NavEntry, NavGroup};
pub use site::SiteSection;
pub use theme::{AuthorConfig, ThemeSection};
