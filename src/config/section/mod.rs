//! Configuration section definitions.
//!
//! Each module corresponds to a section in `config.toml`:
//!
//! | Module   | TOML Section  | Purpose                          |
//! |----------|---------------|----------------------------------|
//! | `site`   | `[site]`      | Title, base URL, keywords        |
//! | `menu`   | `[[menu]]`    | Navigation entries               |
//! | `author` | `[[author]]`  | Author roster                    |
//! | `theme`  | `[theme]`     | Theme directory and config file  |
//! | `build`  | `[build]`     | Output and asset settings        |

mod author;
mod build;
mod menu;
mod site;
mod theme;

pub use author::Author;
pub use build::BuildConfig;
pub use menu::Menu;
pub use site::SiteConfig;
pub use theme::Theme;
