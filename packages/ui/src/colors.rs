//! The shared color palette.
//!
//! Every `ON_*` constant is the foreground paired with its background of the
//! same name. The stylesheet mirrors these values as `--color-*` custom
//! properties, so changing a pair means changing it in both places.

pub const PRIMARY: &str = "#283593";
pub const ON_PRIMARY: &str = "#ffffff";

pub const SECONDARY: &str = "#00695c";
pub const ON_SECONDARY: &str = "#ffffff";

pub const ACCENT: &str = "#f9a825";
pub const ON_ACCENT: &str = "#212121";

pub const WHITE: &str = "#ffffff";
pub const ON_WHITE: &str = "#212121";
