//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for page shortcuts
/// - macOS: SUPER (Cmd key), with CONTROL also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the footer help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Theme toggle shortcut display
/// - macOS: "Cmd+T"
/// - Linux/Windows: "Ctrl+T"
#[cfg(target_os = "macos")]
pub const THEME_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const THEME_SHORTCUT: &str = "Ctrl+T";

/// Navigation menu shortcut display
/// - macOS: "Cmd+N"
/// - Linux/Windows: "Ctrl+N"
#[cfg(target_os = "macos")]
pub const MENU_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const MENU_SHORTCUT: &str = "Ctrl+N";

/// Whether a key's modifiers trigger a page shortcut
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
