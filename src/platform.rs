//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reveal password shortcut display
/// Bound to Ctrl on all platforms: terminals rarely forward Cmd
pub const REVEAL_SHORTCUT: &str = "Ctrl+R";

/// Switch to the sign in view
#[cfg(target_os = "macos")]
pub const SIGN_IN_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const SIGN_IN_SHORTCUT: &str = "Ctrl+L";
