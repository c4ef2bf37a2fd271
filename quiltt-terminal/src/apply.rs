//! Pushing a [`Config`] into a [`Terminal`].

use quiltt_config::Config;

use crate::capability::{CursorBlinkMode, Terminal, TerminalError};
use crate::font::FontDescription;

/// Forward every setting in `config` to `terminal`.
///
/// Calls go out in a fixed order: font, the four single colors, the palette
/// as one batch, scrollback, bold-is-bright, cursor blink. The first error
/// from the terminal stops the push and is returned to the caller.
pub fn apply_config<T>(config: &Config, terminal: &mut T) -> Result<(), TerminalError>
where
    T: Terminal + ?Sized,
{
    terminal.set_font(&FontDescription::parse(&config.font))?;

    terminal.set_foreground(config.foreground)?;
    terminal.set_background(config.background)?;
    terminal.set_cursor_color(config.cursor)?;
    terminal.set_highlight_color(config.highlight)?;

    terminal.set_palette(&config.palette)?;

    terminal.set_scrollback_lines(config.scrollback_lines)?;
    terminal.set_bold_is_bright(config.bold_is_bright)?;
    terminal.set_cursor_blink_mode(CursorBlinkMode::from(config.cursor_blink))?;

    Ok(())
}
