//! Keyboard input for the navigation loop.
//!
//! [`InputDevice`] is the raw-input collaborator: it can switch the
//! terminal into raw mode, put back whatever mode was active before, and
//! read one key at a time. [`CrosstermInput`] is the real implementation;
//! tests drive the loop with scripted devices.

use std::io;

use barmenu_core::MenuError;
use barmenu_core::navigation::Key;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

pub trait InputDevice {
    /// Enter non-canonical, no-echo mode, remembering the previous mode.
    fn enter_raw_mode(&mut self) -> io::Result<()>;

    /// Restore the mode saved by [`InputDevice::enter_raw_mode`].
    fn restore_mode(&mut self) -> io::Result<()>;

    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Terminal input through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermInput {
    /// Raw-mode flag seen before entering raw mode; `None` while not entered.
    was_raw: Option<bool>,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDevice for CrosstermInput {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        let was_raw = terminal::is_raw_mode_enabled()?;
        terminal::enable_raw_mode()?;
        self.was_raw = Some(was_raw);
        Ok(())
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        match self.was_raw.take() {
            Some(false) => terminal::disable_raw_mode(),
            _ => Ok(()),
        }
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let CrosstermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key));
                }
            }
        }
    }
}

/// Translate a crossterm key event into a menu key.
///
/// Raw mode swallows the interrupt signal, so Ctrl+C is treated as Escape.
pub fn map_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Raw input mode held for the lifetime of the guard.
///
/// Dropping the guard restores the previous mode on every path out of the
/// navigation loop, including errors and unwinding.
pub struct RawModeGuard<'a, D: InputDevice> {
    device: &'a mut D,
}

impl<'a, D: InputDevice> RawModeGuard<'a, D> {
    pub fn acquire(device: &'a mut D) -> Result<Self, MenuError> {
        device
            .enter_raw_mode()
            .map_err(MenuError::InputModeChangeFailed)?;
        log::debug!("raw input mode entered");
        Ok(Self { device })
    }

    pub fn read_key(&mut self) -> io::Result<Key> {
        self.device.read_key()
    }
}

impl<D: InputDevice> Drop for RawModeGuard<'_, D> {
    fn drop(&mut self) {
        match self.device.restore_mode() {
            Ok(()) => log::debug!("raw input mode restored"),
            Err(e) => log::warn!("failed to restore terminal input mode: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        fail_enter: bool,
        raw: bool,
        restores: usize,
    }

    impl InputDevice for Recorder {
        fn enter_raw_mode(&mut self) -> io::Result<()> {
            if self.fail_enter {
                return Err(io::Error::other("not a tty"));
            }
            self.raw = true;
            Ok(())
        }

        fn restore_mode(&mut self) -> io::Result<()> {
            self.raw = false;
            self.restores += 1;
            Ok(())
        }

        fn read_key(&mut self) -> io::Result<Key> {
            Ok(Key::Enter)
        }
    }

    #[test]
    fn test_map_arrow_and_control_keys() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(map_key(press(KeyCode::Left)), Key::Left);
        assert_eq!(map_key(press(KeyCode::Right)), Key::Right);
        assert_eq!(map_key(press(KeyCode::Up)), Key::Up);
        assert_eq!(map_key(press(KeyCode::Down)), Key::Down);
        assert_eq!(map_key(press(KeyCode::Enter)), Key::Enter);
        assert_eq!(map_key(press(KeyCode::Esc)), Key::Escape);
        assert_eq!(map_key(press(KeyCode::Char('x'))), Key::Char('x'));
        assert_eq!(map_key(press(KeyCode::Tab)), Key::Other);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Key::Escape
        );
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let mut device = Recorder::default();
        {
            let mut guard = RawModeGuard::acquire(&mut device).expect("guard");
            assert_eq!(guard.read_key().expect("key"), Key::Enter);
        }
        assert!(!device.raw);
        assert_eq!(device.restores, 1);
    }

    #[test]
    fn test_failed_acquire_does_not_restore() {
        let mut device = Recorder {
            fail_enter: true,
            ..Recorder::default()
        };
        let failed = matches!(
            RawModeGuard::acquire(&mut device),
            Err(MenuError::InputModeChangeFailed(_))
        );
        assert!(failed);
        assert_eq!(device.restores, 0);
    }
}
