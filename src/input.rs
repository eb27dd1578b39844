//! Input Module - Event types, crossterm conversion, and routing
//!
//! Bridges crossterm's event system with the pointer controller and the
//! navigator. Owns the unified [`InputEvent`] type, the browser-style key
//! vocabulary ("Enter", "Escape", "ArrowUp", ...), and the monotonic
//! timestamp clock stamped onto pointer events.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to [`KeyboardEvent`]
//! - `convert_pointer_event` - Convert crossterm MouseEvent to [`PointerEvent`]
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `route_event` - Feed one event to a controller/navigator pair
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use glide_tui::input::{poll_event, route_event};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(event, &pointer, &mut navigator);
//!     }
//!     pointer.update();
//! }
//! ```

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyModifiers, MouseEvent as CrosstermMouseEvent,
    MouseEventKind, poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use crate::navigator::Navigator;
use crate::pointer::PointerController;

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    Press,
    Repeat,
    Release,
}

impl Default for KeyState {
    fn default() -> Self {
        Self::Press
    }
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

/// Raw pointer movement, stamped with the monotonic clock
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: u64,
}

/// Unified event type for the library
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Pointer movement (mouse move or drag)
    Pointer(PointerEvent),
    /// Keyboard event (key press, release, etc.)
    Key(KeyboardEvent),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// Terminal gained focus
    FocusGained,
    /// Terminal lost focus
    FocusLost,
    /// No event or unhandled event type
    None,
}

// =============================================================================
// TIMESTAMPS
// =============================================================================

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Milliseconds since the first call in this process. Monotonic.
pub fn timestamp_ms() -> u64 {
    EPOCH.get_or_init(Instant::now).elapsed().as_millis() as u64
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Insert => "Insert".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        crossterm::event::KeyEventKind::Press => KeyState::Press,
        crossterm::event::KeyEventKind::Repeat => KeyState::Repeat,
        crossterm::event::KeyEventKind::Release => KeyState::Release,
    };

    // BackTab arrives as a distinct code with shift stripped; normalize it
    // back to Shift+Tab so traversal sees one shape.
    let mut modifiers = convert_modifiers(event.modifiers);
    if event.code == KeyCode::BackTab {
        modifiers.shift = true;
    }

    KeyboardEvent { key, modifiers, state }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: false, // Not exposed by crossterm
    }
}

// =============================================================================
// POINTER EVENT CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to our PointerEvent.
/// Only movement carries position for the tracker; clicks and scrolls
/// return None.
pub fn convert_pointer_event(event: CrosstermMouseEvent) -> Option<PointerEvent> {
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerEvent {
            x: event.column as f64,
            y: event.row as f64,
            timestamp_ms: timestamp_ms(),
        }),
        _ => None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Mouse(mouse) => Ok(match convert_pointer_event(mouse) {
            Some(pointer) => InputEvent::Pointer(pointer),
            None => InputEvent::None,
        }),
        CrosstermEvent::Key(key) => Ok(InputEvent::Key(convert_key_event(key))),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        CrosstermEvent::FocusGained => Ok(InputEvent::FocusGained),
        CrosstermEvent::FocusLost => Ok(InputEvent::FocusLost),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Feed one event to a controller/navigator pair.
/// Returns true if the event was consumed.
pub fn route_event(
    event: InputEvent,
    pointer: &PointerController,
    navigator: &mut Navigator,
) -> bool {
    match event {
        InputEvent::Pointer(ev) => {
            pointer.pointer_moved(ev.x, ev.y, ev.timestamp_ms);
            navigator.on_pointer_moved();
            true
        }
        InputEvent::Key(key) => {
            // Only press events drive traversal
            if !key.is_press() {
                return false;
            }
            navigator.handle_key(&key)
        }
        InputEvent::Resize(_, _) => {
            navigator.refresh_targets();
            false
        }
        InputEvent::FocusGained => {
            pointer.show();
            false
        }
        InputEvent::FocusLost => {
            pointer.hide();
            false
        }
        InputEvent::None => false,
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
