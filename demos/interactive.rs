//! Interactive Example - Pointer glide and focus snapping in the terminal
//!
//! This example demonstrates everything working together:
//! - A software-drawn pointer that eases toward the mouse position
//! - Focus snapping to nearby boxes with hysteresis
//! - Keyboard traversal (Tab / Shift+Tab / arrows, Escape, digits 0-2)
//! - Pointer hiding when the terminal loses focus
//!
//! Set RUST_LOG=glide_tui=debug and redirect stderr to a file to watch
//! the focus transitions.
//!
//! Run with: cargo run --example interactive

use std::cell::Cell;
use std::io::{self, Write, stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use glide_tui::input::{InputEvent, disable_mouse, enable_mouse, poll_event, route_event};
use glide_tui::{
    BoundingBox, FocusTarget, IdSequence, InputMode, LayoutSource, Navigator,
    PointerController,
};

/// Fixed rectangle in terminal cells.
struct Region {
    rect: Cell<BoundingBox>,
}

impl Region {
    fn new(left: f64, top: f64, right: f64, bottom: f64) -> Rc<Self> {
        Rc::new(Self {
            rect: Cell::new(BoundingBox::new(left, top, right, bottom)),
        })
    }
}

impl LayoutSource for Region {
    fn bounding_box(&self) -> BoundingBox {
        self.rect.get()
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    terminal::enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    enable_mouse()?;

    let result = run();

    disable_mouse()?;
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn run() -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let host = Region::new(0.0, 0.0, cols as f64, rows as f64);

    let pointer = PointerController::shared(host.as_ref())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let ids = IdSequence::new();
    let regions = [
        Region::new(5.0, 3.0, 19.0, 7.0),
        Region::new(25.0, 3.0, 39.0, 7.0),
        Region::new(45.0, 3.0, 59.0, 7.0),
    ];
    let mut targets = Vec::new();
    for region in &regions {
        let target = FocusTarget::new(region.clone(), &ids)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        targets.push(Rc::new(target));
    }

    let mut navigator = Navigator::new(pointer.clone(), targets);

    loop {
        if let Some(event) = poll_event(Duration::from_millis(16))? {
            if let InputEvent::Key(key) = &event {
                if key.is_press() && (key.key == "q" || (key.key == "c" && key.modifiers.ctrl))
                {
                    break;
                }
            }
            route_event(event, &pointer, &mut navigator);
        }

        pointer.update();
        draw(&pointer, &navigator)?;
    }

    Ok(())
}

fn draw(pointer: &PointerController, navigator: &Navigator) -> io::Result<()> {
    let mut out = stdout();
    queue!(out, Clear(ClearType::All))?;

    for target in navigator.targets() {
        let color = if target.is_focused() {
            Color::Yellow
        } else {
            Color::DarkGrey
        };
        draw_box(&mut out, target, color)?;
    }

    let mode = match navigator.mode() {
        InputMode::Pointer => "pointer",
        InputMode::Keyboard => "keyboard",
    };
    queue!(
        out,
        MoveTo(2, 0),
        Print(format!(
            "mode: {mode}  |  Tab/arrows traverse, Esc clears, 0-2 jump, q quits"
        )),
    )?;

    if pointer.is_visible() {
        let pos = pointer.position();
        queue!(
            out,
            MoveTo(pos.x.round() as u16, pos.y.round() as u16),
            SetForegroundColor(Color::Cyan),
            Print("◆"),
            ResetColor,
        )?;
    }

    out.flush()
}

fn draw_box(out: &mut impl Write, target: &FocusTarget, color: Color) -> io::Result<()> {
    let center = target.center();
    let size = target.size();
    let left = (center.x - size.width / 2.0) as u16;
    let top = (center.y - size.height / 2.0) as u16;
    let width = size.width as u16;
    let height = size.height as u16;

    queue!(out, SetForegroundColor(color))?;
    queue!(
        out,
        MoveTo(left, top),
        Print(format!("┌{}┐", "─".repeat(width.saturating_sub(2) as usize))),
    )?;
    for row in 1..height.saturating_sub(1) {
        queue!(
            out,
            MoveTo(left, top + row),
            Print("│"),
            MoveTo(left + width.saturating_sub(1), top + row),
            Print("│"),
        )?;
    }
    queue!(
        out,
        MoveTo(left, top + height.saturating_sub(1)),
        Print(format!("└{}┘", "─".repeat(width.saturating_sub(2) as usize))),
    )?;
    queue!(
        out,
        MoveTo(left + 2, top + height / 2),
        Print(format!("[{}]", target.id())),
        ResetColor,
    )?;
    Ok(())
}
