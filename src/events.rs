use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, View};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // View switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),

        // Direct view access
        KeyCode::Char('1') => app.set_view(View::Overview),
        KeyCode::Char('2') => app.set_view(View::Charts),
        KeyCode::Char('3') => app.set_view(View::Alerts),

        // Navigation (up/down for tanks, left/right for tabs)
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),
        KeyCode::PageUp => app.select_prev_n(4),
        KeyCode::PageDown => app.select_next_n(4),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Open charts for the selected tank
        KeyCode::Enter => app.set_view(View::Charts),

        // Go back
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Manual sensor update
        KeyCode::Char('u') => app.sample_now(),

        // Chart window (how many points the charts show)
        KeyCode::Char('+') | KeyCode::Char('=') => app.widen_window(1),
        KeyCode::Char('-') => app.narrow_window(1),
        KeyCode::Char('*') => app.widen_window(10),
        KeyCode::Char('_') => app.narrow_window(10),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Sorting (Overview view)
        KeyCode::Char('s') => {
            if app.current_view == View::Overview {
                app.cycle_sort();
            }
        }
        KeyCode::Char('S') => {
            if app.current_view == View::Overview {
                app.toggle_sort_direction();
            }
        }

        // Export
        KeyCode::Char('e') => {
            let export_path = std::path::PathBuf::from("tankwatch_export.json");
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, content_start_row: u16) {
    match mouse.kind {
        // Scroll wheel moves tank selection
        MouseEventKind::ScrollUp => {
            app.select_prev();
        }
        MouseEventKind::ScrollDown => {
            app.select_next();
        }

        // Click to select
        MouseEventKind::Down(MouseButton::Left) => {
            let clicked_row = mouse.row;

            // Click in content area selects the tank row (Overview only;
            // the other views don't map rows to tanks)
            if clicked_row > content_start_row && app.current_view == View::Overview {
                let item_row = (clicked_row - content_start_row - 1) as usize;
                if item_row < app.session.tanks().len() {
                    app.selected_tank_index = item_row;
                }
            }

            // Tab clicks (row 1, after header)
            if clicked_row == 1 {
                let col = mouse.column;
                // Approximate tab positions: Overview (0-11), Charts (12-21), Alerts (22-31)
                if col < 12 {
                    app.set_view(View::Overview);
                } else if col < 22 {
                    app.set_view(View::Charts);
                } else if col < 32 {
                    app.set_view(View::Alerts);
                }
            }
        }

        // Right-click goes back
        MouseEventKind::Down(MouseButton::Right) => {
            app.go_back();
        }

        _ => {}
    }
}
