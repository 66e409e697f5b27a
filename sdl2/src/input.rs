use coord_2d::Size;
use fourier_plt_core::Command;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Scancode,
};

pub fn command_from_scancode(scancode: Scancode) -> Option<Command> {
    match scancode {
        Scancode::Right => Some(Command::IncreaseTimeScale),
        Scancode::Left => Some(Command::DecreaseTimeScale),
        Scancode::Up => Some(Command::IncreaseTermCount),
        Scancode::Down => Some(Command::DecreaseTermCount),
        _ => None,
    }
}

/// Key repeats are delivered as key down events and each one counts as a press.
pub fn command_from_event(event: &Event) -> Option<Command> {
    match event {
        Event::Quit { .. } => Some(Command::Quit),
        Event::KeyDown {
            scancode: Some(scancode),
            ..
        } => command_from_scancode(*scancode),
        Event::Window {
            win_event: WindowEvent::SizeChanged(width, height),
            ..
        } => Some(Command::Resize(Size::new(
            (*width).max(0) as u32,
            (*height).max(0) as u32,
        ))),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arrow_keys() {
        assert_eq!(
            command_from_scancode(Scancode::Right),
            Some(Command::IncreaseTimeScale)
        );
        assert_eq!(
            command_from_scancode(Scancode::Left),
            Some(Command::DecreaseTimeScale)
        );
        assert_eq!(
            command_from_scancode(Scancode::Up),
            Some(Command::IncreaseTermCount)
        );
        assert_eq!(
            command_from_scancode(Scancode::Down),
            Some(Command::DecreaseTermCount)
        );
    }

    #[test]
    fn other_keys_ignored() {
        for scancode in [Scancode::A, Scancode::Space, Scancode::Escape] {
            assert_eq!(command_from_scancode(scancode), None);
        }
    }

    #[test]
    fn quit_event() {
        assert_eq!(
            command_from_event(&Event::Quit { timestamp: 0 }),
            Some(Command::Quit)
        );
    }

    #[test]
    fn size_changed_event() {
        let event = Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::SizeChanged(1280, 720),
        };
        assert_eq!(
            command_from_event(&event),
            Some(Command::Resize(Size::new(1280, 720)))
        );
    }

    #[test]
    fn other_window_events_ignored() {
        let event = Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::Moved(10, 20),
        };
        assert_eq!(command_from_event(&event), None);
    }
}
