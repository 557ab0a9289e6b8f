use snake_common::games::snake::{Direction, SnakeCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Command(SnakeCommand),
    Quit,
}

fn event_for_word(word: &str) -> Option<InputEvent> {
    let event = match word {
        "up" | "arrowup" => InputEvent::Command(SnakeCommand::Turn(Direction::Up)),
        "down" | "arrowdown" => InputEvent::Command(SnakeCommand::Turn(Direction::Down)),
        "left" | "arrowleft" => InputEvent::Command(SnakeCommand::Turn(Direction::Left)),
        "right" | "arrowright" => InputEvent::Command(SnakeCommand::Turn(Direction::Right)),
        "space" | "pause" => InputEvent::Command(SnakeCommand::TogglePause),
        "restart" => InputEvent::Command(SnakeCommand::Restart),
        "quit" | "exit" => InputEvent::Quit,
        _ => return None,
    };
    Some(event)
}

fn event_for_key(key: char) -> Option<InputEvent> {
    let event = match key.to_ascii_lowercase() {
        'w' => InputEvent::Command(SnakeCommand::Turn(Direction::Up)),
        's' => InputEvent::Command(SnakeCommand::Turn(Direction::Down)),
        'a' => InputEvent::Command(SnakeCommand::Turn(Direction::Left)),
        'd' => InputEvent::Command(SnakeCommand::Turn(Direction::Right)),
        ' ' | 'p' => InputEvent::Command(SnakeCommand::TogglePause),
        'r' => InputEvent::Command(SnakeCommand::Restart),
        'q' => InputEvent::Quit,
        _ => return None,
    };
    Some(event)
}

/// Maps one line of terminal input to events. A whole-line key name such as
/// `arrowup` wins; otherwise every character is read as a single key, so
/// `ww d` queues two turns up, a pause and a turn right.
pub fn parse_line(line: &str) -> Vec<InputEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(event) = event_for_word(&line.trim().to_ascii_lowercase()) {
        return vec![event];
    }
    line.chars().filter_map(event_for_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            parse_line("wasd"),
            vec![
                InputEvent::Command(SnakeCommand::Turn(Direction::Up)),
                InputEvent::Command(SnakeCommand::Turn(Direction::Left)),
                InputEvent::Command(SnakeCommand::Turn(Direction::Down)),
                InputEvent::Command(SnakeCommand::Turn(Direction::Right)),
            ]
        );
    }

    #[test]
    fn test_arrow_words() {
        assert_eq!(
            parse_line("ArrowUp\n"),
            vec![InputEvent::Command(SnakeCommand::Turn(Direction::Up))]
        );
        assert_eq!(
            parse_line("left"),
            vec![InputEvent::Command(SnakeCommand::Turn(Direction::Left))]
        );
    }

    #[test]
    fn test_space_toggles_pause() {
        assert_eq!(parse_line(" "), vec![InputEvent::Command(SnakeCommand::TogglePause)]);
        assert_eq!(parse_line("space"), vec![InputEvent::Command(SnakeCommand::TogglePause)]);
    }

    #[test]
    fn test_restart_and_quit() {
        assert_eq!(parse_line("r"), vec![InputEvent::Command(SnakeCommand::Restart)]);
        assert_eq!(parse_line("Q"), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert!(parse_line("xyz").is_empty());
        assert!(parse_line("").is_empty());
    }
}
