use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::types::{Direction, FieldSize, Point};

pub const INITIAL_LENGTH: usize = 3;

/// Snake segments, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VecDeque<Point>", into = "VecDeque<Point>")]
pub struct Snake {
    body: VecDeque<Point>,
}

impl TryFrom<VecDeque<Point>> for Snake {
    type Error = String;

    fn try_from(body: VecDeque<Point>) -> Result<Self, Self::Error> {
        Snake::from_segments(body).ok_or_else(|| "Snake must have at least one segment".to_string())
    }
}

impl From<Snake> for VecDeque<Point> {
    fn from(snake: Snake) -> Self {
        snake.body
    }
}

impl Snake {
    /// Straight snake of `length` segments with its head at `head`, trailing
    /// away from `direction`. `None` if any segment would leave the field.
    pub fn new(head: Point, direction: Direction, length: usize, field_size: &FieldSize) -> Option<Self> {
        if length == 0 || !field_size.contains(&head) {
            return None;
        }

        let mut body = VecDeque::with_capacity(length);
        let mut segment = head;
        body.push_back(segment);
        for _ in 1..length {
            segment = segment.neighbour(direction.opposite(), field_size)?;
            body.push_back(segment);
        }

        Some(Self { body })
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Point>) -> Option<Self> {
        let body: VecDeque<Point> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body.contains(point)
    }

    /// True if `next_head` hits the body the head would move into. When not
    /// growing the tail vacates this tick and is left out of the test.
    pub fn collides(&self, next_head: &Point, grows: bool) -> bool {
        let checked = if grows { self.body.len() } else { self.body.len() - 1 };
        self.body.iter().take(checked).any(|segment| segment == next_head)
    }

    /// New snake with `next_head` prepended. Length grows by one when
    /// `grows`, otherwise the tail is dropped.
    pub fn advanced(&self, next_head: Point, grows: bool) -> Snake {
        let mut body = VecDeque::with_capacity(self.body.len() + 1);
        body.push_back(next_head);
        body.extend(self.body.iter().copied());
        if !grows {
            body.pop_back();
        }
        Snake { body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(usize, usize)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_new_trails_behind_direction() {
        let field = FieldSize::new(10, 10);
        let snake = Snake::new(Point::new(5, 5), Direction::Right, 3, &field).unwrap();
        let body: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(body, points(&[(5, 5), (4, 5), (3, 5)]));
    }

    #[test]
    fn test_new_rejects_segments_outside_field() {
        let field = FieldSize::new(10, 10);
        assert!(Snake::new(Point::new(1, 5), Direction::Right, 3, &field).is_none());
        assert!(Snake::new(Point::new(5, 5), Direction::Right, 0, &field).is_none());
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn test_deserialize_rejects_empty_body() {
        assert!(serde_yaml_ng::from_str::<Snake>("[]").is_err());
        let snake: Snake = serde_yaml_ng::from_str("- {x: 1, y: 2}\n- {x: 0, y: 2}\n").unwrap();
        assert_eq!(snake.head(), Point::new(1, 2));
    }

    #[test]
    fn test_advanced_keeps_length_without_growth() {
        let snake = Snake::from_segments(points(&[(4, 5), (3, 5), (2, 5)])).unwrap();
        let moved = snake.advanced(Point::new(5, 5), false);
        assert_eq!(moved.segments().copied().collect::<Vec<_>>(), points(&[(5, 5), (4, 5), (3, 5)]));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_advanced_grows() {
        let snake = Snake::from_segments(points(&[(4, 5), (3, 5), (2, 5)])).unwrap();
        let grown = snake.advanced(Point::new(5, 5), true);
        assert_eq!(grown.len(), 4);
        assert_eq!(grown.tail(), Point::new(2, 5));
    }

    #[test]
    fn test_collides_ignores_vacating_tail() {
        let snake = Snake::from_segments(points(&[(1, 1), (1, 0), (0, 0), (0, 1)])).unwrap();
        let tail = snake.tail();
        assert!(!snake.collides(&tail, false));
        assert!(snake.collides(&tail, true));
        assert!(snake.collides(&Point::new(1, 0), false));
    }
}
