//! The drawing cursor

use super::commands::DrawCommand;
use crate::{
    errors::DrawError,
    geometry::{types::EPSILON, Degrees, Point},
    render::Render,
};
use tracing::trace;

/// Turtle-style drawing state.
///
/// Every operation is recorded as a [`DrawCommand`] and, when a renderer
/// is attached, forwarded to it as a path element. The heading is kept
/// as the raw sum of all turns.
#[derive(Debug)]
pub struct Cursor {
    position: Point,
    heading: Degrees,
    pen_down: bool,
    commands: Vec<DrawCommand>,
    render: Option<Box<dyn Render>>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::with_render(None)
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the origin, heading along +x, pen down
    pub fn with_render(render: Option<Box<dyn Render>>) -> Self {
        let mut cursor = Self {
            position: Point::ORIGIN,
            heading: Degrees(0.0),
            pen_down: true,
            commands: Vec::new(),
            render,
        };
        if let Some(r) = cursor.render.as_mut() {
            r.move_to(cursor.position);
        }
        cursor
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> Degrees {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn forward(&mut self, length: f64) {
        self.commands.push(DrawCommand::MoveForward(length));
        self.position += Point::unit(self.heading) * length;
        trace!(position = %self.position, "forward {length}");

        if let Some(r) = self.render.as_mut() {
            if self.pen_down {
                r.line_to(self.position);
            } else {
                r.move_to(self.position);
            }
        }
    }

    pub fn turn_left(&mut self, angle: Degrees) {
        self.commands.push(DrawCommand::TurnLeft(angle));
        self.heading += angle;
    }

    pub fn pen_up(&mut self) {
        self.commands.push(DrawCommand::PenUp);
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.commands.push(DrawCommand::PenDown);
        self.pen_down = true;
    }

    /// Jump to an absolute position. The pen must be up.
    pub fn teleport(&mut self, point: Point) -> Result<(), DrawError> {
        if self.pen_down {
            return Err(DrawError::invalid(format!(
                "can't jump to {point} with the pen down"
            )));
        }
        self.commands.push(DrawCommand::GoTo(point));
        self.position = point;

        if let Some(r) = self.render.as_mut() {
            r.move_to(point);
        }
        Ok(())
    }

    /// Turn to an absolute heading.
    ///
    /// Recorded as the equivalent relative turn; nothing is recorded if the
    /// cursor already points that way, modulo a full turn.
    pub fn set_heading(&mut self, heading: Degrees) {
        if !self.heading.approx_eq_mod360(heading, EPSILON) {
            self.turn_left(heading - self.heading);
        }
    }

    /// Replay a single command
    pub fn execute(&mut self, cmd: &DrawCommand) -> Result<(), DrawError> {
        use DrawCommand::*;
        match *cmd {
            MoveForward(len) => self.forward(len),
            TurnLeft(angle) => self.turn_left(angle),
            PenUp => self.pen_up(),
            PenDown => self.pen_down(),
            GoTo(point) => self.teleport(point)?,
        }
        Ok(())
    }

    /// End the session, handing out the recorded stream and the renderer
    pub fn finish(self) -> (Vec<DrawCommand>, Option<Box<dyn Render>>) {
        (self.commands, self.render)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::Cursor;
    use crate::{
        geometry::{types::EPSILON, Degrees, Point},
        render::Render,
        turtle::DrawCommand,
    };
    use std::{cell::RefCell, io::Error, rc::Rc};

    /// Renderer that keeps every call for inspection
    #[derive(Debug, Clone, Default)]
    pub(crate) struct Recorder(pub Rc<RefCell<Vec<(bool, Point)>>>);

    impl Render for Recorder {
        fn move_to(&mut self, point: Point) {
            self.0.borrow_mut().push((false, point));
        }

        fn line_to(&mut self, point: Point) {
            self.0.borrow_mut().push((true, point));
        }

        fn finalize(self: Box<Self>) -> Result<(), Error> {
            Ok(())
        }
    }

    #[test]
    fn forward_follows_heading() {
        let mut c = Cursor::new();
        c.forward(10.0);
        assert!(c.position().approx_eq(Point::new(10.0, 0.0), EPSILON));
        c.turn_left(Degrees(90.0));
        c.forward(5.0);
        assert!(c.position().approx_eq(Point::new(10.0, 5.0), EPSILON));
        c.turn_left(Degrees(-270.0));
        c.forward(2.0);
        assert!(c.position().approx_eq(Point::new(8.0, 5.0), EPSILON));
        assert_eq!(c.heading(), Degrees(-180.0));
        assert_eq!(c.commands().len(), 5);
    }

    #[test]
    fn equivalent_headings_give_same_geometry() {
        let mut a = Cursor::new();
        a.turn_left(Degrees(30.0));
        a.forward(7.0);
        let mut b = Cursor::new();
        b.turn_left(Degrees(30.0 + 720.0));
        b.forward(7.0);
        assert!(a.position().approx_eq(b.position(), EPSILON));
    }

    #[test]
    fn pen_state_does_not_move() {
        let mut c = Cursor::new();
        assert!(c.is_pen_down());
        c.pen_up();
        assert!(!c.is_pen_down());
        c.pen_down();
        assert_eq!(c.position(), Point::ORIGIN);
        assert_eq!(c.commands(), &[DrawCommand::PenUp, DrawCommand::PenDown]);
    }

    #[test]
    fn teleport_requires_pen_up() {
        let mut c = Cursor::new();
        assert!(c.teleport(Point::new(1.0, 1.0)).is_err());
        assert!(c.commands().is_empty());

        c.pen_up();
        c.teleport(Point::new(1.0, 1.0)).unwrap();
        assert_eq!(c.position(), Point::new(1.0, 1.0));
    }

    #[test]
    fn set_heading_records_relative_turn() {
        let mut c = Cursor::new();
        c.set_heading(Degrees(0.0));
        assert!(c.commands().is_empty());
        c.turn_left(Degrees(45.0));
        c.set_heading(Degrees(0.0));
        assert_eq!(c.commands().last(), Some(&DrawCommand::TurnLeft(Degrees(-45.0))));
        assert_eq!(c.heading(), Degrees(0.0));
    }

    #[test]
    fn set_heading_skips_equivalent_heading() {
        let mut c = Cursor::new();
        c.turn_left(Degrees(360.0));
        c.set_heading(Degrees(0.0));
        assert_eq!(c.commands(), &[DrawCommand::TurnLeft(Degrees(360.0))]);

        c.set_heading(Degrees(-720.0));
        assert_eq!(c.commands().len(), 1);
    }

    #[test]
    fn renderer_sees_moves_and_lines() {
        let rec = Recorder::default();
        let mut c = Cursor::with_render(Some(Box::new(rec.clone())));
        c.forward(1.0);
        c.pen_up();
        c.forward(1.0);
        c.teleport(Point::new(-3.0, 0.0)).unwrap();
        c.pen_down();
        c.forward(1.0);

        let calls = rec.0.borrow();
        let kinds: Vec<bool> = calls.iter().map(|(line, _)| *line).collect();
        assert_eq!(kinds, vec![false, true, false, false, true]);
        assert!(calls[4].1.approx_eq(Point::new(-2.0, 0.0), EPSILON));
    }

    #[test]
    fn replay_reproduces_state() {
        let mut a = Cursor::new();
        a.turn_left(Degrees(60.0));
        a.forward(3.0);
        a.pen_up();
        a.teleport(Point::new(2.0, 2.0)).unwrap();
        a.pen_down();
        a.forward(1.0);

        let mut b = Cursor::new();
        for cmd in a.commands() {
            b.execute(cmd).unwrap();
        }
        assert_eq!(a.commands(), b.commands());
        assert!(a.position().approx_eq(b.position(), EPSILON));
        assert_eq!(a.heading(), b.heading());
    }
}
