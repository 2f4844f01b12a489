use super::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.alt
    }
}

/// The part of the mosaic under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Triangle { position: Position, index: usize },
    Module(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Click,
    /// Pointer moved onto the target, possibly while dragging.
    Enter { buttons_down: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Pointer {
        target: PointerTarget,
        kind: PointerKind,
        modifiers: Modifiers,
    },
    KeyDown(String),
    KeyUp(String),
}
