//! Keyboard bindings of the viewer.

/// Keys the viewer reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    F1,
    F2,
    F3,
    Left,
    Right,
    Up,
    Down,
    Escape,
    Char(char),
}

/// Rasterization mode requested from the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolygonMode {
    Point,
    Line,
    #[default]
    Fill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}
