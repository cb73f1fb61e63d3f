use std::fmt;

/// What a pointer drag currently means.
///
/// `Draw` and `Selected` are persistent: they stay until an action changes
/// them. The others are quasi-modes that only last while their key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Draw,
    Select,
    Selected,
    Pan,
    ZoomRotate,
    Color,
}

impl Mode {
    pub fn is_quasi(&self) -> bool {
        matches!(self, Self::Select | Self::Pan | Self::ZoomRotate | Self::Color)
    }

    /// The persistent mode a released quasi-mode springs back to.
    pub fn persistent(has_selection: bool) -> Self {
        if has_selection { Self::Selected } else { Self::Draw }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draw => "DRAW",
            Self::Select => "SELECT",
            Self::Selected => "SELECTED",
            Self::Pan => "PAN",
            Self::ZoomRotate => "ZOOM_ROTATE",
            Self::Color => "COLOR",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keys that borrow a quasi-mode while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuasiKey {
    /// Shift
    Select,
    /// Ctrl
    Pan,
    /// Alt
    ZoomRotate,
    /// C
    Color,
}

impl QuasiKey {
    pub const ALL: [QuasiKey; 4] = [Self::Select, Self::Pan, Self::ZoomRotate, Self::Color];

    pub fn mode(&self) -> Mode {
        match self {
            Self::Select => Mode::Select,
            Self::Pan => Mode::Pan,
            Self::ZoomRotate => Mode::ZoomRotate,
            Self::Color => Mode::Color,
        }
    }
}

/// One-shot keyboard commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKey {
    Undo,
    Redo,
    WidenStroke,
    NarrowStroke,
    Escape,
    Delete,
    Home,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quasi_modes() {
        assert!(!Mode::Draw.is_quasi());
        assert!(!Mode::Selected.is_quasi());
        for key in QuasiKey::ALL {
            assert!(key.mode().is_quasi());
        }
    }

    #[test]
    fn test_spring_back_target() {
        assert_eq!(Mode::persistent(true), Mode::Selected);
        assert_eq!(Mode::persistent(false), Mode::Draw);
        assert_eq!(Mode::default(), Mode::Draw);
    }
}
