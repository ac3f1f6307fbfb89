/// State of one cell in a glyph grid
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Editable, bit cleared
    #[default]
    Off,
    /// Editable, bit set
    On,
    /// Padding band: never editable, always encodes as 0
    Locked,
}

impl Cell {
    pub fn from_bool(on: bool) -> Self {
        if on {
            Cell::On
        } else {
            Cell::Off
        }
    }

    pub fn is_on(self) -> bool {
        self == Cell::On
    }

    pub fn is_locked(self) -> bool {
        self == Cell::Locked
    }

    /// The bit this cell contributes to its row word
    pub fn bit(self) -> u64 {
        u64::from(self.is_on())
    }
}
