//! Cell materials and their behaviour classes.

/// How a material moves during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behaviour {
    /// Never initiates a move, can be moved into.
    Passive,
    /// Falls: down, then down-left/down-right.
    Powder,
    /// Falls like a powder, then spreads sideways when blocked.
    Liquid,
    /// Rises: up, then up-left/up-right, then sideways.
    Gas,
    /// Never moves.
    Static,
}

/// One grid position's material.
///
/// The discriminants are the stable tags used across the C ABI.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Stone = 3,
    Steam = 4,
}

impl Cell {
    pub const ALL: [Cell; 5] = [Cell::Empty, Cell::Sand, Cell::Water, Cell::Stone, Cell::Steam];

    pub fn empty() -> Cell {
        Cell::Empty
    }

    pub fn sand() -> Cell {
        Cell::Sand
    }

    pub fn water() -> Cell {
        Cell::Water
    }

    pub fn stone() -> Cell {
        Cell::Stone
    }

    pub fn steam() -> Cell {
        Cell::Steam
    }

    #[inline]
    pub fn behaviour(self) -> Behaviour {
        match self {
            Cell::Empty => Behaviour::Passive,
            Cell::Sand => Behaviour::Powder,
            Cell::Water => Behaviour::Liquid,
            Cell::Stone => Behaviour::Static,
            Cell::Steam => Behaviour::Gas,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a C ABI tag. Unknown tags return `None`.
    pub fn from_tag(tag: u8) -> Option<Cell> {
        match tag {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Sand),
            2 => Some(Cell::Water),
            3 => Some(Cell::Stone),
            4 => Some(Cell::Steam),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_tag(cell.tag()), Some(cell));
        }
        assert_eq!(Cell::from_tag(5), None);
        assert_eq!(Cell::from_tag(255), None);
    }

    #[test]
    fn test_behaviour_table() {
        assert_eq!(Cell::empty().behaviour(), Behaviour::Passive);
        assert_eq!(Cell::sand().behaviour(), Behaviour::Powder);
        assert_eq!(Cell::water().behaviour(), Behaviour::Liquid);
        assert_eq!(Cell::stone().behaviour(), Behaviour::Static);
        assert_eq!(Cell::steam().behaviour(), Behaviour::Gas);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(!Cell::Sand.is_empty());
    }
}
