/// Position of a card on its physical bingo.
/// A/B/C are printed on the left half of a paired row, D/E/F on the right.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Slot {
    #[default]
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
}

impl Slot {
    pub const fn all() -> [Self; 6] {
        [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F]
    }
    /// slot of the `position`-th card on a bingo, on the left or right half
    pub fn of(right: bool, position: usize) -> Self {
        Self::from(position as u8 + if right { 3 } else { 0 })
    }
    pub fn is_right(&self) -> bool {
        *self >= Self::D
    }
    pub fn position(&self) -> usize {
        *self as usize % 3
    }
}

impl From<u8> for Slot {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::A,
            1 => Self::B,
            2 => Self::C,
            3 => Self::D,
            4 => Self::E,
            5 => Self::F,
            _ => panic!("invalid slot"),
        }
    }
}
impl From<Slot> for u8 {
    fn from(s: Slot) -> u8 {
        s as u8
    }
}

impl From<Slot> for char {
    fn from(s: Slot) -> char {
        (b'A' + u8::from(s)) as char
    }
}
impl TryFrom<char> for Slot {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            c @ 'A'..='F' => Ok(Self::from(c as u8 - b'A')),
            _ => Err(format!("invalid slot: {}", c)),
        }
    }
}
impl TryFrom<&str> for Slot {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(format!("invalid slot: {}", s)),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
