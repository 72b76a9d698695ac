use crate::Ball;

/// Canonical form of a card's numbers: sorted ascending.
/// Two cards collide iff their signatures are equal, whatever their slot,
/// bingo or printing order.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Signature(Vec<Ball>);

impl Signature {
    pub fn balls(&self) -> &[Ball] {
        &self.0
    }
}

impl From<&[Ball]> for Signature {
    fn from(balls: &[Ball]) -> Self {
        let mut balls = balls.to_vec();
        balls.sort_unstable();
        Self(balls)
    }
}
impl From<Vec<Ball>> for Signature {
    fn from(mut balls: Vec<Ball>) -> Self {
        balls.sort_unstable();
        Self(balls)
    }
}
impl From<Signature> for Vec<Ball> {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let balls = self
            .0
            .iter()
            .map(|b| format!("{:02}", b))
            .collect::<Vec<_>>();
        write!(f, "{}", balls.join(" "))
    }
}
