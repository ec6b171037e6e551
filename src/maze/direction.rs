use crate::maze::cell::Position;

/// Les quatre déplacements possibles dans la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Ordre de priorité utilisé pour découvrir les voisins : N, E, S, O.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Décalage (ligne, colonne) d'un pas dans cette direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Nouvelle position après un pas, sans vérification des bornes.
    /// Peut sortir de la grille (valeurs négatives comprises).
    pub fn step(self, pos: Position) -> (isize, isize) {
        let (dr, dc) = self.offset();
        (pos.row as isize + dr, pos.col as isize + dc)
    }

    /// Direction qui mène de `from` à `to` si les deux cases sont adjacentes.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let target = (to.row as isize, to.col as isize);
        Self::ALL.into_iter().find(|d| d.step(from) == target)
    }
}
