use serde::Serialize;
use std::fmt;

/// Coordonnées (ligne, colonne) d'une cellule dans la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Nature d'une cellule : passage ou mur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Open,
    Wall,
}

/// Représente une cellule du labyrinthe.
///
/// La nature (mur ou passage) est fixée par la grille. L'état d'exploration et
/// le parent sont modifiés pendant un parcours et remis à zéro par `clear`.
#[derive(Debug, Clone)]
pub struct Cell {
    row: usize,
    col: usize,
    kind: CellKind,
    explored: bool,
    /// Cellule depuis laquelle celle-ci a été découverte.
    parent: Option<Position>,
}

impl Cell {
    /// Crée une nouvelle cellule, non explorée et sans parent.
    pub fn new(row: usize, col: usize, kind: CellKind) -> Self {
        Self {
            row,
            col,
            kind,
            explored: false,
            parent: None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    pub fn is_explored(&self) -> bool {
        self.explored
    }

    pub fn set_explored(&mut self, explored: bool) {
        self.explored = explored;
    }

    pub fn parent(&self) -> Option<Position> {
        self.parent
    }

    /// Enregistre le parent de la cellule.
    ///
    /// Un parent déjà posé n'est jamais écrasé pendant un parcours : seule la
    /// première découverte compte. Retourne `true` si le parent a été posé.
    pub fn set_parent(&mut self, parent: Position) -> bool {
        if self.parent.is_some() {
            return false;
        }
        self.parent = Some(parent);
        true
    }

    /// Remet la cellule dans son état d'avant parcours.
    pub fn clear(&mut self) {
        self.explored = false;
        self.parent = None;
    }
}
