use std::collections::VecDeque;

use crate::maze::cell::Position;

/// Cellules découvertes mais pas encore explorées.
///
/// L'ordre de sortie choisit le parcours : pile pour le DFS, file pour le BFS.
pub trait Frontier: Default {
    fn push(&mut self, pos: Position);

    fn pop(&mut self) -> Option<Position>;

    fn len(&self) -> usize;
}

/// Pile (dernier entré, premier sorti).
impl Frontier for Vec<Position> {
    fn push(&mut self, pos: Position) {
        Vec::push(self, pos);
    }

    fn pop(&mut self) -> Option<Position> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// File (premier entré, premier sorti).
impl Frontier for VecDeque<Position> {
    fn push(&mut self, pos: Position) {
        self.push_back(pos);
    }

    fn pop(&mut self) -> Option<Position> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
