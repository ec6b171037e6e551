use crate::maze::cell::{Cell, CellKind, Position};
use crate::maze::error::MazeError;

/// Contrat de grille consommé par le solveur.
///
/// La grille possède toutes les cellules ; le solveur ne fait que lire et
/// modifier celles qu'elle lui donne.
pub trait Grid {
    /// Cellule à la position donnée. Panique hors de la grille : l'appelant
    /// doit d'abord vérifier la position avec `is_valid_cell`.
    fn cell(&self, row: usize, col: usize) -> &Cell;

    fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell;

    /// Vrai si (row, col) est dans la grille et n'est pas un mur.
    fn is_valid_cell(&self, row: isize, col: isize) -> bool;

    fn start_cell(&self) -> Position;

    fn end_cell(&self) -> Position;

    /// Efface l'état d'exploration et les parents de toutes les cellules.
    fn reset(&mut self);
}

/// Nombre maximal de cellules d'un labyrinthe.
pub const MAX_CELLS: usize = 1 << 24;

/// Nombre de cellules d'une grille `rows` x `cols`, borné par `MAX_CELLS`.
pub fn cell_count(rows: usize, cols: usize) -> Result<usize, MazeError> {
    if rows == 0 || cols == 0 {
        return Err(MazeError::EmptyGrid { rows, cols });
    }
    match rows.checked_mul(cols) {
        Some(count) if count <= MAX_CELLS => Ok(count),
        _ => Err(MazeError::TooLarge {
            rows,
            cols,
            max: MAX_CELLS,
        }),
    }
}

/// Labyrinthe rectangulaire, cellules stockées ligne par ligne.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Position,
    end: Position,
}

impl Maze {
    /// Construit un labyrinthe à partir d'un masque de murs (ligne par ligne).
    ///
    /// Le départ et l'arrivée doivent être dans la grille et ne pas être des murs.
    pub fn new(
        rows: usize,
        cols: usize,
        walls: &[bool],
        start: Position,
        end: Position,
    ) -> Result<Self, MazeError> {
        let count = cell_count(rows, cols)?;
        if walls.len() != count {
            return Err(MazeError::LayoutSize {
                expected: count,
                found: walls.len(),
            });
        }
        for (what, pos) in [("start", start), ("end", end)] {
            if pos.row >= rows || pos.col >= cols {
                return Err(MazeError::OutOfBounds { what, pos, rows, cols });
            }
            if walls[pos.row * cols + pos.col] {
                return Err(MazeError::WalledMarker { what, pos });
            }
        }

        let cells = walls
            .iter()
            .enumerate()
            .map(|(i, &wall)| {
                let kind = if wall { CellKind::Wall } else { CellKind::Open };
                Cell::new(i / cols, i % cols, kind)
            })
            .collect();

        Ok(Self {
            rows,
            cols,
            cells,
            start,
            end,
        })
    }

    /// Labyrinthe sans aucun mur.
    pub fn open(
        rows: usize,
        cols: usize,
        start: Position,
        end: Position,
    ) -> Result<Self, MazeError> {
        let count = cell_count(rows, cols)?;
        Self::new(rows, cols, &vec![false; count], start, end)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_wall()
    }

    /// Nombre de cellules explorées lors du dernier parcours.
    pub fn explored_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_explored()).count()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) is outside the {}x{} maze",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl Grid for Maze {
    fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let i = self.index(row, col);
        &mut self.cells[i]
    }

    fn is_valid_cell(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        row < self.rows && col < self.cols && !self.is_wall(row, col)
    }

    fn start_cell(&self) -> Position {
        self.start
    }

    fn end_cell(&self) -> Position {
        self.end
    }

    fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Maze {
        // . # .
        // . . .
        let walls = [false, true, false, false, false, false];
        Maze::new(2, 3, &walls, Position::new(0, 0), Position::new(0, 2)).unwrap()
    }

    #[test]
    fn test_is_valid_cell() {
        let maze = corridor();
        assert!(maze.is_valid_cell(0, 0));
        assert!(!maze.is_valid_cell(0, 1));
        assert!(maze.is_valid_cell(1, 2));
        assert!(!maze.is_valid_cell(-1, 0));
        assert!(!maze.is_valid_cell(0, -1));
        assert!(!maze.is_valid_cell(2, 0));
        assert!(!maze.is_valid_cell(0, 3));
    }

    #[test]
    fn test_cells_know_their_position() {
        let maze = corridor();
        let cell = maze.cell(1, 2);
        assert_eq!((cell.row(), cell.col()), (1, 2));
        assert!(maze.is_wall(0, 1));
    }

    #[test]
    #[should_panic(expected = "outside the 2x3 maze")]
    fn test_out_of_bounds_access_panics() {
        let maze = corridor();
        maze.cell(2, 0);
    }

    #[test]
    fn test_reset_clears_traversal_state() {
        let mut maze = corridor();
        maze.cell_mut(1, 0).set_explored(true);
        maze.cell_mut(1, 0).set_parent(Position::new(0, 0));
        assert_eq!(maze.explored_count(), 1);

        maze.reset();
        assert_eq!(maze.explored_count(), 0);
        assert!(maze.cells().all(|c| c.parent().is_none()));
        assert!(maze.is_wall(0, 1));
    }

    #[test]
    fn test_new_rejects_bad_markers() {
        let walls = [false, true, false, false];
        assert!(matches!(
            Maze::new(2, 2, &walls, Position::new(0, 1), Position::new(1, 1)),
            Err(MazeError::WalledMarker { what: "start", .. })
        ));
        assert!(matches!(
            Maze::new(2, 2, &walls, Position::new(0, 0), Position::new(2, 0)),
            Err(MazeError::OutOfBounds { what: "end", .. })
        ));
        assert!(matches!(
            Maze::new(2, 2, &walls[..3], Position::new(0, 0), Position::new(1, 1)),
            Err(MazeError::LayoutSize { expected: 4, found: 3 })
        ));
        assert!(matches!(
            Maze::open(0, 3, Position::new(0, 0), Position::new(0, 0)),
            Err(MazeError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_cell_count_limits() {
        assert_eq!(cell_count(3, 4).unwrap(), 12);
        assert!(matches!(cell_count(0, 4), Err(MazeError::EmptyGrid { .. })));
        assert!(matches!(
            cell_count(usize::MAX, 2),
            Err(MazeError::TooLarge { max: MAX_CELLS, .. })
        ));
        assert!(matches!(
            cell_count(MAX_CELLS, 2),
            Err(MazeError::TooLarge { .. })
        ));
        assert!(matches!(
            Maze::open(100_000, 100_000, Position::new(0, 0), Position::new(1, 1)),
            Err(MazeError::TooLarge { rows: 100_000, cols: 100_000, .. })
        ));
    }
}
