use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace, warn};
use serde::Serialize;

use crate::maze::cell::Position;
use crate::maze::direction::Direction;
use crate::maze::frontier::Frontier;
use crate::maze::grid::{Grid, Maze};

/// Stratégie de parcours du labyrinthe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            other => Err(format!("unknown strategy `{}`", other)),
        }
    }
}

/// Chemin trouvé, du départ vers l'arrivée (bornes incluses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Position>);

impl Path {
    pub fn cells(&self) -> &[Position] {
        &self.0
    }

    /// Nombre de cellules du chemin.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nombre de pas (arêtes) du chemin.
    pub fn edges(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<Position> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Position> {
        self.0.last().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.0.iter()
    }

    /// Directions successives à suivre depuis le départ.
    pub fn directions(&self) -> Vec<Direction> {
        self.0
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]))
            .collect()
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.0
    }
}

/// Résout un labyrinthe par parcours en profondeur ou en largeur.
///
/// Le solveur ne garde que la référence vers la grille : l'état du parcours
/// vit dans la frontière locale et dans les cellules. Entre deux parcours sur
/// la même grille, il faut appeler `Grid::reset`.
pub struct MazeSolver<'g, G: Grid + ?Sized = Maze> {
    grid: &'g mut G,
}

impl<'g, G: Grid + ?Sized> MazeSolver<'g, G> {
    pub fn new(grid: &'g mut G) -> Self {
        Self { grid }
    }

    /// Remplace la grille utilisée par les prochains parcours.
    pub fn set_grid(&mut self, grid: &'g mut G) {
        self.grid = grid;
    }

    pub fn grid(&self) -> &G {
        &*self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut *self.grid
    }

    /// Parcours en profondeur. `None` si l'arrivée est inaccessible.
    pub fn solve_dfs(&mut self) -> Option<Path> {
        self.traverse::<Vec<Position>>(Strategy::DepthFirst)
    }

    /// Parcours en largeur : le chemin retourné a le moins de pas possible.
    pub fn solve_bfs(&mut self) -> Option<Path> {
        self.traverse::<VecDeque<Position>>(Strategy::BreadthFirst)
    }

    pub fn solve(&mut self, strategy: Strategy) -> Option<Path> {
        match strategy {
            Strategy::DepthFirst => self.solve_dfs(),
            Strategy::BreadthFirst => self.solve_bfs(),
        }
    }

    fn traverse<F: Frontier>(&mut self, strategy: Strategy) -> Option<Path> {
        let start = self.grid.start_cell();
        let end = self.grid.end_cell();

        if self.grid.cell(start.row, start.col).is_explored() {
            warn!("{}: start cell {} already explored, grid was not reset", strategy, start);
        }
        debug!("{}: solving from {} to {}", strategy, start, end);

        let mut frontier = F::default();
        frontier.push(start);
        let mut explored = 0usize;
        let mut reached = false;

        while let Some(current) = frontier.pop() {
            let cell = self.grid.cell_mut(current.row, current.col);
            // Doublon resté dans la frontière
            if cell.is_explored() {
                continue;
            }
            cell.set_explored(true);
            explored += 1;
            trace!("{}: explore {} (frontier {})", strategy, current, frontier.len());

            if current == end {
                reached = true;
                break;
            }

            for neighbor in self.unexplored_neighbors(current) {
                let cell = self.grid.cell_mut(neighbor.row, neighbor.col);
                if !cell.set_parent(current) {
                    trace!("{}: {} keeps parent {:?}", strategy, neighbor, cell.parent());
                }
                frontier.push(neighbor);
            }
        }

        if !reached {
            debug!("{}: no path after exploring {} cells", strategy, explored);
            return None;
        }

        let path = self.backtrack(start, end);
        debug!(
            "{}: found {} cell path after exploring {} cells",
            strategy,
            path.len(),
            explored
        );
        Some(path)
    }

    /// Voisins non explorés, dans l'ordre N, E, S, O.
    fn unexplored_neighbors(&self, pos: Position) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter_map(|dir| {
                let (row, col) = dir.step(pos);
                if !self.grid.is_valid_cell(row, col) {
                    return None;
                }
                let (row, col) = (row as usize, col as usize);
                if self.grid.cell(row, col).is_explored() {
                    return None;
                }
                Some(Position::new(row, col))
            })
            .collect()
    }

    /// Remonte les parents depuis l'arrivée puis inverse le résultat.
    fn backtrack(&self, start: Position, end: Position) -> Path {
        let mut cells = Vec::new();
        let mut current = Some(end);
        while let Some(pos) = current {
            cells.push(pos);
            if pos == start {
                break;
            }
            current = self.grid.cell(pos.row, pos.col).parent();
        }
        cells.reverse();
        Path(cells)
    }
}
