use log::debug;
use serde_json::json;

pub mod maze;

pub use maze::cell::{Cell, CellKind, Position};
pub use maze::error::MazeError;
pub use maze::grid::{Grid, Maze};
pub use maze::solver::{MazeSolver, Path, Strategy};

use crate::maze::ascii_utils::{format_path, render_solution};

/// Résultat d'un parcours : stratégie, chemin éventuel et nombre de cellules explorées.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub strategy: Strategy,
    pub path: Option<Path>,
    pub explored: usize,
}

impl SolveReport {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "strategy": self.strategy.name(),
            "found": self.found(),
            "length": self.path.as_ref().map(Path::len),
            "explored": self.explored,
            "path": self.path,
        })
    }

    /// Rapport lisible : en-tête, chemin puis labyrinthe annoté.
    pub fn to_text(&self, maze: &Maze) -> String {
        let mut out = match &self.path {
            Some(path) => format!(
                "[{}] path of {} cells ({} explored)\n{}\n",
                self.strategy,
                path.len(),
                self.explored,
                format_path(path)
            ),
            None => format!(
                "[{}] no path ({} explored)\n",
                self.strategy, self.explored
            ),
        };
        out.push_str(&render_solution(maze, self.path.as_ref()));
        out
    }
}

/// Résout le labyrinthe avec chaque stratégie, dans l'ordre donné.
///
/// La grille est remise à zéro avant chaque parcours, et `render` est appelé
/// juste après, tant que l'état du parcours est encore visible.
pub fn solve_all<F>(maze: &mut Maze, strategies: &[Strategy], mut render: F) -> Vec<SolveReport>
where
    F: FnMut(&Maze, &SolveReport),
{
    let mut solver = MazeSolver::new(maze);
    let mut reports = Vec::with_capacity(strategies.len());

    for &strategy in strategies {
        solver.grid_mut().reset();
        let path = solver.solve(strategy);
        let report = SolveReport {
            strategy,
            path,
            explored: solver.grid().explored_count(),
        };
        debug!("{} report: found={}", strategy, report.found());
        render(solver.grid(), &report);
        reports.push(report);
    }
    reports
}
