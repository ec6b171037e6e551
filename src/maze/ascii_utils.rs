/*!
 * # Module de visualisation du labyrinthe
 *
 * Ce module convertit un `Maze` et un chemin éventuel en une représentation
 * ASCII, avec les mêmes symboles que le format de chargement :
 * - `#` pour un mur,
 * - `A` pour le départ, `B` pour l'arrivée,
 * - `*` pour une cellule du chemin,
 * - `.` pour un passage.
 */

use crate::maze::grid::{Grid, Maze};
use crate::maze::loader::{END, OPEN, START, WALL};
use crate::maze::solver::Path;

pub const PATH: char = '*';

/// Génère une représentation ASCII du labyrinthe avec le chemin trouvé.
///
/// # Arguments
///
/// * `maze` - Le labyrinthe à afficher.
/// * `path` - Le chemin à superposer, ou `None` pour le labyrinthe seul.
///
/// # Retour
///
/// Une `String` contenant une ligne par rangée du labyrinthe.
///
pub fn render_solution(maze: &Maze, path: Option<&Path>) -> String {
    let start = maze.start_cell();
    let end = maze.end_cell();
    let mut out = String::with_capacity((maze.cols() + 1) * maze.rows());

    for cell in maze.cells() {
        let pos = cell.position();
        let ch = if pos == start {
            START
        } else if pos == end {
            END
        } else if cell.is_wall() {
            WALL
        } else if path.is_some_and(|p| p.contains(pos)) {
            PATH
        } else {
            OPEN
        };
        out.push(ch);
        if pos.col + 1 == maze.cols() {
            out.push('\n');
        }
    }
    out
}

/// Formate un chemin sous la forme `(0,0) -> (0,1) -> ...`.
pub fn format_path(path: &Path) -> String {
    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
