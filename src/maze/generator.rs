use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::maze::cell::Position;
use crate::maze::error::MazeError;
use crate::maze::grid::{cell_count, Maze};

/// Ratio de murs par défaut pour un labyrinthe aléatoire.
pub const DEFAULT_WALL_RATIO: f64 = 0.3;

/// Graine par défaut.
pub const DEFAULT_SEED: u64 = 0;

/// Génère un labyrinthe aléatoire, départ en haut à gauche et arrivée en bas à droite.
///
/// Chaque autre cellule est un mur avec la probabilité `wall_ratio`. La même
/// graine donne toujours le même labyrinthe. Rien ne garantit qu'un chemin existe.
pub fn generate(rows: usize, cols: usize, wall_ratio: f64, seed: u64) -> Result<Maze, MazeError> {
    if !(0.0..=1.0).contains(&wall_ratio) {
        return Err(MazeError::InvalidWallRatio(wall_ratio));
    }
    let count = cell_count(rows, cols)?;

    let start = Position::new(0, 0);
    let end = Position::new(rows - 1, cols - 1);
    let mut rng = StdRng::seed_from_u64(seed);

    let walls: Vec<bool> = (0..count)
        .map(|i| {
            let pos = Position::new(i / cols, i % cols);
            pos != start && pos != end && rng.random_bool(wall_ratio)
        })
        .collect();

    let maze = Maze::new(rows, cols, &walls, start, end)?;
    info!(
        "generated {}x{} maze (wall ratio {}, seed {})",
        rows, cols, wall_ratio, seed
    );
    Ok(maze)
}
