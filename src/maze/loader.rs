/*!
 * # Chargement d'un labyrinthe texte
 *
 * Format attendu :
 *
 * ```text
 * 3 4
 * A.#.
 * .#..
 * ...B
 * ```
 *
 * La première ligne donne le nombre de lignes puis de colonnes. Ensuite :
 * `#` mur, `A` départ, `B` arrivée, `.` ou espace passage.
 */

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::maze::cell::Position;
use crate::maze::error::MazeError;
use crate::maze::grid::{cell_count, Maze};

pub const WALL: char = '#';
pub const START: char = 'A';
pub const END: char = 'B';
pub const OPEN: char = '.';

fn parse_header(line: &str) -> Result<(usize, usize), MazeError> {
    let mut parts = line.split_whitespace();
    let dims = (parts.next(), parts.next(), parts.next());
    match dims {
        (Some(rows), Some(cols), None) => {
            let rows: usize = rows
                .parse()
                .map_err(|_| MazeError::InvalidHeader(line.to_string()))?;
            let cols: usize = cols
                .parse()
                .map_err(|_| MazeError::InvalidHeader(line.to_string()))?;
            Ok((rows, cols))
        }
        _ => Err(MazeError::InvalidHeader(line.to_string())),
    }
}

fn place_marker(
    slot: &mut Option<Position>,
    what: &'static str,
    pos: Position,
) -> Result<(), MazeError> {
    if slot.is_some() {
        return Err(MazeError::DuplicateMarker(what));
    }
    *slot = Some(pos);
    Ok(())
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().enumerate();

        // Les lignes vides avant l'en-tête sont ignorées
        let header = lines
            .by_ref()
            .find(|(_, l)| !l.trim().is_empty())
            .ok_or(MazeError::MissingHeader)?;
        let (rows, cols) = parse_header(header.1)?;
        let count = cell_count(rows, cols)?;

        let mut walls = vec![false; count];
        let mut start = None;
        let mut end = None;
        let mut row = 0;
        let mut last_line = header.0 + 1;

        for (i, line) in lines {
            let line_no = i + 1;
            last_line = line_no;
            if row == rows {
                if line.trim().is_empty() {
                    continue;
                }
                return Err(MazeError::RowCount {
                    line: line_no,
                    expected: rows,
                    found: row + 1,
                });
            }

            let chars: Vec<char> = line.trim_end_matches('\r').chars().collect();
            if chars.len() > cols {
                return Err(MazeError::RowTooLong {
                    line: line_no,
                    expected: cols,
                    found: chars.len(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let pos = Position::new(row, col);
                match ch {
                    WALL => walls[row * cols + col] = true,
                    START => place_marker(&mut start, "start", pos)?,
                    END => place_marker(&mut end, "end", pos)?,
                    OPEN | ' ' => {}
                    other => {
                        return Err(MazeError::UnexpectedChar {
                            line: line_no,
                            col: col + 1,
                            ch: other,
                        })
                    }
                }
            }
            row += 1;
        }

        if row < rows {
            return Err(MazeError::RowCount {
                line: last_line,
                expected: rows,
                found: row,
            });
        }

        let start = start.ok_or(MazeError::MissingMarker("start"))?;
        let end = end.ok_or(MazeError::MissingMarker("end"))?;
        Maze::new(rows, cols, &walls, start, end)
    }
}

impl Maze {
    /// Charge un labyrinthe depuis un fichier texte.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MazeError> {
        let content = fs::read_to_string(path.as_ref())?;
        let maze: Maze = content.parse()?;
        info!(
            "loaded {}x{} maze from {}",
            maze.rows(),
            maze.cols(),
            path.as_ref().display()
        );
        Ok(maze)
    }
}
