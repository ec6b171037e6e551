use std::collections::VecDeque;

use maze_solver::maze::direction::Direction;
use maze_solver::maze::generator::generate;
use maze_solver::{solve_all, Grid, Maze, MazeSolver, Path, Position, Strategy};

fn demo_maze() -> Maze {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/maze3.txt");
    Maze::load(path).expect("demo maze should load")
}

/// Vérifie qu'un chemin relie le départ à l'arrivée, pas à pas, sans mur.
fn assert_valid_path(maze: &Maze, path: &Path) {
    assert_eq!(path.first(), Some(maze.start_cell()));
    assert_eq!(path.last(), Some(maze.end_cell()));
    for pos in path.iter() {
        assert!(!maze.is_wall(pos.row, pos.col), "wall {} in path", pos);
    }
    for pair in path.cells().windows(2) {
        assert!(
            Direction::between(pair[0], pair[1]).is_some(),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

/// Distance minimale en pas, calculée indépendamment du solveur.
fn shortest_edges(maze: &Maze) -> Option<usize> {
    let start = maze.start_cell();
    let end = maze.end_cell();
    let mut dist = vec![None; maze.rows() * maze.cols()];
    let mut queue = VecDeque::from([start]);
    dist[start.row * maze.cols() + start.col] = Some(0);

    while let Some(pos) = queue.pop_front() {
        let d = dist[pos.row * maze.cols() + pos.col].unwrap();
        if pos == end {
            return Some(d);
        }
        for dir in Direction::ALL {
            let (row, col) = dir.step(pos);
            if !maze.is_valid_cell(row, col) {
                continue;
            }
            let next = Position::new(row as usize, col as usize);
            let slot = &mut dist[next.row * maze.cols() + next.col];
            if slot.is_none() {
                *slot = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

#[test]
fn test_demo_maze_both_strategies() {
    let mut maze = demo_maze();
    let mut solver = MazeSolver::new(&mut maze);

    let dfs = solver.solve_dfs().expect("dfs should find a path");
    assert_valid_path(solver.grid(), &dfs);
    assert_eq!(dfs.len(), 41);

    solver.grid_mut().reset();
    let bfs = solver.solve_bfs().expect("bfs should find a path");
    assert_valid_path(solver.grid(), &bfs);
    assert_eq!(bfs.len(), 35);
    assert_eq!(Some(bfs.edges()), shortest_edges(solver.grid()));
}

#[test]
fn test_reset_makes_runs_repeatable() {
    let mut maze = demo_maze();
    let mut solver = MazeSolver::new(&mut maze);
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        solver.grid_mut().reset();
        let first = solver.solve(strategy);
        solver.grid_mut().reset();
        let second = solver.solve(strategy);
        assert_eq!(first, second);
    }
}

#[test]
fn test_generated_mazes() {
    let mut solved = 0;
    for seed in 0..60 {
        let mut maze = generate(9, 13, 0.3, seed).unwrap();
        let expected = shortest_edges(&maze);
        let reports = solve_all(
            &mut maze,
            &[Strategy::DepthFirst, Strategy::BreadthFirst],
            |maze, report| {
                if let Some(path) = &report.path {
                    assert_valid_path(maze, path);
                }
            },
        );
        let (dfs, bfs) = (&reports[0].path, &reports[1].path);

        match expected {
            Some(edges) => {
                let dfs = dfs.as_ref().expect("dfs misses a reachable end");
                let bfs = bfs.as_ref().expect("bfs misses a reachable end");
                assert_eq!(bfs.edges(), edges, "seed {}", seed);
                assert!(bfs.edges() <= dfs.edges(), "seed {}", seed);
                solved += 1;
            }
            None => {
                assert!(dfs.is_none(), "seed {}", seed);
                assert!(bfs.is_none(), "seed {}", seed);
            }
        }
    }
    assert!(solved > 0);
}

#[test]
fn test_unreachable_end_in_large_maze() {
    let mut maze: Maze = "4 7\nA....#.\n.###.#.\n...#.##\n.#.##.B\n".parse().unwrap();
    let mut solver = MazeSolver::new(&mut maze);
    assert!(solver.solve_bfs().is_none());
    solver.grid_mut().reset();
    assert!(solver.solve_dfs().is_none());
}
