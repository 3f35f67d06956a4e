use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{Cell, CellState, Maze, Strategy};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_mazes(n: usize, count: usize, wall_chance: f64, rng: &mut StdRng) -> Vec<Maze> {
    let start = Cell::new(0, 0);
    let goal = Cell::new(n - 1, n - 1);
    (0..count)
        .map(|_| {
            let layout = (0..n)
                .map(|row| {
                    (0..n)
                        .map(|col| {
                            let cell = Cell::new(row, col);
                            if cell != start && cell != goal && rng.gen_bool(wall_chance) {
                                CellState::Wall
                            } else {
                                CellState::Open
                            }
                        })
                        .collect()
                })
                .collect();
            Maze::from_rows(layout, start, goal).unwrap()
        })
        .collect()
}

fn strategy_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for (n, wall_chance) in [(32, 0.2), (64, 0.3), (128, 0.3)] {
        let mazes = random_mazes(n, 20, wall_chance, &mut rng);
        for strategy in Strategy::ALL {
            let solver = strategy.solver();
            c.bench_function(format!("{n}x{n} maze, {strategy}").as_str(), |b| {
                b.iter(|| {
                    for maze in &mazes {
                        black_box(solver.search(maze, maze.start(), maze.goal()));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
