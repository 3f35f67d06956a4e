use maze_pathfinding::{Maze, Strategy};
use std::{env, fs};

// Reads a maze layout from the file given as first argument (or uses a built-in one) and
// shows the route every strategy takes. An optional second argument limits the run to a
// single strategy, e.g. `cargo run --example compare_strategies -- maze.txt bfs`.

const DEFAULT_MAZE: &str = "\
S...#.....
.##.#.###.
.#..#...#.
.#.####.#.
.#......#G";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut args = env::args().skip(1);
    let layout = match args.next() {
        Some(file) => fs::read_to_string(file)?,
        None => DEFAULT_MAZE.to_owned(),
    };
    let strategies = match args.next() {
        Some(name) => vec![name.parse::<Strategy>()?],
        None => Strategy::ALL.to_vec(),
    };
    let maze: Maze = layout.parse()?;
    println!("{}", maze);
    for strategy in strategies {
        let outcome = strategy.solver().search(&maze, maze.start(), maze.goal());
        println!("{strategy}: expanded {} cells", outcome.explored.len());
        match outcome.result.path() {
            Some(path) => {
                println!("Cost = {}", outcome.result.cost().unwrap_or_default());
                println!("{}", maze.render_path(path));
            }
            None => println!("No Path Found\n"),
        }
    }
    Ok(())
}
