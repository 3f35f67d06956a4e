use maze_pathfinding::{Maze, PathResult, Strategy};

// In this example a path is found on a 3x3 maze with shape
//  ___
// |S  |
// |# #|
// |  G|
//  ___
// where
// - # marks a wall
// - S marks the start
// - G marks the goal
//
// Run with RUST_LOG=debug to see what the search does.

fn main() {
    env_logger::init();
    let maze: Maze = "S..\n#.#\n..G".parse().expect("layout is well formed");
    println!("{}", maze);
    match maze.solve(Strategy::Heuristic) {
        PathResult::Found { path, cost } => {
            println!("Cost = {cost}");
            for p in path {
                println!("{}", p);
            }
        }
        PathResult::NotFound => println!("No Path Found"),
    }
}
