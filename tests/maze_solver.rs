use nanorand::{Rng, WyRand};
use weighted_maze::{prelude::*, solve, InvalidGrid};

const ALGORITHMS: [Algorithm; 2] = [Algorithm::Dense, Algorithm::Frontier];

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_maze(rng: &mut WyRand) -> Maze {
    let rows = rng.generate_range(2_usize..=12);
    let cols = rng.generate_range(2_usize..=12);
    let mut grid: Vec<Vec<Cell>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.generate_range(0_u8..4) == 0 {
                        Cell::wall()
                    } else {
                        Cell::path(rng.generate_range(0_usize..10))
                    }
                })
                .collect()
        })
        .collect();

    let start = (rng.generate_range(0..rows), rng.generate_range(0..cols));
    let mut end = start;
    while end == start {
        end = (rng.generate_range(0..rows), rng.generate_range(0..cols));
    }
    grid[start.0][start.1] = Cell::start();
    grid[end.0][end.1] = Cell::end(rng.generate_range(0_usize..10));

    Maze::new(grid).unwrap()
}

fn check_path(maze: &Maze, path: &Path<Point>) {
    assert!(path.len() >= 2);
    assert_eq!(path[0], maze.start());
    assert_eq!(path[path.len() - 1], maze.end());
    assert!(path.is_connected(), "{}", path);
    assert!(path.iter().all(|&p| maze.is_traversable(p)));

    let sum: Cost = path.iter().skip(1).map(|&p| maze.cost_of(p).unwrap()).sum();
    assert_eq!(sum, path.cost());
}

#[test]
fn corner_to_corner() {
    init();
    for algorithm in ALGORITHMS {
        let mut maze: Maze = "
            S 1 1
            # 1 1
            1 1 E
        "
        .parse()
        .unwrap();

        let solution = maze.solve(algorithm).unwrap();
        assert!(solution.found());
        assert_eq!(solution.cost(), Some(4));

        let path = solution.path().unwrap();
        check_path(&maze, path);
        assert!(!path.contains(&(1, 0)));
        assert_eq!(maze.path_cells().len(), 3);
        assert!(!maze.is_on_path(maze.start()));
        assert!(!maze.is_on_path(maze.end()));
        assert_eq!(maze.classify(maze.start()), Some(Kind::Start));
        assert_eq!(maze.classify(maze.end()), Some(Kind::End));
    }
}

#[test]
fn adjacent_end_costs_its_own_cost() {
    init();
    for algorithm in ALGORITHMS {
        let mut maze = Maze::new(vec![
            vec![Cell::start(), Cell::end(6)],
            vec![Cell::path(1), Cell::path(1)],
        ])
        .unwrap();

        let solution = maze.solve(algorithm).unwrap();
        assert_eq!(solution.cost(), Some(6));
        assert_eq!(solution.path().unwrap().len(), 2);
        assert!(maze.path_cells().is_empty());
    }
}

#[test]
fn enclosed_start() {
    init();
    for algorithm in ALGORITHMS {
        let mut maze: Maze = "
            . . . . .
            . # # # .
            . # S # .
            . # # # .
            . . . . E
        "
        .parse()
        .unwrap();
        let before = maze.clone();

        let solution = maze.solve(algorithm).unwrap();
        assert!(!solution.found());
        assert_eq!(solution.cost(), None);
        assert!(solution.path().is_none());
        assert_eq!(maze, before);
    }
}

#[test]
fn enclosed_end() {
    init();
    let mut maze: Maze = "
        S . . #
        . . # E
    "
    .parse()
    .unwrap();
    let solution = maze.solve(Algorithm::Frontier).unwrap();
    assert!(!solution.found());
    assert_eq!(solution.visited(), 5);
}

#[test]
fn solving_twice_is_idempotent() {
    init();
    for algorithm in ALGORITHMS {
        let mut maze: Maze = "
            S . 3 .
            . # . .
            . . . E
        "
        .parse()
        .unwrap();

        let first = maze.solve(algorithm).unwrap();
        let marked = maze.clone();
        let second = maze.solve(algorithm).unwrap();

        assert_eq!(first, second);
        assert_eq!(maze, marked);
    }
}

#[test]
fn display_marks_path() {
    init();
    let mut maze: Maze = "
        S 9 E
        . . .
    "
    .parse()
    .unwrap();
    maze.solve(Algorithm::default()).unwrap();
    assert_eq!(maze.to_string(), "S 9 E\n* * *\n");

    maze.clear_path();
    assert_eq!(maze.to_string(), "S 9 E\n1 1 1\n");
}

#[test]
fn validation() {
    init();
    let err = |text: &str| match Maze::parse(text) {
        Err(MazeError::InvalidGrid(reason)) => reason,
        other => panic!("expected invalid grid, got {:?}", other),
    };

    assert_eq!(err(""), InvalidGrid::Empty);
    assert_eq!(err(". . ."), InvalidGrid::MissingStart);
    assert_eq!(err("S . ."), InvalidGrid::MissingEnd);
    assert_eq!(err("S E S"), InvalidGrid::MultipleStarts((0, 0), (0, 2)));
    assert_eq!(err("S E\nE ."), InvalidGrid::MultipleEnds((0, 1), (1, 0)));

    let wide = format!("S E{}", " .".repeat(49));
    assert_eq!(
        err(&wide),
        InvalidGrid::TooLarge {
            rows: 1,
            cols: 51,
            max: 50
        }
    );
    assert!(Maze::parse_with_config(&wide, MazeConfig::UNBOUNDED).is_ok());

    let small = MazeConfig {
        max_dimension: 2,
        ..Default::default()
    };
    assert!(Maze::parse_with_config("S . E", small).is_err());
    assert!(Maze::parse_with_config("S E", small).is_ok());
}

#[test]
fn costs_up_to_the_limit() {
    init();
    let text = format!("S {} E", usize::MAX);
    assert!(matches!(
        Maze::parse(&text),
        Err(MazeError::InvalidGrid(InvalidGrid::CostTooLarge((0, 2))))
    ));

    let text = format!("S {} E", usize::MAX - 1);
    let maze = Maze::parse(&text).unwrap();
    for algorithm in ALGORITHMS {
        let solution = solve(&maze, algorithm).unwrap();
        assert_eq!(solution.cost(), Some(usize::MAX), "{:?}", algorithm);
        let path = solution.path().unwrap();
        assert_eq!(path.cost(), usize::MAX);
        assert_eq!(*path, vec![(0, 0), (0, 1), (0, 2)]);
    }
}

#[test]
fn largest_legacy_maze() {
    init();
    let mut rows = vec![vec![Cell::path(1); 50]; 50];
    rows[0][0] = Cell::start();
    rows[49][49] = Cell::end(1);
    let maze = Maze::new(rows).unwrap();

    let dense = solve(&maze, Algorithm::Dense).unwrap();
    let frontier = solve(&maze, Algorithm::Frontier).unwrap();
    assert_eq!(dense.cost(), Some(98));
    assert_eq!(dense.path(), frontier.path());
    assert_eq!(dense.visited(), frontier.visited());
}

#[test]
fn designs_agree_on_random_mazes() {
    init();
    let mut rng = WyRand::new_seed(0x5eed);
    let mut found = 0;

    for _ in 0..300 {
        let maze = random_maze(&mut rng);

        let dense = solve(&maze, Algorithm::Dense).unwrap();
        let frontier = solve(&maze, Algorithm::Frontier).unwrap();

        assert_eq!(dense.found(), frontier.found(), "\n{}", maze);
        assert_eq!(dense.cost(), frontier.cost(), "\n{}", maze);
        assert_eq!(dense.path(), frontier.path(), "\n{}", maze);
        assert_eq!(dense.visited(), frontier.visited(), "\n{}", maze);

        if let Some(path) = dense.path() {
            check_path(&maze, path);
            found += 1;
        }
    }

    // with a quarter of the cells being walls, most mazes are solvable
    assert!(found > 100);
}
