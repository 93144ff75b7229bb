use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monotris::types::{GRID_HEIGHT, GRID_WIDTH};
use monotris::{GameState, Grid};

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_full_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for row in (GRID_HEIGHT - 4)..GRID_HEIGHT {
                for col in 0..GRID_WIDTH as i8 {
                    grid.set(row as i8, col, 1);
                }
            }
            black_box(grid.clear_full_rows())
        })
    });
}

fn bench_move_down(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_new_game();

    c.bench_function("move_down", |b| {
        b.iter(|| {
            if !state.move_down() && state.is_game_over() {
                state.start_new_game();
            }
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_new_game();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            state.hard_drop();
            if state.is_game_over() {
                state.start_new_game();
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_new_game();
    let mut snap = monotris::GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_line_clear,
    bench_move_down,
    bench_hard_drop,
    bench_snapshot
);
criterion_main!(benches);
