use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use snake_common::SessionRng;
use snake_common::snake::{Direction, FieldSize, SnakeGameState};

// Outward square spiral until the game ends or the tick budget runs out.
fn play_spiral(field_size: FieldSize, ticks: usize) -> u32 {
    let mut rng = SessionRng::new(7);
    let mut state = SnakeGameState::new(field_size);
    state.new_game(&mut rng);

    let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
    let mut leg = 1;
    let mut turn = 0;
    let mut steps_in_leg = 0;

    for _ in 0..ticks {
        if !state.is_running() {
            break;
        }
        state.advance(&mut rng);
        steps_in_leg += 1;
        if steps_in_leg == leg {
            state.request_turn(turns[turn % turns.len()]);
            turn += 1;
            steps_in_leg = 0;
            if turn % 2 == 0 {
                leg += 1;
            }
        }
    }
    state.score()
}

fn bench_spawn_food_large_field() {
    let mut rng = SessionRng::new(11);
    let mut state = SnakeGameState::new(FieldSize::new(100, 100));
    state.new_game(&mut rng);
    for _ in 0..100 {
        black_box(state.spawn_food(&mut rng));
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("advance 200 ticks on 25x20", |b| {
        b.iter(|| black_box(play_spiral(FieldSize::new(25, 20), 200)))
    });
    c.bench_function("spawn food 100x on 100x100", |b| b.iter(bench_spawn_food_large_field));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
