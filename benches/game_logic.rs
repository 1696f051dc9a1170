use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pairs::core::{generate_deck, GameState, SimpleRng};
use tui_pairs::types::{GridSize, Settings, Theme, ICON_CATALOG, MISMATCH_HIDE_MS};

fn six_by_six() -> Settings {
    Settings {
        theme: Theme::Icons,
        grid: GridSize::new(6, 6),
        player_count: 2,
    }
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(six_by_six(), 12345).unwrap();
    state.flip(0);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_generate_deck(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_deck_6x6", |b| {
        b.iter(|| {
            generate_deck(
                black_box(GridSize::new(6, 6)),
                Theme::Icons,
                &ICON_CATALOG,
                &mut rng,
            )
            .unwrap()
        })
    });
}

fn bench_flip_pair(c: &mut Criterion) {
    let settings = six_by_six();
    // Tiles 0 and 1 rarely pair up, so this measures the mismatch path:
    // two flips plus the hide timer expiring.
    c.bench_function("flip_resolve_pair", |b| {
        b.iter(|| {
            let mut state = GameState::new(settings, black_box(12345)).unwrap();
            state.flip(0);
            state.flip(1);
            state.tick(MISMATCH_HIDE_MS);
        })
    });
}

criterion_group!(benches, bench_tick, bench_generate_deck, bench_flip_pair);
criterion_main!(benches);
