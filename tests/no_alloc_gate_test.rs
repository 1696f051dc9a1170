use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_pairs::core::GameState;
use tui_pairs::types::{GameAction, GridSize, Settings, Theme, MISMATCH_HIDE_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let settings = Settings {
        theme: Theme::Icons,
        grid: GridSize::new(4, 4),
        player_count: 2,
    };
    let mut gs = GameState::new(settings, 12345).unwrap();

    // Pair bookkeeping (computed outside the gate: HashMap allocates).
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    {
        let mut seen = std::collections::HashMap::new();
        for (i, tile) in gs.deck().iter().enumerate() {
            if let Some(&first) = seen.get(&tile.id) {
                pairs.push((first, i));
            } else {
                seen.insert(tile.id, i);
            }
        }
    }

    // Warm-up.
    let _ = gs.tick(16);
    let _ = gs.apply_action(GameAction::MoveRight);

    let allocs = with_alloc_counting(|| {
        // Idle ticks should be allocation-free.
        for _ in 0..200 {
            let _ = gs.tick(16);
        }

        // Cursor movement should be allocation-free.
        for _ in 0..50 {
            let _ = gs.apply_action(GameAction::MoveLeft);
            let _ = gs.apply_action(GameAction::MoveRight);
            let _ = gs.apply_action(GameAction::MoveDown);
            let _ = gs.apply_action(GameAction::MoveUp);
        }

        // A full round of flips drives selection, scoring, the mismatch
        // timer, and the win check. The guessed list is pre-sized, so even
        // scoring stays allocation-free.
        let _ = gs.flip(pairs[0].0);
        let _ = gs.flip(pairs[1].0);
        let _ = gs.tick(MISMATCH_HIDE_MS);
        for (a, b) in &pairs {
            let _ = gs.flip(*a);
            let _ = gs.flip(*b);
        }
    });

    assert!(gs.game_won());
    assert!(allocs == 0);
}
