use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_pairs::core::GameState;
use tui_pairs::term::{FrameBuffer, GameView, Viewport};
use tui_pairs::types::{GameAction, GridSize, Settings, Theme};

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
fn term_game_view_render_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let settings = Settings {
        theme: Theme::Icons,
        grid: GridSize::new(6, 6),
        player_count: 2,
    };
    let mut gs = GameState::new(settings, 12345).unwrap();

    // Put some variety on screen: a revealed tile and a running clock.
    gs.flip(0);
    gs.tick(2_000);

    // Warm-up (resize/initial clears).
    view.render_into(&gs, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            gs.apply_action(GameAction::MoveRight);
            gs.tick(16);
            view.render_into(&gs, viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}
