use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::{Engine, GameSnapshot};
use blockfall::term::{encode_diff_into, CellStyle, FrameBuffer, GameView, Viewport};
use blockfall::types::{EngineState, GameAction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
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

const STEER: [GameAction; 4] = [
    GameAction::MoveLeft,
    GameAction::Rotate,
    GameAction::MoveRight,
    GameAction::Rotate,
];

// One test per binary: the counter is global and tests run in parallel.
#[test]
fn render_and_diff_encode_are_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut engine = Engine::new(1);
    let mut snap = GameSnapshot::default();

    // Warm-up (resize/initial clears).
    engine.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            engine.apply_action(STEER[i % STEER.len()]);
            engine.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
        // The notice overlay too.
        snap.state = EngineState::GameOver;
        view.render_into(&snap, viewport, &mut fb);
    });
    assert!(allocs == 0);

    let mut prev = fb;
    engine.apply_action(GameAction::MoveLeft);
    let mut next = view.render(&engine.snapshot(), viewport);
    next.put_str(0, 0, "changed", CellStyle::default());
    let mut out = Vec::with_capacity(256 * 1024);

    // Warm-up.
    encode_diff_into(&prev, &next, &mut out).unwrap();
    assert!(!out.is_empty());

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
            std::mem::swap(&mut prev, &mut next);
        }
    });
    assert!(allocs == 0);
}
