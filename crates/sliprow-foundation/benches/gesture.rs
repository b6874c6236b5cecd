use criterion::{criterion_group, criterion_main, Criterion};

use sliprow_core::{DirectionConfig, PanDirection, PanEvent, SwipeConfig};
use sliprow_foundation::{NullPresenter, SwipeRow};

fn full_gesture(c: &mut Criterion) {
    let config = SwipeConfig::new(0u32)
        .with_left(DirectionConfig::active())
        .with_right(DirectionConfig::active());
    let row = SwipeRow::mount(config, Box::new(NullPresenter)).expect("valid config");

    let mut now = 1_000u64;
    c.bench_function("swipe_reveal_reset", |b| {
        b.iter(|| {
            let mut engine = row.borrow_mut();
            engine.on_pan_start(&PanEvent::start(PanDirection::Left).at(now));
            engine.on_pan_move(&PanEvent::moved(PanDirection::Left, -80.0).at(now + 16));
            engine.on_pan_end(&PanEvent::ended(PanDirection::Left, -80.0).at(now + 32));
            engine.reset();
            now += 100;
        });
    });
}

criterion_group!(benches, full_gesture);
criterion_main!(benches);
