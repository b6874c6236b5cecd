//! Headless walkthrough of the swipe engine: three list rows, a reveal, an
//! exclusivity handoff, an outside-click dismissal, and a hidden-action
//! swipe. Run with `RUST_LOG=debug` to see the engine's own diagnostics.

use std::cell::RefCell;
use std::rc::Rc;

use sliprow_core::prelude::*;
use sliprow_foundation::coordinator::dispatch_document_click;
use sliprow_foundation::{RevealFrame, SwipePresenter, SwipeRow};

/// Presenter that logs every applied frame in place of a rendered surface.
struct LoggingPresenter {
    row_name: &'static str,
    panel_width: Option<f32>,
}

impl SwipePresenter for LoggingPresenter {
    fn panel_width(&self, _direction: PanDirection) -> Option<f32> {
        self.panel_width
    }

    fn apply(&mut self, frame: &RevealFrame) {
        log::info!(
            "[{}] {:?} offset {:+.1}",
            self.row_name,
            frame.state,
            frame.offset
        );
    }
}

fn mount_row(
    name: &'static str,
    panel_width: Option<f32>,
) -> Rc<RefCell<SwipeRow<&'static str>>> {
    let actions = [
        SwipeAction::new("archive", |_, data: &&'static str| {
            log::info!("archive clicked for {data}");
        })
        .with_label("Archive")
        .with_icon("archive"),
        SwipeAction::new("delete", |_, data: &&'static str| {
            log::info!("delete clicked for {data}");
        })
        .with_label("Delete")
        .with_css_class("danger"),
    ];
    let config = SwipeConfig::new(name)
        .with_left(DirectionConfig::active().with_actions(actions))
        .on_menu_opened(|data| log::info!("menu opened on {data}"))
        .on_menu_closed(|data| log::info!("menu closed on {data}"))
        .on_action_done(|_, data| log::info!("action finished on {data}"));
    let presenter = LoggingPresenter {
        row_name: name,
        panel_width,
    };
    SwipeRow::mount(config, Box::new(presenter)).expect("demo config is valid")
}

fn swipe_left(row: &Rc<RefCell<SwipeRow<&'static str>>>, delta_x: f32, now: u64) -> u64 {
    let mut engine = row.borrow_mut();
    engine.on_pan_start(&PanEvent::start(PanDirection::Left).at(now));
    engine.on_pan_move(&PanEvent::moved(PanDirection::Left, delta_x).at(now + 16));
    engine.on_pan_end(&PanEvent::ended(PanDirection::Left, delta_x).at(now + 32));
    now + 32
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Sliprow list demo ===");
    println!("Three swipeable rows driven by a scripted gesture sequence:");
    println!("  - reveal the first row's actions");
    println!("  - start a gesture on the second row (closes the first)");
    println!("  - dismiss with an outside click");
    println!("  - swipe a hidden-action row (fires its default action)");
    println!();

    let inbox = mount_row("inbox-1", Some(120.0));
    let inbox2 = mount_row("inbox-2", Some(120.0));

    // Hidden-action row: crossing the threshold fires the default action
    // and springs back instead of revealing a panel.
    let quick_delete = SwipeRow::mount(
        SwipeConfig::new("inbox-3")
            .with_left(
                DirectionConfig::active()
                    .with_show_actions(false)
                    .with_fallback("Delete", "trash")
                    .with_default_action(|data: &&'static str| {
                        log::info!("default delete fired for {data}");
                    }),
            )
            .on_menu_opened(|data| log::info!("menu opened on {data}"))
            .on_menu_closed(|data| log::info!("menu closed on {data}")),
        Box::new(LoggingPresenter {
            row_name: "inbox-3",
            panel_width: None,
        }),
    )
    .expect("demo config is valid");

    let mut now = 1_000u64;

    log::info!("--- swipe inbox-1 past the threshold ---");
    now = swipe_left(&inbox, -80.0, now);

    log::info!("--- a gesture starts on inbox-2: inbox-1 closes ---");
    now += 200;
    now = swipe_left(&inbox2, -90.0, now);

    log::info!("--- an action button is clicked on inbox-2 ---");
    now += 200;
    let inbox2_id = inbox2.borrow().id();
    inbox2
        .borrow_mut()
        .activate_action("archive", &ClickEvent::inside(inbox2_id).at(now));

    log::info!("--- reveal inbox-1 again, then click outside ---");
    now += 200;
    now = swipe_left(&inbox, -80.0, now);
    now += 200;
    dispatch_document_click(&ClickEvent::outside().at(now));

    log::info!("--- swipe the hidden-action row ---");
    now += 200;
    swipe_left(&quick_delete, -70.0, now);

    println!();
    println!("Done.");
}
