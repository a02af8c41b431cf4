//! Driver tests: channel folding and gravity sources on paused time

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use blockfall::core::GameState;
use blockfall::engine::{fold, spawn_tick_sources, Driver, Event, TickSchedule};
use blockfall::term::{GameView, Viewport};
use blockfall::types::Action;

#[test]
fn test_fold_matches_reduce_chain() {
    let actions = [
        Action::MoveLeft,
        Action::MoveLeft,
        Action::Rotate,
        Action::MoveDown,
        Action::Tick(4),
        Action::Hold,
        Action::MoveRight,
    ];
    let start = GameState::new(31);

    let mut seen = 0;
    let folded = fold(start.clone(), actions, &mut |_: &GameState| -> Result<()> {
        seen += 1;
        Ok(())
    })
    .unwrap();

    let expected = actions.iter().fold(start, |s, &a| s.reduce(a));
    assert_eq!(folded, expected);
    assert_eq!(seen, actions.len());
}

#[test]
fn test_render_every_state_from_a_fold() {
    let view = GameView::default();
    let mut frames = Vec::new();
    fold(
        GameState::new(2),
        [Action::MoveDown, Action::MoveRight],
        &mut |s: &GameState| -> Result<()> {
            frames.push(view.render(s, Viewport::new(40, 24)));
            Ok(())
        },
    )
    .unwrap();

    assert_eq!(frames.len(), 2);
    assert_ne!(frames[0], frames[1]);
}

#[tokio::test(start_paused = true)]
async fn test_gravity_moves_piece_until_shutdown() {
    let (tx, rx) = mpsc::channel(64);
    let ticks = spawn_tick_sources(&TickSchedule::from_millis(&[100, 50]), &tx);

    let shutdown = tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(325)).await;
        let _ = shutdown.send(Event::Shutdown).await;
    });
    drop(tx);

    let start = GameState::new(17);
    let mut renders = 0;
    let last = Driver::new(start.clone())
        .run(rx, &mut |_: &GameState| -> Result<()> {
            renders += 1;
            Ok(())
        })
        .await
        .unwrap();

    for handle in ticks {
        handle.abort();
    }

    // Level 1 ticks at 100, 200 and 300ms; every other source is ignored
    let expected = (0..3).fold(start, |s, _| s.reduce(Action::MoveDown));
    assert_eq!(last, expected);
    // Initial render plus one per received tick: 3 at level 1, 6 at level 2
    // and the default 250ms level 5 source once
    assert_eq!(renders, 1 + 3 + 6 + 1);
}
