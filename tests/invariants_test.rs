use std::collections::HashSet;

use proptest::prelude::*;
use tetris_stack::{Command, Piece, PieceQueue, PieceSupply, ReserveStack, SupplyError};

fn command() -> impl Strategy<Value = Command> {
    proptest::sample::select(Command::MENU.to_vec())
}

fn snapshot(supply: &PieceSupply) -> (Vec<Piece>, Vec<Piece>) {
    (
        supply.queue().iter().copied().collect(),
        supply.stack().iter().copied().collect(),
    )
}

proptest! {
    #[test]
    fn sizes_stay_in_bounds(seed in any::<u64>(), commands in proptest::collection::vec(command(), 0..200)) {
        let mut supply = PieceSupply::with_seed(seed);
        for command in commands {
            let _ = supply.apply(command);
            prop_assert_eq!(supply.queue().iter().count(), PieceQueue::CAPACITY);
            prop_assert!(supply.stack().len() <= ReserveStack::CAPACITY);
        }
    }

    #[test]
    fn ids_are_never_duplicated(seed in any::<u64>(), commands in proptest::collection::vec(command(), 0..200)) {
        let mut supply = PieceSupply::with_seed(seed);
        for command in commands {
            let _ = supply.apply(command);
            let (queue, stack) = snapshot(&supply);
            let ids: HashSet<u32> = queue.iter().chain(&stack).map(|p| p.id).collect();
            prop_assert_eq!(ids.len(), queue.len() + stack.len());
            prop_assert!(ids.iter().all(|&id| id < supply.generator().peek_next_id()));
        }
    }

    #[test]
    fn rejected_and_display_commands_change_nothing(seed in any::<u64>(), commands in proptest::collection::vec(command(), 0..100)) {
        let mut supply = PieceSupply::with_seed(seed);
        for command in commands {
            let before = snapshot(&supply);
            let next_id = supply.generator().peek_next_id();
            let result = supply.apply(command);
            if result.is_err() || !command.is_mutating() {
                prop_assert_eq!(snapshot(&supply), before);
                prop_assert_eq!(supply.generator().peek_next_id(), next_id);
            }
        }
    }

    #[test]
    fn same_seed_same_run(seed in any::<u64>(), commands in proptest::collection::vec(command(), 0..100)) {
        let mut a = PieceSupply::with_seed(seed);
        let mut b = PieceSupply::with_seed(seed);
        for command in commands {
            prop_assert_eq!(a.apply(command), b.apply(command));
            prop_assert_eq!(snapshot(&a), snapshot(&b));
        }
    }

    #[test]
    fn reserve_then_use_restores_stack_size(seed in any::<u64>(), plays in 0usize..10) {
        let mut supply = PieceSupply::with_seed(seed);
        for _ in 0..plays {
            supply.play();
        }
        let front_before = supply.queue().peek_front();
        let stack_len = supply.stack().len();

        let reserved = supply.reserve().unwrap();
        prop_assert_eq!(reserved, front_before);
        prop_assert_eq!(supply.use_reserved(), Ok(reserved));

        prop_assert_eq!(supply.stack().len(), stack_len);
        prop_assert_ne!(supply.queue().peek_front(), front_before);
        let rear = supply.queue().get(PieceQueue::CAPACITY - 1).copied();
        prop_assert_eq!(rear.map(|p| p.id), Some(supply.generator().peek_next_id() - 1));
    }
}

#[test]
fn block_swap_with_two_reserved_is_rejected() {
    let mut supply = PieceSupply::with_seed(11);
    supply.reserve().unwrap();
    supply.reserve().unwrap();
    let before = snapshot(&supply);

    assert_eq!(
        supply.apply(Command::BlockSwap),
        Err(SupplyError::InsufficientStackDepth {
            required: 3,
            available: 2
        })
    );
    assert_eq!(snapshot(&supply), before);
}
