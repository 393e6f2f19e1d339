//! Safety-check invariants over random allocation states.

use proptest::prelude::*;

use u_cpusched::banker::{check_safety, ResourceState, SafetyVerdict, ScanPolicy};

/// Builds `(n, m, max, allocation, available)` with `allocation <= max`.
fn resource_state() -> impl Strategy<Value = ResourceState> {
    (1usize..6, 1usize..4)
        .prop_flat_map(|(n, m)| {
            let rows = prop::collection::vec(prop::collection::vec((0i64..8, 0i64..8), m), n);
            let available = prop::collection::vec(0i64..8, m);
            (Just(n), Just(m), rows, available)
        })
        .prop_map(|(n, m, rows, available)| {
            let mut max = Vec::with_capacity(n);
            let mut allocation = Vec::with_capacity(n);
            for row in rows {
                max.push(row.iter().map(|&(a, b)| a.max(b)).collect());
                allocation.push(row.iter().map(|&(a, b)| a.min(b)).collect());
            }
            ResourceState::new(n, m, max, allocation, available).unwrap()
        })
}

proptest! {
    #[test]
    fn need_is_max_minus_allocation(state in resource_state()) {
        for i in 0..state.process_count() {
            for j in 0..state.resource_count() {
                prop_assert_eq!(state.need()[i][j], state.max()[i][j] - state.allocation()[i][j]);
                prop_assert!(state.need()[i][j] >= 0);
            }
        }
    }

    #[test]
    fn safe_sequences_replay(state in resource_state()) {
        for policy in [ScanPolicy::RestartAfterGrant, ScanPolicy::ContinueScan] {
            if let SafetyVerdict::Safe { sequence } = check_safety(&state, policy) {
                prop_assert_eq!(sequence.len(), state.process_count());
                prop_assert!(state.is_safe_sequence(&sequence));
            }
        }
    }

    #[test]
    fn policies_agree_on_verdict(state in resource_state()) {
        let restart = check_safety(&state, ScanPolicy::RestartAfterGrant);
        let cont = check_safety(&state, ScanPolicy::ContinueScan);
        prop_assert_eq!(restart.is_safe(), cont.is_safe());
    }

    #[test]
    fn unsafe_blocked_processes_cannot_be_served(state in resource_state()) {
        if let SafetyVerdict::Unsafe { blocked } = check_safety(&state, ScanPolicy::default()) {
            prop_assert!(!blocked.is_empty());
            let mut work = state.available().to_vec();
            for i in (0..state.process_count()).filter(|i| !blocked.contains(i)) {
                for (w, a) in work.iter_mut().zip(&state.allocation()[i]) {
                    *w += a;
                }
            }
            for &i in &blocked {
                let fits = state.need()[i].iter().zip(&work).all(|(n, w)| n <= w);
                prop_assert!(!fits);
            }
        }
    }
}
