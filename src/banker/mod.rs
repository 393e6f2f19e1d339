//! Banker's algorithm: deadlock avoidance via safe-state analysis.
//!
//! A state is *safe* when some ordering lets every process obtain its
//! remaining need, finish, and release what it holds. The analyzer is
//! independent of the scheduling engines and shares only their
//! conventions: validated input, pure computation, deterministic output.
//!
//! # Data
//!
//! | Name | Shape | Meaning |
//! |------|-------|---------|
//! | Max | n x m | Maximum demand |
//! | Allocation | n x m | Currently held |
//! | Need | n x m | `Max - Allocation` |
//! | Available | m | Free units |

mod safety;
mod state;

pub use safety::{check_safety, process_label, SafetyVerdict, ScanPolicy};
pub use state::{BankerRequest, ResourceState};

impl ResourceState {
    /// Runs the safety check with the default (restart-after-grant) policy.
    pub fn check_safety(&self) -> SafetyVerdict {
        check_safety(self, ScanPolicy::default())
    }
}
