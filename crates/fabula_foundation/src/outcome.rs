//! The handler result contract.

use crate::patch::PatchSet;

/// The normalized result of one handler invocation.
///
/// `abort` signals that the default continuation of the command must not
/// run; patches attached alongside an abort are still applied at commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    /// State patches to apply at commit.
    pub patches: PatchSet,
    /// Whether the default continuation must not run.
    pub abort: bool,
}

impl Outcome {
    /// No patches, no abort.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Abort with no patches.
    ///
    /// The guard-before-mutate convention: a handler whose precondition
    /// fails prints one error line and returns this, so a half-checked
    /// handler can never leave inconsistent state.
    #[must_use]
    pub fn veto() -> Self {
        Self {
            patches: PatchSet::new(),
            abort: true,
        }
    }

    /// Patches without abort.
    #[must_use]
    pub fn with(patches: PatchSet) -> Self {
        Self {
            patches,
            abort: false,
        }
    }

    /// Patches plus abort.
    #[must_use]
    pub fn abort_with(patches: PatchSet) -> Self {
        Self {
            patches,
            abort: true,
        }
    }

    /// Returns true if this outcome carries no patches and no abort.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty() && !self.abort
    }
}
