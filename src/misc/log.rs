/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [unit propagation](crate::procedures::propagation)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [trace reduction](crate::procedures::reduction)
    pub const REDUCTION: &str = "reduction";

    /// Logs related to building and validating a [trace](crate::trace)
    pub const TRACE: &str = "trace";

    /// Logs related to [detached proof trees](crate::structures::proof_tree)
    pub const PROOF_TREE: &str = "proof_tree";
}
