/*!
Configuration of a reduction.

All configuration for a [TraceReducer](crate::procedures::reduction::TraceReducer) is contained within [ReductionConfig].
The reducer keeps a copy of the configuration, and so a configuration may be reused across reducers.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct ReductionConfig {
    /// Stop propagating as soon as some clause is reduced to the empty clause.
    pub stop_on_conflict: ConfigOption<bool>,

    /// Restrict the clauses considered to those used in deriving the conflict of the trace.
    pub core_only: ConfigOption<bool>,

    /// Record the clause a literal was derived from as an antecedent of clauses simplified by the literal.
    pub link_unit_reasons: ConfigOption<bool>,
}

impl Default for ReductionConfig {
    /// The default reduction keeps every clause of the trace in view, and stops at the first conflict.
    fn default() -> Self {
        ReductionConfig {
            stop_on_conflict: ConfigOption {
                name: "stop_on_conflict",
                min: false,
                max: true,
                value: true,
            },

            core_only: ConfigOption {
                name: "core_only",
                min: false,
                max: true,
                value: false,
            },

            link_unit_reasons: ConfigOption {
                name: "link_unit_reasons",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
