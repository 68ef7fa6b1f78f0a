//! Debugging feature flags.

pub struct LogFlags {
    /// Log the outcome of every polling cycle, not just failures.
    pub log_cycles: bool,

    /// Log which alias key each scalar metric resolved through.
    pub log_alias_resolution: bool,
}

pub const DF: LogFlags = LogFlags {
    log_cycles: true,
    log_alias_resolution: false,
};
