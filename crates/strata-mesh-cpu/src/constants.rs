/// Default upper bound on a merged rectangle's run along either in-plane
/// axis. Overridable through `MesherConfig::max_merge_run`.
pub const MAX_MERGE_RUN: usize = 64;
