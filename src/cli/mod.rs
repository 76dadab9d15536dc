pub mod orchestration;

pub use orchestration::{plan_release, run_release, ReleaseArgs, ReleaseOutcome};
