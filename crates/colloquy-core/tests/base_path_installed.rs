//! Exercises the process-wide execution mode. Kept in its own test binary
//! because the mode can only be installed once per process.

use colloquy_core::base_path::{base_path, with_base_path, ExecutionMode};

#[test]
fn installed_production_mode_drives_global_prefix() {
    assert_eq!(ExecutionMode::Production.install(), Ok(()));
    assert_eq!(ExecutionMode::current(), ExecutionMode::Production);
    assert_eq!(base_path(), "/openaire");
    assert_eq!(with_base_path("chat/ada"), "/openaire/chat/ada");
    assert_eq!(with_base_path("/chat/ada"), "/openaire/chat/ada");

    // A second install is refused and reports the mode in effect.
    assert_eq!(
        ExecutionMode::Development.install(),
        Err(ExecutionMode::Production)
    );
}
