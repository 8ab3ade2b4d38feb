use disk_scheduler::logging::Verbosity;
use tracing::Level;

#[test]
fn verbosity_from_flags() {
    assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
    assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
    assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
}

#[test]
fn verbosity_levels() {
    assert_eq!(Verbosity::Quiet.crate_level(), Level::ERROR);
    assert_eq!(Verbosity::Normal.crate_level(), Level::INFO);
    assert_eq!(Verbosity::Verbose.crate_level(), Level::DEBUG);
}
