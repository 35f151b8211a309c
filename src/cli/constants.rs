// cli/constants.rs — identity strings, display-level plumbing, and the
// DISPLAY*/END_PROCESS macro family, carried over from the original CLI's
// display-infrastructure conventions and retargeted at c5.

use std::sync::atomic::{AtomicU32, Ordering};

pub const COMPRESSOR_NAME: &str = "c5";
pub const EXTENSION: &str = ".c5";

pub const WELCOME_MESSAGE_FMT: &str = "*** {} v{} {}-bit, compress/decompress utility ***\n";

/// 0 = no output; 1 = errors only; 2 = normal (downgradable); 3 = non-downgradable; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout — equivalent to C `DISPLAYOUT(...)`.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr — equivalent to C `DISPLAY(...)`.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level` — equivalent to C `DISPLAYLEVEL(l, ...)`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print debug output — equivalent to C `DEBUGOUTPUT(...)`.
/// Only active in debug builds.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        eprint!($($arg)*);
    };
}

/// Terminate the process with an error code after printing a diagnostic.
/// Equivalent to the C `END_PROCESS(error, ...)` macro.
#[macro_export]
macro_rules! end_process {
    ($error:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        eprint!("Error in {}, line {} : \n", file!(), line!());
        if $crate::cli::constants::display_level() >= 1 {
            eprint!("Error {} : ", $error);
            eprint!($($arg)*);
            eprint!("\n");
        }
        std::process::exit($error as i32);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_constant() {
        assert_eq!(EXTENSION, ".c5");
    }

    #[test]
    fn compressor_name_constant() {
        assert_eq!(COMPRESSOR_NAME, "c5");
    }

    #[test]
    fn display_level_default() {
        let prev = display_level();
        assert!(display_level() <= 4);
        set_display_level(3);
        assert_eq!(display_level(), 3);
        set_display_level(prev);
    }
}
