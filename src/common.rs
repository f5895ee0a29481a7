use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) static DEBUG: AtomicBool = AtomicBool::new(false);

/// Enable or disable tracing of the recursion to stdout.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

macro_rules! debug_print {
    ($($arg:tt)*) => {
        if $crate::common::DEBUG.load(::std::sync::atomic::Ordering::Relaxed) {
            print!($($arg)*);
        }
    };
}

macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::common::DEBUG.load(::std::sync::atomic::Ordering::Relaxed) {
            println!($($arg)*);
        }
    };
}

macro_rules! indented_println {
    ($depth:expr, $($arg:tt)*) => {
        $crate::common::debug_print!("{:width$}", "", width = $depth * 2);
        $crate::common::debug_println!($($arg)*);
    };
}

pub(crate) use debug_print;
pub(crate) use debug_println;
pub(crate) use indented_println;
