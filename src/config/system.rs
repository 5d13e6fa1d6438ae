// Version consts, dont impact functionality
pub const VERSION_STR: &str = "otterprobe 0.1.0";
pub const TAGLINE: &str = "`Is anybody out there?`";

// Well-known local Erigon endpoint, used when the configured URL is empty
pub const DEFAULT_ERIGON_URL: &str = "http://127.0.0.1:8545";

// Lowest Otterscan API level we know how to talk to
pub const MIN_API_LEVEL: u32 = 8;

#[macro_export]
macro_rules! log_info {
    ($fmt:expr, $($arg:tt)*) => {{
        let message = format!($fmt, $($arg)*);
        println!("\x1b[35mInfo:\x1b[0m {}", message)
    }};
    ($fmt:expr) => {
        println!(concat!("\x1b[35mInfo:\x1b[0m ", $fmt))
    };
}

#[macro_export]
macro_rules! log_wrn {
    ($fmt:expr, $($arg:tt)*) => {{
        let message = format!($fmt, $($arg)*);
        println!("\x1b[93mWrn:\x1b[0m {}", message)
    }};
    ($fmt:expr) => {
        println!(concat!("\x1b[93mWrn:\x1b[0m ", $fmt))
    };
}

#[macro_export]
macro_rules! log_err {
    ($fmt:expr, $($arg:tt)*) => {{
        let message = format!($fmt, $($arg)*);
        println!("\x1b[31mErr:\x1b[0m {}", message)
    }};
    ($fmt:expr) => {
        println!(concat!("\x1b[31mErr:\x1b[0m ", $fmt))
    };
}

// Only prints with the `debug-verbose` feature. Arguments are still
// type-checked without it so call sites don't rot.
#[macro_export]
macro_rules! log_dbg {
    ($fmt:expr, $($arg:tt)*) => {{
        if cfg!(feature = "debug-verbose") {
            let message = format!($fmt, $($arg)*);
            println!("\x1b[36mDbg:\x1b[0m {}", message)
        }
    }};
    ($fmt:expr) => {{
        if cfg!(feature = "debug-verbose") {
            println!(concat!("\x1b[36mDbg:\x1b[0m ", $fmt))
        }
    }};
}
