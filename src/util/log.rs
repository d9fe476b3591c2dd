use std::sync::OnceLock;

// 環境変数が設定されている場合のみdebug!を出力
pub const DEBUG_ENV: &str = "MAHJONG_NOTATION_DEBUG";

pub fn debug_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os(DEBUG_ENV).is_some())
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!(
            "[ERROR]({}:{}) {}",
            file!(),
            line!(),
            format_args!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!(
            "[WARN]({}:{}) {}",
            file!(),
            line!(),
            format_args!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        eprintln!(
            "[INFO]({}:{}) {}",
            file!(),
            line!(),
            format_args!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::util::log::debug_enabled() {
            eprintln!(
                "[DEBUG]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        eprintln!(
            "[ERROR]({}:{}) {}",
            file!(),
            line!(),
            format_args!($($arg)*)
        );
        std::process::exit(1);
    }};
}
