//! Subcommand implementations for `ethiotool`.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod calendar_ops;
pub mod config_ops;
pub mod numeral_ops;
pub mod translit_ops;

/// Pad `s` with spaces to `width` terminal columns.
pub(crate) fn pad(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    let w = s.width();
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_counts_columns_not_bytes() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("ሰላም", 5), "ሰላም  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
