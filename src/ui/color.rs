//! Color and formatting utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const LIGHT_RED: &'static str = "\x1b[1;31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    colorize(text, Colors::BOLD)
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) {
        return false;
    }

    // CI logs render ANSI colors even though stdout is a pipe
    if env::var("GITHUB_ACTIONS").is_ok() {
        return true;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("dumb") | Ok(""))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_colorize__no_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
        let result = colorize("test", Colors::LIGHT_RED);
        unsafe {
            std::env::remove_var("NO_COLOR");
        }

        assert_eq!(result, "test");
    }

    #[test]
    #[serial]
    fn test_supports_formatting__force_color() {
        let original_no_color = std::env::var("NO_COLOR").ok();
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }

        let supported = supports_formatting();
        let colored = bold("title");

        unsafe {
            std::env::remove_var("FORCE_COLOR");
            if let Some(val) = original_no_color {
                std::env::set_var("NO_COLOR", val);
            }
        }

        assert!(supported);
        assert_eq!(colored, "\x1b[1mtitle\x1b[0m");
    }

    #[test]
    #[serial]
    fn test_supports_formatting__force_color_zero() {
        unsafe {
            std::env::set_var("FORCE_COLOR", "0");
        }
        let supported = supports_formatting();
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }

        assert!(!supported);
    }

    #[test]
    #[serial]
    fn test_supports_formatting__disabled_in_tests() {
        let original_force = std::env::var("FORCE_COLOR").ok();
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }

        let supported = supports_formatting();

        unsafe {
            if let Some(val) = original_force {
                std::env::set_var("FORCE_COLOR", val);
            }
        }

        assert!(!supported);
    }
}
