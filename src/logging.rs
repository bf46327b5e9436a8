//! Logging setup, configured once at start-up.

use log::{Level, LevelFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// When false nothing is written to the console.
    pub display_debug_output: bool,
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            display_debug_output: true,
            level: Level::Info,
        }
    }
}

impl LogConfig {
    pub fn quiet() -> Self {
        Self {
            display_debug_output: false,
            ..Self::default()
        }
    }

    pub fn max_level(&self) -> LevelFilter {
        if self.display_debug_output {
            self.level.to_level_filter()
        } else {
            LevelFilter::Off
        }
    }

    /// Route `log` records to the browser console and install the panic hook.
    ///
    /// Calling this again leaves the first logger in place and only updates
    /// the max level.
    pub fn install(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            console_log::init_with_level(self.level).ok();
        }
        log::set_max_level(self.max_level());
    }
}
