use monitor_core::{IndicatorTone, MonitorViewModel};

/// Opaque sink for the monitor's visible state.
///
/// The driver holds an `Option` of this; running without a surface is not
/// an error, and implementations must accept every frame they are given.
pub(crate) trait RenderSurface {
    fn apply(&mut self, view: &MonitorViewModel);
}

/// Plain-terminal surface: one block of lines per dirty frame.
pub(crate) struct TerminalSurface {
    dark_mode: bool,
}

impl TerminalSurface {
    const BAR_WIDTH: usize = 30;

    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    fn bar(&self, percent: u8) -> String {
        let (full, empty) = if self.dark_mode {
            ('█', '░')
        } else {
            ('#', '-')
        };
        let filled = usize::from(percent.min(100)) * Self::BAR_WIDTH / 100;
        (0..Self::BAR_WIDTH)
            .map(|i| if i < filled { full } else { empty })
            .collect()
    }
}

impl RenderSurface for TerminalSurface {
    fn apply(&mut self, view: &MonitorViewModel) {
        let tone = match view.tone {
            IndicatorTone::Normal => "",
            IndicatorTone::Failed => " [failed]",
        };
        println!("[{}] {:>3}%{}", self.bar(view.percent), view.percent, tone);
        println!("  {}", view.status_line);
        if !view.narrative_line.is_empty() {
            println!("  {}", view.narrative_line);
        }
        if let Some(error) = &view.error_text {
            println!("  !! {error}");
        }
        if view.recovery_offered {
            println!("  Press Enter to reset and try again.");
        }
    }
}
