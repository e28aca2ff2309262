//! Single-shot panel state: one record, replaced wholesale per response.

/// Prompt sent when the home page first loads.
pub const REMINDER_PROMPT: &str = "Good morning";
/// Prompt sent when the profit page is entered.
pub const PROFIT_PROMPT: &str = "How am I doing this week with my business?";
/// Prompt sent when the summary page is entered.
pub const SUMMARY_PROMPT: &str = "Show me my weekly summary";

/// Loading flag plus the latest record for one panel.
#[derive(Debug)]
pub struct Panel<T> {
    loading: bool,
    record: Option<T>,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            loading: false,
            record: None,
        }
    }
}

impl<T> Panel<T> {
    pub fn record(&self) -> Option<&T> {
        self.record.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks a request as in flight.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Settles the in-flight request. A `Some` record replaces the previous
    /// one entirely; `None` leaves it untouched.
    pub fn finish(&mut self, record: Option<T>) {
        self.loading = false;
        if let Some(record) = record {
            self.record = Some(record);
        }
    }

    /// Clears the loading flag without touching the record.
    pub fn cancel(&mut self) {
        self.loading = false;
    }

    /// Drops the record, returning the panel to its input state.
    pub fn clear(&mut self) {
        self.record = None;
    }
}
