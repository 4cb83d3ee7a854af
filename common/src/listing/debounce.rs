/// Identifies one scheduled evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Trailing-edge debounce driven by an external timer.
///
/// Every `schedule` supersedes whatever was pending; the caller starts a timer
/// for the returned ticket and hands it back to `elapsed` when it fires. Only
/// the most recent ticket yields the input, so one quiet period produces at
/// most one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u32,
    latest: u64,
    pending: Option<String>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            latest: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn schedule(&mut self, input: impl Into<String>) -> DebounceTicket {
        self.latest = self.latest.wrapping_add(1);
        self.pending = Some(input.into());
        DebounceTicket(self.latest)
    }

    /// Returns the input to evaluate if `ticket` is still the latest one.
    pub fn elapsed(&mut self, ticket: DebounceTicket) -> Option<String> {
        if ticket.0 == self.latest {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops any pending evaluation.
    pub fn cancel(&mut self) {
        self.latest = self.latest.wrapping_add(1);
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_keystroke_is_evaluated() {
        let mut debouncer = Debouncer::new(300);
        let first = debouncer.schedule("jo");
        let second = debouncer.schedule("john");

        let evaluations: Vec<String> = [first, second]
            .into_iter()
            .filter_map(|ticket| debouncer.elapsed(ticket))
            .collect();
        assert_eq!(evaluations, vec!["john".to_string()]);
    }

    #[test]
    fn a_ticket_fires_once() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.schedule("site");
        assert_eq!(debouncer.elapsed(ticket).as_deref(), Some("site"));
        assert_eq!(debouncer.elapsed(ticket), None);
    }

    #[test]
    fn separate_quiet_periods_each_evaluate() {
        let mut debouncer = Debouncer::new(300);
        let first = debouncer.schedule("a");
        assert_eq!(debouncer.elapsed(first).as_deref(), Some("a"));
        let second = debouncer.schedule("ab");
        assert_eq!(debouncer.elapsed(second).as_deref(), Some("ab"));
    }

    #[test]
    fn cancel_discards_pending_input() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.schedule("x");
        debouncer.cancel();
        assert_eq!(debouncer.elapsed(ticket), None);
    }
}
