/// Progress events emitted by the typing engine.
///
/// Phases bracket coarse steps (loading the forcefield, resolving the
/// molecule); the atom events drive per-atom progress display during
/// resolution.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TypingStart { total_atoms: u64 },
    AtomTyped,
    TypingFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards engine progress events to an optional caller-supplied callback.
///
/// The callback must be `Send + Sync` because atom resolution may be
/// dispatched across a thread pool.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn reporter_forwards_events_to_the_callback() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(format!("{event:?}"));
        }));
        reporter.report(Progress::TypingStart { total_atoms: 5 });
        reporter.report(Progress::AtomTyped);
        reporter.report(Progress::TypingFinish);
        drop(reporter);
        assert_eq!(seen.lock().unwrap().len(), 3);
    }
}
