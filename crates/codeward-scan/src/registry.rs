use crate::Scanner;
use codeward_types::{Context, Lang};
use std::sync::{Arc, RwLock};

/// Explicit registry of scanner adapters, constructed at process start and
/// passed into the controller. Registration is guarded so concurrent
/// registration cannot race, even though it typically happens once.
#[derive(Default)]
pub struct ScannerRegistry {
    scanners: RwLock<Vec<Arc<dyn Scanner>>>,
}

impl ScannerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<S: Scanner + 'static>(&self, scanner: S) {
        self.register_arc(Arc::new(scanner));
    }

    pub fn register_arc(&self, scanner: Arc<dyn Scanner>) {
        self.scanners
            .write()
            .expect("scanner registry lock poisoned")
            .push(scanner);
    }

    pub fn len(&self) -> usize {
        self.scanners
            .read()
            .expect("scanner registry lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adapters qualifying for this run: language must match, the tool
    /// filter (when non-empty) must equal the tool name case-insensitively,
    /// and the context filter (when present) must equal the context.
    pub fn select(
        &self,
        lang: Lang,
        tool: Option<&str>,
        context: Option<Context>,
    ) -> Vec<Arc<dyn Scanner>> {
        let scanners = self
            .scanners
            .read()
            .expect("scanner registry lock poisoned");
        scanners
            .iter()
            .filter(|scanner| scanner.lang() == lang)
            .filter(|scanner| match tool {
                Some(filter) if !filter.is_empty() => {
                    filter.eq_ignore_ascii_case(scanner.tool())
                }
                _ => true,
            })
            .filter(|scanner| match context {
                Some(filter) => scanner.context() == filter,
                None => true,
            })
            .cloned()
            .collect()
    }
}
