use std::sync::Arc;
use tachanun_core::Classifier;

use crate::render::Templates;

/// Shared application state passed to all route handlers.
///
/// Both members are immutable after construction, so clones share them
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            classifier: Arc::new(Classifier::default()),
            templates: Arc::new(Templates::load()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_uses_default_rules() {
        let state = AppState::new().unwrap();
        assert_eq!(state.classifier.rule_ids().first(), Some(&"nissan"));
        assert_eq!(state.classifier.rule_ids().last(), Some(&"shabbat"));
    }
}
