use crate::hebrew::HebrewDate;
use crate::rules::default_rules;
use crate::types::Weekday;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DayContext
// ---------------------------------------------------------------------------

pub struct DayContext<'a> {
    pub date: &'a HebrewDate,
    pub weekday: Weekday,
}

// ---------------------------------------------------------------------------
// Verdict (output)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub recite: bool,
    pub reason_en: String,
    pub reason_he: String,
}

impl Verdict {
    pub fn recite() -> Self {
        Self {
            recite: true,
            reason_en: String::new(),
            reason_he: String::new(),
        }
    }

    pub fn omit(reason_en: &str, reason_he: &str) -> Self {
        Self {
            recite: false,
            reason_en: reason_en.to_string(),
            reason_he: reason_he.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A fn-pointer rule: when `condition` holds, Tachanun is omitted for the
/// given reason.
pub struct Rule {
    pub id: &'static str,
    pub condition: fn(&DayContext) -> bool,
    pub reason_en: &'static str,
    pub reason_he: &'static str,
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// An ordered decision list. Earlier rules take priority over later ones.
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn first_match(&self, ctx: &DayContext) -> Option<&Rule> {
        self.rules.iter().find(|rule| (rule.condition)(ctx))
    }

    pub fn classify(&self, ctx: &DayContext) -> Verdict {
        match self.first_match(ctx) {
            Some(rule) => Verdict::omit(rule.reason_en, rule.reason_he),
            // Fallback: an ordinary weekday
            None => Verdict::recite(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id).collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

/// Evaluate the default rule set for a single day.
pub fn evaluate(date: &HebrewDate, weekday: Weekday) -> Verdict {
    Classifier::default().classify(&DayContext { date, weekday })
}
