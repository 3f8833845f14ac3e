use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::ConfigError;
use crate::date::CalendarDate;

pub const HALLOWEEN_MESSAGE: &str = "It is halloween!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum NextYearRule {
    // +1901, what the page has always shown
    #[default]
    Legacy,
    Corrected,
}

impl NextYearRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            NextYearRule::Legacy => "legacy",
            NextYearRule::Corrected => "corrected",
        }
    }

    fn offset(&self) -> i32 {
        match self {
            NextYearRule::Legacy => 1901,
            NextYearRule::Corrected => 1,
        }
    }
}

impl fmt::Display for NextYearRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NextYearRule {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(NextYearRule::Legacy),
            "corrected" => Ok(NextYearRule::Corrected),
            other => Err(ConfigError::UnknownRule(other.to_string())),
        }
    }
}

impl TryFrom<String> for NextYearRule {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

pub fn countdown_message(date: CalendarDate, rule: NextYearRule) -> String {
    if date.is_halloween() {
        return HALLOWEEN_MESSAGE.to_string();
    }
    if date.is_before_halloween() {
        format!("Oct 31, {}", date.year)
    } else {
        format!("Oct 31, {}", date.year + rule.offset())
    }
}

pub trait DisplaySurface {
    fn replace_text(&mut self, id: &str, text: &str) -> bool;
}

pub struct RenderedTarget<F: FnMut(String)> {
    id: String,
    write: F,
}

impl<F: FnMut(String)> RenderedTarget<F> {
    pub fn new(id: impl Into<String>, write: F) -> Self {
        Self {
            id: id.into(),
            write,
        }
    }
}

impl<F: FnMut(String)> DisplaySurface for RenderedTarget<F> {
    fn replace_text(&mut self, id: &str, text: &str) -> bool {
        if id != self.id {
            return false;
        }
        (self.write)(text.to_string());
        true
    }
}

pub fn update_countdown<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    target_id: &str,
    date: CalendarDate,
    rule: NextYearRule,
) -> bool {
    let message = countdown_message(date, rule);
    if surface.replace_text(target_id, &message) {
        tracing::debug!(target_id, %message, "countdown: updated");
        true
    } else {
        tracing::debug!(target_id, "countdown: display target missing");
        false
    }
}
