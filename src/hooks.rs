use dioxus::prelude::*;

use crate::config::RuntimeConfig;
use crate::countdown::{update_countdown, RenderedTarget};
use crate::date::today;

pub fn use_countdown_on_ready(config: RuntimeConfig) -> Signal<String> {
    let mut text = use_signal(String::new);
    use_effect(move || {
        let mut target = RenderedTarget::new(config.display_target_id.clone(), |message| {
            text.set(message)
        });
        update_countdown(
            &mut target,
            &config.display_target_id,
            today(),
            config.next_year_rule,
        );
    });
    text
}
