//! Dead interaction detection.
//!
//! Reported separately from navigation failures; never blocking.

use crate::extract::jsx::Tag;
use crate::extract::lexer::line_of;
use crate::extract::types::{DeadInteraction, DeadReason, Origin};

/// Elements that are expected to carry a press handler.
pub const PRESSABLE_ELEMENTS: &[&str] = &[
    "TouchableOpacity",
    "TouchableHighlight",
    "TouchableWithoutFeedback",
    "Pressable",
    "Button",
];

const HANDLER_ATTRIBUTES: &[&str] = &["onPress", "onLongPress"];

/// Handler bodies that do nothing, compared with whitespace removed.
const NOOP_HANDLERS: &[&str] = &[
    "()=>{}",
    "()=>null",
    "()=>undefined",
    "()=>{return;}",
    "undefined",
    "null",
    "noop",
];

pub fn scan_dead_interactions(
    origin: &Origin,
    source: &str,
    tags: &[Tag<'_>],
) -> Vec<DeadInteraction> {
    tags.iter()
        .filter_map(|tag| {
            let reason = dead_reason(tag)?;
            Some(DeadInteraction {
                origin: origin.screen.clone(),
                line: line_of(source, tag.start),
                element: tag.name.to_string(),
                reason,
            })
        })
        .collect()
}

fn dead_reason(tag: &Tag<'_>) -> Option<DeadReason> {
    let handlers: Vec<_> = tag
        .attributes
        .iter()
        .filter(|a| HANDLER_ATTRIBUTES.contains(&a.name))
        .collect();

    let empty = handlers.iter().any(|a| {
        a.expression().is_some_and(|body| {
            let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
            NOOP_HANDLERS.contains(&compact.as_str())
        })
    });
    if empty {
        return Some(DeadReason::EmptyHandler);
    }

    // Spread props may carry the handler; disabled elements are inert on purpose.
    let pressable = PRESSABLE_ELEMENTS.contains(&tag.name);
    if pressable && handlers.is_empty() && !tag.spreads && !tag.has_attribute("disabled") {
        return Some(DeadReason::MissingHandler);
    }
    None
}
