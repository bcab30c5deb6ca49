use paddlingen_core::{BookingController, NameField};

/// Everything the booking dialog can ask of its controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingAction {
    Open,
    Close,
    SetCount(u32),
    SetName {
        index: usize,
        field: NameField,
        value: String,
    },
}

/// Apply `action` to a copy of the controller.
///
/// Rejected edits leave the copy untouched and are logged; the UI never
/// offers them, so they only show up when markup and state disagree.
#[must_use]
pub fn apply_action(controller: &BookingController, action: BookingAction) -> BookingController {
    let mut next = controller.clone();
    let outcome = match action {
        BookingAction::Open => {
            next.open();
            Ok(())
        }
        BookingAction::Close => {
            next.close();
            Ok(())
        }
        BookingAction::SetCount(count) => next.set_item_count(count),
        BookingAction::SetName {
            index,
            field,
            value,
        } => next.set_name(index, field, value),
    };
    if let Err(err) = outcome {
        log::warn!("booking action rejected: {err}");
        return controller.clone();
    }
    next
}

/// Parse the quantity selector's value; anything unparsable means zero.
#[must_use]
pub fn parse_count(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}
