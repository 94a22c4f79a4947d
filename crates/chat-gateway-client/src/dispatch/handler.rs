//! Handler slots

/// An optional caller-supplied callback for one event tag
///
/// Handlers borrow from the caller for `'a`, so a bag can capture local
/// state without `'static` bounds.
pub type Handler<'a, T> = Option<Box<dyn FnMut(T) + 'a>>;

/// Hand a decoded payload to its slot; an empty slot is a silent no-op
pub(crate) fn invoke<T>(event_type: &'static str, slot: &mut Handler<'_, T>, payload: T) {
    match slot {
        Some(handler) => {
            tracing::trace!(event_type, "Dispatching gateway event");
            handler(payload);
        }
        None => tracing::trace!(event_type, "No handler installed for gateway event"),
    }
}

/// Names of the installed slots, for `Debug` output
pub(crate) fn installed<'n>(slots: &[(&'n str, bool)]) -> Vec<&'n str> {
    slots
        .iter()
        .filter(|(_, is_set)| *is_set)
        .map(|(name, _)| *name)
        .collect()
}

/// Builder methods for handler bag slots, one per `name: Payload` pair
///
/// Expands inside `impl<'a> XHandlers<'a>`; each method shares its slot's name.
macro_rules! builder {
    ($($name:ident: $payload:ty),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $name(mut self, handler: impl FnMut($payload) + 'a) -> Self {
                self.$name = Some(Box::new(handler));
                self
            }
        )+
    };
}

pub(crate) use builder;
