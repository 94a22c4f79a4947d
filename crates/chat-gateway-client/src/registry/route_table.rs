//! Wire tag to domain routing

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;

use super::error::RegistryError;

/// A dispatch domain as seen by the route table
pub trait DomainRoute: Copy + Debug {
    /// Stable domain name used in diagnostics
    fn name(self) -> &'static str;

    /// Wire tags the domain claims
    fn event_types(self) -> Vec<&'static str>;
}

/// Immutable map from wire tag to owning domain
#[derive(Debug, Clone)]
pub struct RouteTable<D> {
    routes: HashMap<&'static str, D>,
    event_types: Vec<&'static str>,
}

impl<D: DomainRoute> RouteTable<D> {
    /// Owning domain of an untrusted type string
    pub fn route(&self, event_type: &str) -> Option<D> {
        self.routes.get(event_type).copied()
    }

    /// Every routed tag, sorted
    pub fn event_types(&self) -> &[&'static str] {
        &self.event_types
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Build a route table from each domain's advertised tags
///
/// # Errors
///
/// Returns [`RegistryError::DuplicateEventType`] for the first tag claimed
/// more than once, within one domain or across two.
pub fn build_route_table<D: DomainRoute>(domains: &[D]) -> Result<RouteTable<D>, RegistryError> {
    let mut routes = HashMap::new();
    for &domain in domains {
        for event_type in domain.event_types() {
            match routes.entry(event_type) {
                Entry::Occupied(existing) => {
                    let first: &D = existing.get();
                    return Err(RegistryError::DuplicateEventType {
                        event_type,
                        first: first.name(),
                        second: domain.name(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(domain);
                }
            }
        }
    }

    let mut event_types: Vec<&'static str> = routes.keys().copied().collect();
    event_types.sort_unstable();

    Ok(RouteTable {
        routes,
        event_types,
    })
}
