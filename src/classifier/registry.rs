//! The classified registry and the fold that fills it.
//!
//! One registry is built per run by folding every wrapper source's
//! FunctionEventMap through the classifier in a fixed source order. The same
//! function name may be rediscovered in a later source; the registry applies
//! an explicit last-writer-wins policy so the function ends up in exactly one
//! category, the one its latest classification chose.

use super::category::{classify, Category};
use crate::extractor::{EventSet, FunctionEventMap};
use log::{debug, warn};

/// Functions assigned to each category, with their event sets
///
/// **Public** - per-category entries keep insertion order so the generated
/// fragments are stable across runs
#[derive(Debug, Clone, Default)]
pub struct ClassifiedRegistry {
    entries: Vec<(Category, Vec<(String, EventSet)>)>,
    unclassified: Vec<(String, EventSet)>,
}

impl ClassifiedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a function under a category, last writer wins
    ///
    /// **Public** - removes any previous entry for the same function from
    /// every category first, so a function is never listed twice even when a
    /// later source classifies it differently
    pub fn insert(&mut self, category: Category, function: String, events: EventSet) {
        self.remove(&function);

        if let Some((_, functions)) = self.entries.iter_mut().find(|(c, _)| *c == category) {
            functions.push((function, events));
        } else {
            self.entries.push((category, vec![(function, events)]));
        }
    }

    /// Drop a function from whichever category holds it
    ///
    /// **Private** - half of the last-writer-wins policy
    fn remove(&mut self, function: &str) {
        for (_, functions) in &mut self.entries {
            functions.retain(|(name, _)| name != function);
        }
    }

    /// Functions of one category, in insertion order
    pub fn functions(&self, category: Category) -> &[(String, EventSet)] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, functions)| functions.as_slice())
            .unwrap_or(&[])
    }

    /// Non-empty categories in precedence order, with their functions
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[(String, EventSet)])> {
        Category::ALL.into_iter().filter_map(|category| {
            let functions = self.functions(category);
            if functions.is_empty() {
                None
            } else {
                Some((category, functions))
            }
        })
    }

    /// Functions whose event sets matched no category predicate
    pub fn unclassified(&self) -> &[(String, EventSet)] {
        &self.unclassified
    }

    /// Total classified function count
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, f)| f.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fold one wrapper source's function events into the registry
///
/// **Public** - third stage of the pipeline, called once per source in the
/// fixed processing order
///
/// Functions with empty event sets are dropped here. Functions matching no
/// category predicate are reported at warn level and recorded as
/// unclassified; this is a coverage diagnostic, not an error.
pub fn classify_wrapper_events(wrapper_events: &FunctionEventMap, registry: &mut ClassifiedRegistry) {
    for (function, events) in wrapper_events.iter() {
        if events.is_empty() {
            continue;
        }

        match classify(events) {
            Some(category) => {
                debug!("{} -> {}", function, category.macro_name());
                registry.insert(category, function.to_string(), events.clone());
            }
            None => {
                warn!("{} not classified : {:?}", function, events);
                registry
                    .unclassified
                    .push((function.to_string(), events.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::category::{
        EVENT_CREATE_HANDLE, EVENT_DESTROY_HANDLE, EVENT_OPERATION_BEGIN,
        EVENT_OPERATION_COMPLETE, EVENT_OPERATION_ISSUED,
    };

    fn events(names: &[&str]) -> EventSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_fold_drops_empty_sets() {
        let mut map = FunctionEventMap::new();
        map.insert("fileno".to_string(), EventSet::new());
        map.insert("open".to_string(), events(&[EVENT_CREATE_HANDLE]));

        let mut registry = ClassifiedRegistry::new();
        classify_wrapper_events(&map, &mut registry);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.functions(Category::IoCreate).len(), 1);
    }

    #[test]
    fn test_fold_records_unclassified() {
        let mut map = FunctionEventMap::new();
        map.insert("aio_suspend".to_string(), events(&[EVENT_OPERATION_ISSUED]));

        let mut registry = ClassifiedRegistry::new();
        classify_wrapper_events(&map, &mut registry);

        assert!(registry.is_empty());
        assert_eq!(registry.unclassified().len(), 1);
        assert_eq!(registry.unclassified()[0].0, "aio_suspend");
    }

    #[test]
    fn test_last_writer_wins_same_category() {
        let mut registry = ClassifiedRegistry::new();
        registry.insert(
            Category::IoCreate,
            "open".to_string(),
            events(&[EVENT_CREATE_HANDLE]),
        );
        registry.insert(
            Category::IoCreate,
            "open".to_string(),
            events(&[EVENT_CREATE_HANDLE, EVENT_OPERATION_BEGIN]),
        );

        let functions = registry.functions(Category::IoCreate);
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].1.len(), 2);
    }

    #[test]
    fn test_last_writer_wins_across_categories() {
        let mut registry = ClassifiedRegistry::new();
        registry.insert(
            Category::IoCreate,
            "reopen".to_string(),
            events(&[EVENT_CREATE_HANDLE]),
        );
        registry.insert(
            Category::IoClose,
            "reopen".to_string(),
            events(&[EVENT_DESTROY_HANDLE]),
        );

        assert!(registry.functions(Category::IoCreate).is_empty());
        assert_eq!(registry.functions(Category::IoClose).len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iter_skips_empty_categories_in_precedence_order() {
        let mut registry = ClassifiedRegistry::new();
        registry.insert(
            Category::IoBlockingTransfer,
            "read".to_string(),
            events(&[EVENT_OPERATION_BEGIN, EVENT_OPERATION_COMPLETE]),
        );
        registry.insert(
            Category::IoCreate,
            "open".to_string(),
            events(&[EVENT_CREATE_HANDLE]),
        );

        let order: Vec<Category> = registry.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Category::IoCreate, Category::IoBlockingTransfer]);
    }

    #[test]
    fn test_insertion_order_preserved_within_category() {
        let mut registry = ClassifiedRegistry::new();
        for name in ["open", "creat", "fopen"] {
            registry.insert(
                Category::IoCreate,
                name.to_string(),
                events(&[EVENT_CREATE_HANDLE]),
            );
        }

        let names: Vec<&str> = registry
            .functions(Category::IoCreate)
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, vec!["open", "creat", "fopen"]);
    }
}
