//! Dispatch engine — live trigger → action maps and the per-tick scans.
//!
//! The binding table holds names; the engine holds constructed actions.
//! [`DispatchEngine::rebuild`] turns one into the other. Both live maps sit
//! behind an `Arc` and are never mutated in place: a rebuild builds a fresh
//! map and swaps the pointer, and a scan works on its own clone of the
//! pointer, so a scan never observes a half-built map.

use std::sync::Arc;

use indexmap::IndexMap;
use tickbind_types::{KeyState, Trigger};
use tracing::{debug, info, trace};

use crate::action::Action;
use crate::binding::{BindingEntry, BindingTable};
use crate::registry::ActionRegistry;

/// Trigger → actions, in the order triggers first appear in the table.
pub type LiveDispatchMap = IndexMap<Trigger, Vec<Box<dyn Action>>>;

/// Holds the live maps and runs the frame and fixed scans.
#[derive(Debug, Default)]
pub struct DispatchEngine {
    one_shot: Arc<LiveDispatchMap>,
    repeating: Arc<LiveDispatchMap>,
}

fn build_map(entries: &[BindingEntry], registry: &ActionRegistry) -> LiveDispatchMap {
    let mut map = LiveDispatchMap::new();
    for entry in entries {
        let actions = map.entry(entry.trigger).or_default();
        for name in &entry.actions {
            match registry.create(name) {
                Some(action) => {
                    info!("Registered input mapping: {} -> {}", entry.trigger, name);
                    actions.push(action);
                }
                None => debug!("Skipping unknown action {:?} bound to {}", name, entry.trigger),
            }
        }
    }
    map
}

fn run(map: &LiveDispatchMap, fired: impl Fn(&Trigger) -> bool) -> usize {
    let mut executed = 0;
    for (trigger, actions) in map {
        if !fired(trigger) {
            continue;
        }
        trace!("{} fired, running {} actions", trigger, actions.len());
        for action in actions {
            action.execute();
            executed += 1;
        }
    }
    executed
}

impl DispatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild both live maps from `table`, then swap them in.
    ///
    /// Unresolvable names are skipped. Entries sharing a trigger within one
    /// sequence are merged, actions appended in table order.
    pub fn rebuild(&mut self, table: &BindingTable, registry: &ActionRegistry) {
        let one_shot = build_map(&table.one_shot, registry);
        let repeating = build_map(&table.repeating, registry);
        self.one_shot = Arc::new(one_shot);
        self.repeating = Arc::new(repeating);
    }

    /// Frame scan: run every one-shot trigger that went down this tick.
    pub fn on_frame_tick(&self, keys: &impl KeyState) -> usize {
        let map = Arc::clone(&self.one_shot);
        run(&map, |trigger| trigger.is_down(keys))
    }

    /// Fixed scan: run every repeating trigger that is held.
    pub fn on_fixed_tick(&self, keys: &impl KeyState) -> usize {
        let map = Arc::clone(&self.repeating);
        run(&map, |trigger| trigger.is_pressed(keys))
    }

    /// Drop all live actions. The persisted table is not touched.
    pub fn clear(&mut self) {
        self.one_shot = Arc::default();
        self.repeating = Arc::default();
    }

    pub fn one_shot(&self) -> Arc<LiveDispatchMap> {
        Arc::clone(&self.one_shot)
    }

    pub fn repeating(&self) -> Arc<LiveDispatchMap> {
        Arc::clone(&self.repeating)
    }

    /// Ids of the actions bound to `trigger`, one-shot first then repeating.
    pub fn bound_actions(&self, trigger: &Trigger) -> Vec<String> {
        [&self.one_shot, &self.repeating]
            .into_iter()
            .filter_map(|map| map.get(trigger))
            .flatten()
            .map(|action| action.id().to_string())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.one_shot.is_empty() && self.repeating.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::NoopAction;
    use crate::catalog::ActionCatalog;
    use crate::registry::ActionEntry;
    use std::sync::Mutex;
    use tickbind_types::{Key, KeySnapshot};

    /// Records the id of every executed action into a shared log.
    struct Recorder {
        id: String,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Action for Recorder {
        fn id(&self) -> &str {
            &self.id
        }

        fn execute(&self) {
            self.log.lock().unwrap().push(self.id.clone());
        }
    }

    fn registry_with(names: &[&str], log: &Arc<Mutex<Vec<String>>>) -> ActionRegistry {
        let mut registry = ActionRegistry::with_catalog(ActionCatalog::empty());
        for name in names {
            let log = log.clone();
            registry
                .register(ActionEntry::new(*name, move |id| {
                    Box::new(Recorder {
                        id: id.to_string(),
                        log: log.clone(),
                    })
                }))
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_rebuild_skips_unknown_preserving_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = registry_with(&["A", "B"], &log);

        let mut table = BindingTable::new();
        table.bind_one_shot(Trigger::new(Key::F1), ["A", "Missing", "B"]);

        let mut engine = DispatchEngine::new();
        engine.rebuild(&table, &registry);
        assert_eq!(engine.bound_actions(&Trigger::new(Key::F1)), vec!["A", "B"]);

        let mut keys = KeySnapshot::new();
        keys.press(Key::F1);
        assert_eq!(engine.on_frame_tick(&keys), 2);
        assert_eq!(*log.lock().unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_triggers_merge_by_append() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = registry_with(&["A", "B", "C"], &log);

        let mut table = BindingTable::new();
        table
            .bind_repeating(Trigger::new(Key::Space), ["A"])
            .bind_repeating(Trigger::new(Key::Q), ["C"])
            .bind_repeating(Trigger::new(Key::Space), ["B", "A"]);

        let mut engine = DispatchEngine::new();
        engine.rebuild(&table, &registry);

        let repeating = engine.repeating();
        assert_eq!(repeating.len(), 2);
        let triggers: Vec<_> = repeating.keys().copied().collect();
        assert_eq!(triggers, vec![Trigger::new(Key::Space), Trigger::new(Key::Q)]);
        assert_eq!(
            engine.bound_actions(&Trigger::new(Key::Space)),
            vec!["A", "B", "A"]
        );
    }

    #[test]
    fn test_frame_scan_is_edge_triggered() {
        let registry = {
            let mut r = ActionRegistry::with_catalog(ActionCatalog::empty());
            r.register(ActionEntry::of::<NoopAction>()).unwrap();
            r
        };
        let mut engine = DispatchEngine::new();
        engine.rebuild(&BindingTable::sample(), &registry);

        let mut keys = KeySnapshot::new();
        keys.press(Key::F9);
        assert_eq!(engine.on_frame_tick(&keys), 1);
        keys.end_tick();
        assert_eq!(engine.on_frame_tick(&keys), 0, "held, no new edge");
    }

    #[test]
    fn test_fixed_scan_needs_modifier() {
        let registry = {
            let mut r = ActionRegistry::with_catalog(ActionCatalog::empty());
            r.register(ActionEntry::of::<NoopAction>()).unwrap();
            r
        };
        let mut engine = DispatchEngine::new();
        engine.rebuild(&BindingTable::sample(), &registry);

        let mut keys = KeySnapshot::new();
        keys.press(Key::F10);
        assert_eq!(engine.on_fixed_tick(&keys), 0);
        keys.press(Key::RightShift);
        assert_eq!(engine.on_fixed_tick(&keys), 2);
        keys.end_tick();
        assert_eq!(engine.on_fixed_tick(&keys), 2, "level-triggered");
    }

    #[test]
    fn test_clear_and_snapshot_isolation() {
        let registry = {
            let mut r = ActionRegistry::with_catalog(ActionCatalog::empty());
            r.register(ActionEntry::of::<NoopAction>()).unwrap();
            r
        };
        let mut engine = DispatchEngine::new();
        engine.rebuild(&BindingTable::sample(), &registry);

        let before = engine.one_shot();
        engine.clear();
        assert!(engine.is_empty());
        assert_eq!(before.len(), 1, "old snapshot survives the swap");
        assert!(engine.bound_actions(&Trigger::new(Key::F9)).is_empty());
    }

    #[test]
    fn test_repeated_names_are_independent_instances() {
        let registry = {
            let mut r = ActionRegistry::with_catalog(ActionCatalog::empty());
            r.register(ActionEntry::of::<NoopAction>()).unwrap();
            r
        };
        let mut engine = DispatchEngine::new();
        engine.rebuild(&BindingTable::sample(), &registry);

        let repeating = engine.repeating();
        let actions = &repeating[&Trigger::with_modifier(Key::F10, Key::RightShift)];
        assert_eq!(actions.len(), 2);
        assert!(!std::ptr::addr_eq(
            actions[0].as_ref() as *const dyn Action,
            actions[1].as_ref() as *const dyn Action
        ));
    }
}
