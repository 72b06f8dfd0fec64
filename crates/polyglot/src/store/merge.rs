//! Deep merge of locale trees.

use std::collections::btree_map::Entry as Slot;

use crate::types::{Entry, Tree};

/// Merge `incoming` into `target`.
///
/// Interior nodes merge key by key, plural nodes merge variant by variant,
/// and anything else is replaced by the incoming value.
pub fn merge_trees(target: &mut Tree, incoming: Tree) {
    for (name, entry) in incoming {
        match target.entry(name) {
            Slot::Occupied(mut slot) => merge_entry(slot.get_mut(), entry),
            Slot::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }
}

fn merge_entry(target: &mut Entry, incoming: Entry) {
    match (target, incoming) {
        (Entry::Tree(existing), Entry::Tree(incoming)) => merge_trees(existing, incoming),
        (Entry::Plural(existing), Entry::Plural(incoming)) => existing.extend(incoming),
        (slot, incoming) => *slot = incoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PluralForms, PluralKey};

    fn tree(pairs: Vec<(&str, Entry)>) -> Tree {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn interior_nodes_merge_and_leaves_override() {
        let mut base = tree(vec![(
            "in",
            Entry::Tree(tree(vec![
                ("default", Entry::text("Default")),
                ("keep", Entry::text("Kept")),
            ])),
        )]);
        let overlay = tree(vec![
            (
                "in",
                Entry::Tree(tree(vec![("default", Entry::text("Override"))])),
            ),
            ("other", Entry::text("Other")),
        ]);

        merge_trees(&mut base, overlay);

        let inner = base["in"].as_tree().unwrap();
        assert_eq!(inner["default"], Entry::text("Override"));
        assert_eq!(inner["keep"], Entry::text("Kept"));
        assert_eq!(base["other"], Entry::text("Other"));
    }

    #[test]
    fn plural_variants_merge() {
        let one: PluralForms = [(PluralKey::Exact(1), "one")].into_iter().collect();
        let other: PluralForms = [(PluralKey::Other, "many")].into_iter().collect();
        let mut base = tree(vec![("users", Entry::Plural(one))]);
        merge_trees(&mut base, tree(vec![("users", Entry::Plural(other))]));

        let Entry::Plural(forms) = &base["users"] else {
            panic!("expected plural node");
        };
        assert_eq!(forms.len(), 2);
    }

    #[test]
    fn leaf_replaced_by_tree() {
        let mut base = tree(vec![("a", Entry::text("flat"))]);
        merge_trees(
            &mut base,
            tree(vec![("a", Entry::Tree(tree(vec![("b", Entry::text("deep"))])))]),
        );
        assert!(base["a"].as_tree().is_some());
    }
}
