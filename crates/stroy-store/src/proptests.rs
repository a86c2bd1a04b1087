//! Property-based tests for identifier allocation.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::EntityStore;
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};
    use stroy_core::{Attributes, Entity, EntityId, FieldSpec, Schema};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Note {
        id: EntityId,
        text: String,
    }

    impl Entity for Note {
        const KIND: &'static str = "note";

        fn schema() -> Schema {
            Schema::new(Self::KIND).field(FieldSpec::text("text", "Text"))
        }

        fn id(&self) -> EntityId {
            self.id
        }
    }

    fn text(s: &str) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("text".into(), s.into());
        attributes
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert,
        DeleteAt(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Insert), (0usize..8).prop_map(Op::DeleteAt)]
    }

    proptest! {
        #[test]
        fn test_inserted_ids_strictly_increase(ops in prop::collection::vec(op(), 0..40)) {
            let mut store = EntityStore::<Note>::new();
            let mut issued: Vec<EntityId> = Vec::new();

            for op in ops {
                match op {
                    Op::Insert => {
                        let note = store.insert(&text("n")).unwrap();
                        if let Some(last) = issued.last() {
                            prop_assert!(note.id > *last);
                        }
                        issued.push(note.id);
                    }
                    Op::DeleteAt(i) => {
                        if let Some(id) = store.records().get(i).map(|n| n.id) {
                            store.delete(id).unwrap();
                        }
                    }
                }
            }

            let mut unique = issued.clone();
            unique.dedup();
            prop_assert_eq!(unique.len(), issued.len());
        }

        #[test]
        fn test_list_preserves_insertion_order(count in 0usize..20) {
            let mut store = EntityStore::<Note>::new();
            for i in 0..count {
                store.insert(&text(&i.to_string())).unwrap();
            }
            let texts: Vec<String> = store.list().into_iter().map(|n| n.text).collect();
            let expected: Vec<String> = (0..count).map(|i| i.to_string()).collect();
            prop_assert_eq!(texts, expected);
        }
    }
}
