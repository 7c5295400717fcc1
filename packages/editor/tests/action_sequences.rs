//! Long action sequences against layout invariants
//!
//! This tests:
//! - Dense positions after arbitrary add/delete/reorder chains
//! - Table row lengths after arbitrary column edits
//! - Unknown-id updates leaving state untouched

use folio_editor::{
    reduce, Action, Builder, BuilderState, ContentEdit, ElementContent, ElementEditor,
    ElementKind, Report, TableEdit,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_positions_stay_dense_across_random_sequences() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut builder = Builder::new(Report::new("1", "Random"));

        for _ in 0..200 {
            let len = builder.elements().len();
            match rng.random_range(0..4) {
                0 | 1 => {
                    let kind = ElementKind::ALL[rng.random_range(0..4)];
                    builder.add(kind).unwrap();
                }
                2 if len > 0 => {
                    let id = builder.elements()[rng.random_range(0..len)].id.clone();
                    builder.delete(&id).unwrap();
                }
                _ if len > 1 => {
                    let active = builder.elements()[rng.random_range(0..len)].id.clone();
                    let over = builder.elements()[rng.random_range(0..len)].id.clone();
                    builder.reorder(&active, &over).unwrap();
                }
                _ => {}
            }

            let positions: Vec<usize> = builder.elements().iter().map(|e| e.position).collect();
            let expected: Vec<usize> = (0..builder.elements().len()).collect();
            assert_eq!(positions, expected, "seed {}", seed);
        }
    }
}

#[test]
fn test_table_rows_track_headers_across_random_edits() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut builder = Builder::new(Report::new("1", "Tables"));
    let id = builder.add(ElementKind::Table).unwrap();

    for _ in 0..300 {
        let table = match &builder.state().find(&id).unwrap().content {
            ElementContent::Table(table) => table.clone(),
            other => panic!("unexpected content {:?}", other),
        };

        let edit = match rng.random_range(0..4) {
            0 => TableEdit::AddColumn,
            1 => TableEdit::RemoveColumn(rng.random_range(0..table.headers.len())),
            2 => TableEdit::AddRow,
            _ => TableEdit::RemoveRow(rng.random_range(0..table.rows.len())),
        };

        let element = builder.state().find(&id).unwrap().clone();
        // Removing the last column or row is refused; that is fine here
        if let Ok(action) = ElementEditor::new(&element).edit(ContentEdit::Table(edit)) {
            builder.dispatch(action).unwrap();
        }

        match &builder.state().find(&id).unwrap().content {
            ElementContent::Table(table) => {
                assert!(!table.headers.is_empty());
                for row in &table.rows {
                    assert_eq!(row.len(), table.headers.len());
                }
            }
            other => panic!("unexpected content {:?}", other),
        }
    }
}

#[test]
fn test_unknown_update_is_deep_equal() {
    let mut builder = Builder::new(Report::new("1", "Test"));
    builder.load_sample().unwrap();
    let state: BuilderState = builder.state().clone();

    let next = reduce(
        &state,
        &Action::UpdateContent {
            element_id: "element-does-not-exist".to_string(),
            content: ElementContent::default_for(ElementKind::Chart),
        },
    )
    .unwrap();

    assert_eq!(next, state);
}

#[test]
fn test_move_c_to_front() {
    let mut builder = Builder::new(Report::new("1", "Test"));
    let a = builder.add(ElementKind::Text).unwrap();
    let b = builder.add(ElementKind::Text).unwrap();
    let c = builder.add(ElementKind::Text).unwrap();

    builder.reorder(&c, &a).unwrap();

    let ids: Vec<&str> = builder.elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![c.as_str(), a.as_str(), b.as_str()]);
    assert_eq!(
        builder.elements().iter().map(|e| e.position).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn test_ids_never_reused_after_delete() {
    let mut builder = Builder::new(Report::new("1", "Test"));
    let mut seen = std::collections::HashSet::new();

    for _ in 0..50 {
        let id = builder.add(ElementKind::Image).unwrap();
        assert!(seen.insert(id.clone()), "id reused: {}", id);
        builder.delete(&id).unwrap();
    }
}
